use crate::page::{PageContext, external_link, markdown};
use maud::{Markup, html};

pub fn render(ctx: &mut PageContext) -> Markup {
    html! {
        (ctx.heading(1, "References"))
        (markdown(
            "The pieces this tool leans on, for when a page here is not enough.",
        ))
        ul {
            li {
                (external_link("The maud book", "https://maud.lambda.xyz/"))
                " - the markup macro pages are written in, including the full "
                "attribute and control-structure syntax."
            }
            li {
                (external_link(
                    "pulldown-cmark",
                    "https://docs.rs/pulldown-cmark/",
                ))
                " - the CommonMark engine behind the markdown helper."
            }
            li {
                (external_link("clap", "https://docs.rs/clap/"))
                " - the command-line interface, including how global flags "
                "like --config are parsed."
            }
            li {
                (external_link(
                    "prefers-color-scheme on MDN",
                    "https://developer.mozilla.org/en-US/docs/Web/CSS/@media/prefers-color-scheme",
                ))
                " - how the light and dark color pairs are selected."
            }
            li {
                (external_link("The Rust Programming Language", "https://doc.rust-lang.org/book/"))
                " - for everything the samples take for granted."
            }
        }
    }
}
