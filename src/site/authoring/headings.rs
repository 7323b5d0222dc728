use crate::page::{PageContext, markdown};
use crate::snippet::CodeSample;
use crate::toc::slugify;
use maud::{Markup, html};

pub fn render(ctx: &mut PageContext) -> Markup {
    let usage = CodeSample::file(
        "/site/weather.rs",
        r#"
	pub fn render(ctx: &mut PageContext) -> Markup {
	    html! {
	        (ctx.heading(1, "Reading the Sky"))
	        (markdown("Clouds first, wind second."))
	        (ctx.heading(2, "Cloud Types"))
	        (ctx.heading(2, "Wind & Pressure"))
	    }
	}
	"#,
    )
    .view_only();

    html! {
        (ctx.heading(1, "Headings"))
        (markdown(
            "`ctx.heading(level, text)` renders a heading element and reports \
             it to the page's heading list. Reported headings become the \
             \"On this page\" panel, in the order the page rendered them, and \
             each one gets an anchor id so panel links and `#fragment` URLs \
             land on the right element. Levels outside 1 through 6 are clamped.",
        ))
        (ctx.code_sample(&usage))

        (ctx.heading(2, "Anchors"))
        (markdown(
            "Anchor ids are derived from the heading text: lowercase the \
             letters and digits, collapse every other run of characters into a \
             single hyphen, and drop hyphens at the ends. The same derivation \
             builds the panel links, so the two agree by construction.",
        ))
        table {
            thead {
                tr {
                    th { "Heading text" }
                    th { "Anchor" }
                }
            }
            tbody {
                @for text in ["useState Hook", "Result<T, E>", "I/O & Errors"] {
                    tr {
                        td { (text) }
                        td { code { "#" (slugify(text)) } }
                    }
                }
            }
        }

        @let slug = ctx.add_heading("Custom markup");
        h2 id=(slug) { "Custom markup" }
        (markdown(
            "When a plain heading element is not enough, `ctx.add_heading(text)` \
             reports the text and hands back the slug without rendering \
             anything; put the id on whatever markup the page builds. The \
             heading above this paragraph is built exactly that way.",
        ))

        (ctx.heading(2, "Repeated text"))
        (markdown(
            "Reporting the same text twice keeps a single panel entry, and the \
             rendered anchors share one id, of which browsers scroll to the \
             first. Prefer distinct heading texts on a page; the panel will \
             not hide the ambiguity for you.",
        ))
    }
}
