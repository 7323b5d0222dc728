use crate::page::{PageContext, internal_link, markdown};
use maud::{Markup, html};

pub fn render(ctx: &mut PageContext) -> Markup {
    html! {
        (ctx.heading(1, "Introduction"))
        (markdown(
            "fieldguide builds small documentation sites - field guides - where \
             every page is a Rust function. There is no template language and no \
             content directory. The outline, the prose, and the code samples are \
             plain Rust, checked by the compiler, and rendered once into static \
             HTML that needs nothing from a server.",
        ))
        (ctx.heading(2, "How a guide fits together"))
        (markdown(
            "A guide is three declarations:\n\n\
             1. An **outline**: an ordered list of topics, optionally grouped \
             under captions, at most two levels deep.\n\
             2. A **page** per topic: a function that composes markup from a \
             handful of helpers.\n\
             3. A **config file**: an optional `fieldguide.toml` for the site \
             title, colors, and layout.\n\n\
             Everything a reader sees follows from those. The sidebar mirrors \
             the outline, Previous and Next walk its flattened reading order, \
             and each page's \"On this page\" panel lists the headings the page \
             reported while rendering.",
        ))
        (ctx.heading(2, "Reading this guide"))
        p {
            "Jump anywhere from the sidebar, or read front to back with the "
            "pager at the bottom of each page. The left and right arrow keys "
            "follow the same order. Start with "
            (internal_link("authoring pages", "/authoring/pages"))
            ", then see how "
            (internal_link("the outline", "/structure/outline"))
            " ties them together."
        }
    }
}
