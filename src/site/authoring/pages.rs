use crate::page::{PageContext, internal_link, markdown};
use crate::snippet::CodeSample;
use maud::{Markup, html};

pub fn render(ctx: &mut PageContext) -> Markup {
    let minimal_page = CodeSample::file(
        "/site/knots.rs",
        r#"
	use crate::page::{PageContext, markdown};
	use maud::{Markup, html};

	pub fn render(ctx: &mut PageContext) -> Markup {
	    html! {
	        (ctx.heading(1, "Knots"))
	        (markdown("Start with the figure eight. Everything else is a variation."))
	    }
	}
	"#,
    )
    .view_only();

    html! {
        (ctx.heading(1, "Pages"))
        (markdown(
            "A page is a function. It receives a mutable page context, composes \
             markup, and returns it. The context is created fresh for every \
             render, so a page cannot leak state into the next one even by \
             accident.",
        ))
        (ctx.code_sample(&minimal_page))
        (markdown(
            "That is a complete page. Listing it in the outline under a path \
             gives it a URL, a sidebar link, and a slot in the reading order.",
        ))

        (ctx.heading(2, "Composing markup"))
        (markdown(
            "Prose reads best as markdown: pass a string to `markdown()` and \
             splice the result. Structure reads best as markup: the `html!` \
             macro checks element nesting at compile time and escapes every \
             spliced string, so page text can never smuggle markup into the \
             document. Mix the two freely; both return the same `Markup` type.",
        ))

        (ctx.heading(2, "Linking"))
        (markdown(
            "Pages are written to `<path>/index.html`, so canonical URLs end \
             with a slash. `internal_link` takes the outline path and adds the \
             slash for you; `external_link` opens in a new tab.",
        ))
        p {
            "Anchored headings and sample blocks have pages of their own: see "
            (internal_link("Headings", "/authoring/headings"))
            " and "
            (internal_link("Code Samples", "/authoring/samples"))
            "."
        }
    }
}
