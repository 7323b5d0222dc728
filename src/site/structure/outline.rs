use crate::page::{PageContext, markdown};
use crate::snippet::CodeSample;
use maud::{Markup, html};

pub fn render(ctx: &mut PageContext) -> Markup {
    let declaration = CodeSample::file(
        "/site/mod.rs",
        r#"
	pub fn outline() -> Outline {
	    Outline::new(vec![
	        entry("Introduction", "/intro", intro::render),
	        group(
	            "Terrain",
	            vec![
	                TopicEntry::new("Ridges", "/terrain/ridges", ridges::render),
	                TopicEntry::new("Rivers", "/terrain/rivers", rivers::render),
	            ],
	        ),
	        entry("References", "/references", references::render),
	    ])
	}
	"#,
    )
    .view_only();

    html! {
        (ctx.heading(1, "The Outline"))
        (markdown(
            "The outline is the one declaration the whole site hangs off: an \
             ordered list of nodes, each either a bare entry or a group of \
             entries under a caption. Groups hold entries, not other groups, \
             so the structure is at most two levels deep by construction - \
             there is no nesting rule to remember because deeper nesting does \
             not typecheck. Captions label the sidebar but have no URL of \
             their own.",
        ))
        (ctx.code_sample(&declaration))

        (ctx.heading(2, "Reading order"))
        (markdown(
            "Flattening the outline in declaration order, with each group \
             expanding into its entries in place, yields the reading order. \
             The pager at the bottom of every page and the arrow keys both \
             walk it, and entries that came from a group show up there under a \
             `Caption / Title` label so a step like \"Terrain / Rivers\" still \
             says where it lives. A page whose path is not in the order - the \
             root redirect, say - simply renders without a pager; nothing \
             treats that as an error.",
        ))

        (ctx.heading(2, "Validation"))
        (markdown(
            "The outline is checked before anything is written: it must have \
             at least one entry, every path must start with `/` and name a \
             page (no bare `/`, no trailing slash), and no two entries may \
             share a path. A bad declaration fails the build with the \
             offending path in the message, rather than shipping a site where \
             two sidebar links fight over one URL.",
        ))
    }
}
