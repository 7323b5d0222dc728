use crate::page::{PageContext, markdown};
use crate::snippet::CodeSample;
use maud::{Markup, html};

pub fn render(ctx: &mut PageContext) -> Markup {
    let cfg = ctx.config();
    let partial = CodeSample::file(
        "/fieldguide.toml",
        r##"
	[site]
	title = "Alpine Notes"
	footer = "Shared under CC BY-SA."

	[colors.light]
	accent = "#2f6f4f"

	[transition]
	reveal_delay_ms = 250
	"##,
    )
    .view_only();

    html! {
        (ctx.heading(1, "Configuration"))
        (markdown(
            "Configuration lives in `fieldguide.toml`, read from the working \
             directory or wherever `--config` points. Every key is optional: \
             values you set are merged over the stock defaults, and a missing \
             file just means the defaults. Unknown keys fail the load so a \
             typo cannot silently change nothing.",
        ))
        (ctx.code_sample(&partial))
        (markdown(
            "Colors come in `[colors.light]` and `[colors.dark]` pairs; the \
             reader's browser picks one through `prefers-color-scheme`. The \
             footer is markdown. `transition.reveal_delay_ms` sets how long a \
             freshly opened page stays hidden before it fades in and resets \
             scroll, and is capped at 1000 so content never hides for long.",
        ))

        (ctx.heading(2, "This site's values"))
        table {
            thead {
                tr {
                    th { "Setting" }
                    th { "Value" }
                }
            }
            tbody {
                tr {
                    td { code { "site.title" } }
                    td { (cfg.site.title) }
                }
                tr {
                    td { code { "theme.content_width" } }
                    td { (cfg.theme.content_width) "px" }
                }
                tr {
                    td { code { "theme.sidebar_width" } }
                    td { (cfg.theme.sidebar_width) "px" }
                }
                tr {
                    td { code { "theme.font_size" } }
                    td { (cfg.theme.font_size) "px" }
                }
                tr {
                    td { code { "transition.reveal_delay_ms" } }
                    td { (cfg.transition.reveal_delay_ms) "ms" }
                }
            }
        }

        (ctx.heading(2, "A starting point"))
        (markdown(
            "`fieldguide gen-config` prints the full stock file with every key \
             present and commented. Redirect it next to your project and prune:",
        ))
        pre { code { "fieldguide gen-config > fieldguide.toml" } }
    }
}
