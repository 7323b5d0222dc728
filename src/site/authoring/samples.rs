use crate::page::{PageContext, markdown};
use crate::snippet::CodeSample;
use maud::{Markup, html};

pub fn render(ctx: &mut PageContext) -> Markup {
    let hello = CodeSample::new(
        r#"
	fn main() {
	    println!("field notes, day one");
	}
	"#,
    );

    let trail_log = CodeSample::file(
        "/trail.rs",
        r#"
	pub fn log(name: &str, km: f32) {
	    println!("{name}: {km} km");
	}
	"#,
    )
    .and_file(
        "/main.rs",
        r#"
	mod trail;

	fn main() {
	    trail::log("Lost Lake", 9.2);
	}
	"#,
    )
    .entry("/main.rs");

    let payload_shape = CodeSample::file(
        "/payload.json",
        r#"
	{
	  "entry": "/main.rs",
	  "editable": true,
	  "files": [
	    { "path": "/trail.rs", "code": "pub fn log(name: &str, km: f32) { ... }" },
	    { "path": "/main.rs", "code": "mod trail;\n\nfn main() { ... }" }
	  ]
	}
	"#,
    )
    .view_only();

    html! {
        (ctx.heading(1, "Code Samples"))
        (markdown(
            "A sample is a set of virtual files: each a path and its text, \
             nothing touching the real filesystem. `CodeSample::new(source)` is \
             the one-file shorthand (the file is called `/main.rs`); \
             `CodeSample::file(path, source)` names the file explicitly.",
        ))
        (ctx.code_sample(&hello))

        (ctx.heading(2, "Indentation"))
        (markdown(
            "Sample text is written inline in page source, indented with tabs \
             to sit naturally inside the surrounding Rust. The first non-blank \
             line fixes the depth: that many leading tabs is stripped from \
             every line that has them, lines with fewer are left untouched, \
             and blank edges are trimmed. What ships is the code flush against \
             the margin, with its interior indentation intact. Each file in a \
             sample is normalized on its own, so files at different authoring \
             depths coexist.",
        ))

        (ctx.heading(2, "Multiple files"))
        (markdown(
            "Chain `.and_file(path, source)` for each additional file. Files \
             display in declaration order; declaring a path twice replaces its \
             text in place rather than adding a duplicate. `.entry(path)` marks \
             the file a runner should execute first - it defaults to the first \
             declared file, and the badge shows which one holds the role.",
        ))
        (ctx.code_sample(&trail_log))

        (ctx.heading(2, "The runner contract"))
        (markdown(
            "Samples are editable by default; `.view_only()` turns that off \
             for illustrative fragments that cannot run on their own. Either \
             way, every sample block embeds its files as JSON for tooling that \
             wants to mount an editor or execute the code in place:",
        ))
        (ctx.code_sample(&payload_shape))
        (markdown(
            "The `files` array preserves declaration order, `entry` names the \
             file to run first, and `code` holds the normalized text exactly \
             as displayed.",
        ))
    }
}
