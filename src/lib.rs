//! # Fieldguide
//!
//! A minimal static site generator for developer field guides. Your crate is
//! the data source: the outline, the pages, and the code samples are Rust
//! modules compiled into the binary, checked by the compiler, and rendered
//! once into plain HTML.
//!
//! # Architecture: One Declaration, Three Views
//!
//! Everything hangs off a single outline declaration:
//!
//! ```text
//! site::outline()
//!     ├─ validate        reject empty outlines, bad paths, duplicates
//!     ├─ tree view       sidebar navigation with group captions
//!     └─ flatten         reading order → prev/next links, arrow keys,
//!                        output paths, build report numbering
//! ```
//!
//! The build renders each flattened entry against that shared order and
//! writes `<path>/index.html` per topic, plus a root redirect. There is no
//! intermediate state between runs: every render starts from the declaration
//! and a fresh per-page context, so repeated builds are byte-identical.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`outline`] | Topic model: entries, groups, flattening, prev/next resolution |
//! | [`site`] | The guide's content: the declared outline and its page modules |
//! | [`page`] | Per-page render pass: context, heading anchors, sample blocks, chrome |
//! | [`snippet`] | Code samples: virtual files, indentation normalization, runner payload |
//! | [`toc`] | Heading slugs and the per-page heading registry |
//! | [`generate`] | Build pipeline: validate → render in parallel → write the tree |
//! | [`config`] | `fieldguide.toml` loading, validation, merging, and CSS generation |
//! | [`serve`] | Loopback preview server over the output directory |
//! | [`output`] | CLI output formatting: reading-order display of build results |
//!
//! # Design Decisions
//!
//! ## Pages Are Functions
//!
//! A page is `fn(&mut PageContext) -> Markup`. The context is constructed
//! fresh for every render and carries everything the page may touch: the
//! site config and the heading registry. Nothing is global and nothing is
//! shared between pages, so pages cannot observe render order, parallel
//! rendering needs no locks, and a page can be unit tested by handing it a
//! context and asserting on the markup.
//!
//! ## Maud Over Template Engines
//!
//! HTML comes from [Maud](https://maud.lambda.xyz/), a compile-time markup
//! macro, not a runtime template engine. A misspelled helper or a bad splice
//! is a build error; every interpolated string is escaped unless explicitly
//! marked otherwise; and there is no template directory that can drift out
//! of sync with the code it serves.
//!
//! ## Two-Level Outline By Construction
//!
//! Groups contain entries, not nodes. That one type decision is the whole
//! depth rule: a third level does not typecheck, so neither the flattener
//! nor the sidebar needs a recursion depth check, and "group of groups"
//! never becomes a support question.
//!
//! ## Self-Contained Output
//!
//! Each generated page embeds the full stylesheet and the few lines of
//! navigation script. The output tree is nothing but `index.html` files:
//! no asset directory, no hashed filenames, no cross-file ordering to get
//! wrong when deploying. Any static host, or `file://`, serves it.
//!
//! # The "Forever Stack"
//!
//! A field guide should outlive its toolchain. The output is plain HTML,
//! plain CSS custom properties, and a screenful of vanilla JavaScript that
//! degrades to nothing (a `<noscript>` rule reveals content immediately).
//! No framework runtime ships to the reader, so nothing on the reader's
//! side ever needs updating.

pub mod config;
pub mod generate;
pub mod outline;
pub mod output;
pub mod page;
pub mod serve;
pub mod site;
pub mod snippet;
pub mod toc;

#[cfg(test)]
pub(crate) mod test_helpers;
