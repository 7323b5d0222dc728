//! The guide's content: the topic outline and the page modules behind it.
//!
//! This module is the authoring surface. Adding a page means writing a
//! `render` function in a module here and listing it in [`outline`]; the
//! sidebar, reading order, and prev/next links all follow from that one
//! declaration. Paths are stable URLs, so renaming one breaks inbound
//! links.

mod authoring;
mod intro;
mod references;
mod structure;

use crate::outline::{Outline, TopicEntry, entry, group};

/// The declared topic outline, in reading order.
pub fn outline() -> Outline {
    Outline::new(vec![
        entry("Introduction", "/intro", intro::render),
        group(
            "Authoring",
            vec![
                TopicEntry::new("Pages", "/authoring/pages", authoring::pages::render),
                TopicEntry::new(
                    "Headings",
                    "/authoring/headings",
                    authoring::headings::render,
                ),
                TopicEntry::new(
                    "Code Samples",
                    "/authoring/samples",
                    authoring::samples::render,
                ),
            ],
        ),
        group(
            "Structure",
            vec![
                TopicEntry::new(
                    "The Outline",
                    "/structure/outline",
                    structure::outline::render,
                ),
                TopicEntry::new(
                    "Configuration",
                    "/structure/config",
                    structure::config::render,
                ),
            ],
        ),
        entry("References", "/references", references::render),
    ])
}
