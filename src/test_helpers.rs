//! Shared test fixtures for the fieldguide test suite.
//!
//! Provides stub page functions and a small fixture outline with a known
//! shape, so unit tests across modules can exercise flattening, navigation,
//! and rendering without dragging in the real site content.
//!
//! The fixture outline:
//!
//! ```text
//! ├── Start            /start
//! ├── Guide
//! │   ├── One          /guide/one
//! │   └── Two          /guide/two
//! ├── Extra
//! │   └── Solo         /extra/solo
//! └── End              /end
//! ```

use crate::outline::{Outline, TopicEntry, entry, group};
use crate::page::PageContext;
use maud::{Markup, html};

/// A page that renders nothing and registers nothing.
pub fn blank_page(_ctx: &mut PageContext) -> Markup {
    html! {}
}

/// A page with a title and two section headings.
pub fn lesson_page(ctx: &mut PageContext) -> Markup {
    html! {
        (ctx.heading(1, "Lesson"))
        p { "Intro." }
        (ctx.heading(2, "Setup"))
        p { "Steps." }
        (ctx.heading(2, "Cleanup"))
    }
}

/// The fixture outline: two bare entries around two groups.
pub fn sample_outline() -> Outline {
    Outline::new(vec![
        entry("Start", "/start", blank_page),
        group(
            "Guide",
            vec![
                TopicEntry::new("One", "/guide/one", lesson_page),
                TopicEntry::new("Two", "/guide/two", blank_page),
            ],
        ),
        group("Extra", vec![TopicEntry::new("Solo", "/extra/solo", blank_page)]),
        entry("End", "/end", blank_page),
    ])
}

/// Navigation labels of the flattened fixture, in reading order.
pub fn sample_labels() -> Vec<String> {
    sample_outline()
        .flatten()
        .into_iter()
        .map(|e| e.label)
        .collect()
}
