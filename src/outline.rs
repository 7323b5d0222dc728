//! The topic outline: the site's navigable structure.
//!
//! An [`Outline`] is an ordered sequence of nodes, each either a bare
//! [`TopicEntry`] (an addressable page) or a [`TopicGroup`] (a non-addressable
//! caption holding entries). Depth is exactly two levels and the types make
//! deeper nesting unrepresentable: a group holds entries, not nodes, so there
//! is nothing to validate at runtime.
//!
//! The outline is declared once (see [`crate::site::outline`]), never mutated,
//! and passed by reference to everything that reads it. Two derived views
//! drive the site:
//!
//! - [`Outline::flatten`] produces the **reading order**: the strict linear
//!   sequence of entries used for previous/next navigation. Grouped entries
//!   keep their path and content but take a `"<group> / <entry>"` navigation
//!   label.
//! - [`resolve`] answers "what comes before and after this path" against that
//!   sequence. An unknown path is not an error; both neighbors come back
//!   absent and the page simply renders without adjacent links.
//!
//! ```text
//! Outline                          Reading order
//! ├── Introduction          →      1. Introduction
//! ├── Authoring                    2. Authoring / Pages
//! │   ├── Pages             →      3. Authoring / Headings
//! │   └── Headings                 4. References
//! └── References
//! ```

use crate::page::PageContext;
use maud::Markup;
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutlineError {
    #[error("outline has no entries")]
    Empty,
    #[error("duplicate topic path: {0}")]
    DuplicatePath(String),
    #[error("topic path must start with '/' and name a page: {0:?}")]
    BadPath(String),
}

/// A page module's render function.
///
/// Content receives a mutable handle to the page context so it can report
/// headings while it renders. This is the only write channel content has
/// into the navigation core.
pub type PageFn = fn(&mut PageContext) -> Markup;

/// A single addressable content page.
#[derive(Debug, Clone, Serialize)]
pub struct TopicEntry {
    pub title: &'static str,
    pub path: &'static str,
    #[serde(skip)]
    pub content: PageFn,
}

impl TopicEntry {
    pub fn new(title: &'static str, path: &'static str, content: PageFn) -> Self {
        Self {
            title,
            path,
            content,
        }
    }
}

/// A non-addressable container of entries, used only for outline and
/// sidebar grouping.
#[derive(Debug, Clone, Serialize)]
pub struct TopicGroup {
    pub title: &'static str,
    pub entries: Vec<TopicEntry>,
}

/// One top-level outline position.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OutlineNode {
    Entry(TopicEntry),
    Group(TopicGroup),
}

/// Shorthand for a bare entry node.
pub fn entry(title: &'static str, path: &'static str, content: PageFn) -> OutlineNode {
    OutlineNode::Entry(TopicEntry::new(title, path, content))
}

/// Shorthand for a group node.
pub fn group(title: &'static str, entries: Vec<TopicEntry>) -> OutlineNode {
    OutlineNode::Group(TopicGroup { title, entries })
}

/// The declared outline. Immutable after construction.
#[derive(Debug, Clone, Serialize)]
pub struct Outline {
    nodes: Vec<OutlineNode>,
}

/// An entry in the flattened reading order.
///
/// `title` is the page's own title; `label` is the navigation label, which
/// carries the group prefix for entries that came from a group.
#[derive(Debug, Clone, Serialize)]
pub struct FlatEntry {
    pub title: &'static str,
    pub label: String,
    pub path: &'static str,
    #[serde(skip)]
    pub content: PageFn,
}

impl Outline {
    pub fn new(nodes: Vec<OutlineNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[OutlineNode] {
        &self.nodes
    }

    /// Derive the linear reading order.
    ///
    /// Groups expand into their entries in place; bare entries pass through.
    /// Deterministic and side-effect free; callers compute it once per run
    /// and share the result.
    pub fn flatten(&self) -> Vec<FlatEntry> {
        let mut sequence = Vec::new();
        for node in &self.nodes {
            match node {
                OutlineNode::Entry(e) => sequence.push(FlatEntry {
                    title: e.title,
                    label: e.title.to_string(),
                    path: e.path,
                    content: e.content,
                }),
                OutlineNode::Group(g) => {
                    for e in &g.entries {
                        sequence.push(FlatEntry {
                            title: e.title,
                            label: format!("{} / {}", g.title, e.title),
                            path: e.path,
                            content: e.content,
                        });
                    }
                }
            }
        }
        sequence
    }

    /// Reject authoring mistakes before generation: the outline must have at
    /// least one entry, every path must start with `/` and name a page, and
    /// no two entries may share a path.
    pub fn validate(&self) -> Result<(), OutlineError> {
        let sequence = self.flatten();
        if sequence.is_empty() {
            return Err(OutlineError::Empty);
        }

        let mut seen = HashSet::new();
        for flat in &sequence {
            if !flat.path.starts_with('/') || flat.path.len() < 2 || flat.path.ends_with('/') {
                return Err(OutlineError::BadPath(flat.path.to_string()));
            }
            if !seen.insert(flat.path) {
                return Err(OutlineError::DuplicatePath(flat.path.to_string()));
            }
        }
        Ok(())
    }
}

/// The neighbors of one position in the reading order.
#[derive(Debug, Default)]
pub struct Adjacent<'a> {
    pub previous: Option<&'a FlatEntry>,
    pub next: Option<&'a FlatEntry>,
}

/// Find the entries before and after `current_path` in the reading order.
///
/// A path that is not in the sequence yields both neighbors absent, a
/// recoverable condition, not an error. The linear scan is fine at the
/// scale of a guide (tens of pages).
pub fn resolve<'a>(current_path: &str, sequence: &'a [FlatEntry]) -> Adjacent<'a> {
    let Some(index) = sequence.iter().position(|e| e.path == current_path) else {
        return Adjacent::default();
    };

    Adjacent {
        previous: index.checked_sub(1).map(|i| &sequence[i]),
        next: sequence.get(index + 1),
    }
}
