//! CLI output formatting.
//!
//! Output is information-centric: every line leads with what a page *is*
//! (its reading-order position and label), with filesystem paths shown as
//! context after an arrow. Group captions appear unnumbered, exactly as
//! they do in the sidebar, and numbering runs straight through them because
//! it is the reading order, not a per-group count.
//!
//! ## Outline
//!
//! ```text
//! 001 Introduction → /intro
//! Authoring
//!     002 Pages → /authoring/pages
//!     003 Headings → /authoring/headings
//!     004 Code Samples → /authoring/samples
//! 005 References → /references
//!
//! 5 topics (1 groups)
//! ```
//!
//! ## Build
//!
//! ```text
//! 001 Introduction → dist/intro/index.html (9.4 KB)
//! 002 Authoring / Pages → dist/authoring/pages/index.html (11.2 KB)
//! Home → dist/index.html (2.1 KB)
//!
//! Generated 3 pages (22.7 KB)
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::generate::SiteSummary;
use crate::outline::{Outline, OutlineNode};

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based reading-order position as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a byte count for humans.
fn human_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

// ============================================================================
// Outline output
// ============================================================================

/// Format the declared outline with reading-order positions.
pub fn format_outline_output(outline: &Outline) -> Vec<String> {
    let mut lines = Vec::new();
    let mut position = 0usize;
    let mut groups = 0usize;

    for node in outline.nodes() {
        match node {
            OutlineNode::Entry(entry) => {
                position += 1;
                lines.push(format!(
                    "{} {} \u{2192} {}",
                    format_index(position),
                    entry.title,
                    entry.path
                ));
            }
            OutlineNode::Group(group) => {
                groups += 1;
                lines.push(group.title.to_string());
                for entry in &group.entries {
                    position += 1;
                    lines.push(format!(
                        "{}{} {} \u{2192} {}",
                        indent(1),
                        format_index(position),
                        entry.title,
                        entry.path
                    ));
                }
            }
        }
    }

    lines.push(String::new());
    lines.push(format!("{position} topics ({groups} groups)"));
    lines
}

/// Print outline output to stdout.
pub fn print_outline_output(outline: &Outline) {
    for line in format_outline_output(outline) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format the check result.
pub fn format_check_output(count: usize) -> Vec<String> {
    vec![format!("All {count} topic pages render")]
}

/// Print check output to stdout.
pub fn print_check_output(count: usize) {
    for line in format_check_output(count) {
        println!("{}", line);
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format the build report: one line per written file, then a summary.
///
/// Topic pages lead with their reading-order position and navigation label;
/// the root redirect shows as `Home` without a number, since it is not part
/// of the reading order.
pub fn format_generate_output(summary: &SiteSummary) -> Vec<String> {
    let mut lines = Vec::new();
    let mut position = 0usize;

    for page in &summary.pages {
        if page.path == "/" {
            lines.push(format!(
                "Home \u{2192} {} ({})",
                page.output.display(),
                human_size(page.bytes)
            ));
        } else {
            position += 1;
            lines.push(format!(
                "{} {} \u{2192} {} ({})",
                format_index(position),
                page.label,
                page.output.display(),
                human_size(page.bytes)
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} pages ({})",
        summary.pages.len(),
        human_size(summary.total_bytes)
    ));
    lines
}

/// Print build output to stdout.
pub fn print_generate_output(summary: &SiteSummary) {
    for line in format_generate_output(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
