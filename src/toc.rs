//! Table-of-contents support: heading collection and anchor slugs.
//!
//! Every page render owns a fresh [`HeadingRegistry`]. Content reports each
//! heading it displays, in document order, and the page chrome turns the
//! collected list into the "On this page" panel, each entry linked to the
//! anchor id that [`slugify`] derives from the same text. Registries are
//! never shared or reused across pages, so headings cannot leak from one
//! page into the next.
//!
//! Identical headings on one page produce identical slugs. That collision is
//! a known limitation of anchor generation, kept rather than papered over
//! with a numbering scheme: the first matching anchor wins in the browser,
//! and the table of contents lists the heading once.

/// Derive an anchor identifier from heading text.
///
/// Every run of characters that is not a Unicode letter or digit becomes a
/// single interior hyphen, the result carries no leading or trailing
/// hyphens, and letters are lower-cased:
///
/// ```rust
/// use fieldguide::toc::slugify;
///
/// assert_eq!(slugify("Hello World!"), "hello-world");
/// assert_eq!(slugify("  useState  "), "usestate");
/// assert_eq!(slugify("A & B"), "a-b");
/// ```
///
/// The same function builds both the `id` attribute on rendered headings and
/// the `href` targets in the table of contents, so the two always agree.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_gap = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_gap && !slug.is_empty() {
                slug.push('-');
            }
            pending_gap = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_gap = true;
        }
    }

    slug
}

/// Page-scoped accumulator of heading strings.
///
/// Append-only per distinct value: adding a heading that is already present
/// (exact string match) is a no-op, so repeated renders of the same content
/// cannot produce duplicate table-of-contents entries. Insertion order is
/// the document order of first occurrence.
#[derive(Debug, Default)]
pub struct HeadingRegistry {
    headings: Vec<String>,
}

impl HeadingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a heading if it has not been seen on this page yet.
    pub fn add(&mut self, text: &str) {
        if !self.headings.iter().any(|h| h == text) {
            self.headings.push(text.to_string());
        }
    }

    /// Collected headings in document order of first occurrence.
    pub fn headings(&self) -> &[String] {
        &self.headings
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // slugify
    // =========================================================================

    #[test]
    fn slug_basic() {
        assert_eq!(slugify("Hello World!"), "hello-world");
    }

    #[test]
    fn slug_trims_surrounding_whitespace() {
        assert_eq!(slugify("  useState  "), "usestate");
    }

    #[test]
    fn slug_punctuation_collapses_to_one_hyphen() {
        assert_eq!(slugify("A & B"), "a-b");
    }

    #[test]
    fn slug_keeps_existing_hyphens_as_separators() {
        assert_eq!(slugify("view-only samples"), "view-only-samples");
    }

    #[test]
    fn slug_keeps_digits() {
        assert_eq!(slugify("Step 2: Render"), "step-2-render");
    }

    #[test]
    fn slug_unicode_letters_survive() {
        assert_eq!(slugify("Überblick"), "überblick");
    }

    #[test]
    fn slug_empty_input() {
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn slug_symbols_only() {
        assert_eq!(slugify("!!! ???"), "");
    }

    #[test]
    fn slug_identical_headings_collide() {
        // Documented limitation: no de-duplication suffix.
        assert_eq!(slugify("Details"), slugify("Details"));
    }

    // =========================================================================
    // HeadingRegistry
    // =========================================================================

    #[test]
    fn registry_starts_empty() {
        let registry = HeadingRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.headings().is_empty());
    }

    #[test]
    fn registry_records_in_document_order() {
        let mut registry = HeadingRegistry::new();
        registry.add("Setup");
        registry.add("Usage");
        registry.add("Notes");
        assert_eq!(registry.headings(), ["Setup", "Usage", "Notes"]);
    }

    #[test]
    fn registry_ignores_repeated_adds() {
        let mut registry = HeadingRegistry::new();
        registry.add("X");
        registry.add("X");
        assert_eq!(registry.headings(), ["X"]);
    }

    #[test]
    fn registry_duplicate_keeps_first_position() {
        let mut registry = HeadingRegistry::new();
        registry.add("First");
        registry.add("Second");
        registry.add("First");
        assert_eq!(registry.headings(), ["First", "Second"]);
    }

    #[test]
    fn registry_matches_exact_strings_only() {
        let mut registry = HeadingRegistry::new();
        registry.add("Setup");
        registry.add("setup");
        assert_eq!(registry.headings(), ["Setup", "setup"]);
    }
}
