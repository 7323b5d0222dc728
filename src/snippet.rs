//! Code sample declaration and normalization.
//!
//! Pages author code samples as string literals embedded in Rust source, so
//! every sample arrives indented to match the surrounding code. Before a
//! sample is displayed or handed to the embedded runner, that authoring
//! indentation has to go. [`normalize`] rewrites raw authored text into clean,
//! minimally-indented code; [`CodeSample`] is the declaration surface a page
//! uses to describe one sample (one or more virtual files, an optional entry
//! file, an editable flag).
//!
//! # The indent unit
//!
//! Indentation is measured in **tab characters**. The first non-blank line of
//! a sample determines the authoring depth: however many tabs it starts with,
//! that many are stripped from every following line. Tabs beyond the authoring
//! depth survive, so the sample's own nesting is preserved. Lines indented
//! with fewer tabs than the authoring depth are left untouched, a tolerated
//! inconsistency, never an error.
//!
//! # Sandbox contract
//!
//! The runner that executes samples lives outside this crate. Its input is a
//! [`SandboxPayload`]: the designated entry file, the editable flag, and the
//! normalized files in declaration order. The payload is embedded in the
//! generated page as JSON (see [`crate::page`]).

use serde::Serialize;

/// Virtual path used for single-file samples declared without a path.
pub const DEFAULT_SAMPLE_PATH: &str = "/main.rs";

// ============================================================================
// Normalization
// ============================================================================

/// Rewrite raw authored text into clean, minimally-indented code.
///
/// Never fails; the worst case is an empty string. Idempotent:
/// normalized output passes through unchanged.
///
/// 1. Leading blank (empty or whitespace-only) lines are dropped.
/// 2. The first non-blank line sets the authoring depth (its leading tab
///    count) and is emitted fully trimmed.
/// 3. Every later line loses exactly that many leading tabs, if present.
/// 4. The joined result is trimmed of leading/trailing whitespace.
pub fn normalize(raw: &str) -> String {
    let mut depth: Option<usize> = None;
    let mut lines: Vec<&str> = Vec::new();

    for line in raw.split('\n') {
        match depth {
            None => {
                if line.trim().is_empty() {
                    continue;
                }
                depth = Some(leading_tabs(line));
                lines.push(line.trim());
            }
            Some(n) => lines.push(strip_indent(line, n)),
        }
    }

    lines.join("\n").trim().to_string()
}

/// Count leading tab characters.
fn leading_tabs(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b'\t').count()
}

/// Remove exactly `depth` leading tabs, or return the line unchanged if it
/// has fewer.
fn strip_indent(line: &str, depth: usize) -> &str {
    if leading_tabs(line) >= depth {
        &line[depth..]
    } else {
        line
    }
}

// ============================================================================
// Code sample descriptor
// ============================================================================

/// One authored code sample: an ordered set of virtual files plus runner
/// options.
///
/// Built fluently inside a page module:
///
/// ```rust
/// use fieldguide::snippet::CodeSample;
///
/// let sample = CodeSample::file("/index.html", "<p>hi</p>")
///     .and_file("/app.js", "console.log('hi');")
///     .entry("/app.js");
/// ```
///
/// Each file's text is kept raw here and normalized independently (each with
/// its own authoring depth) when the payload is built.
#[derive(Debug, Clone)]
pub struct CodeSample {
    files: Vec<SampleFile>,
    entry: Option<String>,
    editable: bool,
}

#[derive(Debug, Clone)]
struct SampleFile {
    path: String,
    raw: String,
}

/// A single normalized file as handed to the sandbox runner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SandboxFile {
    pub path: String,
    pub code: String,
}

/// The full input contract for the sandbox runner.
///
/// `files` preserves declaration order; the first file is the one the
/// runner shows by default, and the visible file blocks follow the same
/// order.
#[derive(Debug, Serialize)]
pub struct SandboxPayload {
    pub entry: String,
    pub editable: bool,
    pub files: Vec<SandboxFile>,
}

impl CodeSample {
    /// Single-file sample at [`DEFAULT_SAMPLE_PATH`].
    pub fn new(source: &str) -> Self {
        Self::file(DEFAULT_SAMPLE_PATH, source)
    }

    /// Sample starting with one named virtual file.
    pub fn file(path: &str, source: &str) -> Self {
        Self {
            files: vec![SampleFile {
                path: path.to_string(),
                raw: source.to_string(),
            }],
            entry: None,
            editable: true,
        }
    }

    /// Add another virtual file. Redeclaring an existing path replaces its
    /// text but keeps the original position.
    pub fn and_file(mut self, path: &str, source: &str) -> Self {
        match self.files.iter_mut().find(|f| f.path == path) {
            Some(existing) => existing.raw = source.to_string(),
            None => self.files.push(SampleFile {
                path: path.to_string(),
                raw: source.to_string(),
            }),
        }
        self
    }

    /// Designate which file the runner should execute first.
    pub fn entry(mut self, path: &str) -> Self {
        self.entry = Some(path.to_string());
        self
    }

    /// Mark the sample as display-only: the runner shows it but does not
    /// offer editing.
    pub fn view_only(mut self) -> Self {
        self.editable = false;
        self
    }

    /// The designated entry file, or the first declared file when none was
    /// designated.
    pub fn entry_path(&self) -> &str {
        self.entry
            .as_deref()
            .or_else(|| self.files.first().map(|f| f.path.as_str()))
            .unwrap_or(DEFAULT_SAMPLE_PATH)
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Normalize every file independently, preserving declaration order.
    pub fn normalized_files(&self) -> Vec<SandboxFile> {
        self.files
            .iter()
            .map(|f| SandboxFile {
                path: f.path.clone(),
                code: normalize(&f.raw),
            })
            .collect()
    }

    /// Build the runner's input contract.
    pub fn payload(&self) -> SandboxPayload {
        SandboxPayload {
            entry: self.entry_path().to_string(),
            editable: self.editable,
            files: self.normalized_files(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
