//! Static site generation: render the outline to a tree of HTML files.
//!
//! The pipeline is deliberately linear:
//!
//! 1. Validate the outline, failing before the output directory is touched.
//! 2. Flatten it once into the reading order shared by every page.
//! 3. Render all pages in parallel against that order.
//! 4. Write each page to `<path>/index.html`, plus a root `index.html` that
//!    forwards `/` to the first topic.
//!
//! [`check`] runs steps 1 through 3 and discards the result, so a broken
//! outline or a panicking page surfaces in CI without writing anything.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # Redirect to the first topic
//! ├── intro/
//! │   └── index.html
//! ├── authoring/
//! │   ├── pages/index.html
//! │   ├── headings/index.html
//! │   └── samples/index.html
//! └── ...
//! ```
//!
//! Pages are self-contained: the stylesheet (config-derived custom
//! properties plus a static stem) and the navigation script are embedded in
//! every document, so the output needs no asset directory and any page can
//! be opened straight from disk.

use crate::config::{SiteConfig, generate_color_css, generate_theme_css};
use crate::outline::{FlatEntry, Outline, OutlineError};
use crate::page::{href_for, render_topic_page};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CSS_STATIC: &str = include_str!("../static/style.css");

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("outline error: {0}")]
    Outline(#[from] OutlineError),
}

/// One written page, for the build report.
#[derive(Debug)]
pub struct PageRecord {
    pub label: String,
    pub path: String,
    pub output: PathBuf,
    pub bytes: u64,
}

/// What a build produced.
#[derive(Debug)]
pub struct SiteSummary {
    pub pages: Vec<PageRecord>,
    pub total_bytes: u64,
}

struct RenderedPage {
    label: String,
    path: String,
    html: String,
}

struct RenderedSite {
    pages: Vec<RenderedPage>,
    redirect: String,
}

/// Assemble the full stylesheet: config-derived custom properties first,
/// then the static stem that consumes them.
pub fn site_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        generate_color_css(&config.colors),
        generate_theme_css(&config.theme),
        CSS_STATIC
    )
}

/// Where a topic path lands inside the output tree.
pub fn output_file(path: &str) -> PathBuf {
    PathBuf::from(path.trim_start_matches('/')).join("index.html")
}

/// The root page: an immediate redirect to the first topic, so `/` never
/// shows an empty shell.
fn render_redirect_page(first: &FlatEntry, config: &SiteConfig, css: &str) -> Markup {
    let target = href_for(first.path);
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta http-equiv="refresh" content=(format!("0; url={target}"));
                link rel="canonical" href=(target);
                title { (config.site.title) }
                style { (PreEscaped(css)) }
            }
            body {
                p.redirect-note {
                    "Continue to " a href=(target) { (first.label) } "."
                }
            }
        }
    }
}

fn render_site(outline: &Outline, config: &SiteConfig) -> Result<RenderedSite, GenerateError> {
    outline.validate()?;
    let sequence = outline.flatten();
    let css = site_css(config);
    let first = sequence.first().ok_or(OutlineError::Empty)?;
    let redirect = render_redirect_page(first, config, &css).into_string();

    let pages = sequence
        .par_iter()
        .map(|entry| RenderedPage {
            label: entry.label.clone(),
            path: entry.path.to_string(),
            html: render_topic_page(entry, outline, &sequence, config, &css).into_string(),
        })
        .collect();

    Ok(RenderedSite { pages, redirect })
}

/// Render the whole site without writing anything.
///
/// Returns the number of topic pages a build would write. Exercises the
/// same code paths as [`generate`], so whatever passes here builds.
pub fn check(outline: &Outline, config: &SiteConfig) -> Result<usize, GenerateError> {
    Ok(render_site(outline, config)?.pages.len())
}

/// Build the site into `output_dir`.
///
/// Pages land at `<output_dir>/<path>/index.html`; directories are created
/// as needed and existing files are overwritten in place.
pub fn generate(
    outline: &Outline,
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<SiteSummary, GenerateError> {
    let site = render_site(outline, config)?;
    fs::create_dir_all(output_dir)?;

    let mut pages = Vec::with_capacity(site.pages.len() + 1);
    let mut total_bytes = 0u64;
    for page in site.pages {
        let file = output_dir.join(output_file(&page.path));
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file, &page.html)?;
        let bytes = page.html.len() as u64;
        total_bytes += bytes;
        pages.push(PageRecord {
            label: page.label,
            path: page.path,
            output: file,
            bytes,
        });
    }

    let redirect_file = output_dir.join("index.html");
    fs::write(&redirect_file, &site.redirect)?;
    let bytes = site.redirect.len() as u64;
    total_bytes += bytes;
    pages.push(PageRecord {
        label: "Home".to_string(),
        path: "/".to_string(),
        output: redirect_file,
        bytes,
    });

    Ok(SiteSummary { pages, total_bytes })
}

/// The outline and its derived reading order as JSON, for tooling.
pub fn outline_json(outline: &Outline) -> Result<String, GenerateError> {
    #[derive(Serialize)]
    struct OutlineReport<'a> {
        outline: &'a Outline,
        reading_order: Vec<FlatEntry>,
    }

    let report = OutlineReport {
        outline,
        reading_order: outline.flatten(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
