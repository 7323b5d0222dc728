//! Page rendering: authoring helpers and the per-topic render pass.
//!
//! Every topic page goes through the same pass, [`render_topic_page`]: a
//! fresh [`PageContext`] is constructed, the entry's content function runs
//! against it, and the chrome (sidebar, on-this-page panel, pager) is
//! assembled around the result. Nothing survives the pass. Heading state in
//! particular starts empty on every render, so a page is a pure function of
//! outline and config, and repeated builds emit identical bytes.
//!
//! ## Authoring surface
//!
//! Content functions receive `&mut PageContext` and compose their body from
//! the helpers here: [`PageContext::heading`] for anchored headings,
//! [`markdown`] for prose, [`PageContext::code_sample`] for runnable sample
//! blocks, [`internal_link`] / [`external_link`] for references.
//!
//! ## Entrance transition
//!
//! Topic pages load with a `page-enter` class on `<body>`. A small script
//! waits `transition.reveal_delay_ms`, then drops the class and scrolls to
//! the top. The timer is cancelled on `pagehide`, so navigating away before
//! it fires never reveals or scrolls a page the reader already left; a
//! `pageshow` handler reveals pages restored from the back/forward cache,
//! whose snapshot may still carry the hidden state. With scripting disabled
//! a `<noscript>` override shows content immediately.

use crate::config::SiteConfig;
use crate::outline::{FlatEntry, Outline, OutlineNode, resolve};
use crate::snippet::{CodeSample, DEFAULT_SAMPLE_PATH};
use crate::toc::{HeadingRegistry, slugify};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

const JS: &str = include_str!("../static/nav.js");

/// Per-render page state, handed to content functions while they run.
///
/// One context is created per page render and dropped when the render
/// finishes. It carries the site config and collects the headings the page
/// reports, in reading order, for the on-this-page panel.
pub struct PageContext<'a> {
    config: &'a SiteConfig,
    headings: HeadingRegistry,
}

impl<'a> PageContext<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            config,
            headings: HeadingRegistry::new(),
        }
    }

    /// The site config. Tied to the config's own lifetime, not this borrow,
    /// so pages can hold it across further context calls.
    pub fn config(&self) -> &'a SiteConfig {
        self.config
    }

    /// Render a heading with a slug anchor and report it for the
    /// on-this-page panel.
    ///
    /// `level` is clamped to 1..=6. The anchor id comes from [`slugify`],
    /// so `#` links and panel entries agree by construction.
    pub fn heading(&mut self, level: u8, text: &str) -> Markup {
        self.headings.add(text);
        let slug = slugify(text);
        match level.clamp(1, 6) {
            1 => html! { h1 id=(slug) { (text) } },
            2 => html! { h2 id=(slug) { (text) } },
            3 => html! { h3 id=(slug) { (text) } },
            4 => html! { h4 id=(slug) { (text) } },
            5 => html! { h5 id=(slug) { (text) } },
            _ => html! { h6 id=(slug) { (text) } },
        }
    }

    /// Report a heading without rendering one, returning the slug to put on
    /// whatever custom markup the page builds itself.
    pub fn add_heading(&mut self, text: &str) -> String {
        self.headings.add(text);
        slugify(text)
    }

    /// Headings reported so far, in reading order.
    pub fn headings(&self) -> &[String] {
        self.headings.headings()
    }

    /// Render a code sample: one block per virtual file, in declaration
    /// order, plus the sandbox payload as embedded JSON for the runner.
    pub fn code_sample(&self, sample: &CodeSample) -> Markup {
        let files = sample.normalized_files();
        let entry = sample.entry_path().to_string();
        let payload =
            serde_json::to_string(&sample.payload()).expect("sample payload must serialize");
        // A literal </script> inside sample code would end the payload
        // element early; escape it the way JSON allows.
        let payload = payload.replace("</script>", "<\\/script>");
        let editable = if sample.is_editable() { "true" } else { "false" };

        html! {
            div.code-sample data-editable=(editable) {
                @for file in &files {
                    div.sample-file.sample-entry[file.path == entry] {
                        @if files.len() > 1 || file.path != DEFAULT_SAMPLE_PATH {
                            div.sample-path {
                                (file.path)
                                @if files.len() > 1 && file.path == entry {
                                    span.sample-entry-badge { "entry" }
                                }
                            }
                        }
                        pre { code { (file.code) } }
                    }
                }
                script type="application/json" class="sample-files" {
                    (PreEscaped(payload))
                }
            }
        }
    }
}

/// Render a markdown string to markup.
pub fn markdown(source: &str) -> Markup {
    let parser = Parser::new(source);
    let mut html_output = String::new();
    md_html::push_html(&mut html_output, parser);
    PreEscaped(html_output)
}

/// Link to another topic page by outline path.
pub fn internal_link(text: &str, path: &str) -> Markup {
    html! { a href=(href_for(path)) { (text) } }
}

/// Link out of the site, opened in a new tab.
pub fn external_link(text: &str, url: &str) -> Markup {
    html! { a href=(url) target="_blank" rel="noopener noreferrer" { (text) } }
}

/// The URL a topic path is served under. Pages are written as
/// `<path>/index.html`, so links carry a trailing slash.
pub fn href_for(path: &str) -> String {
    format!("{}/", path.trim_end_matches('/'))
}

fn is_current(path: &str, current_path: &str) -> Option<&'static str> {
    (path == current_path).then_some("current")
}

/// The topic sidebar: one link per entry, group captions between them,
/// the current topic marked. Doubles as the slide-in panel on small
/// screens, closed by the `nav-close` label.
pub fn render_outline_nav(outline: &Outline, current_path: &str) -> Markup {
    html! {
        nav.sidebar {
            label.nav-close for="nav-toggle" { "×" }
            ul.topic-list {
                @for node in outline.nodes() {
                    @match node {
                        OutlineNode::Entry(entry) => {
                            li.topic {
                                a class=[is_current(entry.path, current_path)]
                                    href=(href_for(entry.path)) { (entry.title) }
                            }
                        }
                        OutlineNode::Group(group) => {
                            li.topic-group {
                                span.group-title { (group.title) }
                                ul {
                                    @for entry in &group.entries {
                                        li.topic {
                                            a class=[is_current(entry.path, current_path)]
                                                href=(href_for(entry.path)) { (entry.title) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Base HTML document shell used by every page.
pub(crate) fn base_document(
    title: &str,
    css: &str,
    body_class: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Render one topic page to a complete HTML document.
///
/// Runs the entry's content function against a fresh context, then wraps
/// the result in site chrome: header, sidebar (current topic marked),
/// on-this-page panel from the reported headings, and a pager built from
/// the entry's neighbors in the reading order. An entry whose path is not
/// in `sequence` renders without a pager.
pub fn render_topic_page(
    entry: &FlatEntry,
    outline: &Outline,
    sequence: &[FlatEntry],
    config: &SiteConfig,
    css: &str,
) -> Markup {
    let mut ctx = PageContext::new(config);
    let article = (entry.content)(&mut ctx);
    let adjacent = resolve(entry.path, sequence);
    let page_title = format!("{} - {}", entry.title, config.site.title);

    let content = html! {
        input.nav-toggle id="nav-toggle" type="checkbox";
        header.site-header {
            label.nav-hamburger for="nav-toggle" {
                span.hamburger-line {}
                span.hamburger-line {}
                span.hamburger-line {}
            }
            a.site-title href="/" { (config.site.title) }
        }
        div.layout {
            (render_outline_nav(outline, entry.path))
            main.content
                data-reveal-delay=(config.transition.reveal_delay_ms)
                data-prev=[adjacent.previous.map(|e| href_for(e.path))]
                data-next=[adjacent.next.map(|e| href_for(e.path))] {
                @let reported = ctx.headings();
                @if reported.len() > 1 {
                    aside.page-outline {
                        span.page-outline-title { "On this page" }
                        ul {
                            @for heading in reported {
                                li { a href=(format!("#{}", slugify(heading))) { (heading) } }
                            }
                        }
                    }
                }
                article { (article) }
                @if adjacent.previous.is_some() || adjacent.next.is_some() {
                    nav.pager {
                        @if let Some(prev) = adjacent.previous {
                            a.pager-link.pager-prev href=(href_for(prev.path)) {
                                span.pager-direction { "Previous" }
                                span.pager-label { (prev.label) }
                            }
                        }
                        @if let Some(next) = adjacent.next {
                            a.pager-link.pager-next href=(href_for(next.path)) {
                                span.pager-direction { "Next" }
                                span.pager-label { (next.label) }
                            }
                        }
                    }
                }
            }
        }
        @if !config.site.footer.trim().is_empty() {
            footer.site-footer { (markdown(&config.site.footer)) }
        }
        noscript {
            style {
                (PreEscaped("body.page-enter main.content { opacity: 1; transform: none; }"))
            }
        }
        script { (PreEscaped(JS)) }
    };

    base_document(&page_title, css, Some("page-enter"), content)
}
