//! Site configuration module.
//!
//! Handles loading, validating, and merging the `fieldguide.toml` config
//! file. All keys are optional: user values are merged over stock defaults,
//! unknown keys are rejected to catch typos early, and the merged result is
//! validated before anything renders.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Field Guide"     # Shown in the header and every page title
//! footer = ""               # Markdown, rendered at the bottom of every page
//!
//! [theme]
//! content_width = 720       # Article column width in px
//! sidebar_width = 260       # Topic sidebar width in px
//! font_size = 16            # Base font size in px
//!
//! [transition]
//! reveal_delay_ms = 150     # Entrance delay before a page becomes visible
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#1a1a1a"
//! text_muted = "#6b6b6b"    # Sidebar captions, pager labels
//! border = "#e2e2e2"
//! link = "#0b61c4"
//! accent = "#0b61c4"        # Current-topic marker, focus rings
//! code_background = "#f6f6f4"
//!
//! [colors.dark]
//! background = "#111113"
//! text = "#e8e8e6"
//! text_muted = "#9a9a98"
//! border = "#323236"
//! link = "#6fb3ff"
//! accent = "#6fb3ff"
//! code_background = "#1c1c20"
//!
//! [processing]
//! max_threads = 4           # Max parallel render workers (omit for auto = CPU cores)
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! # Only override the light mode background
//! [colors.light]
//! background = "#fafafa"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default name of the config file, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "fieldguide.toml";

/// Upper bound on the entrance delay. The page must reach its visible,
/// scrolled-to-top state within bounded time, so the delay is capped here
/// rather than left to authors.
pub const MAX_REVEAL_DELAY_MS: u64 = 1000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `fieldguide.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity: header title and footer text.
    pub site: SiteMeta,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Layout settings (column widths, base font size).
    pub theme: ThemeConfig,
    /// Entrance transition timing.
    pub transition: TransitionConfig,
    /// Parallel rendering settings.
    pub processing: ProcessingConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title must not be empty".into(),
            ));
        }
        if self.transition.reveal_delay_ms > MAX_REVEAL_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "transition.reveal_delay_ms must be at most {MAX_REVEAL_DELAY_MS}"
            )));
        }
        if self.theme.content_width < 320 {
            return Err(ConfigError::Validation(
                "theme.content_width must be at least 320".into(),
            ));
        }
        if self.theme.font_size < 10 || self.theme.font_size > 32 {
            return Err(ConfigError::Validation(
                "theme.font_size must be between 10 and 32".into(),
            ));
        }
        Ok(())
    }
}

/// Site identity settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// Shown in the header and appended to every page title.
    pub title: String,
    /// Markdown rendered at the bottom of every page. Empty = no footer.
    pub footer: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Field Guide".to_string(),
            footer: String::new(),
        }
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Article column width in px.
    pub content_width: u32,
    /// Topic sidebar width in px.
    pub sidebar_width: u32,
    /// Base font size in px.
    pub font_size: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            content_width: 720,
            sidebar_width: 260,
            font_size: 16,
        }
    }
}

/// Entrance transition timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionConfig {
    /// Delay in milliseconds before a freshly loaded page is marked visible
    /// and scrolled to the top. Capped at [`MAX_REVEAL_DELAY_MS`].
    pub reveal_delay_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 150,
        }
    }
}

/// Parallel rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel page-render workers.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_threads: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_threads.map(|n| n.min(cores)).unwrap_or(cores)
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background color.
    pub background: String,
    /// Primary text color.
    pub text: String,
    /// Muted/secondary text color (sidebar captions, pager direction labels).
    pub text_muted: String,
    /// Border and rule color.
    pub border: String,
    /// Link color.
    pub link: String,
    /// Accent color (current-topic marker, focus rings).
    pub accent: String,
    /// Background for code blocks and sample files.
    pub code_background: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#1a1a1a".to_string(),
            text_muted: "#6b6b6b".to_string(),
            border: "#e2e2e2".to_string(),
            link: "#0b61c4".to_string(),
            accent: "#0b61c4".to_string(),
            code_background: "#f6f6f4".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#111113".to_string(),
            text: "#e8e8e6".to_string(),
            text_muted: "#9a9a98".to_string(),
            border: "#323236".to_string(),
            link: "#6fb3ff".to_string(),
            accent: "#6fb3ff".to_string(),
            code_background: "#1c1c20".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist; a missing config simply
/// means stock defaults. Returns `Err` if the file exists but contains
/// invalid TOML.
pub fn load_raw_config(file: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !file.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(file)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the site config from the given file path.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. A missing file yields the stock defaults.
pub fn load_config(file: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(file)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `fieldguide.toml` with all keys and
/// explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Fieldguide Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# The file is looked up as ./fieldguide.toml unless --config points
# elsewhere. Each key only needs to appear if you want to override it.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
# Shown in the header and appended to every page title.
title = "Field Guide"

# Markdown rendered at the bottom of every page. Empty = no footer.
footer = ""

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[theme]
# Article column width in px.
content_width = 720

# Topic sidebar width in px.
sidebar_width = 260

# Base font size in px.
font_size = 16

# ---------------------------------------------------------------------------
# Entrance transition
# ---------------------------------------------------------------------------
[transition]
# Delay in milliseconds before a freshly loaded page is marked visible and
# scrolled to the top. Capped at 1000 so pages never stay hidden long.
reveal_delay_ms = 150

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#1a1a1a"
text_muted = "#6b6b6b"    # Sidebar captions, pager labels
border = "#e2e2e2"
link = "#0b61c4"
accent = "#0b61c4"        # Current-topic marker, focus rings
code_background = "#f6f6f4"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#111113"
text = "#e8e8e6"
text_muted = "#9a9a98"
border = "#323236"
link = "#6fb3ff"
accent = "#6fb3ff"
code_background = "#1c1c20"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel page-render workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_threads = 4
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-link: {light_link};
    --color-accent: {light_accent};
    --color-code-bg: {light_code_bg};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-link: {dark_link};
        --color-accent: {dark_accent};
        --color-code-bg: {dark_code_bg};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_link = colors.light.link,
        light_accent = colors.light.accent,
        light_code_bg = colors.light.code_background,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_link = colors.dark.link,
        dark_accent = colors.dark.accent,
        dark_code_bg = colors.dark.code_background,
    )
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --content-width: {content_width}px;
    --sidebar-width: {sidebar_width}px;
    --font-size: {font_size}px;
}}"#,
        content_width = theme.content_width,
        sidebar_width = theme.sidebar_width,
        font_size = theme.font_size,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_colors() {
        let config = SiteConfig::default();
        assert_eq!(config.colors.light.background, "#ffffff");
        assert_eq!(config.colors.dark.background, "#111113");
    }

    #[test]
    fn default_config_site_meta() {
        let config = SiteConfig::default();
        assert_eq!(config.site.title, "Field Guide");
        assert!(config.site.footer.is_empty());
    }

    #[test]
    fn default_config_layout_and_transition() {
        let config = SiteConfig::default();
        assert_eq!(config.theme.content_width, 720);
        assert_eq!(config.theme.sidebar_width, 260);
        assert_eq!(config.theme.font_size, 16);
        assert_eq!(config.transition.reveal_delay_ms, 150);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors.light]
background = "#fafafa"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        // Overridden value
        assert_eq!(config.colors.light.background, "#fafafa");
        // Default values preserved
        assert_eq!(config.colors.light.text, "#1a1a1a");
        assert_eq!(config.colors.dark.background, "#111113");
        assert_eq!(config.site.title, "Field Guide");
    }

    #[test]
    fn parse_site_and_transition() {
        let toml = r#"
[site]
title = "Rust Field Notes"
footer = "Made with **fieldguide**"

[transition]
reveal_delay_ms = 300
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.site.title, "Rust Field Notes");
        assert_eq!(config.site.footer, "Made with **fieldguide**");
        assert_eq!(config.transition.reveal_delay_ms, 300);
        // Unspecified defaults preserved
        assert_eq!(config.theme.content_width, 720);
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let mut colors = ColorConfig::default();
        colors.light.background = "#f0f0f0".to_string();
        colors.dark.background = "#1a1a1a".to_string();

        let css = generate_color_css(&colors);
        assert!(css.contains("--color-bg: #f0f0f0"));
        assert!(css.contains("--color-bg: #1a1a1a"));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join(CONFIG_FILENAME)).unwrap();

        assert_eq!(config.site.title, "Field Guide");
        assert_eq!(config.colors.light.background, "#ffffff");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(CONFIG_FILENAME);

        std::fs::write(
            &config_path,
            r##"
[site]
title = "My Guide"

[colors.light]
background = "#123456"
"##,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.site.title, "My Guide");
        assert_eq!(config.colors.light.background, "#123456");
        // Unspecified values should be defaults
        assert_eq!(config.colors.dark.background, "#111113");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(CONFIG_FILENAME);

        std::fs::write(&config_path, "this is not valid toml [[[").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(CONFIG_FILENAME);

        std::fs::write(
            &config_path,
            r#"
[transition]
reveal_delay_ms = 60000
"#,
        )
        .unwrap();

        let result = load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str(r#"width = 720"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"width = 640"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("width").unwrap().as_integer(), Some(640));
    }

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r#"
[theme]
content_width = 720
font_size = 16
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[theme]
font_size = 18
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let theme = merged.get("theme").unwrap();
        assert_eq!(theme.get("font_size").unwrap().as_integer(), Some(18));
        // content_width preserved from base
        assert_eq!(theme.get("content_width").unwrap().as_integer(), Some(720));
    }

    #[test]
    fn merge_toml_preserves_base_keys() {
        let base: toml::Value = toml::from_str(
            r#"
a = 1
b = 2
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(r#"a = 10"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(10));
        assert_eq!(merged.get("b").unwrap().as_integer(), Some(2));
    }

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r##"
[colors.light]
background = "#fff"
text = "#000"
"##,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r##"
[colors.light]
background = "#fafafa"
"##,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let light = merged.get("colors").unwrap().get("light").unwrap();
        assert_eq!(light.get("background").unwrap().as_str(), Some("#fafafa"));
        assert_eq!(light.get("text").unwrap().as_str(), Some("#000"));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r#"
[theme]
content_widht = 720
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let toml_str = r#"
[themes]
content_width = 720
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_nested_key_rejected() {
        let toml_str = r##"
[colors.light]
bg = "#fff"
"##;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_empty_title() {
        let mut config = SiteConfig::default();
        config.site.title = "   ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.title"));
    }

    #[test]
    fn validate_reveal_delay_boundary() {
        let mut config = SiteConfig::default();
        config.transition.reveal_delay_ms = MAX_REVEAL_DELAY_MS;
        assert!(config.validate().is_ok());

        config.transition.reveal_delay_ms = MAX_REVEAL_DELAY_MS + 1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("reveal_delay_ms"));
    }

    #[test]
    fn validate_zero_delay_is_fine() {
        let mut config = SiteConfig::default();
        config.transition.reveal_delay_ms = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_content_width_too_narrow() {
        let mut config = SiteConfig::default();
        config.theme.content_width = 200;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_font_size_bounds() {
        let mut config = SiteConfig::default();
        config.theme.font_size = 9;
        assert!(config.validate().is_err());
        config.theme.font_size = 33;
        assert!(config.validate().is_err());
        config.theme.font_size = 10;
        assert!(config.validate().is_ok());
    }

    // =========================================================================
    // resolve_config / load_raw_config tests
    // =========================================================================

    #[test]
    fn load_raw_config_returns_none_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let result = load_raw_config(&tmp.path().join(CONFIG_FILENAME)).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn load_raw_config_returns_value_when_file_exists() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(CONFIG_FILENAME);
        std::fs::write(
            &config_path,
            r#"
[theme]
font_size = 18
"#,
        )
        .unwrap();

        let result = load_raw_config(&config_path).unwrap();
        assert!(result.is_some());
        let val = result.unwrap();
        assert_eq!(
            val.get("theme")
                .unwrap()
                .get("font_size")
                .unwrap()
                .as_integer(),
            Some(18)
        );
    }

    #[test]
    fn resolve_config_with_no_overlay() {
        let base = stock_defaults_value();
        let config = resolve_config(base, None).unwrap();
        assert_eq!(config.theme.content_width, 720);
        assert_eq!(config.colors.light.background, "#ffffff");
    }

    #[test]
    fn resolve_config_with_overlay() {
        let base = stock_defaults_value();
        let overlay: toml::Value = toml::from_str(
            r#"
[theme]
content_width = 640
"#,
        )
        .unwrap();
        let config = resolve_config(base, Some(overlay)).unwrap();
        assert_eq!(config.theme.content_width, 640);
        // Other fields preserved from defaults
        assert_eq!(config.theme.sidebar_width, 260);
    }

    #[test]
    fn resolve_config_rejects_invalid_values() {
        let base = stock_defaults_value();
        let overlay: toml::Value = toml::from_str(
            r#"
[theme]
content_width = 100
"#,
        )
        .unwrap();
        let result = resolve_config(base, Some(overlay));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let content = stock_config_toml();
        let _: toml::Value = toml::from_str(content).expect("stock config must be valid TOML");
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let content = stock_config_toml();
        let config: SiteConfig = toml::from_str(content).unwrap();
        assert_eq!(config.site.title, "Field Guide");
        assert_eq!(config.theme.content_width, 720);
        assert_eq!(config.transition.reveal_delay_ms, 150);
        assert_eq!(config.colors.light.background, "#ffffff");
        assert_eq!(config.colors.dark.background, "#111113");
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        assert!(content.contains("[site]"));
        assert!(content.contains("[theme]"));
        assert!(content.contains("[transition]"));
        assert!(content.contains("[colors.light]"));
        assert!(content.contains("[colors.dark]"));
        assert!(content.contains("[processing]"));
    }

    // =========================================================================
    // Theme CSS and processing tests
    // =========================================================================

    #[test]
    fn generate_theme_css_includes_layout_variables() {
        let theme = ThemeConfig::default();
        let css = generate_theme_css(&theme);
        assert!(css.contains("--content-width: 720px"));
        assert!(css.contains("--sidebar-width: 260px"));
        assert!(css.contains("--font-size: 16px"));
    }

    #[test]
    fn generate_css_includes_dark_mode_media_query() {
        let colors = ColorConfig::default();
        let css = generate_color_css(&colors);
        assert!(css.contains("@media (prefers-color-scheme: dark)"));
        assert!(css.contains("--color-code-bg:"));
    }

    #[test]
    fn effective_threads_auto() {
        let config = ProcessingConfig { max_threads: None };
        let threads = effective_threads(&config);
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        assert_eq!(threads, cores);
    }

    #[test]
    fn effective_threads_clamped_to_cores() {
        let config = ProcessingConfig {
            max_threads: Some(99999),
        };
        let threads = effective_threads(&config);
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        assert_eq!(threads, cores);
    }

    #[test]
    fn effective_threads_user_constrains_down() {
        let config = ProcessingConfig {
            max_threads: Some(1),
        };
        assert_eq!(effective_threads(&config), 1);
    }

    #[test]
    fn parse_processing_config() {
        let toml = r#"
[processing]
max_threads = 4
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.processing.max_threads, Some(4));
    }
}
