//! Site configuration module.
//!
//! Handles loading, validating, and merging `docsite.toml`. The file lives in
//! the site root (the directory that is published and that holds the content
//! directory). Stock defaults are overridden by whatever keys the file sets.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_dir = "articles"      # Markdown tree, relative to the site root
//! home_file = "home.md"         # Landing document, never listed in navigation
//! manifest_file = "sidebar.json"
//! theme_file = "theme.json"
//!
//! [sitemap]
//! enabled = true
//! file = "sitemap.xml"
//! base_url = "https://example.com/"
//! changefreq = "weekly"
//!
//! [sidebar]
//! default_width = 250           # px
//! min_width = 150               # px, resize clamp
//! max_width = 500               # px, resize clamp
//! mobile_breakpoint = 768       # px, viewports at or below are "narrow"
//!
//! [cache]
//! warm_delay_ms = 5000          # Delay before background cache warming
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [sitemap]
//! base_url = "https://docs.example.org/"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Name of the config file looked up in the site root.
pub const CONFIG_FILENAME: &str = "docsite.toml";

/// Change frequencies allowed by the sitemap protocol.
const CHANGE_FREQUENCIES: &[&str] = &[
    "always", "hourly", "daily", "weekly", "monthly", "yearly", "never",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `docsite.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Markdown content directory, relative to the site root.
    pub content_dir: String,
    /// File name of the landing document.
    pub home_file: String,
    /// Output path of the navigation manifest, relative to the site root.
    pub manifest_file: String,
    /// Path of the theme description read by the runtime.
    pub theme_file: String,
    pub sitemap: SitemapConfig,
    pub sidebar: SidebarConfig,
    pub cache: CacheConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: "articles".to_string(),
            home_file: "home.md".to_string(),
            manifest_file: "sidebar.json".to_string(),
            theme_file: "theme.json".to_string(),
            sitemap: SitemapConfig::default(),
            sidebar: SidebarConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("content_dir", &self.content_dir),
            ("home_file", &self.home_file),
            ("manifest_file", &self.manifest_file),
            ("theme_file", &self.theme_file),
            ("sitemap.file", &self.sitemap.file),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        if !self.home_file.ends_with(".md") {
            return Err(ConfigError::Validation(
                "home_file must be a markdown file".into(),
            ));
        }
        if !self.sitemap.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "sitemap.base_url must end with '/'".into(),
            ));
        }
        if !CHANGE_FREQUENCIES.contains(&self.sitemap.changefreq.as_str()) {
            return Err(ConfigError::Validation(format!(
                "sitemap.changefreq must be one of {}",
                CHANGE_FREQUENCIES.join(", ")
            )));
        }
        let s = &self.sidebar;
        if s.min_width > s.max_width {
            return Err(ConfigError::Validation(
                "sidebar.min_width must not exceed sidebar.max_width".into(),
            ));
        }
        if s.default_width < s.min_width || s.default_width > s.max_width {
            return Err(ConfigError::Validation(
                "sidebar.default_width must lie between min_width and max_width".into(),
            ));
        }
        Ok(())
    }

    /// Site-root-relative path of the home document.
    pub fn home_path(&self) -> String {
        format!(
            "{}/{}",
            self.content_dir.trim_end_matches('/'),
            self.home_file
        )
    }
}

/// Sitemap generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SitemapConfig {
    /// Whether `build` writes a sitemap next to the manifest.
    pub enabled: bool,
    /// Output path, relative to the site root.
    pub file: String,
    /// Published site URL; every `<loc>` is this plus a fragment.
    pub base_url: String,
    /// `<changefreq>` value written for every entry.
    pub changefreq: String,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: "sitemap.xml".to_string(),
            base_url: "https://example.com/".to_string(),
            changefreq: "weekly".to_string(),
        }
    }
}

/// Sidebar geometry used by the runtime UI state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SidebarConfig {
    pub default_width: u32,
    pub min_width: u32,
    pub max_width: u32,
    /// Viewports this wide or narrower get the overlay behaviour.
    pub mobile_breakpoint: u32,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            default_width: 250,
            min_width: 150,
            max_width: 500,
            mobile_breakpoint: 768,
        }
    }
}

/// Background cache warming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    pub warm_delay_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            warm_delay_ms: 5000,
        }
    }
}

impl CacheConfig {
    pub fn warm_delay(&self) -> Duration {
        Duration::from_millis(self.warm_delay_ms)
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
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

/// Load `docsite.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
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

/// Load config from `docsite.toml` in the site root.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `docsite.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docsite configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# Markdown content directory, relative to this file.
# Sub-folders named <order>_<slug> become sidebar sections.
content_dir = "articles"

# Landing document shown when the URL has no fragment.
# Never listed in the sidebar, always listed in the sitemap.
home_file = "home.md"

# Navigation manifest written by `docsite build`.
manifest_file = "sidebar.json"

# Theme description read by the page runtime.
theme_file = "theme.json"

# ---------------------------------------------------------------------------
# Sitemap
# ---------------------------------------------------------------------------
[sitemap]
enabled = true
file = "sitemap.xml"

# Published URL of the site. Must end with '/'.
base_url = "https://example.com/"

# One of: always, hourly, daily, weekly, monthly, yearly, never.
changefreq = "weekly"

# ---------------------------------------------------------------------------
# Sidebar geometry (pixels)
# ---------------------------------------------------------------------------
[sidebar]
default_width = 250
min_width = 150
max_width = 500

# Viewports at or below this width treat the sidebar as an overlay.
mobile_breakpoint = 768

# ---------------------------------------------------------------------------
# Background cache warming
# ---------------------------------------------------------------------------
[cache]
warm_delay_ms = 5000
"##
}
