//! Theme description and its CSS custom properties.
//!
//! `theme.json` is optional and sparse:
//!
//! ```json
//! { "sidebar": { "background": "#1e1e2e", "linkText": "#cdd6f4" } }
//! ```
//!
//! Each present value is written to one custom property on the document root.
//! Missing values leave the stylesheet default in place.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub sidebar: Option<SidebarTheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarTheme {
    pub background: Option<String>,
    pub link_background: Option<String>,
    pub link_background_hover: Option<String>,
    pub link_text: Option<String>,
}

impl Theme {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Custom properties to set on the document root, in a fixed order.
    pub fn css_properties(&self) -> Vec<(&'static str, String)> {
        let Some(sidebar) = &self.sidebar else {
            return Vec::new();
        };
        [
            ("--sidebar-bg", &sidebar.background),
            ("--link-bg", &sidebar.link_background),
            ("--link-hover-bg", &sidebar.link_background_hover),
            ("--link-text", &sidebar.link_text),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.clone().map(|v| (name, v)))
        .collect()
    }
}

/// Render custom properties as a `:root` rule.
pub fn generate_theme_css(properties: &[(&str, String)]) -> String {
    let body: String = properties
        .iter()
        .map(|(name, value)| format!("    {name}: {value};\n"))
        .collect();
    format!(":root {{\n{body}}}")
}
