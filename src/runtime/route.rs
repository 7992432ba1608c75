//! Fragment routing.
//!
//! The URL fragment is the router state. `#articles/guides/setup` names the
//! document `articles/guides/setup.md`; an empty fragment names the home
//! document. Fragments are percent-decoded before use.

use percent_encoding::percent_decode_str;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RouteError {
    #[error("URI malformed: {0}")]
    Malformed(String),
}

/// Where the content area should point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Decoded path as written in the fragment, `.md` optional.
    Document(String),
}

impl Route {
    /// Parse a URL fragment, with or without its leading `#`.
    pub fn from_fragment(fragment: &str) -> Result<Self, RouteError> {
        let raw = fragment.strip_prefix('#').unwrap_or(fragment);
        if raw.is_empty() {
            return Ok(Route::Home);
        }
        let decoded = percent_decode_str(raw)
            .decode_utf8()
            .map_err(|_| RouteError::Malformed(raw.to_string()))?;
        Ok(Route::Document(decoded.into_owned()))
    }

    /// Path used for fetching and titling, before the extension is forced.
    pub fn requested_path<'a>(&'a self, home_path: &'a str) -> &'a str {
        match self {
            Route::Home => home_path,
            Route::Document(path) => path,
        }
    }
}

/// File to fetch for a requested path: `.md` appended unless already present.
///
/// A single trailing slash is dropped first, so `guides/` fetches `guides.md`.
pub fn content_path(path: &str) -> String {
    if path.ends_with(".md") {
        return path.to_string();
    }
    format!("{}.md", path.strip_suffix('/').unwrap_or(path))
}

/// Fragment form of a manifest path: the path without its `.md`.
pub fn history_path(path: &str) -> &str {
    path.strip_suffix(".md").unwrap_or(path)
}
