//! One page session: the thin I/O shell around the pure runtime pieces.
//!
//! A [`Session`] owns everything a loaded page shows: the sidebar manifest,
//! the theme properties, the content markup, the UI state, and the current
//! fragment. Event methods take a [`Fetcher`] and run to completion.
//!
//! Loads are independent. A failure while loading the sidebar or the theme is
//! logged and leaves that region empty; a failure while loading content is
//! logged and replaced by an inline error. Nothing here returns an error to
//! the caller.
//!
//! Navigations are not sequenced against each other: each call overwrites the
//! content with whatever it fetched.

use crate::config::SiteConfig;
use crate::runtime::content::{render_content, render_error};
use crate::runtime::fetch::{FetchError, Fetcher};
use crate::runtime::route::{Route, RouteError, content_path, history_path};
use crate::runtime::sidebar::{render_home_link, render_sidebar};
use crate::runtime::ui::UiState;
use crate::theme::{Theme, generate_theme_css};
use crate::types::Manifest;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use rayon::prelude::*;
use std::thread;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Fetch `path` and return its body, treating non-2xx as an error.
pub fn fetch_text(fetcher: &impl Fetcher, path: &str) -> Result<String, LoadError> {
    let response = fetcher.fetch(path)?;
    if !response.ok() {
        return Err(LoadError::Status(response.status));
    }
    Ok(response.body)
}

pub fn load_manifest(fetcher: &impl Fetcher, path: &str) -> Result<Manifest, LoadError> {
    Ok(serde_json::from_str(&fetch_text(fetcher, path)?)?)
}

pub fn load_theme(fetcher: &impl Fetcher, path: &str) -> Result<Theme, LoadError> {
    Ok(Theme::from_json(&fetch_text(fetcher, path)?)?)
}

/// Fetch and render one document, or the inline error in its place.
pub fn load_document(fetcher: &impl Fetcher, path: &str) -> Markup {
    match fetch_text(fetcher, &content_path(path)) {
        Ok(markdown) => render_content(path, &markdown),
        Err(e) => {
            log::error!("Error loading content: {e}");
            render_error(&e.to_string())
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    config: SiteConfig,
    pub ui: UiState,
    /// Current URL fragment, including the leading `#` when non-empty.
    pub fragment: String,
    pub manifest: Option<Manifest>,
    pub theme_properties: Vec<(&'static str, String)>,
    pub content: Markup,
    /// Scroll offset of the content area.
    pub scroll_top: u32,
}

impl Session {
    pub fn new(config: SiteConfig, viewport_width: u32) -> Self {
        Self {
            ui: UiState::new(config.sidebar.clone(), viewport_width),
            config,
            fragment: String::new(),
            manifest: None,
            theme_properties: Vec::new(),
            content: html! {},
            scroll_top: 0,
        }
    }

    /// Page ready: load sidebar, theme and the current route side by side.
    pub fn start(&mut self, fetcher: &impl Fetcher, fragment: &str) {
        self.fragment = fragment.to_string();
        let home = self.config.home_path();
        let ((manifest, theme), content) = rayon::join(
            || {
                rayon::join(
                    || load_manifest(fetcher, &self.config.manifest_file),
                    || load_theme(fetcher, &self.config.theme_file),
                )
            },
            || route_content(fetcher, fragment, &home),
        );

        match manifest {
            Ok(manifest) => self.manifest = Some(manifest),
            Err(e) => log::error!("Error loading sidebar: {e}"),
        }
        match theme {
            Ok(theme) => self.theme_properties = theme.css_properties(),
            Err(e) => log::error!("Error loading theme: {e}"),
        }
        self.show(content);
    }

    /// The browser reported a fragment change.
    pub fn on_hash_change(&mut self, fetcher: &impl Fetcher, fragment: &str) {
        self.fragment = fragment.to_string();
        let content = route_content(fetcher, fragment, &self.config.home_path());
        self.show(content);
    }

    /// A sidebar link was clicked.
    ///
    /// Updates the fragment without going through [`Self::on_hash_change`],
    /// so the document is fetched exactly once.
    pub fn on_nav_click(&mut self, fetcher: &impl Fetcher, item_path: &str, viewport_width: u32) {
        self.fragment = format!("#{}", history_path(item_path));
        let content = load_document(fetcher, item_path);
        self.show(content);
        self.ui.on_nav_click(viewport_width);
    }

    /// The fixed home link was clicked.
    pub fn on_home_click(&mut self, fetcher: &impl Fetcher, viewport_width: u32) {
        let home = self.config.home_path();
        self.on_nav_click(fetcher, &home, viewport_width);
    }

    /// Background cache warming: wait the configured delay, then run
    /// [`warm_cache`]. Takes `&self`, so it can run beside rendering.
    pub fn warm_cache_after(&self, fetcher: &impl Fetcher) -> Result<WarmReport, LoadError> {
        let delay = self.config.cache.warm_delay();
        if !delay.is_zero() {
            log::debug!("warming cache in {}ms", delay.as_millis());
            thread::sleep(delay);
        }
        warm_cache(fetcher, &self.config)
    }

    pub fn on_content_scroll(&mut self, offset: u32) {
        self.scroll_top = offset;
    }

    fn show(&mut self, content: Markup) {
        self.content = content;
        self.scroll_top = 0;
    }

    pub fn sidebar_markup(&self) -> Markup {
        match &self.manifest {
            Some(manifest) => render_sidebar(manifest),
            None => html! {},
        }
    }

    /// All custom properties for the document root: layout, then theme.
    pub fn root_properties(&self) -> Vec<(&'static str, String)> {
        let mut props = self.ui.css_variables();
        props.extend(self.theme_properties.iter().cloned());
        props
    }

    /// Render the page as it currently stands.
    pub fn render_page(&self, title: &str) -> Markup {
        let css = generate_theme_css(&self.root_properties());
        let sidebar_class = self.ui.sidebar_classes().join(" ");
        let container_class = ["container"]
            .into_iter()
            .chain(self.ui.container_classes())
            .collect::<Vec<_>>()
            .join(" ");
        let body_style = self.ui.body_scroll_locked.then_some("overflow: hidden");
        let sidebar_style = format!("width: {}px", self.ui.width);
        let handle_style = format!("left: {}px", self.ui.handle_offset());

        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (title) }
                    style { (PreEscaped(css)) }
                }
                body style=[body_style] {
                    button id="sidebar-toggle" type="button" aria-label="Toggle sidebar" { "☰" }
                    div class=(container_class) {
                        nav id="sidebar" class=(sidebar_class) style=(sidebar_style) {
                            div.sidebar-content {
                                (render_home_link(&self.config.home_path()))
                                (self.sidebar_markup())
                            }
                        }
                        div id="resize-handle" style=(handle_style) {}
                        main id="content" {
                            div.content-wrapper {
                                (self.content)
                            }
                        }
                    }
                }
            }
        }
    }
}

fn route_content(fetcher: &impl Fetcher, fragment: &str, home: &str) -> Markup {
    match Route::from_fragment(fragment) {
        Ok(route) => load_document(fetcher, route.requested_path(home)),
        Err(e) => {
            let e = LoadError::from(e);
            log::error!("Error loading content: {e}");
            render_error(&e.to_string())
        }
    }
}

// ============================================================================
// Background cache warming
// ============================================================================

/// Outcome of one cache-warming pass.
#[derive(Debug, Default, PartialEq)]
pub struct WarmReport {
    pub cached: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl WarmReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Fetch home and every manifest path once, so later navigation is served
/// from cache. Never touches page state; failures are logged per path.
pub fn warm_cache(fetcher: &impl Fetcher, config: &SiteConfig) -> Result<WarmReport, LoadError> {
    let manifest = load_manifest(fetcher, &config.manifest_file).inspect_err(|e| {
        log::error!("Error caching articles: {e}");
    })?;

    let mut paths = vec![config.home_path()];
    paths.extend(manifest.paths().map(str::to_string));

    let outcomes: Vec<(String, Result<(), LoadError>)> = paths
        .into_par_iter()
        .map(|path| {
            let outcome = fetch_text(fetcher, &path).map(|_| ());
            (path, outcome)
        })
        .collect();

    let mut report = WarmReport::default();
    for (path, outcome) in outcomes {
        match outcome {
            Ok(()) => {
                log::info!("Cached: {path}");
                report.cached.push(path);
            }
            Err(e) => {
                log::warn!("Failed to cache: {path} ({e})");
                report.failed.push((path, e.to_string()));
            }
        }
    }
    log::info!("All articles cached");
    Ok(report)
}
