//! # docsite
//!
//! A minimal static documentation site: a build step that turns a folder of
//! markdown into a sidebar manifest and a sitemap, and a page runtime that
//! draws the sidebar, applies the theme and routes URL fragments to documents.
//!
//! # Build Pipeline
//!
//! ```text
//! 1. Scan       articles/  →  ScanResult    (front-matter, titles, categories)
//! 2. Manifest   ScanResult →  sidebar.json  (sections by order, items by weight)
//! 3. Sitemap    ScanResult →  sitemap.xml   (every discovered document)
//! ```
//!
//! Nothing is written until the scan has succeeded.
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`scan`] | Walks the content directory and reads each document's navigation metadata |
//! | [`front_matter`] | YAML front-matter block: `hidden`, `weight` |
//! | [`naming`] | `<order>_<slug>` folder names and title casing |
//! | [`manifest`] | Groups scanned documents into the sidebar manifest |
//! | [`sitemap`] | Fragment URLs and the sitemap XML |
//! | [`generate`] | Runs the pipeline and writes the artifacts |
//! | [`theme`] | `theme.json` → CSS custom properties |
//! | [`runtime`] | Page behaviour: routing, rendering, sidebar UI, cache warming |
//! | [`config`] | `docsite.toml` loading, merging and validation |
//! | [`types`] | The manifest types shared by builder and runtime |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Fragment Routing
//!
//! Every document is addressed by the URL fragment, `#articles/10_guides/setup`,
//! so the published site needs no server-side routing and works from any
//! static file host. The sitemap emits the same fragment URLs.
//!
//! ## Sitemap Lists Everything
//!
//! The sitemap is built from the discovery list, not the manifest: hidden
//! documents and the home document are reachable by URL and are listed.
//!
//! ## Maud For Markup
//!
//! The runtime's markup is built with [Maud](https://maud.lambda.xyz/), so all
//! interpolated titles and paths are escaped at compile-checked call sites.

pub mod config;
pub mod front_matter;
pub mod generate;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod runtime;
pub mod scan;
pub mod sitemap;
pub mod theme;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
