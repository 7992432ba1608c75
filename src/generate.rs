//! Build output generation.
//!
//! Runs the scan, groups the result into the navigation manifest, renders the
//! sitemap, and only then writes anything. A failure anywhere before the
//! writes leaves existing output files untouched.
//!
//! ## Output Structure
//!
//! ```text
//! site/
//! ├── docsite.toml         # optional config
//! ├── theme.json           # optional theme, read by the runtime
//! ├── sidebar.json         # ← navigation manifest
//! ├── sitemap.xml          # ← sitemap
//! └── articles/
//!     └── ...
//! ```

use crate::config::SiteConfig;
use crate::manifest::write_manifest;
use crate::scan::{self, ScanError, ScanResult};
use crate::sitemap::{self, render_sitemap, write_sitemap};
use crate::types::Manifest;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which artifacts a run writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Targets {
    /// Manifest, plus the sitemap when enabled in config.
    All,
    ManifestOnly,
    SitemapOnly,
}

impl Targets {
    fn manifest(self) -> bool {
        matches!(self, Targets::All | Targets::ManifestOnly)
    }

    fn sitemap(self, config: &SiteConfig) -> bool {
        match self {
            Targets::All => config.sitemap.enabled,
            Targets::SitemapOnly => true,
            Targets::ManifestOnly => false,
        }
    }
}

/// What a run produced.
#[derive(Debug)]
pub struct BuildOutput {
    pub scan: ScanResult,
    pub manifest: Manifest,
    /// Written manifest path, if the manifest was a target.
    pub manifest_path: Option<PathBuf>,
    /// Written sitemap path, if the sitemap was a target.
    pub sitemap_path: Option<PathBuf>,
}

/// Scan `root` and write the requested artifacts.
pub fn generate(
    root: &Path,
    config: &SiteConfig,
    targets: Targets,
    lastmod: NaiveDate,
) -> Result<BuildOutput, GenerateError> {
    let scan = scan::scan(root, config)?;
    let manifest = Manifest::from_files(&scan.files);

    let sitemap_xml = targets.sitemap(config).then(|| {
        render_sitemap(
            &config.sitemap.base_url,
            lastmod,
            &config.sitemap.changefreq,
            &scan.discovered,
        )
    });

    let manifest_path = if targets.manifest() {
        let path = root.join(&config.manifest_file);
        write_manifest(&manifest, &path)?;
        log::debug!("wrote {}", path.display());
        Some(path)
    } else {
        None
    };

    let sitemap_path = match sitemap_xml {
        Some(xml) => {
            let path = root.join(&config.sitemap.file);
            write_sitemap(&xml, &path)?;
            log::debug!("wrote {}", path.display());
            Some(path)
        }
        None => None,
    };

    Ok(BuildOutput {
        scan,
        manifest,
        manifest_path,
        sitemap_path,
    })
}

/// [`generate`] with today's date for the sitemap.
pub fn generate_today(
    root: &Path,
    config: &SiteConfig,
    targets: Targets,
) -> Result<BuildOutput, GenerateError> {
    generate(root, config, targets, sitemap::today())
}
