//! Content discovery and per-file metadata.
//!
//! First half of the build. Walks the content directory for markdown files
//! and derives the navigation metadata of each one from its location, its
//! filename, and its front-matter.
//!
//! ## Directory Structure
//!
//! ```text
//! articles/                        # Content root
//! ├── home.md                      # Landing page, never listed in navigation
//! ├── 10_guides/                   # Section "Guides", order 10
//! │   ├── getting-started.md       # Item "Getting Started"
//! │   └── rest-api.md              # Item "Rest API"
//! └── 20_reference/                # Section "Reference", order 20
//!     ├── cli.md                   # Item "CLI" (already uppercase, kept)
//!     └── drafts.md                # `hidden: true` in front-matter
//! ```
//!
//! ## Naming Conventions
//!
//! - **Section**: the immediate parent folder. `<order>_<slug>` gives the
//!   section order and label (see [`crate::naming::parse_category_dir`]).
//! - **Item title**: the filename stem, title-cased.
//! - **Item weight**: front-matter `weight`, 999 when absent.
//!
//! ## Exclusions
//!
//! A file is discovered but kept out of navigation when its front-matter sets
//! `hidden`, or when its name is the configured home file. Discovered files
//! are still returned in [`ScanResult::discovered`] so the sitemap can list
//! every document.
//!
//! ## Parallelism
//!
//! Every file is read and parsed independently on the rayon pool. Results are
//! collected back in discovery order, which is sorted by file name at each
//! directory level so two runs over the same tree agree.

use crate::config::SiteConfig;
use crate::front_matter::{FrontMatter, FrontMatterError};
use crate::naming;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

const MARKDOWN_EXTENSION: &str = ".md";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Content directory not found: {0}")]
    MissingContentDir(PathBuf),
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Front-matter error in {path}: {source}")]
    FrontMatter {
        path: PathBuf,
        source: FrontMatterError,
    },
}

/// Navigation metadata for one visible markdown document.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentFile {
    pub title: String,
    pub category: String,
    pub order: i64,
    pub weight: f64,
    /// Path relative to the site root, `/`-separated.
    pub path: String,
}

/// Why a discovered document is kept out of navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    Hidden,
    Home,
}

/// Outcome of reading a single markdown document.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Visible(ContentFile),
    Excluded { path: String, reason: Exclusion },
}

/// Everything the build needs from the content tree.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Every markdown file found, site-root-relative, in discovery order.
    pub discovered: Vec<String>,
    /// Documents that appear in navigation, in discovery order.
    pub files: Vec<ContentFile>,
    /// Documents left out of navigation and why.
    pub excluded: Vec<(String, Exclusion)>,
}

/// Scan the configured content directory under `root`.
pub fn scan(root: &Path, config: &SiteConfig) -> Result<ScanResult, ScanError> {
    let content_dir = root.join(&config.content_dir);
    let markdown_files = discover_markdown(&content_dir)?;
    log::debug!(
        "discovered {} markdown files under {}",
        markdown_files.len(),
        content_dir.display()
    );

    let entries = markdown_files
        .par_iter()
        .map(|path| read_content_file(path, root, &config.home_file))
        .collect::<Result<Vec<_>, _>>()?;

    let mut result = ScanResult {
        discovered: markdown_files.iter().map(|p| relative_path(p, root)).collect(),
        ..ScanResult::default()
    };
    for entry in entries {
        match entry {
            Entry::Visible(file) => result.files.push(file),
            Entry::Excluded { path, reason } => {
                log::debug!("excluded from navigation ({reason:?}): {path}");
                result.excluded.push((path, reason));
            }
        }
    }
    Ok(result)
}

/// Recursively list every `.md` file below `content_dir`.
pub fn discover_markdown(content_dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !content_dir.is_dir() {
        return Err(ScanError::MissingContentDir(content_dir.to_path_buf()));
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(content_dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        if entry
            .file_name()
            .to_string_lossy()
            .ends_with(MARKDOWN_EXTENSION)
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Read one markdown document and derive its navigation metadata.
pub fn read_content_file(path: &Path, root: &Path, home_file: &str) -> Result<Entry, ScanError> {
    let content = fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let front_matter = FrontMatter::parse(&content).map_err(|source| ScanError::FrontMatter {
        path: path.to_path_buf(),
        source,
    })?;

    let rel_path = relative_path(path, root);
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    if front_matter.hidden {
        return Ok(Entry::Excluded {
            path: rel_path,
            reason: Exclusion::Hidden,
        });
    }
    if file_name == home_file {
        return Ok(Entry::Excluded {
            path: rel_path,
            reason: Exclusion::Home,
        });
    }

    let folder = path
        .parent()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let category = naming::parse_category_dir(&folder);

    let stem = file_name
        .strip_suffix(MARKDOWN_EXTENSION)
        .unwrap_or(&*file_name);

    Ok(Entry::Visible(ContentFile {
        title: naming::title_from_stem(stem),
        category: category.label,
        order: category.order,
        weight: front_matter.weight,
        path: rel_path,
    }))
}

/// `path` relative to `root`, joined with `/` regardless of platform.
fn relative_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
