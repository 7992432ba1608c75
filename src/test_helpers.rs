//! Shared test utilities for the docsite test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! write_doc(tmp.path(), "articles/10_guides/extra.md", "---\nweight: 1\n---\n");
//! let result = scan(tmp.path(), &SiteConfig::default()).unwrap();
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::scan::ContentFile;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write a document at `rel` under `root`, creating parent directories.
pub fn write_doc(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

// =========================================================================
// Builders
// =========================================================================

/// A scanned document record with path `articles/{title}.md`.
pub fn content_file(title: &str, category: &str, order: i64, weight: i64) -> ContentFile {
    ContentFile {
        title: title.to_string(),
        category: category.to_string(),
        order,
        weight: weight as f64,
        path: format!("articles/{title}.md"),
    }
}
