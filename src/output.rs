//! CLI output formatting.
//!
//! Output is **information-centric, not file-centric**. Each section and
//! article leads with its positional index and title; the source path is
//! shown as an indented `Source:` line.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Sections
//! 001 Guides (2 articles)
//!     001 Getting Started
//!         Source: articles/10_guides/getting-started.md
//!         Weight: 5
//!     002 Rest API
//!         Source: articles/10_guides/rest-api.md
//!
//! Excluded
//!     articles/home.md (home)
//!     articles/10_guides/draft-notes.md (hidden)
//! ```
//!
//! ## Build
//!
//! ```text
//! <check output>
//!
//! Wrote sidebar.json
//! Wrote sitemap.xml (4 urls)
//! Built 1 section, 2 articles
//! ```
//!
//! ## Links
//!
//! ```text
//! Cached articles/home.md
//! Failed articles/10_guides/gone.md: HTTP error! status: 404
//!
//! Cached 1 of 2 articles
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure.

use crate::front_matter::DEFAULT_WEIGHT;
use crate::generate::BuildOutput;
use crate::runtime::WarmReport;
use crate::scan::{Exclusion, ScanResult};
use crate::types::Manifest;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Singular or plural noun for a count.
fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

/// Relative display form of a written file.
fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

// ============================================================================
// Check
// ============================================================================

/// Format the navigation that a build would produce, plus what was left out.
pub fn format_scan_output(scan: &ScanResult, manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Sections".to_string()];

    for (i, section) in manifest.sections.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            section.title,
            plural(section.items.len(), "article", "articles")
        ));
        for (j, item) in section.items.iter().enumerate() {
            lines.push(format!("{}{} {}", indent(1), format_index(j + 1), item.title));
            lines.push(format!("{}Source: {}", indent(2), item.path));
            if item.weight != DEFAULT_WEIGHT {
                lines.push(format!("{}Weight: {}", indent(2), item.weight));
            }
        }
    }

    if !scan.excluded.is_empty() {
        lines.push(String::new());
        lines.push("Excluded".to_string());
        for (path, reason) in &scan.excluded {
            let reason = match reason {
                Exclusion::Home => "home",
                Exclusion::Hidden => "hidden",
            };
            lines.push(format!("{}{} ({})", indent(1), path, reason));
        }
    }

    lines
}

pub fn print_scan_output(scan: &ScanResult, manifest: &Manifest) {
    for line in format_scan_output(scan, manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format a completed build: navigation, written files and a summary.
pub fn format_build_output(output: &BuildOutput, root: &Path) -> Vec<String> {
    let mut lines = format_scan_output(&output.scan, &output.manifest);
    lines.push(String::new());

    if let Some(path) = &output.manifest_path {
        lines.push(format!("Wrote {}", display_path(path, root)));
    }
    if let Some(path) = &output.sitemap_path {
        lines.push(format!(
            "Wrote {} ({})",
            display_path(path, root),
            plural(output.scan.discovered.len(), "url", "urls")
        ));
    }

    let articles: usize = output.manifest.sections.iter().map(|s| s.items.len()).sum();
    lines.push(format!(
        "Built {}, {}",
        plural(output.manifest.sections.len(), "section", "sections"),
        plural(articles, "article", "articles")
    ));
    lines
}

pub fn print_build_output(output: &BuildOutput, root: &Path) {
    for line in format_build_output(output, root) {
        println!("{}", line);
    }
}

// ============================================================================
// Links
// ============================================================================

/// Format a cache-warming pass over every published article.
pub fn format_warm_report(report: &WarmReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .cached
        .iter()
        .map(|path| format!("Cached {path}"))
        .collect();
    lines.extend(
        report
            .failed
            .iter()
            .map(|(path, reason)| format!("Failed {path}: {reason}")),
    );

    let total = report.cached.len() + report.failed.len();
    lines.push(String::new());
    lines.push(format!(
        "Cached {} of {}",
        report.cached.len(),
        plural(total, "article", "articles")
    ));
    lines
}

pub fn print_warm_report(report: &WarmReport) {
    for line in format_warm_report(report) {
        println!("{}", line);
    }
}
