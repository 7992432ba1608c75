//! XML sitemap generation.
//!
//! The published site has a single HTML page; every document is addressed by
//! a URL fragment. Each discovered markdown file therefore becomes one
//! `<url>` whose `<loc>` is the base URL plus `#` plus the file's path with
//! `.md` removed:
//!
//! ```text
//! articles/10_guides/getting started.md
//!   → https://example.com/#articles/10_guides/getting%20started
//! ```
//!
//! Entries are written in discovery order and include documents that are
//! hidden from navigation, as well as the home document.

use chrono::{Local, NaiveDate};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fs;
use std::io;
use std::path::Path;

/// Characters `encodeURIComponent` leaves unescaped, besides alphanumerics.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Percent-encode a single URL path segment.
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, COMPONENT).to_string()
}

/// Fragment URL for a site-root-relative markdown path.
pub fn sitemap_url(base_url: &str, rel_path: &str) -> String {
    let normalized = rel_path.replace('\\', "/");
    let stem = normalized.strip_suffix(".md").unwrap_or(&normalized);
    let encoded = stem
        .split('/')
        .map(encode_segment)
        .collect::<Vec<_>>()
        .join("/");
    format!("{base_url}#{encoded}")
}

/// Today's date as used for `<lastmod>`.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Render the sitemap document.
pub fn render_sitemap<S: AsRef<str>>(
    base_url: &str,
    lastmod: NaiveDate,
    changefreq: &str,
    files: &[S],
) -> String {
    let date = lastmod.format("%Y-%m-%d").to_string();
    let items = files
        .iter()
        .map(|file| {
            let loc = escape_xml(&sitemap_url(base_url, file.as_ref()));
            format!(
                "  <url>\n    <loc>{loc}</loc>\n    <lastmod>{date}</lastmod>\n    <changefreq>{changefreq}</changefreq>\n  </url>"
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"{SITEMAP_NAMESPACE}\">\n{items}\n</urlset>"
    )
}

/// Write the rendered sitemap, creating parent directories.
pub fn write_sitemap(xml: &str, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, xml)
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
