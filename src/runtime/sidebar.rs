//! Sidebar markup from the navigation manifest.

use crate::runtime::route::history_path;
use crate::types::{Manifest, NavEntry};
use maud::{Markup, html};

/// Renders every section header followed by its links, lightest weight first.
pub fn render_sidebar(manifest: &Manifest) -> Markup {
    html! {
        @for section in &manifest.sections {
            h2 style="margin-top: 1rem" { (section.title) }
            @for item in sorted_by_weight(&section.items) {
                a href={ "#" (history_path(&item.path)) } data-path=(item.path) { (item.title) }
            }
        }
    }
}

/// The fixed link back to the landing document.
pub fn render_home_link(home_path: &str) -> Markup {
    html! {
        a id="home-link" href={ "#" (history_path(home_path)) } { "Home" }
    }
}

fn sorted_by_weight(items: &[NavEntry]) -> Vec<&NavEntry> {
    let mut sorted: Vec<&NavEntry> = items.iter().collect();
    sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));
    sorted
}
