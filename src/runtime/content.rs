//! Content rendering, free of I/O.
//!
//! Given the requested path and the fetched markdown, produce the markup for
//! the content area: a heading derived from the path followed by the rendered
//! body. Front-matter is dropped before rendering.

use crate::front_matter::strip_front_matter;
use crate::naming::display_title;
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Options, Parser, html as md_html};

/// Render markdown to HTML with the extensions a docs page expects.
pub fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

/// Markup for a successfully fetched document.
pub fn render_content(path: &str, markdown: &str) -> Markup {
    let body = markdown_to_html(strip_front_matter(markdown));
    html! {
        h1 { (display_title(path)) }
        (PreEscaped(body))
    }
}

/// Markup shown in place of a document that could not be loaded.
pub fn render_error(message: &str) -> Markup {
    html! {
        h1 { "Error" }
        p { "Could not load content: " (message) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_from_path_then_body() {
        let html = render_content("articles/guides/setup", "Install it.\n").into_string();
        assert_eq!(html, "<h1>Setup</h1><p>Install it.</p>\n");
    }

    #[test]
    fn front_matter_is_stripped() {
        let html = render_content(
            "articles/guides/setup",
            "---\nweight: 3\n---\n## Steps\n",
        )
        .into_string();
        assert!(html.starts_with("<h1>Setup</h1><h2>Steps</h2>"));
        assert!(!html.contains("weight"));
    }

    #[test]
    fn markdown_is_rendered() {
        let html = render_content("a/b", "This is **bold** and *italic*.").into_string();
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn tables_enabled() {
        let html = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn title_is_escaped() {
        let html = render_content("a/<b>", "").into_string();
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn error_markup() {
        let html = render_error("HTTP error! status: 404").into_string();
        assert_eq!(
            html,
            "<h1>Error</h1><p>Could not load content: HTTP error! status: 404</p>"
        );
    }
}
