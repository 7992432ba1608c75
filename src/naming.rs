//! Centralized name parsing for the `<order>_<slug>` folder convention.
//!
//! Category folders carry a numeric order prefix separated from a hyphenated
//! slug by the first underscore. Markdown filenames are bare hyphenated slugs.
//! This module turns both into display labels.
//!
//! ## Display Titles
//!
//! Two title rules coexist:
//!
//! - [`title_case`] is used at build time for category labels and item titles.
//!   It preserves acronyms and forces `api` to `API`:
//!   `10_rest-api/` → "Rest API", `getting-started.md` → "Getting Started".
//! - [`display_title`] is used by the runtime for the content heading. It only
//!   uppercases the first letter of each hyphen-separated word:
//!   `rest-api` → "Rest Api".

/// Order assigned to folders whose prefix is missing or not an integer.
pub const DEFAULT_ORDER: i64 = 999;

/// Result of parsing a category folder name like `10_getting-started`.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryName {
    /// Parsed numeric prefix, [`DEFAULT_ORDER`] when absent or invalid.
    pub order: i64,
    /// Title-cased label built from the part after the first underscore.
    pub label: String,
}

/// Parse a category folder name following the `<order>_<slug>` convention.
///
/// - `"10_guides"` → order=10, label="Guides"
/// - `"2_rest-api"` → order=2, label="Rest API"
/// - `"x_guides"` → order=999, label="Guides"
/// - `"5_getting_started"` → order=5, label="Getting Started"
/// - `"10"` → order=10, label=""
/// - `"guides"` → order=999, label=""
///
/// Without an underscore the whole name is the prefix and the label is empty.
pub fn parse_category_dir(name: &str) -> CategoryName {
    let (prefix, rest) = name.split_once('_').unwrap_or((name, ""));
    CategoryName {
        order: prefix.trim().parse().unwrap_or(DEFAULT_ORDER),
        label: title_case(&rest.replace('_', " ")),
    }
}

/// Title for a navigation item, from a markdown filename stem.
pub fn title_from_stem(stem: &str) -> String {
    title_case(stem)
}

/// Title-case a hyphen- or space-separated string, joining words with spaces.
pub fn title_case(text: &str) -> String {
    text.split(|c: char| c == '-' || c.is_whitespace())
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    if word == word.to_uppercase() {
        return word.to_string();
    }
    if word.eq_ignore_ascii_case("api") {
        return "API".to_string();
    }
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str();
    let rest = if rest == rest.to_uppercase() {
        rest.to_string()
    } else {
        rest.to_lowercase()
    };
    format!("{}{}", first.to_uppercase(), rest)
}

/// Heading shown above rendered content, derived from the requested path.
///
/// Takes the last path segment, strips `.md`, and uppercases the first
/// character of each hyphen-separated word. The rest of each word is kept.
pub fn display_title(path: &str) -> String {
    let segment = path.rsplit('/').next().unwrap_or(path);
    let stem = segment.strip_suffix(".md").unwrap_or(segment);
    stem.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_numbered_single_word() {
        let c = parse_category_dir("10_guides");
        assert_eq!(c.order, 10);
        assert_eq!(c.label, "Guides");
    }

    #[test]
    fn category_hyphenated_slug() {
        let c = parse_category_dir("3_getting-started");
        assert_eq!(c.order, 3);
        assert_eq!(c.label, "Getting Started");
    }

    #[test]
    fn category_extra_underscores_become_spaces() {
        let c = parse_category_dir("5_getting_started");
        assert_eq!(c.order, 5);
        assert_eq!(c.label, "Getting Started");
    }

    #[test]
    fn category_invalid_prefix_defaults_order() {
        let c = parse_category_dir("intro_basics");
        assert_eq!(c.order, DEFAULT_ORDER);
        assert_eq!(c.label, "Basics");
    }

    #[test]
    fn category_without_underscore() {
        let c = parse_category_dir("reference");
        assert_eq!(c.order, DEFAULT_ORDER);
        assert_eq!(c.label, "");
    }

    #[test]
    fn bare_number_folder_is_all_prefix() {
        let c = parse_category_dir("10");
        assert_eq!(c.order, 10);
        assert_eq!(c.label, "");
    }

    #[test]
    fn trailing_underscore_gives_empty_label() {
        let c = parse_category_dir("20_");
        assert_eq!(c.order, 20);
        assert_eq!(c.label, "");
    }

    #[test]
    fn category_zero_prefix_is_kept() {
        assert_eq!(parse_category_dir("0_start").order, 0);
    }

    #[test]
    fn category_negative_prefix_parses() {
        assert_eq!(parse_category_dir("-1_pinned").order, -1);
    }

    #[test]
    fn category_api_label() {
        assert_eq!(parse_category_dir("20_rest-api").label, "Rest API");
    }

    #[test]
    fn title_case_api_any_case() {
        assert_eq!(title_case("api"), "API");
        assert_eq!(title_case("Api"), "API");
        assert_eq!(title_case("API"), "API");
    }

    #[test]
    fn title_case_preserves_acronyms() {
        assert_eq!(title_case("HTTP-caching"), "HTTP Caching");
        assert_eq!(title_case("using-CSS"), "Using CSS");
    }

    #[test]
    fn title_case_lowercases_mixed_rest() {
        assert_eq!(title_case("hELLo-wORLd"), "Hello World");
    }

    #[test]
    fn title_case_keeps_uppercase_rest() {
        assert_eq!(title_case("iOS-setup"), "IOS Setup");
    }

    #[test]
    fn title_case_is_idempotent() {
        let once = title_case("getting-started-with-api");
        assert_eq!(once, "Getting Started With API");
        assert_eq!(title_case(&once), once);
    }

    #[test]
    fn title_from_filename_stem() {
        assert_eq!(title_from_stem("getting-started"), "Getting Started");
    }

    #[test]
    fn display_title_from_fragment_path() {
        assert_eq!(display_title("articles/guides/setup"), "Setup");
        assert_eq!(display_title("articles/guides/first-steps.md"), "First Steps");
    }

    #[test]
    fn display_title_does_not_force_acronyms() {
        assert_eq!(display_title("articles/ref/rest-api"), "Rest Api");
        assert_eq!(display_title("articles/ref/using-CSS"), "Using CSS");
    }

    #[test]
    fn display_title_bare_name() {
        assert_eq!(display_title("home"), "Home");
    }
}
