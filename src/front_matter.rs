//! Front-matter parsing.
//!
//! A document may open with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! weight: 5
//! hidden: false
//! ---
//! # Body starts here
//! ```
//!
//! Only two keys matter to the site: `weight` orders an item within its
//! section and `hidden` removes it from navigation. Everything else in the
//! block is ignored.
//!
//! The builder and the runtime read front-matter differently. The builder
//! parses the block line by line with [`FrontMatter::parse`]; the runtime only
//! needs to drop it before rendering and uses the looser
//! [`strip_front_matter`] pattern.

use regex::Regex;
use serde_yaml::Value;
use std::sync::LazyLock;
use thiserror::Error;

/// Weight assigned when front-matter has no numeric `weight`.
pub const DEFAULT_WEIGHT: f64 = 999.0;

const DELIMITER: &str = "---";

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("invalid YAML front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Metadata recognized in a document's front-matter block.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    pub hidden: bool,
    pub weight: f64,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            hidden: false,
            weight: DEFAULT_WEIGHT,
        }
    }
}

impl FrontMatter {
    /// Parse the front-matter block at the top of `text`, if any.
    ///
    /// Documents without a block (or with an unterminated one) get defaults.
    /// A block that is present but not valid YAML is an error.
    pub fn parse(text: &str) -> Result<Self, FrontMatterError> {
        let Some(block) = split_block(text) else {
            return Ok(Self::default());
        };
        if block.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value = serde_yaml::from_str(block)?;
        Ok(Self::from_value(&value))
    }

    fn from_value(value: &Value) -> Self {
        let hidden = value.get("hidden").is_some_and(is_truthy);
        let weight = value
            .get("weight")
            .and_then(Value::as_f64)
            .unwrap_or(DEFAULT_WEIGHT);
        Self { hidden, weight }
    }
}

/// Returns the YAML between the opening and closing `---` lines.
fn split_block(text: &str) -> Option<&str> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != DELIMITER {
        return None;
    }
    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            return Some(&text[start..offset]);
        }
        offset += line.len();
    }
    None
}

/// Truthiness as a scripting language would judge a loosely-typed flag.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(_) | Value::Mapping(_) => true,
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

static LEADING_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A---[\s\S]+?---\n").expect("front-matter pattern is valid"));

/// Remove a leading front-matter block before rendering.
///
/// Matches the first `---` … `---\n` span at the very start of the text.
/// Text that does not start with `---` is returned unchanged.
pub fn strip_front_matter(text: &str) -> &str {
    match LEADING_BLOCK.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_front_matter_gives_defaults() {
        let fm = FrontMatter::parse("# Title\n\nBody").unwrap();
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(fm.weight, 999.0);
        assert!(!fm.hidden);
    }

    #[test]
    fn weight_and_hidden_parsed() {
        let fm = FrontMatter::parse("---\nweight: 5\nhidden: true\n---\n# Body\n").unwrap();
        assert_eq!(fm.weight, 5.0);
        assert!(fm.hidden);
    }

    #[test]
    fn fractional_weights_kept() {
        let fm = FrontMatter::parse("---\nweight: 1.0\n---\n").unwrap();
        assert_eq!(fm.weight, 1.0);
        let fm = FrontMatter::parse("---\nweight: 2.5\n---\n").unwrap();
        assert_eq!(fm.weight, 2.5);
        let fm = FrontMatter::parse("---\nweight: -3\n---\n").unwrap();
        assert_eq!(fm.weight, -3.0);
    }

    #[test]
    fn quoted_number_is_not_a_weight() {
        let fm = FrontMatter::parse("---\nweight: \"5\"\n---\n").unwrap();
        assert_eq!(fm.weight, DEFAULT_WEIGHT);
    }

    #[test]
    fn non_numeric_weight_defaults() {
        let fm = FrontMatter::parse("---\nweight: heavy\n---\n").unwrap();
        assert_eq!(fm.weight, DEFAULT_WEIGHT);
    }

    #[test]
    fn unknown_keys_ignored() {
        let fm = FrontMatter::parse("---\ntitle: Hello\nauthor: me\nweight: 2\n---\n").unwrap();
        assert_eq!(fm.weight, 2.0);
        assert!(!fm.hidden);
    }

    #[test]
    fn hidden_truthiness() {
        let hidden = |yaml: &str| {
            FrontMatter::parse(&format!("---\nhidden: {yaml}\n---\n"))
                .unwrap()
                .hidden
        };
        assert!(hidden("true"));
        assert!(!hidden("false"));
        assert!(hidden("1"));
        assert!(!hidden("0"));
        assert!(hidden("yes"));
        assert!(!hidden("\"\""));
        assert!(!hidden("null"));
    }

    #[test]
    fn empty_block_gives_defaults() {
        let fm = FrontMatter::parse("---\n---\nBody").unwrap();
        assert_eq!(fm, FrontMatter::default());
    }

    #[test]
    fn unterminated_block_is_not_front_matter() {
        let fm = FrontMatter::parse("---\nweight: 1\nno closing fence").unwrap();
        assert_eq!(fm, FrontMatter::default());
    }

    #[test]
    fn crlf_fences_recognized() {
        let fm = FrontMatter::parse("---\r\nweight: 7\r\n---\r\nBody").unwrap();
        assert_eq!(fm.weight, 7.0);
    }

    #[test]
    fn malformed_yaml_is_error() {
        let result = FrontMatter::parse("---\nweight: [1, 2\n---\n");
        assert!(matches!(result, Err(FrontMatterError::Yaml(_))));
    }

    #[test]
    fn strip_removes_leading_block() {
        let text = "---\nweight: 1\n---\n# Heading\n";
        assert_eq!(strip_front_matter(text), "# Heading\n");
    }

    #[test]
    fn strip_leaves_plain_documents() {
        let text = "# Heading\n\n---\n\nafter a rule\n";
        assert_eq!(strip_front_matter(text), text);
    }

    #[test]
    fn strip_is_lazy_to_first_closing_fence() {
        let text = "---\na: 1\n---\nbody\n---\nmore\n";
        assert_eq!(strip_front_matter(text), "body\n---\nmore\n");
    }
}
