//! Link-list parsing.
//!
//! Sections hold list items of the form
//!
//! ```markdown
//! - [Label](target)
//! - [Label](target){flag}
//! - [Label](target){key=value,flag}
//! ```
//!
//! Each match becomes a [`LinkRecord`]. Anything that does not match is
//! skipped without complaint, so one malformed line never hides its
//! well-formed neighbours.
//!
//! Known limitations: targets cannot contain `)`, labels cannot contain `]`,
//! and attribute values cannot contain `,` or `}`.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

/// `- [label](target)` with an optional `{attrs}` suffix.
static LINK_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"- \[([^\]]+)\]\(([^)]+)\)(?:\{([^}]+)\})?").expect("Invalid link item regex")
});

/// Value of a single link attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// A bare token such as `{external}`; serializes as `true`.
    Flag,
    /// A `key=value` token; the text after the first `=`.
    Text(String),
}

impl AttrValue {
    /// The text value, or `None` for a bare flag.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Flag => None,
            Self::Text(value) => Some(value),
        }
    }

    /// Whether this is a bare flag.
    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Flag)
    }
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Flag => serializer.serialize_bool(true),
            Self::Text(value) => serializer.serialize_str(value),
        }
    }
}

/// Attributes of one link, keyed by attribute name.
pub type Attributes = BTreeMap<String, AttrValue>;

/// One parsed list-item link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    /// Text between the square brackets (never empty).
    pub label: String,
    /// Text between the parentheses (never empty).
    pub target: String,
    /// Parsed `{...}` suffix; empty when there was none.
    pub attributes: Attributes,
}

impl LinkRecord {
    /// Create a record without attributes.
    pub fn new<L: Into<String>, T: Into<String>>(label: L, target: T) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            attributes: Attributes::new(),
        }
    }

    /// Add an attribute, replacing any previous value for `key`.
    pub fn with_attr<K: Into<String>>(mut self, key: K, value: AttrValue) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// True only when `key` is present as a bare flag.
    ///
    /// `{external}` sets the flag; `{external=yes}` does not.
    pub fn flag(&self, key: &str) -> bool {
        self.attributes.get(key).is_some_and(AttrValue::is_flag)
    }

    /// The text value of `key`, if present with `=`.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(AttrValue::as_text)
    }
}

/// Parse every list-item link in `section`, in document order.
///
/// Matching is not tied to line boundaries: the pattern is searched for
/// anywhere in the text. Duplicates are kept.
///
/// # Example
///
/// ```rust
/// use folio_content::markdown::{parse_links, AttrValue};
///
/// let section = "- [GitHub](https://github.com/x){icon=github}\n- not a link\n- [Resume](/Resume.pdf){external}";
/// let links = parse_links(section);
///
/// assert_eq!(links.len(), 2);
/// assert_eq!(links[0].label, "GitHub");
/// assert_eq!(links[0].text("icon"), Some("github"));
/// assert_eq!(links[1].attributes.get("external"), Some(&AttrValue::Flag));
/// ```
pub fn parse_links(section: &str) -> Vec<LinkRecord> {
    LINK_ITEM
        .captures_iter(section)
        .map(|caps| LinkRecord {
            label: caps[1].to_string(),
            target: caps[2].to_string(),
            attributes: caps
                .get(3)
                .map(|m| parse_attributes(m.as_str()))
                .unwrap_or_default(),
        })
        .collect()
}

/// Parse the inside of a `{...}` attribute block.
///
/// Tokens are comma-separated. A token is split on its first `=`; both sides
/// are trimmed. A token without `=` becomes [`AttrValue::Flag`]. Tokens with
/// a blank key are dropped, and a repeated key keeps its last value.
///
/// # Example
///
/// ```rust
/// use folio_content::markdown::{parse_attributes, AttrValue};
///
/// let attrs = parse_attributes("external, href=/a?b=c");
/// assert_eq!(attrs.get("external"), Some(&AttrValue::Flag));
/// assert_eq!(attrs.get("href"), Some(&AttrValue::Text("/a?b=c".to_string())));
/// ```
pub fn parse_attributes(raw: &str) -> Attributes {
    let mut attributes = Attributes::new();
    for token in raw.split(',') {
        let (key, value) = match token.split_once('=') {
            Some((key, value)) => (key.trim(), AttrValue::Text(value.trim().to_string())),
            None => (token.trim(), AttrValue::Flag),
        };
        if key.is_empty() {
            continue;
        }
        attributes.insert(key.to_string(), value);
    }
    attributes
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // parse_links tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_plain_link() {
        let links = parse_links("- [Home](/)");
        assert_eq!(links, vec![LinkRecord::new("Home", "/")]);
    }

    #[test]
    fn test_parse_icon_attribute() {
        let links = parse_links("- [GitHub](https://github.com/x){icon=github}");
        assert_eq!(
            links,
            vec![
                LinkRecord::new("GitHub", "https://github.com/x")
                    .with_attr("icon", AttrValue::Text("github".to_string()))
            ]
        );
    }

    #[test]
    fn test_parse_flag_attribute() {
        let links = parse_links("- [Resume](/Resume.pdf){external}");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].attributes.len(), 1);
        assert_eq!(links[0].attributes.get("external"), Some(&AttrValue::Flag));
        assert!(links[0].flag("external"));
    }

    #[test]
    fn test_skip_malformed_lines() {
        let section = "- [First](/first)\n- not a link\n- [Second](/second)";
        let links = parse_links(section);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].label, "First");
        assert_eq!(links[1].label, "Second");
    }

    #[test]
    fn test_skip_incomplete_shapes() {
        let section = "- [No target]\n- [](/empty-label)\n- [Empty target]()\n* [Star](/star)\n[Bare](/bare)";
        assert!(parse_links(section).is_empty());
    }

    #[test]
    fn test_empty_section() {
        assert!(parse_links("").is_empty());
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        let links = parse_links("- [A](/a)\n- [B](/b)\n- [A](/a)");
        let labels: Vec<_> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "A"]);
    }

    #[test]
    fn test_run_on_matches_on_one_line() {
        let links = parse_links("- [A](/a) - [B](/b){external}");
        assert_eq!(links.len(), 2);
        assert!(links[1].flag("external"));
    }

    #[test]
    fn test_indented_items_match() {
        let links = parse_links("  - [Nested](/nested)");
        assert_eq!(links, vec![LinkRecord::new("Nested", "/nested")]);
    }

    #[test]
    fn test_attribute_block_must_follow_immediately() {
        let links = parse_links("- [A](/a) {external}");
        assert_eq!(links.len(), 1);
        assert!(links[0].attributes.is_empty());
    }

    #[test]
    fn test_target_with_parentheses_is_cut_short() {
        let links = parse_links("- [Wiki](https://en.wikipedia.org/wiki/Rust_(language))");
        assert_eq!(links[0].target, "https://en.wikipedia.org/wiki/Rust_(language");
    }

    #[test]
    fn test_mailto_target() {
        let links = parse_links("- [Email](mailto:me@example.com){icon=email}");
        assert_eq!(links[0].target, "mailto:me@example.com");
        assert_eq!(links[0].text("icon"), Some("email"));
    }

    // ------------------------------------------------------------------------
    // parse_attributes tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_attributes_mixed() {
        let attrs = parse_attributes("external, icon = github");
        assert_eq!(attrs.get("external"), Some(&AttrValue::Flag));
        assert_eq!(attrs.get("icon"), Some(&AttrValue::Text("github".to_string())));
    }

    #[test]
    fn test_attributes_value_keeps_later_equals() {
        let attrs = parse_attributes("href=https://x.io/?a=1&b=2");
        assert_eq!(attrs["href"].as_text(), Some("https://x.io/?a=1&b=2"));
    }

    #[test]
    fn test_attributes_empty_value() {
        let attrs = parse_attributes("icon=");
        assert_eq!(attrs.get("icon"), Some(&AttrValue::Text(String::new())));
    }

    #[test]
    fn test_attributes_blank_tokens_skipped() {
        let attrs = parse_attributes("a,, ,=orphan,b");
        let keys: Vec<_> = attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_attributes_repeated_key_last_wins() {
        let attrs = parse_attributes("icon=one,icon=two");
        assert_eq!(attrs["icon"].as_text(), Some("two"));
    }

    #[test]
    fn test_flag_requires_bare_token() {
        let link = LinkRecord::new("A", "/a").with_attr("external", AttrValue::Text("yes".into()));
        assert!(!link.flag("external"));
        assert_eq!(link.text("external"), Some("yes"));
        assert!(!link.flag("missing"));
    }

    // ------------------------------------------------------------------------
    // Serialization
    // ------------------------------------------------------------------------

    #[test]
    fn test_link_record_json_shape() {
        let links = parse_links("- [Resume](/Resume.pdf){external,icon=doc}");
        let json = serde_json::to_value(&links[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "label": "Resume",
                "target": "/Resume.pdf",
                "attributes": { "external": true, "icon": "doc" }
            })
        );
    }
}
