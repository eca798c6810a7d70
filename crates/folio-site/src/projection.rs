//! Declarative projection of link records into output shapes.
//!
//! The parser produces generic [`LinkRecord`]s. Each output type the site
//! renders (quick links, social links, anything added later) is described by
//! a [`Projection`]: a short table of rules, one per output field, saying
//! where the value comes from and what to use when it is missing.
//!
//! | Output field | Source         | Kind | Default             |
//! |--------------|----------------|------|---------------------|
//! | `name`       | label          | text | none                |
//! | `url`        | target         | text | none                |
//! | `icon`       | `icon` attr    | text | lower-cased label   |
//!
//! Rules are plain data and deserialize from config, so a new collection
//! needs a table in `folio.toml` rather than new code.

use folio_content::LinkRecord;
use folio_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Where a field's value comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    /// The link label.
    Label,
    /// The link target.
    Target,
    /// A named attribute from the `{...}` block.
    Attr(String),
}

impl Source {
    /// Shorthand for [`Source::Attr`].
    pub fn attr<S: Into<String>>(key: S) -> Self {
        Self::Attr(key.into())
    }
}

/// How the source is turned into a JSON value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// The source text as a string. A bare flag attribute counts as absent.
    #[default]
    Text,
    /// A boolean: `true` only when the attribute is a bare flag.
    ///
    /// Always emitted, so a missing attribute yields `false`.
    Flag,
}

/// Value used when a text source is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fallback {
    /// Leave the field out of the output object.
    #[default]
    Omit,
    /// Use this literal string.
    Literal(String),
    /// Use the link label, lower-cased.
    LowercaseLabel,
}

/// One row of a projection table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Output field name.
    pub field: String,
    /// Where the value comes from.
    pub from: Source,
    /// Text or flag.
    #[serde(default)]
    pub kind: FieldKind,
    /// What to do when the source is absent.
    #[serde(default)]
    pub default: Fallback,
}

impl FieldRule {
    /// A text field with no default.
    pub fn text<S: Into<String>>(field: S, from: Source) -> Self {
        Self {
            field: field.into(),
            from,
            kind: FieldKind::Text,
            default: Fallback::Omit,
        }
    }

    /// A boolean field set by a bare attribute flag.
    pub fn flag<S: Into<String>, K: Into<String>>(field: S, attr: K) -> Self {
        Self {
            field: field.into(),
            from: Source::attr(attr),
            kind: FieldKind::Flag,
            default: Fallback::Omit,
        }
    }

    /// Set the fallback used when the source is absent.
    pub fn or(mut self, default: Fallback) -> Self {
        self.default = default;
        self
    }

    fn value(&self, link: &LinkRecord) -> Option<Value> {
        match self.kind {
            FieldKind::Flag => Some(Value::Bool(match &self.from {
                Source::Attr(key) => link.flag(key),
                Source::Label | Source::Target => true,
            })),
            FieldKind::Text => {
                let found = match &self.from {
                    Source::Label => Some(link.label.as_str()),
                    Source::Target => Some(link.target.as_str()),
                    Source::Attr(key) => link.text(key),
                };
                match (found, &self.default) {
                    (Some(text), _) => Some(Value::String(text.to_string())),
                    (None, Fallback::Omit) => None,
                    (None, Fallback::Literal(text)) => Some(Value::String(text.clone())),
                    (None, Fallback::LowercaseLabel) => {
                        Some(Value::String(link.label.to_lowercase()))
                    }
                }
            }
        }
    }
}

/// A table of field rules describing one output shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Projection {
    rules: Vec<FieldRule>,
}

impl Projection {
    /// Build a projection from its rules.
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    /// The rules, in output order.
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Project one link into a JSON object.
    pub fn apply(&self, link: &LinkRecord) -> Map<String, Value> {
        self.rules
            .iter()
            .filter_map(|rule| rule.value(link).map(|v| (rule.field.clone(), v)))
            .collect()
    }

    /// Project links and deserialize each object into `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio_content::parse_links;
    /// use folio_site::footer::SocialLink;
    /// use folio_site::projection::social_link_projection;
    ///
    /// let links = parse_links("- [GitHub](https://github.com/x)");
    /// let social: Vec<SocialLink> = social_link_projection().project(&links).unwrap();
    /// assert_eq!(social[0].icon, "github");
    /// ```
    pub fn project<T: DeserializeOwned>(&self, links: &[LinkRecord]) -> Result<Vec<T>> {
        links
            .iter()
            .map(|link| serde_json::from_value(Value::Object(self.apply(link))).map_err(Error::from))
            .collect()
    }
}

/// Quick links: `label`, `url`, and an `external` flag.
pub fn quick_link_projection() -> Projection {
    Projection::new(vec![
        FieldRule::text("label", Source::Label),
        FieldRule::text("url", Source::Target),
        FieldRule::flag("external", "external"),
    ])
}

/// Social links: `name`, `url`, and an `icon` key defaulting to the
/// lower-cased label.
pub fn social_link_projection() -> Projection {
    Projection::new(vec![
        FieldRule::text("name", Source::Label),
        FieldRule::text("url", Source::Target),
        FieldRule::text("icon", Source::attr("icon")).or(Fallback::LowercaseLabel),
    ])
}
