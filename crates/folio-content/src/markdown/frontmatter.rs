//! Front-matter splitting for content documents.
//!
//! Front-matter is a block of flat `key: value` lines at the very start of a
//! document, delimited by `---` lines:
//!
//! ```markdown
//! ---
//! title: Portfolio
//! sourceCodeUrl: https://github.com/unacceptable/portfolio-website
//! ---
//!
//! ## Quick Links
//! - [Home](/)
//! ```
//!
//! This is not YAML. Each line is split on its first colon, so
//! values such as URLs or `Note: read this` need no quoting, and nothing in
//! the block can make the split fail.
//!
//! # Usage
//!
//! ```rust
//! use folio_content::markdown::split_frontmatter;
//!
//! let content = "---\ntitle: Test\n---\nBody";
//! let split = split_frontmatter(content);
//!
//! assert_eq!(split.metadata().get("title"), Some("Test"));
//! assert_eq!(split.body(), "Body");
//! ```

use folio_core::{Error, Result};
use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;

const DELIMITER: &str = "---";

/// Ordered `key → value` mapping parsed from a front-matter block.
///
/// Keys are unique and case-sensitive. Setting a key again replaces its
/// value but keeps the position of its first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Metadata(IndexMap<String, String>);

impl Metadata {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the lines of a front-matter block.
    ///
    /// Lines without a colon, and lines whose key is blank, contribute
    /// nothing. Later lines overwrite earlier ones with the same key.
    pub fn parse(block: &str) -> Self {
        let mut metadata = Self::new();
        for line in block.lines() {
            if let Some((key, value)) = line.split_once(':') {
                metadata.insert(key.trim(), value.trim());
            }
        }
        metadata
    }

    /// Insert a value, ignoring blank keys.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        if key.is_empty() {
            return;
        }
        self.0.insert(key, value.into());
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Look up a value, falling back to `default` when the key is absent.
    ///
    /// A key that is present with an empty value is returned as `""`.
    pub fn get_or<'s>(&'s self, key: &str, default: &'s str) -> &'s str {
        self.get(key).unwrap_or(default)
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Deserialize the mapping into a specific type.
    ///
    /// Every value is a string, so target fields should be `String` or
    /// `Option<String>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio_content::markdown::split_frontmatter;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct PageMeta {
    ///     title: String,
    ///     description: Option<String>,
    /// }
    ///
    /// let split = split_frontmatter("---\ntitle: About\n---\nBody");
    /// let meta: PageMeta = split.metadata().deserialize().unwrap();
    /// assert_eq!(meta.title, "About");
    /// assert!(meta.description.is_none());
    /// ```
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        let object: serde_json::Map<String, serde_json::Value> = self
            .0
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect();
        serde_json::from_value(serde_json::Value::Object(object))
            .map_err(|e| Error::parse(format!("Failed to deserialize front-matter: {e}")))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Self::new();
        for (key, value) in iter {
            metadata.insert(key, value);
        }
        metadata
    }
}

/// Result of splitting a document into metadata and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    metadata: Metadata,
    body: &'a str,
    had_delimiters: bool,
}

impl<'a> Frontmatter<'a> {
    fn without_frontmatter(body: &'a str) -> Self {
        Self {
            metadata: Metadata::new(),
            body,
            had_delimiters: false,
        }
    }

    fn with_block(block: &str, body: &'a str) -> Self {
        Self {
            metadata: Metadata::parse(block),
            body,
            had_delimiters: true,
        }
    }

    /// The parsed metadata (empty when the document has no front-matter).
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Everything after the closing delimiter line, or the whole document.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Whether an opening and a closing delimiter were both found.
    pub fn had_delimiters(&self) -> bool {
        self.had_delimiters
    }

    /// Split into owned metadata and the borrowed body.
    pub fn into_parts(self) -> (Metadata, &'a str) {
        (self.metadata, self.body)
    }
}

/// Split a document into its front-matter mapping and body.
///
/// # Behavior
///
/// - The first line must be exactly `---`; otherwise the whole document is
///   the body and the mapping is empty.
/// - The block ends at the next line that is exactly `---`. The body starts
///   on the line after it.
/// - An opening delimiter without a closing one is treated as no
///   front-matter at all.
///
/// A trailing `\r` on delimiter lines is tolerated. This function never
/// fails.
///
/// # Example
///
/// ```rust
/// use folio_content::markdown::split_frontmatter;
///
/// // With front-matter
/// let split = split_frontmatter("---\ntitle: Test\n---\n## Heading");
/// assert_eq!(split.metadata().get("title"), Some("Test"));
/// assert_eq!(split.body(), "## Heading");
///
/// // Without front-matter
/// let split = split_frontmatter("## Just Markdown");
/// assert!(split.metadata().is_empty());
/// assert_eq!(split.body(), "## Just Markdown");
/// ```
pub fn split_frontmatter(document: &str) -> Frontmatter<'_> {
    let Some(after_opening) = strip_opening_delimiter(document) else {
        log::debug!("Document has no front-matter");
        return Frontmatter::without_frontmatter(document);
    };

    let mut offset = 0;
    for line in after_opening.split_inclusive('\n') {
        if is_delimiter(line) {
            let block = &after_opening[..offset];
            let body = &after_opening[offset + line.len()..];
            return Frontmatter::with_block(block, body);
        }
        offset += line.len();
    }

    log::warn!("Front-matter opening delimiter found but no closing delimiter");
    Frontmatter::without_frontmatter(document)
}

/// Strip front-matter from a document, returning only the body.
///
/// # Example
///
/// ```rust
/// use folio_content::markdown::strip_frontmatter;
///
/// let body = strip_frontmatter("---\ntitle: Test\n---\n# Heading");
/// assert_eq!(body, "# Heading");
/// ```
pub fn strip_frontmatter(document: &str) -> &str {
    split_frontmatter(document).body()
}

/// Return the text after an opening delimiter line, if the document has one.
fn strip_opening_delimiter(document: &str) -> Option<&str> {
    let newline = document.find('\n')?;
    let (first_line, rest) = document.split_at(newline + 1);
    is_delimiter(first_line).then_some(rest)
}

fn is_delimiter(line: &str) -> bool {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    line == DELIMITER
}

// ============================================================================
// Tests
// ============================================================================
