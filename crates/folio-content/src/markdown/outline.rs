//! Page title and heading outline.
//!
//! The page renderer gives every heading an anchor id derived from its text,
//! and takes the page title from the first level-1 heading. This module
//! computes both from markdown using `pulldown-cmark`, so the ids can be
//! known without rendering anything.
//!
//! Front-matter is stripped before parsing; otherwise a closing `---` would
//! turn the last metadata line into a setext heading.
//!
//! # Example
//!
//! ```rust
//! use folio_content::markdown::{extract_title, heading_outline};
//!
//! let content = "# About Me\n\n## Work History\n\nText.";
//!
//! assert_eq!(extract_title(content), Some("About Me".to_string()));
//!
//! let outline = heading_outline(content);
//! assert_eq!(outline[1].level, 2);
//! assert_eq!(outline[1].slug, "work-history");
//! ```

use folio_core::slugify;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use serde::Serialize;

use super::frontmatter::strip_frontmatter;

/// One heading of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// 1 for `#`, 2 for `##`, and so on.
    pub level: u8,
    /// Visible text with inline formatting removed.
    pub text: String,
    /// Anchor id for the heading.
    pub slug: String,
}

/// Extract the page title: the text of the first level-1 heading.
///
/// Inline formatting (bold, italic, code, links) is stripped.
///
/// # Example
///
/// ```rust
/// use folio_content::markdown::extract_title;
///
/// let content = "Intro text\n\n## Not This\n\n# The **Real** Title";
/// assert_eq!(extract_title(content), Some("The Real Title".to_string()));
/// assert_eq!(extract_title("no headings"), None);
/// ```
pub fn extract_title(content: &str) -> Option<String> {
    headings(content)
        .into_iter()
        .find(|(level, _)| *level == HeadingLevel::H1)
        .map(|(_, text)| text)
}

/// List every heading in document order, with its anchor slug.
pub fn heading_outline(content: &str) -> Vec<Heading> {
    headings(content)
        .into_iter()
        .map(|(level, text)| Heading {
            level: level as u8,
            slug: slugify(&text),
            text,
        })
        .collect()
}

/// Collect `(level, text)` for every non-empty heading.
fn headings(content: &str) -> Vec<(HeadingLevel, String)> {
    let parser = Parser::new(strip_frontmatter(content));
    let mut found = Vec::new();
    let mut current: Option<(HeadingLevel, String)> = None;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((level, String::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = current.take() {
                    let text = text.trim();
                    if !text.is_empty() {
                        found.push((level, text.to_string()));
                    }
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, heading_text)) = current.as_mut() {
                    heading_text.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, heading_text)) = current.as_mut() {
                    heading_text.push(' ');
                }
            }
            _ => {}
        }
    }

    found
}

// ============================================================================
// Tests
// ============================================================================
