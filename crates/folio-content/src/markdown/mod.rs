//! Content document parsing.
//!
//! A content document is a front-matter block followed by a markdown body
//! whose `##` sections hold lists of links:
//!
//! - [`frontmatter`]: split the `key: value` block from the body
//! - [`sections`]: pull out the text under a named `##` heading
//! - [`links`]: parse `- [label](target){attrs}` list items
//! - [`outline`]: page title and heading anchors
//!
//! All of these are total: malformed input degrades to empty results and
//! never raises an error.
//!
//! # Example
//!
//! ```rust
//! use folio_content::markdown::{get_section, parse_links, split_frontmatter};
//!
//! let content = "---\ntitle: Portfolio\n---\n## Connect\n- [GitHub](https://github.com/x){icon=github}\n";
//!
//! let split = split_frontmatter(content);
//! assert_eq!(split.metadata().get("title"), Some("Portfolio"));
//!
//! let links = parse_links(get_section(split.body(), "connect"));
//! assert_eq!(links[0].text("icon"), Some("github"));
//! ```

pub mod frontmatter;
pub mod links;
pub mod outline;
pub mod sections;

#[cfg(test)]
mod proptests;

// Re-export key types and functions
pub use frontmatter::{Frontmatter, Metadata, split_frontmatter, strip_frontmatter};
pub use links::{AttrValue, Attributes, LinkRecord, parse_attributes, parse_links};
pub use outline::{Heading, extract_title, heading_outline};
pub use sections::{get_section, section_headings};
