//! Front-matter, section, and link-list parsing for content documents.
//!
//! This crate is the parsing core of Folio. It turns a hand-edited markdown
//! document into generic records: a metadata mapping, section text, and
//! link records with attributes. It knows nothing about footers or icons;
//! the assembly layer in `folio-site` maps these records onto the shapes the
//! pages render.
//!
//! # Modules
//!
//! - [`markdown`]: document parsing
//!   - [`markdown::frontmatter`]: front-matter splitting
//!   - [`markdown::sections`]: `##` section extraction
//!   - [`markdown::links`]: link-list parsing
//!   - [`markdown::outline`]: title and heading anchors
//!
//! # Design Philosophy
//!
//! **Lenient parsing, generic output.** Content authors edit these files by
//! hand. A typo in one list item drops that item and nothing else; a missing
//! section is simply empty.
//!
//! # Example
//!
//! ```rust
//! use folio_content::{get_section, parse_links, split_frontmatter};
//!
//! let content = "---\ntitle: Portfolio\n---\n## Quick Links\n- [Home](/)\n- [Resume](/Resume.pdf){external}\n";
//!
//! let split = split_frontmatter(content);
//! let links = parse_links(get_section(split.body(), "Quick Links"));
//!
//! assert_eq!(links.len(), 2);
//! assert!(links[1].flag("external"));
//! ```

pub mod markdown;

// Re-export commonly used types
pub use markdown::{
    AttrValue, Attributes, Frontmatter, Heading, LinkRecord, Metadata, extract_title,
    get_section, heading_outline, parse_attributes, parse_links, section_headings,
    split_frontmatter, strip_frontmatter,
};
