//! Named section extraction.
//!
//! A section is everything under a second-level heading up to the next
//! second-level heading:
//!
//! ```markdown
//! ## Quick Links
//! - [Home](/)
//!
//! ### Deeper headings stay inside the section
//!
//! ## Connect
//! - [GitHub](https://github.com/x){icon=github}
//! ```
//!
//! Lookups are by heading text, case-insensitively and exactly. Missing
//! sections come back as an empty string, which downstream parsers treat as
//! "nothing here".

use std::sync::LazyLock;

use regex::Regex;

/// A `## Heading` line; group 1 is the visible text with trailing blanks removed.
static SECTION_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^##[ \t]+(.*?)[ \t]*\r?$").expect("Invalid section heading regex")
});

/// Get the content under a second-level heading.
///
/// The first heading whose text equals `heading` (ignoring case) wins. The
/// content runs from the line after it to the next second-level heading, or
/// to the end of `body`, and is returned trimmed.
///
/// # Returns
///
/// A slice of `body`, or `""` if the heading is absent or has no content.
///
/// # Example
///
/// ```rust
/// use folio_content::markdown::get_section;
///
/// let body = "## Intro\n\nThis is the intro.\n\n## Details\n\nMore details.\n";
///
/// assert_eq!(get_section(body, "intro"), "This is the intro.");
/// assert_eq!(get_section(body, "Missing"), "");
/// ```
pub fn get_section<'a>(body: &'a str, heading: &str) -> &'a str {
    let wanted = heading.trim().to_lowercase();

    let Some(start) = SECTION_HEADING
        .captures_iter(body)
        .find(|caps| caps[1].trim().to_lowercase() == wanted)
        .and_then(|caps| caps.get(0))
        .map(|m| m.end())
    else {
        log::debug!("Section '{heading}' not found");
        return "";
    };

    let end = SECTION_HEADING
        .find_at(body, start)
        .map_or(body.len(), |m| m.start());

    body[start..end].trim()
}

/// List the visible text of every second-level heading, in document order.
///
/// # Example
///
/// ```rust
/// use folio_content::markdown::section_headings;
///
/// let body = "# Title\n## Quick Links\n### Sub\n## Connect\n";
/// assert_eq!(section_headings(body), vec!["Quick Links", "Connect"]);
/// ```
pub fn section_headings(body: &str) -> Vec<&str> {
    SECTION_HEADING
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
