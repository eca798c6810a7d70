//! Heading slug utilities.
//!
//! Slugs are the anchor ids the page renderer attaches to headings, so a
//! link like `/about#work-history` keeps pointing at the same heading for
//! as long as the heading text does not change.

use std::sync::LazyLock;

use regex::Regex;

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("Invalid slug character regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));
static HYPHEN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("Invalid hyphen run regex"));

/// Turn heading text into an anchor slug.
///
/// Performs the following transformations:
/// 1. Trims leading/trailing whitespace
/// 2. Converts to lowercase
/// 3. Drops anything that is not a word character, whitespace, or `-`
/// 4. Replaces whitespace runs with a single hyphen
/// 5. Collapses repeated hyphens
///
/// # Examples
///
/// ```
/// use folio_core::util::ids::slugify;
///
/// assert_eq!(slugify("Work History"), "work-history");
/// assert_eq!(slugify("CI/CD Pipelines"), "cicd-pipelines");
/// assert_eq!(slugify("Q&A -- Notes"), "qa-notes");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let cleaned = NON_SLUG_CHARS.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUN.replace_all(&cleaned, "-");
    HYPHEN_RUN.replace_all(&hyphenated, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_simple() {
        assert_eq!(slugify("About"), "about");
    }

    #[test]
    fn test_slugify_spaces() {
        assert_eq!(slugify("Quick Links"), "quick-links");
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("AWS (Professional)"), "aws-professional");
    }

    #[test]
    fn test_slugify_collapses_hyphens() {
        assert_eq!(slugify("a - b"), "a-b");
        assert_eq!(slugify("a---b"), "a-b");
    }

    #[test]
    fn test_slugify_keeps_underscores() {
        assert_eq!(slugify("snake_case"), "snake_case");
    }

    #[test]
    fn test_slugify_surrounding_whitespace() {
        assert_eq!(slugify("  Padded Title  "), "padded-title");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_unicode_letters() {
        assert_eq!(slugify("Über Uns"), "über-uns");
    }
}
