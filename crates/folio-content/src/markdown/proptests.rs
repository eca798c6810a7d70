//! Property-based tests for the content parsers.

#![allow(clippy::unwrap_used)]

use super::{get_section, parse_links, split_frontmatter};
use proptest::prelude::*;

/// Lines that look like content: headings, links, prose, and blanks.
fn content_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z ]{1,12}".prop_map(|t| format!("## {t}")),
        ("[A-Za-z]{1,8}", "/[a-z]{0,8}").prop_map(|(l, t)| format!("- [{l}]({t})")),
        ("[A-Za-z]{1,8}", "[a-z]{1,6}").prop_map(|(l, a)| format!("- [{l}](/x){{{a}}}")),
        "[A-Za-z:,. -]{0,20}",
        Just(String::new()),
    ]
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(content_line(), 0..20).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn test_parsing_is_idempotent(doc in document()) {
        let first = split_frontmatter(&doc);
        let second = split_frontmatter(&doc);
        prop_assert_eq!(&first, &second);

        let heading = "Connect";
        let links_a = parse_links(get_section(first.body(), heading));
        let links_b = parse_links(get_section(second.body(), heading));
        prop_assert_eq!(links_a, links_b);
    }

    #[test]
    fn test_no_opening_delimiter_is_identity(doc in "\\PC*") {
        prop_assume!(!doc.starts_with("---"));
        let split = split_frontmatter(&doc);
        prop_assert_eq!(split.body(), doc.as_str());
        prop_assert!(split.metadata().is_empty());
    }

    #[test]
    fn test_title_and_description_round_trip(
        title in "[A-Za-z0-9][A-Za-z0-9 ]{0,20}[A-Za-z0-9]",
        description in "[A-Za-z0-9][A-Za-z0-9 ,.]{0,30}[A-Za-z0-9.]",
        body in document(),
    ) {
        let doc = format!("---\ntitle: {title}\ndescription: {description}\n---\n{body}");
        let split = split_frontmatter(&doc);
        let entries: Vec<_> = split.metadata().iter().collect();
        prop_assert_eq!(entries, vec![("title", title.as_str()), ("description", description.as_str())]);
        prop_assert_eq!(split.body(), body.as_str());
    }

    #[test]
    fn test_section_isolation(
        a_text in "[a-z ]{0,30}",
        b_marker in "[A-Z]{6,10}",
    ) {
        let body = format!("## A\n{a_text}\n## B\n{b_marker}\n");
        let section = get_section(&body, "A");
        prop_assert!(!section.contains(&b_marker));
        prop_assert_eq!(section, a_text.trim());
    }

    #[test]
    fn test_case_insensitive_lookup(heading in "[A-Za-z]{1,10}", text in "[a-z]{1,10}") {
        let body = format!("## {heading}\n{text}\n");
        prop_assert_eq!(get_section(&body, &heading.to_lowercase()), text.as_str());
        prop_assert_eq!(get_section(&body, &heading.to_uppercase()), text.as_str());
    }

    #[test]
    fn test_malformed_lines_never_break_valid_ones(
        labels in prop::collection::vec("[A-Za-z]{1,8}", 0..8),
        noise in "[a-z ]{0,20}",
    ) {
        let section = labels
            .iter()
            .map(|l| format!("- [{l}](/{l})\n- {noise}"))
            .collect::<Vec<_>>()
            .join("\n");
        let links = parse_links(&section);
        let parsed: Vec<_> = links.iter().map(|l| l.label.clone()).collect();
        prop_assert_eq!(parsed, labels);
    }
}
