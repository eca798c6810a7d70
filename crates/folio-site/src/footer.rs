//! Footer data assembly.
//!
//! The footer is edited as a single content document:
//!
//! ```markdown
//! ---
//! title: Portfolio
//! description: Your description here
//! sourceCodeLabel: View Source on GitHub
//! sourceCodeUrl: https://github.com/...
//! ---
//!
//! ## Quick Links
//! - [Label](url)
//! - [Label](url){external}     <- opens in new tab
//!
//! ## Connect
//! - [Label](url){icon=name}    <- icon key for the asset lookup
//! ```
//!
//! [`parse_footer`] turns it into [`FooterData`], which serializes in the
//! camelCase shape the page components consume.

use folio_content::{get_section, parse_links, split_frontmatter};
use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::config::FooterConfig;
use crate::projection::{quick_link_projection, social_link_projection};

/// Metadata key for the footer title.
pub const TITLE_KEY: &str = "title";
/// Metadata key for the footer description.
pub const DESCRIPTION_KEY: &str = "description";
/// Metadata key for the source code link label.
pub const SOURCE_CODE_LABEL_KEY: &str = "sourceCodeLabel";
/// Metadata key for the source code link URL.
pub const SOURCE_CODE_URL_KEY: &str = "sourceCodeUrl";

/// A navigation link in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    /// Link text.
    pub label: String,
    /// Link destination.
    pub url: String,
    /// Open in a new tab.
    #[serde(default)]
    pub external: bool,
}

/// A social profile link, rendered as an icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Accessible name of the profile.
    pub name: String,
    /// Profile URL.
    pub url: String,
    /// Icon key for the asset lookup.
    pub icon: String,
}

/// The "view source" link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCodeLink {
    /// Link text.
    pub label: String,
    /// Repository URL.
    pub url: String,
}

/// Everything the footer renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterData {
    /// Footer heading.
    pub title: String,
    /// Short blurb under the heading.
    pub description: String,
    /// Links under the quick-links heading.
    pub quick_links: Vec<FooterLink>,
    /// Links under the social heading.
    pub social_links: Vec<SocialLink>,
    /// Source code link.
    pub source_code: SourceCodeLink,
}

/// Parse a footer document.
///
/// Missing metadata keys take the defaults from `config`; missing sections
/// yield empty link lists. The only error is a key listed in
/// [`FooterConfig::required`] that is still empty after defaults.
///
/// # Example
///
/// ```rust
/// use folio_site::config::FooterConfig;
/// use folio_site::footer::parse_footer;
///
/// let doc = "---\ndescription: Hi\n---\n## Quick Links\n- [Home](/)\n";
/// let footer = parse_footer(doc, &FooterConfig::default()).unwrap();
///
/// assert_eq!(footer.title, "Portfolio");
/// assert_eq!(footer.description, "Hi");
/// assert_eq!(footer.quick_links[0].url, "/");
/// assert!(footer.social_links.is_empty());
/// ```
pub fn parse_footer(document: &str, config: &FooterConfig) -> Result<FooterData> {
    let split = split_frontmatter(document);
    let meta = split.metadata();

    for key in &config.required {
        if config.resolve(meta, key).is_empty() {
            return Err(Error::missing_field(key.as_str()));
        }
    }

    let quick_links = quick_link_projection()
        .project(&parse_links(get_section(split.body(), &config.quick_links_heading)))?;
    let social_links = social_link_projection()
        .project(&parse_links(get_section(split.body(), &config.social_heading)))?;

    log::debug!(
        "Parsed footer: {} quick links, {} social links",
        quick_links.len(),
        social_links.len()
    );

    Ok(FooterData {
        title: config.resolve(meta, TITLE_KEY).to_string(),
        description: config.resolve(meta, DESCRIPTION_KEY).to_string(),
        quick_links,
        social_links,
        source_code: SourceCodeLink {
            label: config.resolve(meta, SOURCE_CODE_LABEL_KEY).to_string(),
            url: config.resolve(meta, SOURCE_CODE_URL_KEY).to_string(),
        },
    })
}
