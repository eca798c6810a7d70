//! Config-driven link collections.
//!
//! Besides the footer, a content document can feed any number of named
//! collections. Each names a `##` heading and a projection table; the result
//! is a list of JSON objects per collection, ready for a template.

use std::collections::BTreeMap;

use folio_content::{get_section, parse_links, split_frontmatter};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::projection::Projection;

/// One configured collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// The `##` heading whose links feed the collection.
    pub heading: String,
    /// How each link becomes an output object.
    pub fields: Projection,
}

/// Projected objects, keyed by collection name.
pub type Collections = BTreeMap<String, Vec<Map<String, Value>>>;

/// Assemble every configured collection from a document.
///
/// Collections whose heading is missing come back empty.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use folio_site::collections::{CollectionConfig, assemble_collections};
/// use folio_site::projection::{FieldRule, Projection, Source};
///
/// let mut configs = BTreeMap::new();
/// configs.insert(
///     "projects".to_string(),
///     CollectionConfig {
///         heading: "Projects".to_string(),
///         fields: Projection::new(vec![FieldRule::text("name", Source::Label)]),
///     },
/// );
///
/// let doc = "## Projects\n- [Folio](https://github.com/x/folio)\n";
/// let collections = assemble_collections(doc, &configs);
/// assert_eq!(collections["projects"][0]["name"], "Folio");
/// ```
pub fn assemble_collections(
    document: &str,
    configs: &BTreeMap<String, CollectionConfig>,
) -> Collections {
    let body = split_frontmatter(document).body();
    configs
        .iter()
        .map(|(name, config)| {
            let links = parse_links(get_section(body, &config.heading));
            let objects: Vec<_> = links.iter().map(|link| config.fields.apply(link)).collect();
            log::debug!("Collection '{name}': {} entries", objects.len());
            (name.clone(), objects)
        })
        .collect()
}
