//! Icon lookup for social links.
//!
//! Social links carry an icon key (from `{icon=...}` or the lower-cased
//! label). The renderer turns that key into an asset through a
//! [`ResourceLookup`]; the parser only ever supplies the key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::footer::SocialLink;

/// Icons shipped with the site.
const BUILTIN_ICONS: &[&str] = &["email", "github", "linkedin", "stackoverflow", "youtube"];

/// Key → resource mapping consulted by the assembly layer.
pub trait ResourceLookup {
    /// Find the resource for `key`.
    fn lookup(&self, key: &str) -> Option<&str>;
}

/// Icon name → asset path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRegistry(BTreeMap<String, String>);

impl Default for IconRegistry {
    fn default() -> Self {
        BUILTIN_ICONS
            .iter()
            .map(|name| (*name, format!("assets/{name}.svg")))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for IconRegistry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl ResourceLookup for IconRegistry {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl IconRegistry {
    /// Create an empty registry.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Register or replace an icon.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, name: K, asset: V) {
        self.0.insert(name.into(), asset.into());
    }

    /// Number of registered icons.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no icons are registered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Asset for a social link's icon key.
    pub fn resolve(&self, link: &SocialLink) -> Option<&str> {
        self.lookup(&link.icon)
    }

    /// Links whose icon key has no registered asset.
    pub fn unresolved<'a>(&self, links: &'a [SocialLink]) -> Vec<&'a SocialLink> {
        links
            .iter()
            .filter(|link| {
                let missing = self.resolve(link).is_none();
                if missing {
                    log::warn!("No icon registered for '{}' ({})", link.icon, link.name);
                }
                missing
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn social(name: &str, icon: &str) -> SocialLink {
        SocialLink {
            name: name.to_string(),
            url: format!("https://{icon}.example"),
            icon: icon.to_string(),
        }
    }

    #[test]
    fn test_builtin_icons() {
        let registry = IconRegistry::default();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.lookup("github"), Some("assets/github.svg"));
        assert_eq!(registry.lookup("stackoverflow"), Some("assets/stackoverflow.svg"));
        assert_eq!(registry.lookup("myspace"), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(IconRegistry::default().lookup("GitHub"), None);
    }

    #[test]
    fn test_resolve_social_link() {
        let registry = IconRegistry::default();
        assert_eq!(
            registry.resolve(&social("Email", "email")),
            Some("assets/email.svg")
        );
    }

    #[test]
    fn test_unresolved_links() {
        let registry = IconRegistry::default();
        let links = vec![social("GitHub", "github"), social("Mastodon", "mastodon")];
        let missing = registry.unresolved(&links);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].name, "Mastodon");
    }

    #[test]
    fn test_custom_registry() {
        let mut registry = IconRegistry::empty();
        assert!(registry.is_empty());
        registry.insert("mastodon", "/icons/mastodon.svg");
        assert_eq!(registry.lookup("mastodon"), Some("/icons/mastodon.svg"));

        let collected: IconRegistry = [("a", "a.svg")].into_iter().collect();
        assert_eq!(collected.len(), 1);
    }

    #[test]
    fn test_lookup_through_trait_object() {
        let registry = IconRegistry::default();
        let lookup: &dyn ResourceLookup = &registry;
        assert_eq!(lookup.lookup("youtube"), Some("assets/youtube.svg"));
    }
}
