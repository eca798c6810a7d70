//! Site configuration.
//!
//! Configuration lives in a TOML file. Every field has a default, so an
//! empty file (or no file at all) gives the stock footer behaviour.
//!
//! ```toml
//! [footer]
//! quick_links_heading = "Quick Links"
//! social_heading = "Connect"
//! required = ["sourceCodeUrl"]
//!
//! [footer.defaults]
//! title = "Portfolio"
//! sourceCodeLabel = "View Source"
//!
//! [icons]
//! github = "assets/github.svg"
//!
//! [collections.projects]
//! heading = "Projects"
//! fields = [
//!     { field = "name", from = "label" },
//!     { field = "url", from = "target" },
//! ]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use folio_content::Metadata;
use folio_core::{ConfigResolver, Error, Result};
use serde::{Deserialize, Serialize};

use crate::collections::CollectionConfig;
use crate::footer::{DESCRIPTION_KEY, SOURCE_CODE_LABEL_KEY, SOURCE_CODE_URL_KEY, TITLE_KEY};
use crate::icons::IconRegistry;

/// Project name used for config discovery (`FOLIO_CONFIG`, `folio.toml`).
pub const PROJECT_NAME: &str = "folio";

/// Defaults for footer metadata keys that may be absent.
const BUILTIN_DEFAULTS: &[(&str, &str)] = &[
    (TITLE_KEY, "Portfolio"),
    (DESCRIPTION_KEY, ""),
    (SOURCE_CODE_LABEL_KEY, "View Source"),
    (SOURCE_CODE_URL_KEY, ""),
];

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Footer assembly settings.
    pub footer: FooterConfig,
    /// Icon name → asset path.
    pub icons: IconRegistry,
    /// Extra link collections, by output name.
    pub collections: BTreeMap<String, CollectionConfig>,
}

/// How the footer document is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Heading of the quick-links section.
    pub quick_links_heading: String,
    /// Heading of the social-links section.
    pub social_heading: String,
    /// Metadata keys that must be non-empty after defaults.
    pub required: Vec<String>,
    /// Metadata key → value used when the key is absent.
    pub defaults: BTreeMap<String, String>,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            quick_links_heading: "Quick Links".to_string(),
            social_heading: "Connect".to_string(),
            required: Vec::new(),
            defaults: BUILTIN_DEFAULTS
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }
}

impl FooterConfig {
    /// Look up `key` in the metadata, then the configured defaults, then the
    /// built-in defaults. Unknown keys resolve to `""`.
    pub fn resolve<'a>(&'a self, metadata: &'a Metadata, key: &str) -> &'a str {
        metadata
            .get(key)
            .or_else(|| self.defaults.get(key).map(String::as_str))
            .or_else(|| {
                BUILTIN_DEFAULTS
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| *v)
            })
            .unwrap_or("")
    }
}

impl SiteConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Invalid config: {e}")))
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Invalid config in {}: {e}", path.display())))
    }

    /// Load configuration, discovering the file if no path is given.
    ///
    /// Returns the configuration and the file it came from. With no file
    /// found, the built-in defaults are returned with `None`.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        Self::load_with(&ConfigResolver::new(PROJECT_NAME), explicit)
    }

    /// Load configuration using a specific resolver.
    pub fn load_with(
        resolver: &ConfigResolver,
        explicit: Option<&Path>,
    ) -> Result<(Self, Option<PathBuf>)> {
        match resolver.resolve(explicit) {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                let config = Self::from_file(&path)?;
                Ok((config, Some(path)))
            }
            None => {
                log::debug!("No config file found, using defaults");
                Ok((Self::default(), None))
            }
        }
    }

    /// Render the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_is_default() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.footer.quick_links_heading, "Quick Links");
        assert_eq!(config.footer.social_heading, "Connect");
    }

    #[test]
    fn test_partial_footer_section() {
        let config =
            SiteConfig::from_toml_str("[footer]\nsocial_heading = \"Elsewhere\"\n").unwrap();
        assert_eq!(config.footer.social_heading, "Elsewhere");
        assert_eq!(config.footer.quick_links_heading, "Quick Links");
    }

    #[test]
    fn test_partial_defaults_fall_back_to_builtin() {
        let config =
            SiteConfig::from_toml_str("[footer.defaults]\ntitle = \"My Site\"\n").unwrap();
        let meta = Metadata::new();
        assert_eq!(config.footer.resolve(&meta, TITLE_KEY), "My Site");
        assert_eq!(config.footer.resolve(&meta, SOURCE_CODE_LABEL_KEY), "View Source");
        assert_eq!(config.footer.resolve(&meta, "unknown"), "");
    }

    #[test]
    fn test_metadata_beats_defaults() {
        let meta: Metadata = [(TITLE_KEY, "From Doc")].into_iter().collect();
        let footer = FooterConfig::default();
        assert_eq!(footer.resolve(&meta, TITLE_KEY), "From Doc");
    }

    #[test]
    fn test_invalid_config() {
        let err = SiteConfig::from_toml_str("[footer\n").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let err = SiteConfig::from_toml_str("[footer]\nrequired = \"title\"\n").unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = SiteConfig::default();
        config.footer.required = vec![SOURCE_CODE_URL_KEY.to_string()];
        let rendered = config.to_toml_string().unwrap();
        assert_eq!(SiteConfig::from_toml_str(&rendered).unwrap(), config);
    }

    #[test]
    fn test_load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        std::fs::write(&path, "[footer]\nquick_links_heading = \"Nav\"\n").unwrap();

        let (config, source) = SiteConfig::load(Some(&path)).unwrap();
        assert_eq!(config.footer.quick_links_heading, "Nav");
        assert_eq!(source, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let temp = TempDir::new().unwrap();
        let err = SiteConfig::load(Some(&temp.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_load_with_nothing_found() {
        let temp = TempDir::new().unwrap();
        let resolver = ConfigResolver::new("folio-test-nothing")
            .with_search_dir(temp.path())
            .with_user_config_dir(temp.path());
        let (config, source) = SiteConfig::load_with(&resolver, None).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert!(source.is_none());
    }

    #[test]
    fn test_load_with_discovered_local_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("folio-test-local.toml"), "[icons]\nx = \"x.svg\"\n")
            .unwrap();
        let resolver = ConfigResolver::new("folio-test-local")
            .with_search_dir(temp.path())
            .with_user_config_dir(temp.path().join("home"));
        let (config, source) = SiteConfig::load_with(&resolver, None).unwrap();
        assert_eq!(source, Some(temp.path().join("folio-test-local.toml")));
        assert_eq!(config.icons.len(), 1);
    }
}
