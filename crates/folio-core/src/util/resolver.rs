//! Config file resolution.
//!
//! `ConfigResolver` locates a project's config file using an explicit path,
//! an environment variable, a file in the working directory, and finally the
//! platform config directory.
//!
//! # Example
//!
//! ```no_run
//! use folio_core::util::resolver::ConfigResolver;
//!
//! let resolver = ConfigResolver::new("folio");
//!
//! // Checks FOLIO_CONFIG, ./folio.toml, then <config dir>/folio/config.toml
//! if let Some(path) = resolver.resolve(None) {
//!     println!("Config: {}", path.display());
//! }
//! ```

use std::env;
use std::path::{Path, PathBuf};

/// Locates the config file for a named project.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    /// Project name (e.g., "folio")
    project_name: String,
    /// Environment variable prefix (e.g., "FOLIO")
    env_prefix: String,
    /// Directory searched for `{project}.toml`
    search_dir: PathBuf,
    /// Platform config directory, if the platform has one
    user_config_dir: Option<PathBuf>,
}

impl ConfigResolver {
    /// Create a new resolver for the given project name.
    ///
    /// The project name is converted to an environment variable prefix:
    /// - "folio" → "FOLIO"
    /// - "my-site" → "MY_SITE"
    pub fn new(project_name: &str) -> Self {
        let env_prefix = project_name.to_uppercase().replace(['-', ' '], "_");

        Self {
            project_name: project_name.to_string(),
            env_prefix,
            search_dir: PathBuf::from("."),
            user_config_dir: dirs::config_dir(),
        }
    }

    /// Search this directory instead of the working directory.
    pub fn with_search_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.search_dir = dir.into();
        self
    }

    /// Use this directory in place of the platform config directory.
    pub fn with_user_config_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.user_config_dir = Some(dir.into());
        self
    }

    /// Get the environment variable name for a given suffix.
    ///
    /// # Example
    /// ```
    /// use folio_core::util::resolver::ConfigResolver;
    ///
    /// let resolver = ConfigResolver::new("my-site");
    /// assert_eq!(resolver.env_var("CONFIG"), "MY_SITE_CONFIG");
    /// ```
    pub fn env_var(&self, suffix: &str) -> String {
        format!("{}_{}", self.env_prefix, suffix)
    }

    /// Resolve the config file path.
    ///
    /// Checks in order:
    /// 1. `explicit` path (returned even if it does not exist, so the
    ///    caller can report it)
    /// 2. `{PROJECT}_CONFIG` environment variable
    /// 3. `{search_dir}/{project}.toml`
    /// 4. `{config_dir}/{project}/config.toml`
    pub fn resolve(&self, explicit: Option<&Path>) -> Option<PathBuf> {
        let from_env = env::var_os(self.env_var("CONFIG")).map(PathBuf::from);
        self.resolve_with(explicit, from_env)
    }

    /// Resolve with an already-read environment value.
    pub fn resolve_with(
        &self,
        explicit: Option<&Path>,
        from_env: Option<PathBuf>,
    ) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        if let Some(path) = from_env.filter(|p| !p.as_os_str().is_empty()) {
            log::debug!(
                "Using config from {}: {}",
                self.env_var("CONFIG"),
                path.display()
            );
            return Some(path);
        }

        let local = self.search_dir.join(format!("{}.toml", self.project_name));
        if local.is_file() {
            return Some(local);
        }

        self.user_config_path().filter(|p| p.is_file())
    }

    /// The per-user config file location, whether or not it exists.
    pub fn user_config_path(&self) -> Option<PathBuf> {
        self.user_config_dir
            .as_ref()
            .map(|dir| dir.join(&self.project_name).join("config.toml"))
    }

    /// Get the project name.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Get the environment variable prefix.
    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }
}
