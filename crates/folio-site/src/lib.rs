//! Assembly of parsed content into the records the site renders.
//!
//! `folio-content` produces generic metadata and link records. This crate
//! is the caller side: it decides which headings matter, which metadata keys
//! have which defaults, and how link attributes map onto output fields.
//!
//! # Modules
//!
//! - [`projection`]: declarative link record → output field tables
//! - [`footer`]: footer data assembly
//! - [`collections`]: config-driven extra link collections
//! - [`icons`]: icon key → asset lookup
//! - [`config`]: TOML site configuration

pub mod collections;
pub mod config;
pub mod footer;
pub mod icons;
pub mod projection;

// Re-export key types at crate root for convenience
pub use config::{FooterConfig, SiteConfig};
pub use footer::{FooterData, FooterLink, SocialLink, SourceCodeLink, parse_footer};
pub use icons::{IconRegistry, ResourceLookup};
pub use projection::{FieldRule, Projection};
