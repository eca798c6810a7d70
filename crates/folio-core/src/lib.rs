//! Folio Core: shared errors and identifier utilities.
//!
//! This crate provides the foundational types used across all Folio crates.
//! It has no internal Folio dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: ID, slug, and config path utilities

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::ids::slugify;
pub use util::resolver::ConfigResolver;
