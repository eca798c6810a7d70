//! Utility modules for ID computation and config path handling.
//!
//! # Modules
//!
//! - [`ids`]: ID normalization and heading slugs
//! - [`resolver`]: Config file resolution

pub mod ids;
pub mod resolver;
