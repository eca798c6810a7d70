//! # folio-cli
//!
//! Command-line tools for Folio content documents:
//! - Footer assembly to JSON
//! - Front-matter, section, and link inspection
//! - Title and heading outline
//! - Config-driven collections
//! - Configuration display

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::{Cli, Command, ConfigAction};
pub use commands::run;
