//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Folio - parse structured content documents
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Assemble footer data from a footer document
    Footer {
        /// Path to the document
        file: PathBuf,
    },
    /// Print the front-matter mapping
    Frontmatter {
        /// Path to the document
        file: PathBuf,
    },
    /// Print the links under one `##` heading
    Links {
        /// Path to the document
        file: PathBuf,
        /// Heading text (case-insensitive)
        heading: String,
    },
    /// List the `##` section headings
    Sections {
        /// Path to the document
        file: PathBuf,
    },
    /// Print the page title and heading anchors
    Outline {
        /// Path to the document
        file: PathBuf,
    },
    /// Assemble the collections defined in the config file
    Collect {
        /// Path to the document
        file: PathBuf,
    },
    /// Configuration operations
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file in use
    Path,
}
