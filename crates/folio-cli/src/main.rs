//! Folio CLI
//!
//! Command-line interface for parsing Folio content documents.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use folio_cli::{Cli, logging, run};
use folio_site::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let (config, config_path) =
        SiteConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let output = run(&cli.command, &config, config_path.as_deref(), cli.pretty)?;
    println!("{output}");
    Ok(())
}
