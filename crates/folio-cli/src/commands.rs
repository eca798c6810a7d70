//! Command handlers.
//!
//! Each handler reads its document, runs the parser, and returns the text to
//! print. Printing stays in `main` so handlers are testable.

use std::path::Path;

use folio_content::{
    extract_title, get_section, heading_outline, parse_links, section_headings, split_frontmatter,
};
use folio_core::{Error, Result};
use folio_site::collections::assemble_collections;
use folio_site::{SiteConfig, parse_footer};
use serde::Serialize;
use serde_json::json;

use crate::cli::{Command, ConfigAction};

/// Run one command against a loaded configuration.
///
/// `config_path` is where `config` came from, if anywhere.
pub fn run(
    command: &Command,
    config: &SiteConfig,
    config_path: Option<&Path>,
    pretty: bool,
) -> Result<String> {
    tracing::debug!(?command, "Running command");
    match command {
        Command::Footer { file } => footer(file, config, pretty),
        Command::Frontmatter { file } => frontmatter(file, pretty),
        Command::Links { file, heading } => links(file, heading, pretty),
        Command::Sections { file } => sections(file, pretty),
        Command::Outline { file } => outline(file, pretty),
        Command::Collect { file } => collect(file, config, pretty),
        Command::Config { action } => match action {
            ConfigAction::Show => config.to_toml_string(),
            ConfigAction::Path => Ok(match config_path {
                Some(path) => path.display().to_string(),
                None => "(none, using built-in defaults)".to_string(),
            }),
        },
    }
}

fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

fn footer(file: &Path, config: &SiteConfig, pretty: bool) -> Result<String> {
    let document = read_document(file)?;
    let data = parse_footer(&document, &config.footer)?;
    let missing = config.icons.unresolved(&data.social_links);
    if !missing.is_empty() {
        tracing::info!(count = missing.len(), "Social links without a registered icon");
    }
    to_json(&data, pretty)
}

fn frontmatter(file: &Path, pretty: bool) -> Result<String> {
    let document = read_document(file)?;
    let split = split_frontmatter(&document);
    if !split.had_delimiters() {
        tracing::debug!(path = %file.display(), "No front-matter block");
    }
    to_json(split.metadata(), pretty)
}

fn links(file: &Path, heading: &str, pretty: bool) -> Result<String> {
    let document = read_document(file)?;
    let body = split_frontmatter(&document).body();
    to_json(&parse_links(get_section(body, heading)), pretty)
}

fn sections(file: &Path, pretty: bool) -> Result<String> {
    let document = read_document(file)?;
    let body = split_frontmatter(&document).body();
    to_json(&section_headings(body), pretty)
}

fn outline(file: &Path, pretty: bool) -> Result<String> {
    let document = read_document(file)?;
    let value = json!({
        "title": extract_title(&document),
        "headings": heading_outline(&document),
    });
    to_json(&value, pretty)
}

fn collect(file: &Path, config: &SiteConfig, pretty: bool) -> Result<String> {
    let document = read_document(file)?;
    if config.collections.is_empty() {
        tracing::warn!("No collections configured");
    }
    to_json(&assemble_collections(&document, &config.collections), pretty)
}
