//! # hookhub
//!
//! Command-line browser for the HookHub directory. Loads settings and the
//! dataset once, then runs a single subcommand against the catalog.

#![deny(unsafe_code)]

mod cli;
mod interactive;
mod render;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hookhub_catalog::loader::DatasetSource;
use hookhub_catalog::{BrowseState, CategoryFilter, HookCatalog};
use hookhub_settings::{HookhubSettings, get_settings, init_settings, load_settings, settings_path};
use tracing::{info, warn};

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Settings are loaded before logging exists; report failures afterwards.
    let (settings, settings_error) = match load_settings() {
        Ok(settings) => (settings, None),
        Err(err) => (HookhubSettings::default(), Some(err)),
    };
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| settings.logging.level.clone());
    hookhub_core::logging::init_subscriber(&level);
    if let Some(err) = settings_error {
        warn!(
            path = %settings_path().display(),
            error = %err,
            "failed to load settings, using defaults"
        );
    }
    let _ = init_settings(settings);
    let settings = get_settings();

    let source = DatasetSource::from_optional_path(
        cli.data
            .clone()
            .or_else(|| settings.data.path.as_ref().map(PathBuf::from)),
    );
    let catalog = HookCatalog::load(&source)
        .with_context(|| format!("failed to load hook dataset from {source}"))?;
    info!(source = %source, count = catalog.len(), "catalog ready");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_command(cli.command.unwrap_or_default(), &catalog, settings, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run_command<W: Write>(
    command: Command,
    catalog: &HookCatalog,
    settings: &HookhubSettings,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::List {
            query,
            category,
            format,
        } => {
            let filter = resolve_category(category, settings);
            let records = catalog.search(&query, &filter);
            let format = format.unwrap_or(settings.display.format);
            render::write_listing(out, &records, format)
        }
        Command::Show { id } => {
            let record = catalog.require(&id)?;
            render::write_card(out, record)
        }
        Command::Categories => render::write_categories(out, catalog),
        Command::HookTypes => render::write_hook_types(out),
        Command::Languages => render::write_languages(out, catalog),
        Command::Browse { category } => {
            let filter = resolve_category(category, settings);
            let mut state = BrowseState::with_category(catalog, filter);
            let stdin = std::io::stdin();
            interactive::run(&mut state, stdin.lock(), out)
        }
    }
}

/// Explicit selector, else the configured default.
fn resolve_category(category: Option<String>, settings: &HookhubSettings) -> CategoryFilter {
    let selector = category.unwrap_or_else(|| settings.display.default_category.clone());
    let filter = CategoryFilter::from_selector(&selector);
    if let CategoryFilter::Unknown(raw) = &filter {
        warn!(selector = %raw, "unknown category selector, no hooks will match");
    }
    filter
}
