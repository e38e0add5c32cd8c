//! headliner - heading outline tool
//!
//! A CLI tool for inspecting the heading structure of HTML pages: the
//! sectioning-aware outline, the plain headline list, and hierarchy checks.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, PageArgs};
use headliner::config::{HeadlinerConfig, CONFIG_FILE_NAME};
use headliner::pipeline::{self, PageReport};
use headliner::report;
use std::path::{Path, PathBuf};

/// Main entry point for the headliner CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    match cli.command {
        Commands::Outline { pages } => {
            let (reports, format) = load_pages(&pages, |_| {})?;
            print!("{}", report::render_outline(&reports, format.into())?);
        }

        Commands::Headlines { pages } => {
            let (reports, format) = load_pages(&pages, |_| {})?;
            print!("{}", report::render_headlines(&reports, format.into())?);
        }

        Commands::Check {
            pages,
            no_multiple_top_level,
            no_missing_top_level,
            no_skipped_level,
            fail_on_error,
        } => {
            let (reports, format) = load_pages(&pages, |config| {
                config.disable_checks(no_multiple_top_level, no_missing_top_level, no_skipped_level);
            })?;
            print!("{}", report::render_check(&reports, format.into())?);

            if fail_on_error {
                if let Some(summary) = report::error_summary(&reports) {
                    anyhow::bail!(summary);
                }
            }
        }

        Commands::InitConfig { path, force } => {
            handle_init_config_command(path, force)?;
        }
    }

    Ok(())
}

/// Load configuration, apply overrides, and analyze every page
fn load_pages(
    args: &PageArgs,
    overrides: impl FnOnce(&mut HeadlinerConfig),
) -> Result<(Vec<PageReport>, cli::OutputFormat)> {
    let cwd = std::env::current_dir().context("Failed to determine the working directory")?;
    let mut config = HeadlinerConfig::discover(args.config.as_deref(), &cwd)
        .context("Failed to load configuration")?;
    overrides(&mut config);

    log::info!("Reading pages from {}", args.input.display());
    let reports = pipeline::run(&args.input, &config)
        .with_context(|| format!("Failed to analyze pages in {}", args.input.display()))?;

    if reports.is_empty() {
        log::warn!("No pages found under {}", args.input.display());
    }

    Ok((reports, args.format))
}

/// Handle the init-config command
fn handle_init_config_command(path: Option<PathBuf>, force: bool) -> Result<()> {
    let target = path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    check_target_free(&target, force)?;

    HeadlinerConfig::default()
        .save(&target)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    println!("✓ Wrote default configuration to {}", target.display());
    Ok(())
}

/// Refuse to overwrite an existing file unless forced
fn check_target_free(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it",
            path.display()
        );
    }
    Ok(())
}
