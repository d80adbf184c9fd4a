//! Bistro - a single-page restaurant site generator.

mod asset;
mod cli;
mod config;
mod content;
mod embed;
mod logger;
mod nav;
mod render;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, build::build_site};
use config::{SiteConfig, init_config};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    cli::serve::setup_shutdown_handler()?;

    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    logger::set_verbose(cli.verbose);

    // Commands that run without a config file
    match &cli.command {
        Commands::Init { name, dry } => {
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            let root = name.as_ref().map_or_else(|| cwd.clone(), |name| cwd.join(name));
            return cli::init::new_site(&root, *dry);
        }
        Commands::Probe { args } => return cli::probe::run_probe(args),
        _ => {}
    }

    let config = init_config(SiteConfig::load(&cli)?);

    match &cli.command {
        Commands::Build { .. } => build_site(&config).map(|_| ()),
        Commands::Serve { .. } => cli::serve::serve_site(),
        Commands::Check => cli::check::check_site(&config).map(|_| ()),
        Commands::Init { .. } | Commands::Probe { .. } => Ok(()),
    }
}
