//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Single-page restaurant site generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file name, searched upward from the current directory
    #[arg(short = 'C', long, default_value = "bistro.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a starter bistro.toml and assets folder
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the starter config instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Render the page into the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Build, then serve the output directory locally
    #[command(visible_alias = "s")]
    Serve {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Replay scroll offsets against a layout and print the active section
    #[command(visible_alias = "p")]
    Probe {
        #[command(flatten)]
        args: ProbeArgs,
    },

    /// Validate bistro.toml and report every problem
    #[command(visible_alias = "c")]
    Check,
}

/// Shared build arguments for Build and Serve commands
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(short, long)]
    pub clean: bool,

    /// Minify the generated CSS and JavaScript
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Pixels added to the scroll offset before matching sections
    #[arg(short, long)]
    pub lookahead: Option<f64>,
}

/// Probe command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ProbeArgs {
    /// Section geometry as `id=top:height,...`
    #[arg(short = 'L', long)]
    pub layout: String,

    /// Scroll offsets to replay, in order
    #[arg(value_name = "OFFSET", allow_negative_numbers = true)]
    pub offsets: Vec<f64>,

    /// Navigate to this anchor after replaying the offsets
    #[arg(short, long, value_name = "ID")]
    pub navigate: Option<String>,

    /// Lookahead bias in pixels
    #[arg(short, long, default_value_t = crate::nav::DEFAULT_LOOKAHEAD)]
    pub lookahead: f64,

    /// Jump instead of smooth scrolling when navigating
    #[arg(long)]
    pub instant: bool,

    /// Open the mobile menu before navigating
    #[arg(long)]
    pub menu_open: bool,
}
