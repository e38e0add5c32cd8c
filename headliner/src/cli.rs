//! Command-line interface definitions for headliner

use clap::{Args, Parser, Subcommand, ValueEnum};
use headliner::report::ReportFormat;
use std::path::PathBuf;

/// Output format for report commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Indented plain text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

/// CLI structure for the headliner application
#[derive(Parser)]
#[command(name = "headliner")]
#[command(version)]
#[command(about = "Heading outlines and hierarchy checks for HTML pages", long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that reads pages
#[derive(Args)]
pub struct PageArgs {
    /// Page file or directory of pages
    #[arg(value_name = "PATH", default_value = ".")]
    pub input: PathBuf,

    /// Configuration file (defaults to headliner.toml in the working directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Available subcommands for headliner
#[derive(Subcommand)]
pub enum Commands {
    /// Print the sectioning-aware outline of each page
    Outline {
        #[command(flatten)]
        pages: PageArgs,
    },

    /// Print the level-based headline list and per-level counts of each page
    Headlines {
        #[command(flatten)]
        pages: PageArgs,
    },

    /// Check the heading hierarchy of each page
    Check {
        #[command(flatten)]
        pages: PageArgs,

        /// Do not warn about multiple top-level headings
        #[arg(long)]
        no_multiple_top_level: bool,

        /// Do not report a missing top-level heading
        #[arg(long)]
        no_missing_top_level: bool,

        /// Do not warn about skipped heading levels
        #[arg(long)]
        no_skipped_level: bool,

        /// Exit with a failure status when any page has an error
        #[arg(long)]
        fail_on_error: bool,
    },

    /// Write a default headliner.toml
    InitConfig {
        /// Where to write the file (defaults to ./headliner.toml)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
