//! CLI argument parsing for ecorec
//!
//! Supports global flags: --root, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod format;
pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::parse_format;

pub use args::{
    AddArgs, CompareArgs, DuplicatesArgs, FeedbackArgs, ListArgs, PicksArgs, RecommendArgs,
    SearchArgs,
};
pub use ecorec_core::format::OutputFormat;

/// Ecorec - eco-friendly product catalog and recommender
#[derive(Parser, Debug)]
#[command(name = "ecorec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Store directory (holds ecorec.toml and the catalog)
    #[arg(long, global = true, env = "ECOREC_ROOT")]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "ecorec_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create ecorec.toml and an empty catalog
    Init,

    /// List products, optionally filtered and sorted
    List(ListArgs),

    /// Search products by name (logged for the dashboard)
    Search(SearchArgs),

    /// Recommend products similar to the named one
    Recommend(RecommendArgs),

    /// Find near-duplicate catalog entries
    Duplicates(DuplicatesArgs),

    /// Compare two or more products side by side
    Compare(CompareArgs),

    /// Append a product to the catalog
    Add(AddArgs),

    /// Dashboard statistics and chart data
    Stats,

    /// Top eco-friendly picks
    Picks(PicksArgs),

    /// Leave feedback
    Feedback(FeedbackArgs),
}
