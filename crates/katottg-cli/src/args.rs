use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for katottg-cli
#[derive(Debug, Parser)]
#[command(
    name = "katottg",
    version,
    about = "CLI for querying Ukraine's KATOTTG settlement directory"
)]
pub struct CliArgs {
    /// Path to a local registry snapshot (JSON, or .json.gz with the compact feature)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Registry snapshot URL (default: the public KATOTTG mirror)
    #[arg(short = 'u', long = "url", global = true)]
    pub url: Option<String>,

    /// Reuse (and refresh) a binary directory cache next to the input file
    #[arg(long, global = true)]
    pub cache: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the directory contents
    Stats,

    /// List all regions
    Regions,

    /// Search settlements by name, region, or district
    Search {
        /// Substring to search (case-insensitive)
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Fetch the registry, build the directory, and save a binary snapshot
    Build {
        /// Output path (use a .gz suffix for a compressed snapshot)
        #[arg(short, long)]
        output: PathBuf,
    },
}
