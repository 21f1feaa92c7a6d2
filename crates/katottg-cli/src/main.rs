//! katottg-cli — Command-line interface for katottg-core
//!
//! This binary provides a simple way to inspect the KATOTTG settlement
//! directory from your terminal. It supports printing basic statistics,
//! listing regions, searching settlements by a substring, and building a
//! binary snapshot of the directory for fast subsequent runs.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ katottg stats
//!
//! - List all regions
//!   $ katottg regions
//!
//! - Search settlements by substring
//!   $ katottg search іванівка
//!
//! - Work against a local snapshot, with a reusable binary cache
//!   $ katottg --input katottg.json --cache search ірпінь
//!
//! Data source
//! -----------
//!
//! By default, the CLI downloads the public registry snapshot on every run.
//! Use `--input <path>` to point to a local `.json`/`.json.gz` snapshot and
//! `--cache` to keep a binary directory cache next to it.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use katottg_core::loader;
use katottg_core::model::snapshot::SNAPSHOT_SUFFIX;
use katottg_core::{build_directory, Directory, FileFetcher, RegistryFetch};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let directory = load_directory(&args).await?;

    match args.command {
        Commands::Stats => {
            let stats = directory.stats();
            println!("Directory statistics:");
            println!("  Regions: {}", stats.regions);
            println!("  Districts: {}", stats.districts);
            println!("  Settlements: {}", stats.settlements);
        }

        Commands::Regions => {
            for region in directory.browse_regions(usize::MAX) {
                println!("{}", region.full_name);
            }
        }

        Commands::Search { query, limit } => {
            let matches = directory.search(&query, limit);
            if matches.is_empty() {
                println!("No settlements found matching: {query}");
            } else {
                for s in matches {
                    if s.district.is_empty() {
                        println!("{} [{}]", s.full_name, s.code);
                    } else {
                        println!("{} — {} [{}]", s.full_name, s.district, s.code);
                    }
                }
            }
        }

        Commands::Build { output } => {
            directory.save_as(&output)?;
            let stats = directory.stats();
            println!(
                "✓ Saved {} settlements to {}",
                stats.settlements,
                output.display()
            );
        }
    }

    Ok(())
}

async fn load_directory(args: &CliArgs) -> anyhow::Result<Directory> {
    if let Some(input) = &args.input {
        if args.cache {
            let cache = loader::cache_path(input, SNAPSHOT_SUFFIX);
            if loader::is_cache_fresh(input, &cache) {
                if let Ok(directory) = Directory::load_from_path(&cache) {
                    return Ok(directory);
                }
            }
            let directory = build_from_file(input).await?;
            // Cache write failures are not fatal; the directory is built.
            directory.save_as(&cache).ok();
            return Ok(directory);
        }
        return build_from_file(input).await;
    }

    #[cfg(feature = "fetch")]
    {
        let url = args
            .url
            .as_deref()
            .unwrap_or(katottg_core::DEFAULT_REGISTRY_URL);
        let entries = katottg_core::HttpFetcher::new(url)
            .fetch()
            .await
            .with_context(|| format!("fetching registry from {url}"))?;
        return Ok(build_directory(entries));
    }

    #[cfg(not(feature = "fetch"))]
    anyhow::bail!("built without the 'fetch' feature; pass --input <snapshot.json>")
}

async fn build_from_file(path: &Path) -> anyhow::Result<Directory> {
    let entries = FileFetcher::new(path)
        .fetch()
        .await
        .with_context(|| format!("reading registry snapshot {}", path.display()))?;
    Ok(build_directory(entries))
}
