//! Basic usage example for katottg-rs
//!
//! This example demonstrates how to:
//! - Parse a registry snapshot and build the directory
//! - Browse regions
//! - Search settlements with ranking
//! - Inspect directory statistics

use katottg_rs::prelude::*;

// A miniature registry snapshot in the shape the public mirror publishes.
const SAMPLE: &str = r#"[
    {"category":"O","name":"Київська","level1":"01"},
    {"category":"O","name":"Миколаївська","level1":"48"},
    {"category":"P","name":"Бучанський","level1":"01","level2":"0102"},
    {"category":"M","name":"Ірпінь","level1":"01","level2":"0102","level3":"010205"},
    {"category":"C","name":"Іванівка","level1":"01","level2":"0102","level3":"010203"},
    {"category":"C","name":"Микола","level1":"48","level3":"480102"},
    {"category":"C","name":"Миколаївка","level1":"48","level3":"480101"},
    {"category":"K","name":"Київ","level1":"80","level3":"800000"}
]"#;

fn main() -> Result<()> {
    println!("=== KATOTTG-RS Basic Usage Example ===\n");

    // Parse and index the snapshot
    println!("Building directory...");
    let entries = parse_entries(SAMPLE.as_bytes())?;
    let directory = build_directory(entries);
    println!("✓ Directory built successfully\n");

    // Example 1: Statistics
    println!("--- Example 1: Directory statistics ---");
    let stats = directory.stats();
    println!("Regions: {}", stats.regions);
    println!("Districts: {}", stats.districts);
    println!("Settlements: {}", stats.settlements);
    println!();

    // Example 2: Browse regions (what an empty query returns)
    println!("--- Example 2: Browse by region ---");
    for region in directory.search("", 20) {
        println!("- {} ({})", region.full_name, region.code);
    }
    println!();

    // Example 3: Substring search
    println!("--- Example 3: Substring search ---");
    for hit in directory.search("іван", 20) {
        println!("- {} [{}]", hit.full_name, hit.code);
    }
    println!();

    // Example 4: Exact matches rank first
    println!("--- Example 4: Ranking ---");
    for hit in directory.search("микола", 20) {
        println!("- {}", hit.full_name);
    }
    println!();

    // Example 5: Matching by region name
    println!("--- Example 5: Settlements of a region ---");
    for hit in directory.search("київськ", 20) {
        println!("- {}", hit.full_name);
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
