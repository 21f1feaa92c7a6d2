//! Error handling example for katottg-rs
//!
//! This example demonstrates the loader's failure modes and the soft
//! handling of short queries.

use katottg_rs::prelude::*;

fn main() {
    println!("=== KATOTTG-RS Error Handling Example ===\n");

    // Example 1: Malformed registry document
    println!("--- Example 1: Malformed JSON ---");
    match parse_entries(b"{not json") {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 2: Structurally valid but empty document
    println!("--- Example 2: Empty registry ---");
    match parse_entries(br#"{"items":[]}"#) {
        Ok(_) => println!("  unexpected success"),
        Err(e @ RegistryError::EmptyRegistry) => println!("  ✗ {e}"),
        Err(e) => println!("  ✗ unexpected error kind: {e}"),
    }
    println!();

    // Example 3: Short queries are empty results, not errors
    println!("--- Example 3: Short queries ---");
    let sample = r#"[{"category":"C","name":"Іванівка","level1":"01","level3":"010203"}]"#;
    let entries = parse_entries(sample.as_bytes()).expect("valid sample");
    let directory = build_directory(entries);
    for query in ["", "і", "ів"] {
        let hits = directory.search(query, 20);
        println!("  query {query:?} -> {} result(s)", hits.len());
    }

    println!("\n=== Example completed successfully ===");
}
