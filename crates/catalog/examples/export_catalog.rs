//! Print the built-in catalog as JSON, ready to be edited and fed back
//! through `Catalog::load_from_file`.
//!
//! Run with: cargo run --package catalog --example export_catalog > catalog.json

use catalog::Catalog;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let catalog = Catalog::builtin();

    let json = serde_json::to_string_pretty(catalog.courses())?;
    println!("{json}");

    eprintln!("Exported {} courses in {:?}", catalog.len(), start.elapsed());
    Ok(())
}
