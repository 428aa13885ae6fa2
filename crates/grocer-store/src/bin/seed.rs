//! # Seed Data Generator
//!
//! Writes a sample grocery list for development.
//!
//! ## Usage
//! ```bash
//! # Write ./grocery_data.json
//! cargo run -p grocer-store --bin seed
//!
//! # Specify the data file
//! cargo run -p grocer-store --bin seed -- --file ./data/grocery_data.json
//! ```
//!
//! Skips writing when the file already holds items.

use std::env;

use grocer_core::{Inventory, Item};
use grocer_store::{InventoryStore, DEFAULT_FILE_NAME};

/// (name, price per kg, quantity in kg)
const SAMPLE_ITEMS: &[(&str, f64, f64)] = &[
    ("Tomato", 40.0, 2.5),
    ("Red Onion", 35.0, 3.0),
    ("Potato", 30.0, 5.0),
    ("Basmati Rice", 120.0, 10.0),
    ("Toor Dal", 140.0, 2.0),
    ("Sugar", 44.0, 5.0),
    ("Ginger", 160.0, 0.25),
    ("Garlic", 200.0, 0.5),
    ("Green Chilli", 80.0, 0.2),
    ("Wheat Flour", 38.0, 10.0),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut path = String::from(DEFAULT_FILE_NAME);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Grocer Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>  Data file path (default: ./{})", DEFAULT_FILE_NAME);
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Grocer Seed Data Generator");
    println!("==========================");
    println!("Data file: {}", path);
    println!();

    let store = InventoryStore::new(&path);

    let existing = store.load()?;
    if !existing.is_empty() {
        println!("⚠ Data file already has {} items", existing.len());
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the file to regenerate.");
        return Ok(());
    }

    let inventory = SAMPLE_ITEMS
        .iter()
        .map(|(name, price, qty)| Item::new(*name, *price, *qty))
        .collect::<Result<Inventory, _>>()?;

    store.save(&inventory)?;
    println!("✓ Wrote {} items", inventory.len());

    let onions = store.search("onion")?;
    println!("  Search 'onion': {} results", onions.len());

    Ok(())
}
