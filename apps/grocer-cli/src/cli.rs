use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "grocer", author, version, about = "Grocery inventory and price finder", long_about = None)]
pub struct Cli {
    /// Path to the JSON data file. Overrides GROCER_DATA_FILE.
    #[arg(long, global = true, value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show every item with its position.
    List {
        /// Print JSON instead of rows.
        #[arg(long)]
        json: bool,
    },

    /// Show items whose name contains KEYWORD (any case).
    Search {
        keyword: String,

        /// Print JSON instead of rows.
        #[arg(long)]
        json: bool,
    },

    /// Append a new item.
    Add(ItemArgs),

    /// Change the item at INDEX. Omitted fields keep their value.
    Edit {
        index: usize,

        #[arg(long)]
        name: Option<String>,

        /// Price per kilogram.
        #[arg(long)]
        price: Option<String>,

        /// Quantity in kilograms.
        #[arg(long)]
        qty: Option<String>,
    },

    /// Remove the item at INDEX.
    Delete { index: usize },

    /// Quantity for a spend and/or cost for a mass in grams.
    Price {
        /// Price per kilogram.
        price_per_kg: String,

        /// Money or grams, e.g. 30 or 400.
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Fields of the add form. Kept as text so validation matches the edit path.
#[derive(Args, Debug)]
pub struct ItemArgs {
    #[arg(long)]
    pub name: String,

    /// Price per kilogram.
    #[arg(long)]
    pub price: String,

    /// Quantity in kilograms.
    #[arg(long)]
    pub qty: String,
}
