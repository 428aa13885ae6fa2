//! # Grocer CLI Library
//!
//! Command-line front end over `grocer-core` and `grocer-store`.
//!
//! ## Module Organization
//! ```text
//! grocer_cli/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── config.rs       ◄─── AppConfig (env + defaults)
//! ├── commands/
//! │   ├── item.rs     ◄─── list / search / add / edit / delete
//! │   └── price.rs    ◄─── price finder
//! └── error.rs        ◄─── ApiError for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. init_tracing()       RUST_LOG or default filter, to stderr          │
//! │                          "warn,grocer_cli=info,grocer_store=info"       │
//! │  2. Cli::parse()         subcommand + --data-file                       │
//! │  3. AppConfig::from_env  GROCER_DATA_FILE, GROCER_CURRENCY_SYMBOL       │
//! │  4. resolve_data_path    flag > env > platform data dir                 │
//! │  5. dispatch             one command, output on stdout                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::item::{self, ItemDto, ItemPatch};
use commands::price;
use config::AppConfig;
use error::ApiError;
use grocer_core::ItemDraft;
use grocer_store::{InventoryStore, DEFAULT_FILE_NAME};

/// Runs one CLI invocation, writing command output to `out`.
pub fn run(cli: Cli, config: &AppConfig, out: &mut dyn Write) -> Result<(), ApiError> {
    let path = resolve_data_path(cli.data_file.as_deref(), config)?;
    info!(path = %path.display(), "Using data file");

    let store = InventoryStore::new(path);

    match cli.command {
        Command::List { json } => {
            let rows = item::list_items(&store)?;
            write_rows(out, config, &rows, json)
        }
        Command::Search { keyword, json } => {
            let rows = item::search_items(&store, &keyword)?;
            debug!(keyword = %keyword, hits = rows.len(), "Search finished");
            write_rows(out, config, &rows, json)
        }
        Command::Add(args) => {
            let draft = ItemDraft::new(args.name, args.price, args.qty);
            let row = item::add_item(&store, &draft)?;
            write_line(out, format!("Added {}", item::format_row(config, &row)))
        }
        Command::Edit {
            index,
            name,
            price,
            qty,
        } => {
            let patch = ItemPatch {
                name,
                price_per_kg: price,
                quantity: qty,
            };
            let row = item::edit_item(&store, index, patch)?;
            write_line(out, format!("Updated {}", item::format_row(config, &row)))
        }
        Command::Delete { index } => {
            let row = item::delete_item(&store, index)?;
            write_line(out, format!("Deleted {}", item::format_row(config, &row)))
        }
        Command::Price {
            price_per_kg,
            amount,
        } => {
            let (amount, quote) = price::find_price(&price_per_kg, &amount)?;
            for line in price::format_quote(config, amount, &quote) {
                write_line(out, line)?;
            }
            Ok(())
        }
    }
}

fn write_rows(
    out: &mut dyn Write,
    config: &AppConfig,
    rows: &[ItemDto],
    json: bool,
) -> Result<(), ApiError> {
    if json {
        let text =
            serde_json::to_string_pretty(rows).map_err(|e| ApiError::internal(e.to_string()))?;
        return write_line(out, text);
    }

    if rows.is_empty() {
        return write_line(out, "No items");
    }

    for row in rows {
        write_line(out, item::format_row(config, row))?;
    }
    Ok(())
}

fn write_line(out: &mut dyn Write, line: impl AsRef<str>) -> Result<(), ApiError> {
    writeln!(out, "{}", line.as_ref()).map_err(|e| ApiError::internal(e.to_string()))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=grocer_store=debug` - Show file reads and writes
/// - Default: warnings, plus info from the grocer crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,grocer_cli=info,grocer_store=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Determines the data file path.
///
/// ## Resolution Order
/// 1. `--data-file` flag
/// 2. `GROCER_DATA_FILE` (via [`AppConfig`])
/// 3. Platform data directory:
///    - **macOS**: `~/Library/Application Support/com.grocer.grocer/grocery_data.json`
///    - **Windows**: `%APPDATA%\grocer\grocer\data\grocery_data.json`
///    - **Linux**: `~/.local/share/grocer/grocery_data.json`
pub fn resolve_data_path(flag: Option<&Path>, config: &AppConfig) -> Result<PathBuf, ApiError> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }

    if let Some(path) = &config.data_file {
        return Ok(path.clone());
    }

    let proj_dirs = ProjectDirs::from("com", "grocer", "grocer")
        .ok_or_else(|| ApiError::internal("Could not determine app data directory"))?;

    let data_dir = proj_dirs.data_dir();

    // Create directory if it doesn't exist
    std::fs::create_dir_all(data_dir).map_err(|e| {
        ApiError::new(
            error::ErrorCode::StorageError,
            format!("Could not create {}: {}", data_dir.display(), e),
        )
    })?;

    Ok(data_dir.join(DEFAULT_FILE_NAME))
}
