//! # Grocer CLI Entry Point
//!
//! ```bash
//! grocer add --name Tomato --price 40 --qty 2.5
//! grocer search onion
//! grocer edit 1 --qty 4
//! grocer delete 0
//! grocer price 50 30
//! ```

use clap::Parser;
use tracing::info;

use grocer_cli::cli::Cli;
use grocer_cli::config::AppConfig;

fn main() {
    grocer_cli::init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::from_env();
    info!(?config, "Configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = grocer_cli::run(cli, &config, &mut out) {
        eprintln!("error [{}]: {}", e.code.as_str(), e.message);
        std::process::exit(1);
    }
}
