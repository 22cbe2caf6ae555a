//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `url_processor` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit status
//!
//! All core functionality is implemented in the library crate.

use clap::Parser;
use std::process;

use url_processor::initialization::init_logger_with;
use url_processor::{run_urls, Config, Opt};

#[tokio::main]
async fn main() {
    let config = Config::from(Opt::parse());

    if let Err(e) = init_logger_with(config.log_level.clone().into(), config.log_format.clone()) {
        eprintln!("url_processor error: Failed to initialize logger: {e}");
        process::exit(1);
    }

    // Per-URL failures are printed by the run; only setup failures land here
    if let Err(e) = run_urls(&config).await {
        eprintln!("url_processor error: {:#}", e);
        process::exit(1);
    }
}
