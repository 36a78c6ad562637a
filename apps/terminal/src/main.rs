//! # Karsaz POS Entry Point
//!
//! Thin shell over the `karsaz_pos` library: initialize tracing, build the
//! fixed store configuration, hand stdin/stdout to the session, and turn
//! the result into an exit code.
//!
//! ## Exit Codes
//! - `0` - normal termination (operator answered "no more customers", or
//!   input ended)
//! - `1` - authentication failure or console I/O error

use std::io;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use karsaz_pos::config::StoreConfig;
use karsaz_pos::AppError;

fn main() -> ExitCode {
    init_tracing();

    let config = StoreConfig::default();
    info!(store = %config.header.store_name, items = config.catalog_seed.len(), "starting till");

    let stdin = io::stdin();
    let stdout = io::stdout();

    match karsaz_pos::run(&config, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::AuthenticationFailed) => ExitCode::FAILURE,
        Err(err) => {
            error!(%err, "session aborted");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing to stderr.
///
/// Defaults to `warn` so prompts and receipts on stdout stay clean;
/// `RUST_LOG` overrides for diagnostics.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}
