//! # Karsaz POS Terminal
//!
//! The interactive console front end for Karsaz POS.
//!
//! ## Module Organization
//! ```text
//! karsaz_pos/
//! ├── lib.rs        ◄─── You are here (wires gate + session together)
//! ├── config.rs     ◄─── Fixed store configuration (header, credentials, seed)
//! ├── console.rs    ◄─── Whitespace-tokenized console I/O
//! ├── auth.rs       ◄─── One-shot access gate
//! ├── session.rs    ◄─── Customer transaction state machine
//! └── error.rs      ◄─── Fatal session errors
//! ```
//!
//! The binary in `main.rs` is a thin shell: it initializes tracing, locks
//! stdin/stdout, and maps [`run`]'s result to an exit code. Everything
//! else goes through this library so integration tests can drive a whole
//! session from a string.

pub mod auth;
pub mod config;
pub mod console;
pub mod error;
pub mod session;

use std::io::{BufRead, Write};

use karsaz_core::Catalog;

use auth::AccessGate;
use config::StoreConfig;
use console::Console;
use error::AppResult;
use session::Session;

pub use error::AppError;

/// Runs one complete operator session over the given I/O handles.
///
/// Control flow: access gate runs once, then the session loop owns the
/// console until the operator stops or input ends.
///
/// ## Errors
/// - `AppError::AuthenticationFailed` - credentials rejected, caller
///   should exit non-zero
/// - `AppError::Io` - the console itself failed
pub fn run<R: BufRead, W: Write>(config: &StoreConfig, reader: R, writer: W) -> AppResult<()> {
    let mut console = Console::new(reader, writer);

    AccessGate::new(&config.credentials).authenticate(&mut console)?;

    let catalog = Catalog::new(config.catalog_seed.clone());
    Session::new(&mut console, &catalog, &config.header).run()
}
