//! # Food Court Terminal Library
//!
//! Core library for the food court ordering terminal.
//! `main.rs` only calls [`run`].
//!
//! ## Module Organization
//! ```text
//! foodcourt_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── session.rs      ◄─── OrderSession state machine
//! ├── input.rs        ◄─── Whitespace-delimited token reader
//! ├── bill_number.rs  ◄─── Clock-seeded / fixed bill numbers
//! ├── persist.rs      ◄─── Receipt file writer
//! ├── config.rs       ◄─── Optional foodcourt.toml
//! ├── logging.rs      ◄─── Activity log subscriber
//! └── error.rs        ◄─── AppError
//! ```

pub mod bill_number;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod persist;
pub mod session;

use std::io;
use std::path::Path;

use foodcourt_core::catalog::Catalog;
use tracing::{error, info, warn};

use bill_number::ClockSeeded;
use config::{AppConfig, CONFIG_FILE_NAME};
use error::AppError;
use logging::LogTarget;
use session::OrderSession;

/// Runs one ordering session on the process's stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load foodcourt.toml (defaults if absent, defaults + message if bad) │
/// │  2. Open the activity log (stderr if it cannot be opened)               │
/// │  3. Run the OrderSession                                                │
/// │  4. Report a broken console, if any                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Nothing here changes the exit status: the process always completes
/// normally.
pub fn run() {
    let (config, config_error) = match AppConfig::load(Path::new(CONFIG_FILE_NAME)) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(AppError::from(err))),
    };

    if logging::init_tracing(&config.activity_log_path) == LogTarget::Stderr {
        println!("Error opening log file!");
    }

    info!("Starting food court terminal");

    if let Some(err) = config_error {
        eprintln!("{err}; using defaults");
        warn!(%err, "Using default configuration");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = OrderSession::new(
        config,
        Catalog::food_court(),
        stdin.lock(),
        stdout.lock(),
        ClockSeeded,
    );

    match session.run() {
        Ok(outcome) => info!(
            bill_number = %outcome.receipt.bill_number,
            saved = outcome.saved_to.is_some(),
            "Session complete"
        ),
        Err(err) => {
            error!(%err, "Session ended early");
            eprintln!("{err}");
        }
    }
}
