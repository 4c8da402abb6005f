//! # Activity Log
//!
//! Every notable step of a session (menu shown, item ordered, invalid
//! entry, bill printed, ...) is a `tracing` event. The subscriber writes them
//! to the activity log file in append mode so that stdout carries nothing but
//! the interactive prompts.
//!
//! ## Log Levels
//! - Default: INFO
//! - `RUST_LOG=debug` also records session state transitions

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Where activity ended up being logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    File,
    /// The log file could not be opened.
    Stderr,
}

/// Opens the activity log for appending, creating it if needed.
pub fn open_activity_log(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Builds the fmt subscriber used for the activity log.
pub fn activity_subscriber<W>(writer: W, filter: EnvFilter) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(writer)
        .finish()
}

/// Installs the global subscriber.
///
/// Falls back to stderr when the log file cannot be opened.
pub fn init_tracing(log_path: &Path) -> LogTarget {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (target, result) = match open_activity_log(log_path) {
        Ok(file) => (
            LogTarget::File,
            tracing::subscriber::set_global_default(activity_subscriber(Mutex::new(file), filter)),
        ),
        Err(_) => (
            LogTarget::Stderr,
            tracing::subscriber::set_global_default(activity_subscriber(io::stderr, filter)),
        ),
    };

    // Already installed: the first subscriber stays in place.
    if let Err(err) = result {
        tracing::warn!(%err, path = %log_path.display(), "Activity log subscriber already installed");
    }
    target
}
