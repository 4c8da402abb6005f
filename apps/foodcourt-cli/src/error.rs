//! # Application Error Type
//!
//! Unified error type for the terminal application.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Error Flow in the Food Court Terminal                  │
//! │                                                                         │
//! │  Bad choice / quantity ── ValidationError ──► message, re-prompt        │
//! │  Bad tip ──────────────── ValidationError ──► message, tip = $0.00      │
//! │  Receipt file ─────────── AppError::Persist ► message, run continues    │
//! │  Config file ──────────── AppError::Config ─► message, defaults used    │
//! │  Console stream ───────── AppError::Console ► session ends, reported    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Reading stdin or writing stdout failed.
    #[error("Console I/O failed: {0}")]
    Console(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The receipt could not be written to disk.
    #[error("Could not write receipt to {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persist_error_message() {
        let err = AppError::Persist {
            path: PathBuf::from("/nope/bill.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Could not write receipt to /nope/bill.txt: denied");
    }

    #[test]
    fn test_io_error_converts_to_console() {
        let err: AppError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, AppError::Console(_)));
    }
}
