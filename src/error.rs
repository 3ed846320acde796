//! Error types and Result aliases for termfolio
//!
//! Unknown commands are not errors at this level: they are recorded in the
//! scrollback as `error`-classified entries. The variants here cover the
//! ambient surfaces around the engine (configuration files and the clipboard).

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for termfolio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for termfolio
#[derive(Debug, Error)]
pub enum Error {
    // === Configuration errors ===
    /// Failed to load configuration file
    #[error("Failed to load config from '{}': {reason}", path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Configuration file not found
    #[error("Configuration file not found")]
    ConfigNotFound,

    /// Failed to parse configuration
    #[error("Failed to parse {format} config: {reason}")]
    ConfigParseFailed { format: String, reason: String },

    /// Configuration validation failed
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    /// A configured command collides with one already registered
    #[error("Command '{name}' is already registered")]
    DuplicateCommand { name: String },

    // === Clipboard errors ===
    /// No clipboard could be opened on this system
    #[error("Clipboard unavailable: {reason}")]
    ClipboardUnavailable { reason: String },

    /// The clipboard rejected the write
    #[error("Failed to write to clipboard: {reason}")]
    ClipboardWriteFailed { reason: String },

    // === Runtime errors ===
    /// Session timers were started outside a tokio runtime
    #[error("Session timers unavailable: {reason}")]
    TimersUnavailable { reason: String },

    // === I/O errors ===
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
