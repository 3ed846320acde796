//! termfolio - command simulation engine for a portfolio terminal
//!
//! This library implements the toy command line embedded in a personal
//! portfolio site. Typed text is resolved against a fixed command table and
//! recorded in a scrollback of input/output pairs, with history recall,
//! prefix autocompletion and clipboard export.
//!
//! ## Module Organization
//!
//! ### Engine
//!
//! - [`parser`] - Input normalization
//! - [`dispatch`] - Ordered resolution rules (clear, help, echo, canned, not found)
//! - [`history`] - Append-only scrollback
//! - [`completion`] - First-match prefix completion
//! - [`clipboard`] - Scrollback export
//! - [`session`] - Per-user state and event routing
//!
//! ### Tables
//!
//! - [`registry`] - Command registry and response table
//! - [`catalog`] - Built-in portfolio commands
//!
//! ### Support
//!
//! - [`config`] - Configuration loading and validation
//! - [`events`] - Observer hook for renderers
//! - [`timers`] - Cursor blink and copy acknowledgment
//! - [`models`] - Data structures (CommandDescriptor, ExecutedEntry)
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```
//! use termfolio::{create_session, Config};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = create_session(&Config::default())?;
//! session.submit("whoami");
//! assert_eq!(session.history().last().unwrap().output_lines(), ["alexchen"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! A session is driven by one thread; each action runs to completion before
//! the next. Command tables are shared read-only between sessions. Only the
//! cosmetic timers run on tokio tasks, and they stop when the session does.

pub mod catalog;
pub mod clipboard;
pub mod completion;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod history;
pub mod models;
pub mod parser;
pub mod registry;
pub mod session;
pub mod timers;

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

// Re-exports for core functionality
pub use clipboard::{ClipboardExporter, ClipboardSink, MemoryClipboard, SystemClipboard};
pub use completion::AutocompleteResolver;
pub use config::loader::ConfigLoader;
pub use config::{Config, TerminalConfig};
pub use dispatch::{DispatchOutcome, Dispatcher, Resolution};
pub use error::{Error, Result};
pub use events::{SessionEvent, SessionObserver};
pub use history::HistoryBuffer;
pub use models::{Classification, CommandDescriptor, ExecutedEntry};
pub use parser::{parse_input, ParsedInput};
pub use registry::{CommandRegistry, ResponseTable};
pub use session::{SessionStats, TerminalSession, TerminalState};

/// The current version of termfolio from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Load configuration from `path`, or from the default locations
///
/// An explicit path must load; the default search falls back to defaults
/// when the file is missing or unreadable.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let config = ConfigLoader::load_from_path(path)?;
            info!("Configuration loaded from {}", path.display());
            Ok(config)
        }
        None => match ConfigLoader::load() {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("Failed to load configuration: {}. Using defaults", e);
                Ok(Config::default())
            }
        },
    }
}

/// Build the shared command tables for `config`
///
/// Without custom commands the process-wide defaults are reused.
pub fn build_tables(config: &Config) -> Result<(Arc<CommandRegistry>, Arc<ResponseTable>)> {
    let registry = catalog::shared_registry();
    let responses = catalog::shared_responses();

    if config.commands.is_empty() {
        return Ok((registry, responses));
    }

    let (registry, responses) =
        registry::extend_with_custom(&registry, &responses, &config.commands)?;
    info!("Registered {} custom commands", config.commands.len());
    Ok((Arc::new(registry), Arc::new(responses)))
}

/// Validate `config` and open a session over its command tables
pub fn create_session(config: &Config) -> Result<TerminalSession> {
    config.validate()?;
    let (registry, responses) = build_tables(config)?;
    Ok(TerminalSession::new(
        registry,
        responses,
        config.terminal.clone(),
    ))
}
