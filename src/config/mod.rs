//! Configuration management for termfolio
//!
//! Terminal presentation settings, timer durations, and extra canned
//! commands appended to the built-in catalog.

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration structure for termfolio
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Terminal configuration
    pub terminal: TerminalConfig,

    /// Extra commands registered after the built-in catalog
    pub commands: Vec<CustomCommand>,
}

/// Terminal-specific configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Prompt shown before each input line
    pub prompt: String,

    /// Column the `help` descriptions are aligned to
    pub help_column_width: usize,

    /// How long the "copied" acknowledgment stays raised
    pub copy_feedback_ms: u64,

    /// Cursor blink period
    pub cursor_blink_ms: u64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: "visitor@portfolio:~$".to_string(),
            help_column_width: 20,
            copy_feedback_ms: 2000,
            cursor_blink_ms: 500,
        }
    }
}

/// A canned command supplied by configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomCommand {
    /// Command name, matched after lower-casing the input
    pub name: String,
    /// Description listed by `help`
    #[serde(default)]
    pub description: String,
    /// Output lines, printed verbatim
    #[serde(default)]
    pub lines: Vec<String>,
}

/// Widest accepted help column
const MAX_HELP_COLUMN_WIDTH: usize = 80;

impl Config {
    /// Check every field, reporting the first invalid one
    pub fn validate(&self) -> Result<()> {
        if self.terminal.prompt.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "terminal.prompt".to_string(),
                reason: "Prompt cannot be empty".to_string(),
            });
        }

        if self.terminal.help_column_width == 0
            || self.terminal.help_column_width > MAX_HELP_COLUMN_WIDTH
        {
            return Err(Error::ConfigValidationFailed {
                field: "terminal.help_column_width".to_string(),
                reason: format!("Width must be between 1 and {}", MAX_HELP_COLUMN_WIDTH),
            });
        }

        if self.terminal.copy_feedback_ms == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "terminal.copy_feedback_ms".to_string(),
                reason: "Duration must be greater than 0".to_string(),
            });
        }

        if self.terminal.cursor_blink_ms == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "terminal.cursor_blink_ms".to_string(),
                reason: "Duration must be greater than 0".to_string(),
            });
        }

        for (index, command) in self.commands.iter().enumerate() {
            let field = format!("commands[{}].name", index);
            if command.name.is_empty() {
                return Err(Error::ConfigValidationFailed {
                    field,
                    reason: "Command name cannot be empty".to_string(),
                });
            }
            if command.name.chars().any(char::is_whitespace) {
                return Err(Error::ConfigValidationFailed {
                    field,
                    reason: "Command name cannot contain whitespace".to_string(),
                });
            }
            if command.name != command.name.to_lowercase() {
                return Err(Error::ConfigValidationFailed {
                    field,
                    reason: "Command name must be lower-case".to_string(),
                });
            }
            if self.commands[..index].iter().any(|c| c.name == command.name) {
                return Err(Error::DuplicateCommand {
                    name: command.name.clone(),
                });
            }
        }

        Ok(())
    }
}
