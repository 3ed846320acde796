//! Command dispatch
//!
//! Resolution runs an ordered list of rules and the first match wins:
//!
//! 1. `clear` resets the scrollback and records nothing
//! 2. `help` lists every registered command
//! 3. `echo <text>` repeats the text
//! 4. a response-table key prints its canned lines
//! 5. anything else is an unknown command
//!
//! The dispatcher holds no state between calls; it only reads the shared
//! tables.

use std::sync::Arc;

use tracing::debug;

use crate::models::{Classification, ExecutedEntry};
use crate::parser::ParsedInput;
use crate::registry::{CommandRegistry, ResponseTable};

/// Hint printed after an unknown command
pub const NOT_FOUND_HINT: &str = "Type 'help' to see available commands";

/// The rule an input resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Reset the scrollback
    Clear,
    /// List registered commands
    Help,
    /// Repeat the given text
    Echo(&'a str),
    /// Print canned lines
    Canned(&'a [String]),
    /// No rule matched the token
    NotFound(&'a str),
}

impl Resolution<'_> {
    /// Short rule name for logs
    pub fn rule(&self) -> &'static str {
        match self {
            Resolution::Clear => "clear",
            Resolution::Help => "help",
            Resolution::Echo(_) => "echo",
            Resolution::Canned(_) => "canned",
            Resolution::NotFound(_) => "not-found",
        }
    }
}

/// What a dispatch asks the session to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Reset the scrollback without recording an entry
    Clear,
    /// Append this entry
    Append(ExecutedEntry),
}

/// Resolves parsed input against the shared command tables
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
    responses: Arc<ResponseTable>,
    help_column_width: usize,
}

impl Dispatcher {
    pub fn new(
        registry: Arc<CommandRegistry>,
        responses: Arc<ResponseTable>,
        help_column_width: usize,
    ) -> Self {
        Self {
            registry,
            responses,
            help_column_width,
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn responses(&self) -> &ResponseTable {
        &self.responses
    }

    /// Pick the first rule that matches
    pub fn resolve<'a>(&'a self, input: &'a ParsedInput) -> Resolution<'a> {
        if input.token == "clear" {
            return Resolution::Clear;
        }
        if input.token == "help" {
            return Resolution::Help;
        }
        if let Some(text) = &input.echo_text {
            return Resolution::Echo(text);
        }
        if let Some(lines) = self.responses.get(&input.token) {
            return Resolution::Canned(lines);
        }
        Resolution::NotFound(&input.token)
    }

    /// Resolve and build the resulting entry
    pub fn dispatch(&self, input: &ParsedInput) -> DispatchOutcome {
        let resolution = self.resolve(input);
        debug!(
            "Dispatching '{}' via {} rule",
            input.input_line,
            resolution.rule()
        );

        let (output, classification) = match resolution {
            Resolution::Clear => return DispatchOutcome::Clear,
            Resolution::Help => (
                self.registry.help_lines(self.help_column_width),
                Classification::Info,
            ),
            Resolution::Echo(text) => (vec![text.to_string()], Classification::Info),
            Resolution::Canned(lines) => (lines.to_vec(), Classification::Success),
            Resolution::NotFound(token) => (
                vec![
                    format!("Command not found: {}", token),
                    NOT_FOUND_HINT.to_string(),
                ],
                Classification::Error,
            ),
        };

        DispatchOutcome::Append(ExecutedEntry::new(
            input.input_line.clone(),
            output,
            classification,
        ))
    }
}
