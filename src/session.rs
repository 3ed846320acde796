//! Interactive terminal session
//!
//! [`TerminalSession`] owns the scrollback and the pending input line and
//! routes user actions (submit, Tab, ArrowUp, copy) through the parser,
//! dispatcher, completion and export components. Each action runs to
//! completion before returning; observers are told about every change.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};
use uuid::Uuid;

use crate::clipboard::{ClipboardExporter, ClipboardSink};
use crate::completion::AutocompleteResolver;
use crate::config::TerminalConfig;
use crate::dispatch::{DispatchOutcome, Dispatcher};
use crate::error::Result;
use crate::events::{ObserverList, SessionEvent, SessionObserver};
use crate::history::HistoryBuffer;
use crate::models::ExecutedEntry;
use crate::parser::parse_input;
use crate::registry::{CommandRegistry, ResponseTable};
use crate::timers::{CopyAcknowledgment, SessionTimers};

/// Mutable state of one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalState {
    /// Scrollback, oldest first
    pub history: HistoryBuffer,
    /// Text currently in the input field
    pub pending_input: String,
}

impl TerminalState {
    /// Fresh state: the welcome banner and an empty input line
    pub fn new() -> Self {
        Self {
            history: HistoryBuffer::with_welcome(),
            pending_input: String::new(),
        }
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}

/// Footer counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    /// Commands in the registry
    pub available_commands: usize,
    /// Entries currently in the scrollback, welcome banner included
    pub executed_entries: usize,
}

/// One user's interactive terminal
#[derive(Debug)]
pub struct TerminalSession {
    id: Uuid,
    state: TerminalState,
    dispatcher: Dispatcher,
    config: TerminalConfig,
    observers: ObserverList,
    copy_ack: CopyAcknowledgment,
    timers: Option<SessionTimers>,
}

impl TerminalSession {
    /// Create a session over shared command tables
    pub fn new(
        registry: Arc<CommandRegistry>,
        responses: Arc<ResponseTable>,
        config: TerminalConfig,
    ) -> Self {
        let id = Uuid::new_v4();
        info!(
            "Session {} started with {} commands",
            id,
            registry.len()
        );
        Self {
            id,
            state: TerminalState::new(),
            dispatcher: Dispatcher::new(registry, responses, config.help_column_width),
            copy_ack: CopyAcknowledgment::new(Duration::from_millis(config.copy_feedback_ms)),
            config,
            observers: ObserverList::new(),
            timers: None,
        }
    }

    /// Start the cursor blink and the automatic copy-acknowledgment reset
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_timers(&mut self) -> Result<()> {
        if self.timers.is_none() {
            let timers = SessionTimers::start(&self.config)?;
            self.copy_ack.attach_timer(timers.handle().clone());
            self.timers = Some(timers);
        }
        Ok(())
    }

    /// Register a renderer or other listener
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.subscribe(Box::new(observer));
    }

    /// Handle Enter
    ///
    /// Returns the appended entry, or `None` when nothing was recorded
    /// (blank input or `clear`).
    pub fn submit(&mut self, raw: &str) -> Option<&ExecutedEntry> {
        let parsed = parse_input(raw)?;
        if !self.copy_ack.is_timed() {
            self.copy_ack.clear();
        }

        match self.dispatcher.dispatch(&parsed) {
            DispatchOutcome::Clear => {
                self.state.history.reset();
                self.observers.notify(&SessionEvent::HistoryCleared);
                self.replace_pending_input(String::new());
                None
            }
            DispatchOutcome::Append(entry) => {
                self.state.history.append(entry.clone());
                self.observers
                    .notify(&SessionEvent::EntryAppended { entry });
                self.replace_pending_input(String::new());
                self.state.history.last()
            }
        }
    }

    /// Submit whatever is in the input field
    pub fn submit_pending(&mut self) -> Option<&ExecutedEntry> {
        let raw = self.state.pending_input.clone();
        self.submit(&raw)
    }

    /// Replace the input field (typing, quick-command buttons)
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.replace_pending_input(text.into());
    }

    /// Handle Tab: complete the input to the first matching command
    ///
    /// Returns whether the input changed.
    pub fn autocomplete(&mut self) -> bool {
        let completed =
            AutocompleteResolver::new(self.dispatcher.registry()).complete(&self.state.pending_input);
        match completed {
            Some(text) => {
                debug!("Completed '{}' to '{}'", self.state.pending_input, text);
                self.replace_pending_input(text);
                true
            }
            None => false,
        }
    }

    /// Handle ArrowUp: put the most recent input back in the field
    ///
    /// Returns whether anything was recalled.
    pub fn recall(&mut self) -> bool {
        match self.state.history.last_non_welcome_input() {
            Some(input) => {
                let input = input.to_string();
                self.replace_pending_input(input);
                true
            }
            None => false,
        }
    }

    /// Handle the copy button
    ///
    /// On success the copy acknowledgment is raised. With timers running it
    /// lowers itself after `copy_feedback_ms`; otherwise it stays raised
    /// until the next submission or [`TerminalSession::clear_copied`].
    pub fn export_to(&mut self, sink: &mut dyn ClipboardSink) -> Result<String> {
        let text = ClipboardExporter::export(&self.state.history, sink)?;
        self.copy_ack.trigger();
        self.observers
            .notify(&SessionEvent::Copied { bytes: text.len() });
        Ok(text)
    }

    /// Serialized scrollback, as it would be copied
    pub fn transcript(&self) -> String {
        ClipboardExporter::serialize(&self.state.history)
    }

    /// Whether the "copied" acknowledgment is raised
    pub fn is_copied(&self) -> bool {
        self.copy_ack.is_copied()
    }

    /// Lower the "copied" acknowledgment
    pub fn clear_copied(&mut self) {
        self.copy_ack.clear();
    }

    /// Cursor visibility; steady when timers are not running
    pub fn cursor_visible(&self) -> bool {
        self.timers.as_ref().map_or(true, SessionTimers::cursor_visible)
    }

    /// Cancel timers; the session remains usable without them
    pub fn shutdown(&mut self) {
        if let Some(mut timers) = self.timers.take() {
            timers.shutdown();
        }
        self.copy_ack.detach_timer();
        info!(
            "Session {} closed after {} entries",
            self.id,
            self.state.history.len()
        );
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &TerminalState {
        &self.state
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.state.history
    }

    pub fn pending_input(&self) -> &str {
        &self.state.pending_input
    }

    pub fn prompt(&self) -> &str {
        &self.config.prompt
    }

    pub fn registry(&self) -> &CommandRegistry {
        self.dispatcher.registry()
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            available_commands: self.dispatcher.registry().len(),
            executed_entries: self.state.history.len(),
        }
    }

    fn replace_pending_input(&mut self, input: String) {
        if self.state.pending_input == input {
            return;
        }
        self.state.pending_input = input;
        self.observers.notify(&SessionEvent::PendingInputChanged {
            input: self.state.pending_input.clone(),
        });
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Some(mut timers) = self.timers.take() {
            timers.shutdown();
        }
    }
}
