//! Session notifications
//!
//! A session announces every state change through [`SessionEvent`]s so that a
//! rendering layer can redraw without the engine knowing how it renders.

use crate::models::ExecutedEntry;

/// A change in session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// An entry was added to the scrollback
    EntryAppended { entry: ExecutedEntry },
    /// The scrollback was emptied by `clear`
    HistoryCleared,
    /// The pending input line changed (typing, completion, recall, submit)
    PendingInputChanged { input: String },
    /// The scrollback was written to the clipboard
    Copied { bytes: usize },
}

impl SessionEvent {
    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            SessionEvent::EntryAppended { .. } => "entry-appended",
            SessionEvent::HistoryCleared => "history-cleared",
            SessionEvent::PendingInputChanged { .. } => "pending-input-changed",
            SessionEvent::Copied { .. } => "copied",
        }
    }
}

/// Receives session events
pub trait SessionObserver {
    fn on_event(&mut self, event: &SessionEvent);
}

impl<F> SessionObserver for F
where
    F: FnMut(&SessionEvent),
{
    fn on_event(&mut self, event: &SessionEvent) {
        self(event)
    }
}

/// Fan-out list of observers
#[derive(Default)]
pub struct ObserverList {
    observers: Vec<Box<dyn SessionObserver>>,
}

impl ObserverList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    /// Deliver `event` to every observer in subscription order
    pub fn notify(&mut self, event: &SessionEvent) {
        for observer in &mut self.observers {
            observer.on_event(event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("observers", &self.observers.len())
            .finish()
    }
}
