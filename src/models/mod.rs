//! Core data models for termfolio
//!
//! Registered command descriptors and the entries that make up a session's
//! scrollback.

pub mod command_descriptor;
pub mod executed_entry;

// Re-exports for convenience
pub use command_descriptor::CommandDescriptor;
pub use executed_entry::{Classification, ExecutedEntry};
