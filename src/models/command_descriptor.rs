//! Command Descriptor Model
//!
//! A registered command name and the description shown by `help`.

use serde::{Deserialize, Serialize};

/// A command known to the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Name used for matching and completion
    pub name: String,
    /// One-line description shown by `help`
    pub description: String,
    /// Argument hint shown after the name in help listings (e.g. `[text]`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

impl CommandDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            usage: None,
        }
    }

    /// Attach an argument hint
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    /// Name plus usage hint, as listed by `help`
    pub fn display_name(&self) -> String {
        match &self.usage {
            Some(usage) => format!("{} {}", self.name, usage),
            None => self.name.clone(),
        }
    }

    /// Render the `help` line, padding the display name to `width` columns
    pub fn help_line(&self, width: usize) -> String {
        format!("{:<width$} {}", self.display_name(), self.description, width = width)
    }
}
