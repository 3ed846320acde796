//! Command Completion
//!
//! Single-candidate prefix completion against the command registry. The
//! registry is scanned in declaration order and the first name starting with
//! the typed text wins; repeated requests do not cycle through alternatives.

use crate::models::CommandDescriptor;
use crate::registry::CommandRegistry;

/// Completion against a command registry
#[derive(Debug, Clone, Copy)]
pub struct AutocompleteResolver<'a> {
    registry: &'a CommandRegistry,
}

impl<'a> AutocompleteResolver<'a> {
    pub fn new(registry: &'a CommandRegistry) -> Self {
        Self { registry }
    }

    /// First descriptor whose name starts with `partial`, ignoring case
    ///
    /// Surrounding whitespace is ignored; empty input never matches.
    pub fn resolve(&self, partial: &str) -> Option<&'a CommandDescriptor> {
        let prefix = partial.trim().to_lowercase();
        if prefix.is_empty() {
            return None;
        }

        self.registry
            .iter()
            .find(|descriptor| descriptor.name.to_lowercase().starts_with(&prefix))
    }

    /// Replacement input for `partial`: the matched name plus one space
    pub fn complete(&self, partial: &str) -> Option<String> {
        self.resolve(partial)
            .map(|descriptor| format!("{} ", descriptor.name))
    }
}
