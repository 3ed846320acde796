//! Command registry and response table
//!
//! Both tables are built once and then shared read-only (behind `Arc`) by
//! every session. The registry preserves declaration order, which drives
//! `help` listings and autocompletion; the response table maps a command name
//! to its canned output.

use std::collections::HashMap;

use crate::config::CustomCommand;
use crate::error::{Error, Result};
use crate::models::CommandDescriptor;

/// Ordered table of known commands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandRegistry {
    descriptors: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    /// Build a registry, rejecting duplicate names
    pub fn new(descriptors: Vec<CommandDescriptor>) -> Result<Self> {
        for (index, descriptor) in descriptors.iter().enumerate() {
            if descriptors[..index].iter().any(|d| d.name == descriptor.name) {
                return Err(Error::DuplicateCommand {
                    name: descriptor.name.clone(),
                });
            }
        }
        Ok(Self { descriptors })
    }

    /// Descriptors in declaration order
    pub fn descriptors(&self) -> &[CommandDescriptor] {
        &self.descriptors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommandDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// One `help` line per descriptor, aligned to `width`
    pub fn help_lines(&self, width: usize) -> Vec<String> {
        self.descriptors
            .iter()
            .map(|descriptor| descriptor.help_line(width))
            .collect()
    }
}

/// Canned output keyed by command name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseTable {
    responses: HashMap<String, Vec<String>>,
}

impl ResponseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the output for `name`, replacing any previous entry
    pub fn insert(&mut self, name: impl Into<String>, lines: Vec<String>) {
        self.responses.insert(name.into(), lines);
    }

    /// Lines for an exact key
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.responses.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.responses.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<String>)> for ResponseTable {
    fn from_iter<I: IntoIterator<Item = (S, Vec<String>)>>(iter: I) -> Self {
        let mut table = ResponseTable::new();
        for (name, lines) in iter {
            table.insert(name, lines);
        }
        table
    }
}

/// Append configured commands to both tables
///
/// Fails without modifying either table if any name is already registered.
pub fn extend_with_custom(
    registry: &CommandRegistry,
    responses: &ResponseTable,
    commands: &[CustomCommand],
) -> Result<(CommandRegistry, ResponseTable)> {
    let mut descriptors = registry.descriptors.clone();
    let mut table = responses.clone();

    for command in commands {
        if registry.contains(&command.name) || table.contains(&command.name) {
            return Err(Error::DuplicateCommand {
                name: command.name.clone(),
            });
        }
        descriptors.push(CommandDescriptor::new(
            command.name.clone(),
            command.description.clone(),
        ));
        table.insert(command.name.clone(), command.lines.clone());
    }

    Ok((CommandRegistry::new(descriptors)?, table))
}
