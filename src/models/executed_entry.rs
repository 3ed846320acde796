//! Executed Entry Model
//!
//! Represents a single submitted input line and the output the dispatcher
//! produced for it. Entries are immutable once created and are appended to
//! the session's scrollback in chronological order.

use serde::{Deserialize, Serialize};

/// Presentation tag attached to an executed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// A command from the response table
    Success,
    /// Unknown command
    Error,
    /// Informational output (`help`, `echo`)
    Info,
    /// The synthetic entry shown when a session starts
    Welcome,
}

impl Classification {
    /// Lower-case name used by renderers and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Success => "success",
            Classification::Error => "error",
            Classification::Info => "info",
            Classification::Welcome => "welcome",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One input line and its output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutedEntry {
    input_line: String,
    output_lines: Vec<String>,
    classification: Classification,
}

impl ExecutedEntry {
    /// Create a new entry
    pub fn new(
        input_line: impl Into<String>,
        output_lines: Vec<String>,
        classification: Classification,
    ) -> Self {
        Self {
            input_line: input_line.into(),
            output_lines,
            classification,
        }
    }

    /// The synthetic entry every session starts with
    pub fn welcome() -> Self {
        Self::new(
            "welcome",
            vec![
                "Welcome to my interactive terminal!".to_string(),
                "Type \"help\" to see available commands".to_string(),
                "Type \"clear\" to clear the terminal".to_string(),
                String::new(),
                "Try exploring: about, skills, projects, contact".to_string(),
            ],
            Classification::Welcome,
        )
    }

    /// The line the user submitted
    pub fn input_line(&self) -> &str {
        &self.input_line
    }

    /// Output lines in display order
    pub fn output_lines(&self) -> &[String] {
        &self.output_lines
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// Whether this is the session's synthetic welcome entry
    pub fn is_welcome(&self) -> bool {
        self.classification == Classification::Welcome
    }

    pub fn is_error(&self) -> bool {
        self.classification == Classification::Error
    }

    /// Render as `$ <input>` followed by each output line
    pub fn to_transcript(&self) -> String {
        let mut text = format!("$ {}", self.input_line);
        for line in &self.output_lines {
            text.push('\n');
            text.push_str(line);
        }
        text
    }
}
