//! Input line parsing
//!
//! Normalizes a raw input line for dispatch: surrounding whitespace is
//! trimmed and the line is lower-cased. The argument text of `echo` keeps
//! its original case and inner spacing, both for output and in the
//! recorded input line.

/// Prefix that introduces echo text, including the separating space
const ECHO_PREFIX: &str = "echo ";

/// A dispatch-ready input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Normalized input recorded in the scrollback: the lower-cased line,
    /// with any echo text spliced back in verbatim
    pub input_line: String,
    /// Lower-cased input used for matching
    pub token: String,
    /// Text after `echo `, present only for echo commands
    pub echo_text: Option<String>,
}

impl ParsedInput {
    pub fn is_echo(&self) -> bool {
        self.echo_text.is_some()
    }
}

/// Parse a raw line, returning `None` for empty or whitespace-only input
pub fn parse_input(raw: &str) -> Option<ParsedInput> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let token = trimmed.to_lowercase();
    let echo_text = echo_remainder(trimmed, &token);

    let input_line = match echo_text.as_deref() {
        Some(text) if !text.is_empty() => format!("{}{}", ECHO_PREFIX, text),
        _ => token.clone(),
    };

    Some(ParsedInput {
        input_line,
        token,
        echo_text,
    })
}

/// Text following `echo `, or an empty string for a bare `echo`
fn echo_remainder(trimmed: &str, token: &str) -> Option<String> {
    if token == "echo" {
        return Some(String::new());
    }

    match trimmed.get(..ECHO_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(ECHO_PREFIX) => {
            Some(trimmed[ECHO_PREFIX.len()..].to_string())
        }
        _ => None,
    }
}
