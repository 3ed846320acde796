//! Integration Tests for Session Flows
//!
//! These tests drive a terminal session the way a user would: typing,
//! submitting, completing and recalling.

use std::sync::Arc;

use termfolio::{
    create_session, Classification, CommandDescriptor, CommandRegistry, Config, TerminalConfig,
    TerminalSession,
};

fn default_session() -> TerminalSession {
    create_session(&Config::default()).expect("default config is valid")
}

fn small_session() -> TerminalSession {
    let registry = CommandRegistry::new(vec![
        CommandDescriptor::new("help", "Show all available commands"),
        CommandDescriptor::new("about", "Learn more about me"),
        CommandDescriptor::new("skills", "View my technical skills"),
    ])
    .unwrap();
    let responses = [
        ("about", vec!["x".to_string()]),
        ("skills", vec!["y".to_string(), "z".to_string()]),
    ]
    .into_iter()
    .collect();

    TerminalSession::new(
        Arc::new(registry),
        Arc::new(responses),
        TerminalConfig::default(),
    )
}

#[test]
fn test_help_lists_every_command_in_order() {
    let mut session = default_session();
    let help = session.submit("help").unwrap().clone();

    assert_eq!(help.classification(), Classification::Info);
    assert_eq!(help.output_lines().len(), session.registry().len());
    for (line, descriptor) in help.output_lines().iter().zip(session.registry().iter()) {
        assert!(
            line.starts_with(&descriptor.name),
            "help line {:?} should start with {:?}",
            line,
            descriptor.name
        );
    }
}

#[test]
fn test_help_aligns_descriptions() {
    let mut session = default_session();
    let help = session.submit("help").unwrap().clone();

    // The default column width is 20, followed by one separating space.
    for line in help.output_lines() {
        let display_name: String = line.chars().take(20).collect();
        assert_eq!(line.chars().nth(20), Some(' '), "line {:?}", line);
        assert!(!display_name.trim().is_empty());
    }
    assert!(help.output_lines()[13].starts_with("echo [text]"));
}

#[test]
fn test_echo_round_trips_text() {
    let mut session = default_session();
    for text in ["Hello World", "MiXeD CaSe", "  padded", "☕ unicode ↑"] {
        let entry = session.submit(&format!("echo {}", text)).unwrap();
        assert_eq!(entry.output_lines(), [text]);
        assert_eq!(entry.classification(), Classification::Info);
    }
}

#[test]
fn test_echo_with_empty_text() {
    let mut session = default_session();
    let entry = session.submit("echo ").unwrap();
    assert_eq!(entry.output_lines(), [""]);
}

#[test]
fn test_clear_from_any_state() {
    let mut session = default_session();
    session.submit("about");
    session.submit("nope");
    session.submit("echo hi");
    assert_eq!(session.history().len(), 4);

    assert!(session.submit("clear").is_none());
    assert!(session.history().is_empty());

    // Clearing an empty buffer records nothing either.
    assert!(session.submit("Clear").is_none());
    assert!(session.history().is_empty());
}

#[test]
fn test_unknown_command_is_recoverable() {
    let mut session = default_session();
    let entry = session.submit("foobar").unwrap().clone();
    assert_eq!(entry.classification(), Classification::Error);
    assert_eq!(entry.output_lines().len(), 2);
    assert!(entry.output_lines()[0].contains("foobar"));

    let next = session.submit("whoami").unwrap();
    assert_eq!(next.classification(), Classification::Success);
}

#[test]
fn test_autocomplete_scenarios() {
    let mut session = small_session();

    session.set_pending_input("he");
    session.autocomplete();
    assert_eq!(session.pending_input(), "help ");

    session.set_pending_input("zz");
    session.autocomplete();
    assert_eq!(session.pending_input(), "zz");
}

#[test]
fn test_completed_input_can_be_submitted() {
    let mut session = small_session();
    session.set_pending_input("sk");
    assert!(session.autocomplete());

    let entry = session.submit_pending().unwrap();
    assert_eq!(entry.input_line(), "skills");
    assert_eq!(entry.output_lines(), ["y", "z"]);
}

#[test]
fn test_recall_scenarios() {
    let mut session = small_session();
    assert!(!session.recall());
    assert_eq!(session.pending_input(), "");

    session.submit("about");
    assert!(session.recall());
    assert_eq!(session.pending_input(), "about");
}

#[test]
fn test_recall_only_reaches_latest_input() {
    let mut session = small_session();
    session.submit("about");
    session.submit("skills");

    session.recall();
    session.recall();
    assert_eq!(session.pending_input(), "skills");
}

#[test]
fn test_whitespace_only_input_is_ignored() {
    let mut session = default_session();
    let before = session.history().clone();
    for raw in ["", " ", "\t", " \n "] {
        assert!(session.submit(raw).is_none());
    }
    assert_eq!(session.history(), &before);
}

#[test]
fn test_sessions_do_not_share_history() {
    let mut first = default_session();
    let second = default_session();
    first.submit("about");

    assert_eq!(first.history().len(), 2);
    assert_eq!(second.history().len(), 1);
    assert_ne!(first.id(), second.id());
}

#[test]
fn test_recorded_input_is_normalized() {
    let mut session = small_session();
    session.submit("  ABOUT ");
    assert!(session.recall());
    assert_eq!(session.pending_input(), "about");

    session.submit("ECHO Hi There");
    assert!(session.recall());
    assert_eq!(session.pending_input(), "echo Hi There");

    assert!(session.transcript().contains("$ about\nx"));
    assert!(!session.transcript().contains("ABOUT"));
}
