//! Integration Tests for Scrollback Export
//!
//! Verifies the exact text handed to the clipboard and the copy
//! acknowledgment lifecycle.

use std::sync::Arc;
use std::time::Duration;

use termfolio::{
    Classification, ClipboardExporter, ClipboardSink, CommandDescriptor, CommandRegistry, Error,
    ExecutedEntry, HistoryBuffer, MemoryClipboard, Result, TerminalConfig, TerminalSession,
};

struct BrokenClipboard;

impl ClipboardSink for BrokenClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Err(Error::ClipboardUnavailable {
            reason: "no display".to_string(),
        })
    }
}

fn session_with_about_and_skills() -> TerminalSession {
    let registry = CommandRegistry::new(vec![
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
fn test_exact_export_format() {
    let mut history = HistoryBuffer::new();
    history.append(ExecutedEntry::new(
        "about",
        vec!["x".to_string()],
        Classification::Success,
    ));
    history.append(ExecutedEntry::new(
        "skills",
        vec!["y".to_string(), "z".to_string()],
        Classification::Success,
    ));

    assert_eq!(
        ClipboardExporter::serialize(&history),
        "$ about\nx\n\n$ skills\ny\nz"
    );
}

#[test]
fn test_session_export_after_clear() {
    let mut session = session_with_about_and_skills();
    session.submit("clear");
    session.submit("about");
    session.submit("skills");

    let mut clipboard = MemoryClipboard::new();
    let text = session.export_to(&mut clipboard).unwrap();

    assert_eq!(text, "$ about\nx\n\n$ skills\ny\nz");
    assert_eq!(clipboard.contents(), Some("$ about\nx\n\n$ skills\ny\nz"));
    assert_eq!(clipboard.writes(), 1);
}

#[test]
fn test_export_includes_welcome_banner() {
    let mut session = session_with_about_and_skills();
    session.submit("about");
    let text = session.transcript();

    assert!(text.starts_with("$ welcome\nWelcome to my interactive terminal!"));
    assert!(text.ends_with("\n\n$ about\nx"));
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_export_does_not_modify_history() {
    let mut session = session_with_about_and_skills();
    session.submit("about");
    let before = session.history().clone();

    session.export_to(&mut MemoryClipboard::new()).unwrap();
    session.export_to(&mut MemoryClipboard::new()).unwrap();

    assert_eq!(session.history(), &before);
}

#[test]
fn test_copy_acknowledged_without_runtime() {
    let mut session = session_with_about_and_skills();
    session.submit("about");
    session.export_to(&mut MemoryClipboard::new()).unwrap();
    assert!(session.is_copied());

    session.clear_copied();
    assert!(!session.is_copied());
}

#[tokio::test(start_paused = true)]
async fn test_failed_copy_does_not_acknowledge() {
    let mut session = session_with_about_and_skills();
    session.start_timers().unwrap();

    assert!(session.export_to(&mut BrokenClipboard).is_err());
    assert!(!session.is_copied());
}

#[tokio::test(start_paused = true)]
async fn test_copy_acknowledgment_expires() {
    let mut session = session_with_about_and_skills();
    session.start_timers().unwrap();

    session.export_to(&mut MemoryClipboard::new()).unwrap();
    assert!(session.is_copied());

    tokio::task::yield_now().await;
    tokio::time::advance(Duration::from_millis(2001)).await;
    tokio::task::yield_now().await;
    assert!(!session.is_copied());
}
