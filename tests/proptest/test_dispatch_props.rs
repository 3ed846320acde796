//! Property-based tests for command dispatch
//!
//! These tests generate random input lines and check the resolution rules
//! hold for all of them without panicking.

use proptest::prelude::*;
use termfolio::{create_session, Classification, Config, TerminalSession};

fn session() -> TerminalSession {
    create_session(&Config::default()).unwrap()
}

proptest! {
    #[test]
    fn test_submit_doesnt_panic(s in "\\PC*") {
        let mut session = session();
        let _ = session.submit(&s);
        // Any line is either ignored, cleared, or recorded
    }

    #[test]
    fn test_echo_repeats_text(text in "[ -~]{0,40}[!-~]") {
        let mut session = session();
        let entry = session.submit(&format!("echo {}", text)).unwrap();
        prop_assert_eq!(entry.output_lines(), [text.as_str()]);
        prop_assert_eq!(entry.classification(), Classification::Info);
    }

    #[test]
    fn test_echo_prefix_ignores_case(
        prefix in "[eE][cC][hH][oO]",
        text in "[a-zA-Z0-9]{1,20}",
    ) {
        let mut session = session();
        let entry = session.submit(&format!("{} {}", prefix, text)).unwrap();
        prop_assert_eq!(entry.output_lines(), [text.as_str()]);
        prop_assert_eq!(entry.input_line(), format!("echo {}", text));
    }

    #[test]
    fn test_unknown_tokens_report_error(token in "q[a-z0-9]{0,12}") {
        let mut session = session();
        let entry = session.submit(&token).unwrap();
        prop_assert_eq!(entry.classification(), Classification::Error);
        prop_assert_eq!(entry.output_lines().len(), 2);
        prop_assert_eq!(&entry.output_lines()[0], &format!("Command not found: {}", token));
    }

    #[test]
    fn test_registered_commands_ignore_case_and_padding(
        index in 0usize..16,
        upper in any::<bool>(),
        pad in " {0,3}",
    ) {
        let mut session = session();
        let name = session.registry().descriptors()[index].name.clone();
        prop_assume!(name != "clear");

        let typed = if upper { name.to_uppercase() } else { name.clone() };
        let entry = session.submit(&format!("{}{}{}", pad, typed, pad)).unwrap();
        prop_assert_ne!(entry.classification(), Classification::Error);
        prop_assert_eq!(entry.input_line(), name.as_str());
    }

    #[test]
    fn test_clear_always_empties(lines in prop::collection::vec("[a-z ]{0,12}", 0..10)) {
        let mut session = session();
        for line in &lines {
            session.submit(line);
        }
        prop_assert!(session.submit("clear").is_none());
        prop_assert!(session.history().is_empty());
        prop_assert_eq!(session.pending_input(), "");
    }

    #[test]
    fn test_each_submission_appends_at_most_one_entry(line in "[a-zA-Z ]{0,20}") {
        let mut session = session();
        let before = session.history().len();
        let recorded = session.submit(&line).is_some();

        let after = session.history().len();
        if recorded {
            prop_assert_eq!(after, before + 1);
        } else {
            prop_assert!(after == before || after == 0);
        }
    }
}
