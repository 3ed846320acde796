//! Property-based tests for command completion

use proptest::prelude::*;
use termfolio::catalog::default_registry;
use termfolio::{create_session, AutocompleteResolver, Config};

proptest! {
    #[test]
    fn test_complete_doesnt_panic(s in "\\PC*") {
        let registry = default_registry();
        let _ = AutocompleteResolver::new(&registry).complete(&s);
    }

    #[test]
    fn test_completion_extends_prefix(partial in "[a-z]{1,6}") {
        let registry = default_registry();
        let resolver = AutocompleteResolver::new(&registry);

        match resolver.complete(&partial) {
            Some(completed) => {
                prop_assert!(completed.starts_with(&partial));
                prop_assert!(completed.ends_with(' '));
                prop_assert!(registry.contains(completed.trim_end()));
            }
            None => {
                prop_assert!(registry.iter().all(|d| !d.name.starts_with(&partial)));
            }
        }
    }

    #[test]
    fn test_completion_picks_first_match(partial in "[a-z]{1,3}") {
        let registry = default_registry();
        let resolver = AutocompleteResolver::new(&registry);

        if let Some(found) = resolver.resolve(&partial) {
            let first = registry
                .iter()
                .position(|d| d.name.starts_with(&partial))
                .unwrap();
            prop_assert_eq!(&registry.descriptors()[first], found);
        }
    }

    #[test]
    fn test_completion_ignores_case(partial in "[a-z]{1,4}") {
        let registry = default_registry();
        let resolver = AutocompleteResolver::new(&registry);
        prop_assert_eq!(
            resolver.complete(&partial),
            resolver.complete(&partial.to_uppercase())
        );
    }

    #[test]
    fn test_unmatched_input_is_left_alone(partial in "[xyz0-9]{1,8}") {
        let mut session = create_session(&Config::default()).unwrap();
        session.set_pending_input(&partial);
        prop_assert!(!session.autocomplete());
        prop_assert_eq!(session.pending_input(), partial.as_str());
    }
}
