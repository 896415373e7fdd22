//! Property-based tests for action parsing and default deny.

use proptest::prelude::*;
use warden_policy::model::action::{concern_name, policy_name, sub_action};
use warden_policy::Policy;

proptest! {
    #[test]
    fn prop_fresh_policy_denies_every_action(action in ".*") {
        let policy: Policy<(), ()> = Policy::new();
        prop_assert!(!policy.authorize(&(), &action, &(), None).unwrap());
    }

    #[test]
    fn prop_policy_name_never_contains_colon(action in ".*") {
        prop_assert!(!policy_name(&action).contains(':'));
    }

    #[test]
    fn prop_concern_name_is_final_segment(action in ".*") {
        let concern = concern_name(&action);
        prop_assert!(!concern.contains(':'));
        prop_assert!(action.ends_with(concern));
    }

    #[test]
    fn prop_sub_action_drops_exactly_one_segment(
        namespace in "[a-z]{1,8}",
        rest in "[a-z]{1,8}(:[a-z]{1,8}){0,3}",
    ) {
        let action = format!("{}:{}", namespace, rest);
        let reduced = sub_action(&action);

        // The reduced action resolves to the same concern
        prop_assert_eq!(concern_name(&reduced), concern_name(&action));
    }

    #[test]
    fn prop_namespaced_registration_round_trips(
        namespace in "[a-z]{1,8}",
        concern in "[a-z]{1,8}",
    ) {
        let mut policy: Policy<(), ()> = Policy::new();
        policy.include_with(namespace.as_str(), |nested| {
            nested.register(concern.as_str(), |_request| Ok(true));
        });

        let action = format!("{}:{}", namespace, concern);
        prop_assert!(policy.authorize(&(), &action, &(), None).unwrap());
    }
}
