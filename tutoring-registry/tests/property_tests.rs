//! Property-based tests for session rating invariants

use marketplace_core::{MemorySink, Principal, TutoringConfig};
use proptest::prelude::*;
use std::sync::Arc;
use tutoring_registry::TutoringRegistry;

proptest! {
    /// Property: whatever sequence of ratings is thrown at a session,
    /// exactly one in-bound rating sticks and it is the first accepted one.
    #[test]
    fn rating_is_write_once(ratings in proptest::collection::vec(0u8..10, 1..20)) {
        let sink = Arc::new(MemorySink::new());
        let registry = TutoringRegistry::new(TutoringConfig::default(), sink);

        let tutor = registry
            .create_tutor_profile("Tutor", vec!["algebra".to_string()])
            .unwrap();
        let session = registry
            .request_session(tutor.tutor_id, Principal::new("student"))
            .unwrap();

        let mut accepted: Option<u8> = None;
        for rating in ratings {
            let result = registry.complete_session(session.session_id, rating);
            match accepted {
                // Once completed, every retry is rejected
                Some(_) => prop_assert!(result.is_err()),
                None => {
                    if rating <= 5 {
                        prop_assert!(result.is_ok());
                        accepted = Some(rating);
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
            }
        }

        let snapshot = registry.session(session.session_id).unwrap();
        match accepted {
            Some(rating) => {
                prop_assert!(snapshot.completed);
                prop_assert_eq!(snapshot.rating, rating);
            }
            None => {
                prop_assert!(!snapshot.completed);
                prop_assert_eq!(snapshot.rating, 0);
            }
        }
    }
}
