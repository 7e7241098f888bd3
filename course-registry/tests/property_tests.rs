//! Property-based tests for course accounting invariants
//!
//! These verify properties that must hold for every sequence of operations,
//! not just specific scenarios.

use course_registry::CourseRegistry;
use marketplace_core::{MemorySink, Payment, Principal};
use proptest::prelude::*;
use std::sync::Arc;

/// One step applied to a single course
#[derive(Debug, Clone)]
enum Op {
    /// Enroll student `n` with an instrument worth `value`
    Enroll { student: u8, value: u64 },
    /// Withdraw `amount` with the matching capability
    Withdraw { amount: u64 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..20, 0u64..300).prop_map(|(student, value)| Op::Enroll { student, value }),
        (0u64..500).prop_map(|amount| Op::Withdraw { amount }),
    ]
}

proptest! {
    /// Property: escrow balance always equals enrollments × price minus
    /// successful withdrawals, and seats stay within bounds, under any
    /// operation sequence.
    #[test]
    fn escrow_accounting_holds(
        price in 1u64..200,
        supply in 1u32..10,
        ops in proptest::collection::vec(op_strategy(), 1..40),
    ) {
        let sink = Arc::new(MemorySink::new());
        let registry = CourseRegistry::new(sink);
        let owner = Principal::new("owner");

        let (course, cap) = registry
            .create_course(owner.clone(), "Course", "", price, supply)
            .unwrap();

        let mut enrolled_ok = 0u64;
        let mut withdrawn_ok = 0u64;

        for op in ops {
            match op {
                Op::Enroll { student, value } => {
                    let mut payment = Payment::new(value);
                    let before = payment.amount();
                    let result = registry.enroll(
                        course.course_id,
                        Principal::new(format!("student-{}", student)),
                        &mut payment,
                    );
                    if result.is_ok() {
                        enrolled_ok += 1;
                        // Exactly the price was taken, never more
                        prop_assert_eq!(payment.amount(), before - price);
                    } else {
                        // Failed enrollment takes nothing
                        prop_assert_eq!(payment.amount(), before);
                    }
                }
                Op::Withdraw { amount } => {
                    if let Ok(funds) =
                        registry.withdraw(&cap, course.course_id, amount, owner.clone())
                    {
                        prop_assert_eq!(funds.amount(), amount);
                        withdrawn_ok += amount;
                    }
                }
            }

            let snapshot = registry.course(course.course_id).unwrap();

            // Seat bounds
            prop_assert!(snapshot.available <= snapshot.total_supply);
            prop_assert_eq!(
                snapshot.enrolled.len() as u32,
                snapshot.total_supply - snapshot.available
            );

            // Funds conservation
            prop_assert_eq!(
                snapshot.escrow.balance(),
                enrolled_ok * price - withdrawn_ok
            );
        }
    }

    /// Property: no principal ever appears twice in the enrolled set, no
    /// matter how often it retries.
    #[test]
    fn no_duplicate_enrollment(
        attempts in proptest::collection::vec(0u8..5, 1..30),
    ) {
        let sink = Arc::new(MemorySink::new());
        let registry = CourseRegistry::new(sink);

        let (course, _cap) = registry
            .create_course(Principal::new("owner"), "Course", "", 10, 100)
            .unwrap();

        let mut distinct = std::collections::HashSet::new();
        for student in attempts {
            let mut payment = Payment::new(10);
            let result = registry.enroll(
                course.course_id,
                Principal::new(format!("student-{}", student)),
                &mut payment,
            );
            // Exactly the first attempt per student succeeds
            prop_assert_eq!(result.is_ok(), distinct.insert(student));
        }

        let snapshot = registry.course(course.course_id).unwrap();
        prop_assert_eq!(snapshot.enrolled.len(), distinct.len());
    }
}
