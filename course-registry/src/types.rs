//! Course resource types

use chrono::{DateTime, Utc};
use marketplace_core::{EscrowLedger, Principal};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// A course holding seats and an escrow balance
///
/// `course_id`, `name`, `price`, `total_supply`, and `creator` are fixed at
/// creation. `available` only ever decreases; the enrolled set is
/// append-only. The registry holds the authoritative copy; values returned
/// from read operations are snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier, assigned at creation
    pub course_id: Uuid,

    /// Course name
    pub name: String,

    /// Free-text details, replaceable by the capability holder
    pub details: String,

    /// Seat price in integral units (> 0)
    pub price: u64,

    /// Total seat supply (> 0)
    pub total_supply: u32,

    /// Remaining seats (`0..=total_supply`)
    pub available: u32,

    /// Creating principal
    pub creator: Principal,

    /// Escrow holding enrollment payments
    pub escrow: EscrowLedger,

    /// Students already enrolled, at most once each
    pub enrolled: HashSet<Principal>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// Whether the course still accepts enrollment
    pub fn is_open(&self) -> bool {
        self.available > 0
    }
}

/// Unforgeable owner credential for one course
///
/// Issued exactly once, by [`crate::CourseRegistry::create_course`], to the
/// creator. Deliberately not `Clone` and not serializable: the single value
/// in existence is the only way to authorize `update_details` and
/// `withdraw`, and its bound identifier is compared by value at each gated
/// call.
#[derive(Debug, PartialEq, Eq)]
pub struct CourseCapability {
    course_id: Uuid,
}

impl CourseCapability {
    pub(crate) fn issue(course_id: Uuid) -> Self {
        Self { course_id }
    }

    /// Course identifier this capability is bound to
    pub fn course_id(&self) -> Uuid {
        self.course_id
    }
}

/// Durable proof of enrollment, held by the student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    /// Unique record identifier
    pub record_id: Uuid,

    /// Enrolled course
    pub course_id: Uuid,

    /// Holding student; only this principal may mark completion
    pub student: Principal,

    /// Whether the holder has marked the course complete (one-way)
    pub completed: bool,

    /// Enrollment timestamp
    pub enrolled_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_is_open() {
        let mut course = Course {
            course_id: Uuid::new_v4(),
            name: "Rust 101".to_string(),
            details: String::new(),
            price: 100,
            total_supply: 2,
            available: 1,
            creator: Principal::new("alice"),
            escrow: EscrowLedger::new(),
            enrolled: HashSet::new(),
            created_at: Utc::now(),
        };
        assert!(course.is_open());

        course.available = 0;
        assert!(!course.is_open());
    }

    #[test]
    fn test_capability_binding() {
        let course_id = Uuid::new_v4();
        let cap = CourseCapability::issue(course_id);
        assert_eq!(cap.course_id(), course_id);
        assert_ne!(cap.course_id(), Uuid::new_v4());
    }
}
