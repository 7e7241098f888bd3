//! Error types for course operations
//!
//! Every variant is a precondition violation reported synchronously to the
//! caller; nothing is partially applied and nothing is retried.

use thiserror::Error;
use uuid::Uuid;

/// Result type for course operations
pub type Result<T> = std::result::Result<T, Error>;

/// Course errors
#[derive(Error, Debug)]
pub enum Error {
    /// Course price must be positive
    #[error("Invalid price: {0}")]
    InvalidPrice(u64),

    /// Seat supply must be positive
    #[error("Invalid supply: {0}")]
    InvalidSupply(u32),

    /// Course not found
    #[error("Course not found: {0}")]
    CourseNotFound(Uuid),

    /// No seats remain
    #[error("Capacity exhausted for course {0}")]
    CapacityExhausted(Uuid),

    /// Payment instrument worth less than the course price
    #[error("Insufficient payment: have {available}, need {required}")]
    InsufficientPayment {
        /// Value held by the instrument
        available: u64,
        /// Course price
        required: u64,
    },

    /// Student already present in the enrolled set
    #[error("Student {student} already enrolled in course {course_id}")]
    AlreadyEnrolled {
        /// Target course
        course_id: Uuid,
        /// Duplicate student
        student: String,
    },

    /// Capability/course mismatch, or completion by a non-holder
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Withdrawal amount is zero or exceeds the escrow balance
    #[error("Invalid amount: requested {requested}, escrow balance {balance}")]
    InvalidAmount {
        /// Requested withdrawal
        requested: u64,
        /// Current escrow balance
        balance: u64,
    },

    /// Enrollment record not found
    #[error("Enrollment record not found: {0}")]
    EnrollmentNotFound(Uuid),

    /// Enrollment already marked complete
    #[error("Enrollment {0} already completed")]
    AlreadyCompleted(Uuid),
}
