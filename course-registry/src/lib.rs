//! EduMarket Course Registry
//!
//! Lifecycle of the Course resource: creation with capability issuance,
//! capacity-gated paid enrollment, owner-authorized detail updates and
//! escrow withdrawal, and enrollment-record completion.
//!
//! # Invariants
//!
//! - Seats: `0 <= available <= total_supply`, never double-counting a student
//! - Funds: `escrow_balance == Σ(price over enrollments) − Σ(withdrawals)`
//! - Authorization: every owner-gated mutation requires the one
//!   [`CourseCapability`] issued at creation; there is no identity check
//! - Atomicity: an operation either passes every check and applies every
//!   mutation, or leaves all state untouched and emits nothing

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod error;
pub mod registry;
pub mod types;

// Re-exports
pub use error::{Error, Result};
pub use registry::CourseRegistry;
pub use types::{Course, CourseCapability, EnrollmentRecord};
