//! EduMarket Tutoring Registry
//!
//! Tutor profiles, service offerings, and the session request/completion
//! lifecycle with one-time rating. Structurally the same pattern as the
//! course registry, without an escrow: service rates are informational.
//!
//! # Invariants
//!
//! - A session's `completed` flag flips false → true exactly once; the
//!   rating is written at that same transition and never again
//! - Services and sessions always reference an existing tutor
//! - Ratings are bounded by the configured maximum

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
pub use registry::TutoringRegistry;
pub use types::{TutorProfile, TutoringService, TutoringSession};
