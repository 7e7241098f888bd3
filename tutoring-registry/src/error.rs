//! Error types for tutoring operations

use thiserror::Error;
use uuid::Uuid;

/// Result type for tutoring operations
pub type Result<T> = std::result::Result<T, Error>;

/// Tutoring errors
#[derive(Error, Debug)]
pub enum Error {
    /// Tutor display name must not be empty
    #[error("Tutor name must not be empty")]
    EmptyName,

    /// Referenced tutor does not exist
    #[error("Tutor not found: {0}")]
    TutorNotFound(Uuid),

    /// Referenced service does not exist
    #[error("Service not found: {0}")]
    ServiceNotFound(Uuid),

    /// Referenced session does not exist
    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),

    /// Rating outside the accepted bound
    #[error("Invalid rating {rating}, maximum is {max}")]
    InvalidRating {
        /// Supplied rating
        rating: u8,
        /// Highest accepted rating
        max: u8,
    },

    /// Session already completed; ratings are write-once
    #[error("Session {0} already completed")]
    AlreadyCompleted(Uuid),
}
