//! Tutoring resource types

use chrono::{DateTime, Utc};
use marketplace_core::Principal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tutor profile, immutable after creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorProfile {
    /// Unique identifier
    pub tutor_id: Uuid,

    /// Display name
    pub name: String,

    /// Subjects this tutor covers
    pub subjects: Vec<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A service offering by a tutor
///
/// The rate is informational; no payment flows through tutoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutoringService {
    /// Unique identifier
    pub service_id: Uuid,

    /// Offering tutor
    pub tutor_id: Uuid,

    /// Subject of the offering
    pub subject: String,

    /// Hourly/session rate in integral units
    pub rate: u64,

    /// Whether the service currently accepts requests
    pub available: bool,
}

/// A tutoring session between a tutor and a student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutoringSession {
    /// Unique identifier
    pub session_id: Uuid,

    /// Tutor for the session
    pub tutor_id: Uuid,

    /// Requesting student
    pub student: Principal,

    /// One-way completion flag
    pub completed: bool,

    /// 0 until completion, then the caller-supplied value
    pub rating: u8,

    /// Request timestamp
    pub requested_at: DateTime<Utc>,
}
