//! Core identity types
//!
//! All types are designed for:
//! - Deterministic serialization (serde)
//! - Memory safety (no unsafe code)
//! - Exact arithmetic (u64 integral units for money)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Principal identifier (account/address of an external identity)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal(String);

impl Principal {
    /// Create new principal
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role tag attached to a user record at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Role {
    /// Enrolls in courses and requests tutoring sessions
    Student,
    /// Creates courses
    Instructor,
    /// Offers tutoring services
    Tutor,
}

impl Role {
    /// Role tag as a string
    pub fn tag(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
            Role::Tutor => "tutor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Registered user record
///
/// Created once per principal and immutable thereafter. The core consumes
/// these only to attribute authorship and ownership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Principal this record belongs to
    pub principal: Principal,

    /// Display name
    pub display_name: String,

    /// Role tag
    pub role: Role,

    /// Public key material (opaque bytes, not interpreted by the core)
    pub pubkey: Vec<u8>,

    /// Registration timestamp
    pub registered_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_display() {
        let p = Principal::new("0xabc123");
        assert_eq!(p.as_str(), "0xabc123");
        assert_eq!(p.to_string(), "0xabc123");
    }

    #[test]
    fn test_role_tag() {
        assert_eq!(Role::Student.tag(), "student");
        assert_eq!(Role::Tutor.to_string(), "tutor");
    }
}
