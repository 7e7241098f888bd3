//! Identity registry
//!
//! Keyed store of user records. The only invariant is one record per
//! principal; records are immutable after registration.

use crate::{
    error::{Error, Result},
    events::{EventSink, MarketEvent},
    types::{Principal, Role, UserRecord},
};
use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;

/// Keyed store of registered users
pub struct IdentityRegistry {
    users: DashMap<Principal, UserRecord>,
    sink: Arc<dyn EventSink>,
}

impl IdentityRegistry {
    /// Create an empty registry emitting facts to `sink`
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            users: DashMap::new(),
            sink,
        }
    }

    /// Register a user record for `principal`
    ///
    /// Fails with [`Error::DuplicatePrincipal`] if a record already exists.
    pub fn register(
        &self,
        principal: Principal,
        display_name: impl Into<String>,
        role: Role,
        pubkey: Vec<u8>,
    ) -> Result<UserRecord> {
        let record = UserRecord {
            principal: principal.clone(),
            display_name: display_name.into(),
            role,
            pubkey,
            registered_at: Utc::now(),
        };

        // Entry-level insert keeps concurrent registrations of the same
        // principal strictly ordered: exactly one wins
        match self.users.entry(principal.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => {
                tracing::warn!(principal = %principal, "Duplicate registration rejected");
                Err(Error::DuplicatePrincipal(principal.to_string()))
            }
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(record.clone());
                tracing::info!(principal = %principal, role = %role, "User registered");
                self.sink.emit(MarketEvent::UserRegistered { principal });
                Ok(record)
            }
        }
    }

    /// Get a user record by principal
    pub fn user(&self, principal: &Principal) -> Option<UserRecord> {
        self.users.get(principal).map(|r| r.clone())
    }

    /// Number of registered users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

impl std::fmt::Debug for IdentityRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityRegistry")
            .field("users", &self.users.len())
            .finish()
    }
}
