//! Tutoring registry operations
//!
//! Same entry-guard discipline as the course registry: preconditions run
//! under the resource's map entry, mutations follow only when every check
//! passes, and the fact is emitted before the guard drops.

use crate::{
    error::{Error, Result},
    types::{TutorProfile, TutoringService, TutoringSession},
};
use chrono::Utc;
use dashmap::DashMap;
use marketplace_core::{EventSink, MarketEvent, Metrics, Principal, TutoringConfig};
use std::sync::Arc;
use uuid::Uuid;

/// Registry of tutors, service offerings, and sessions
pub struct TutoringRegistry {
    /// Tutor profiles by identifier
    tutors: DashMap<Uuid, TutorProfile>,

    /// Service offerings by identifier
    services: DashMap<Uuid, TutoringService>,

    /// Sessions by identifier
    sessions: DashMap<Uuid, TutoringSession>,

    /// Fact observer
    sink: Arc<dyn EventSink>,

    /// Optional metrics collector
    metrics: Option<Metrics>,

    /// Rating bound configuration
    config: TutoringConfig,
}

impl TutoringRegistry {
    /// Create an empty registry emitting facts to `sink`
    pub fn new(config: TutoringConfig, sink: Arc<dyn EventSink>) -> Self {
        Self {
            tutors: DashMap::new(),
            services: DashMap::new(),
            sessions: DashMap::new(),
            sink,
            metrics: None,
            config,
        }
    }

    /// Attach a metrics collector
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create a tutor profile
    ///
    /// Fails with [`Error::EmptyName`] when the display name is empty.
    pub fn create_tutor_profile(
        &self,
        name: impl Into<String>,
        subjects: Vec<String>,
    ) -> Result<TutorProfile> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        let profile = TutorProfile {
            tutor_id: Uuid::new_v4(),
            name,
            subjects,
            created_at: Utc::now(),
        };
        self.tutors.insert(profile.tutor_id, profile.clone());

        tracing::info!(tutor_id = %profile.tutor_id, name = %profile.name, "Tutor profile created");
        self.sink.emit(MarketEvent::TutorProfileCreated {
            tutor_id: profile.tutor_id,
        });

        Ok(profile)
    }

    /// Offer a service for an existing tutor
    ///
    /// New services start available.
    pub fn offer_service(
        &self,
        tutor_id: Uuid,
        subject: impl Into<String>,
        rate: u64,
    ) -> Result<TutoringService> {
        if !self.tutors.contains_key(&tutor_id) {
            return Err(Error::TutorNotFound(tutor_id));
        }

        let service = TutoringService {
            service_id: Uuid::new_v4(),
            tutor_id,
            subject: subject.into(),
            rate,
            available: true,
        };
        self.services.insert(service.service_id, service.clone());

        tracing::info!(
            service_id = %service.service_id,
            tutor_id = %tutor_id,
            subject = %service.subject,
            rate,
            "Tutoring service offered"
        );
        self.sink.emit(MarketEvent::TutoringServiceOffered {
            service_id: service.service_id,
            tutor_id,
        });

        Ok(service)
    }

    /// Request a session with an existing tutor
    ///
    /// The session starts incomplete with rating 0.
    pub fn request_session(&self, tutor_id: Uuid, student: Principal) -> Result<TutoringSession> {
        if !self.tutors.contains_key(&tutor_id) {
            return Err(Error::TutorNotFound(tutor_id));
        }

        let session = TutoringSession {
            session_id: Uuid::new_v4(),
            tutor_id,
            student: student.clone(),
            completed: false,
            rating: 0,
            requested_at: Utc::now(),
        };
        self.sessions.insert(session.session_id, session.clone());

        tracing::info!(
            session_id = %session.session_id,
            tutor_id = %tutor_id,
            student = %student,
            "Tutoring session requested"
        );
        self.sink.emit(MarketEvent::TutoringSessionRequested {
            session_id: session.session_id,
            tutor_id,
            student,
        });

        Ok(session)
    }

    /// Complete a session, setting its one-time rating
    ///
    /// The completed flag flips false → true exactly once; a repeat call
    /// fails [`Error::AlreadyCompleted`] rather than overwriting the
    /// rating. The rating must not exceed the configured maximum.
    pub fn complete_session(&self, session_id: Uuid, rating: u8) -> Result<()> {
        let mut session = self
            .sessions
            .get_mut(&session_id)
            .ok_or(Error::SessionNotFound(session_id))?;

        if session.completed {
            return Err(Error::AlreadyCompleted(session_id));
        }
        if rating > self.config.max_rating {
            return Err(Error::InvalidRating {
                rating,
                max: self.config.max_rating,
            });
        }

        session.completed = true;
        session.rating = rating;

        tracing::info!(session_id = %session_id, rating, "Tutoring session completed");
        self.sink.emit(MarketEvent::TutoringSessionCompleted {
            session_id,
            rating,
        });
        if let Some(m) = &self.metrics {
            m.record_session_completed();
        }

        Ok(())
    }

    /// Update a service's rate and availability
    pub fn update_service(&self, service_id: Uuid, rate: u64, available: bool) -> Result<()> {
        let mut service = self
            .services
            .get_mut(&service_id)
            .ok_or(Error::ServiceNotFound(service_id))?;

        service.rate = rate;
        service.available = available;

        tracing::info!(service_id = %service_id, rate, available, "Tutoring service updated");
        self.sink.emit(MarketEvent::TutoringServiceUpdated {
            service_id,
            rate,
            available,
        });

        Ok(())
    }

    /// Snapshot of a tutor profile
    pub fn tutor(&self, tutor_id: Uuid) -> Option<TutorProfile> {
        self.tutors.get(&tutor_id).map(|t| t.clone())
    }

    /// Snapshot of a service offering
    pub fn service(&self, service_id: Uuid) -> Option<TutoringService> {
        self.services.get(&service_id).map(|s| s.clone())
    }

    /// Snapshot of a session
    pub fn session(&self, session_id: Uuid) -> Option<TutoringSession> {
        self.sessions.get(&session_id).map(|s| s.clone())
    }

    /// Number of tutors in the registry
    pub fn tutor_count(&self) -> usize {
        self.tutors.len()
    }
}

impl std::fmt::Debug for TutoringRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TutoringRegistry")
            .field("tutors", &self.tutors.len())
            .field("services", &self.services.len())
            .field("sessions", &self.sessions.len())
            .finish()
    }
}
