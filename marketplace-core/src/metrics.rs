//! Metrics collection for observability
//!
//! # Metrics
//!
//! - `market_courses_created_total` - Courses created
//! - `market_enrollments_total` - Enrollments accepted
//! - `market_enrollments_rejected_total` - Enrollments rejected
//! - `market_withdrawn_amount_total` - Total units withdrawn from escrow
//! - `market_sessions_completed_total` - Tutoring sessions completed

use prometheus::{IntCounter, Registry};
use std::sync::Arc;

/// Metrics collector
#[derive(Clone)]
pub struct Metrics {
    /// Courses created
    pub courses_created: IntCounter,

    /// Enrollments accepted
    pub enrollments: IntCounter,

    /// Enrollments rejected
    pub enrollments_rejected: IntCounter,

    /// Total units withdrawn from escrow
    pub withdrawn_amount: IntCounter,

    /// Tutoring sessions completed
    pub sessions_completed: IntCounter,

    /// Prometheus registry
    pub registry: Arc<Registry>,
}

impl Metrics {
    /// Create new metrics collector
    pub fn new() -> prometheus::Result<Self> {
        let registry = Arc::new(Registry::new());

        let courses_created =
            IntCounter::new("market_courses_created_total", "Courses created")?;
        registry.register(Box::new(courses_created.clone()))?;

        let enrollments =
            IntCounter::new("market_enrollments_total", "Enrollments accepted")?;
        registry.register(Box::new(enrollments.clone()))?;

        let enrollments_rejected = IntCounter::new(
            "market_enrollments_rejected_total",
            "Enrollments rejected",
        )?;
        registry.register(Box::new(enrollments_rejected.clone()))?;

        let withdrawn_amount = IntCounter::new(
            "market_withdrawn_amount_total",
            "Total units withdrawn from escrow",
        )?;
        registry.register(Box::new(withdrawn_amount.clone()))?;

        let sessions_completed = IntCounter::new(
            "market_sessions_completed_total",
            "Tutoring sessions completed",
        )?;
        registry.register(Box::new(sessions_completed.clone()))?;

        Ok(Self {
            courses_created,
            enrollments,
            enrollments_rejected,
            withdrawn_amount,
            sessions_completed,
            registry,
        })
    }

    /// Record course creation
    pub fn record_course_created(&self) {
        self.courses_created.inc();
    }

    /// Record accepted enrollment
    pub fn record_enrollment(&self) {
        self.enrollments.inc();
    }

    /// Record rejected enrollment
    pub fn record_enrollment_rejected(&self) {
        self.enrollments_rejected.inc();
    }

    /// Record escrow withdrawal
    pub fn record_withdrawal(&self, amount: u64) {
        self.withdrawn_amount.inc_by(amount);
    }

    /// Record completed tutoring session
    pub fn record_session_completed(&self) {
        self.sessions_completed.inc();
    }

    /// Get metrics registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
