//! Domain fact events and observer sinks
//!
//! The core emits one immutable fact record after every committed state
//! transition. Emission is fire-and-forget: sinks never influence the
//! outcome of an operation, and nothing is emitted for a rejected one.
//! Per-resource emission order matches commit order.

use crate::types::Principal;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Immutable fact record emitted after a committed transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketEvent {
    /// User record created
    UserRegistered {
        /// Registered principal
        principal: Principal,
    },

    /// Course allocated, capability issued to the creator
    CourseCreated {
        /// New course
        course_id: Uuid,
        /// Creator principal
        creator: Principal,
    },

    /// Student enrolled; exact price moved into escrow
    CourseEnrolled {
        /// Target course
        course_id: Uuid,
        /// Enrolled student
        student: Principal,
    },

    /// Last seat taken; the course is closed to further enrollment
    CourseCapacityExhausted {
        /// Exhausted course
        course_id: Uuid,
    },

    /// Enrollment marked complete by its holder
    CourseCompleted {
        /// Completed course
        course_id: Uuid,
        /// Completing student
        student: Principal,
    },

    /// Course details replaced by the capability holder
    CourseUpdated {
        /// Updated course
        course_id: Uuid,
        /// Replacement details
        new_details: String,
    },

    /// Escrow debited by the capability holder
    FundWithdrawal {
        /// Withdrawn amount
        amount: u64,
        /// Receiving principal
        recipient: Principal,
    },

    /// Tutor profile created
    TutorProfileCreated {
        /// New tutor
        tutor_id: Uuid,
    },

    /// Tutoring service offered
    TutoringServiceOffered {
        /// New service
        service_id: Uuid,
        /// Offering tutor
        tutor_id: Uuid,
    },

    /// Tutoring session requested by a student
    TutoringSessionRequested {
        /// New session
        session_id: Uuid,
        /// Requested tutor
        tutor_id: Uuid,
        /// Requesting student
        student: Principal,
    },

    /// Session completed with its one-time rating
    TutoringSessionCompleted {
        /// Completed session
        session_id: Uuid,
        /// Caller-supplied rating
        rating: u8,
    },

    /// Service rate/availability updated
    TutoringServiceUpdated {
        /// Updated service
        service_id: Uuid,
        /// New rate
        rate: u64,
        /// New availability flag
        available: bool,
    },
}

/// One-way observer receiving fact records
pub trait EventSink: Send + Sync {
    /// Receive one fact record
    fn emit(&self, event: MarketEvent);
}

/// Sink that logs every fact via `tracing`
#[derive(Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: MarketEvent) {
        tracing::info!(event = ?event, "Fact committed");
    }
}

/// In-memory sink preserving emission order
///
/// Used by tests and audit tooling to assert on the exact fact stream.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<MarketEvent>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all facts received so far, in emission order
    pub fn events(&self) -> Vec<MarketEvent> {
        self.events.lock().clone()
    }

    /// Drain all facts received so far
    pub fn take(&self) -> Vec<MarketEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: MarketEvent) {
        self.events.lock().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_preserves_order() {
        let sink = MemorySink::new();
        let course_id = Uuid::new_v4();

        sink.emit(MarketEvent::CourseCreated {
            course_id,
            creator: Principal::new("alice"),
        });
        sink.emit(MarketEvent::CourseEnrolled {
            course_id,
            student: Principal::new("bob"),
        });

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], MarketEvent::CourseCreated { .. }));
        assert!(matches!(events[1], MarketEvent::CourseEnrolled { .. }));
    }

    #[test]
    fn test_memory_sink_take_drains() {
        let sink = MemorySink::new();
        sink.emit(MarketEvent::TutorProfileCreated {
            tutor_id: Uuid::new_v4(),
        });

        assert_eq!(sink.take().len(), 1);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_event_serialization_round_trip() {
        let event = MarketEvent::FundWithdrawal {
            amount: 200,
            recipient: Principal::new("owner"),
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: MarketEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
