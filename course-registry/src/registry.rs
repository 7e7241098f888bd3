//! Course registry operations
//!
//! Each course lives behind a sharded map entry; an operation takes the
//! entry's write guard, runs every precondition, and only then mutates.
//! Conflicting operations on the same course are strictly ordered by the
//! entry lock, so a last-seat race is decided by the `available > 0` check
//! rather than by an underflow. Facts are emitted before the guard drops,
//! keeping per-course sink order equal to commit order.

use crate::{
    error::{Error, Result},
    types::{Course, CourseCapability, EnrollmentRecord},
};
use chrono::Utc;
use dashmap::DashMap;
use marketplace_core::{
    EscrowLedger, EventSink, Funds, MarketEvent, Metrics, Payment, Principal,
};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

/// Registry of courses and enrollment records
pub struct CourseRegistry {
    /// Courses by identifier
    courses: DashMap<Uuid, Course>,

    /// Enrollment records by identifier
    enrollments: DashMap<Uuid, EnrollmentRecord>,

    /// Fact observer
    sink: Arc<dyn EventSink>,

    /// Optional metrics collector
    metrics: Option<Metrics>,
}

impl CourseRegistry {
    /// Create an empty registry emitting facts to `sink`
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            courses: DashMap::new(),
            enrollments: DashMap::new(),
            sink,
            metrics: None,
        }
    }

    /// Attach a metrics collector
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create a course and issue its one capability to the caller
    ///
    /// Fails with [`Error::InvalidPrice`] / [`Error::InvalidSupply`] on
    /// non-positive economics. The returned capability is the only one that
    /// will ever exist for this course.
    pub fn create_course(
        &self,
        creator: Principal,
        name: impl Into<String>,
        details: impl Into<String>,
        price: u64,
        supply: u32,
    ) -> Result<(Course, CourseCapability)> {
        if price == 0 {
            return Err(Error::InvalidPrice(price));
        }
        if supply == 0 {
            return Err(Error::InvalidSupply(supply));
        }

        let course_id = Uuid::new_v4();
        let course = Course {
            course_id,
            name: name.into(),
            details: details.into(),
            price,
            total_supply: supply,
            available: supply,
            creator: creator.clone(),
            escrow: EscrowLedger::new(),
            enrolled: HashSet::new(),
            created_at: Utc::now(),
        };

        self.courses.insert(course_id, course.clone());

        tracing::info!(
            course_id = %course_id,
            creator = %creator,
            price,
            supply,
            "Course created"
        );
        self.sink
            .emit(MarketEvent::CourseCreated { course_id, creator });
        if let Some(m) = &self.metrics {
            m.record_course_created();
        }

        Ok((course, CourseCapability::issue(course_id)))
    }

    /// Enroll `student`, debiting exactly the course price from `payment`
    ///
    /// Any excess value remains with the payer. On success one seat is
    /// taken, the price is credited to escrow, the student joins the
    /// enrolled set, and a fresh [`EnrollmentRecord`] owned by the student
    /// is issued. All of it happens under the course entry guard or not at
    /// all.
    pub fn enroll(
        &self,
        course_id: Uuid,
        student: Principal,
        payment: &mut Payment,
    ) -> Result<EnrollmentRecord> {
        let mut course = self
            .courses
            .get_mut(&course_id)
            .ok_or(Error::CourseNotFound(course_id))?;

        if course.enrolled.contains(&student) {
            self.record_rejection();
            tracing::warn!(course_id = %course_id, student = %student, "Duplicate enrollment rejected");
            return Err(Error::AlreadyEnrolled {
                course_id,
                student: student.to_string(),
            });
        }

        if !course.is_open() {
            self.record_rejection();
            tracing::warn!(course_id = %course_id, student = %student, "Enrollment rejected, no seats");
            return Err(Error::CapacityExhausted(course_id));
        }

        // Last check before any mutation: split_exact leaves the instrument
        // untouched when it refuses
        let price = course.price;
        let debited = payment.split_exact(price).ok_or_else(|| {
            self.record_rejection();
            Error::InsufficientPayment {
                available: payment.amount(),
                required: price,
            }
        })?;

        course.escrow.deposit(debited);
        course.available -= 1;
        course.enrolled.insert(student.clone());

        let record = EnrollmentRecord {
            record_id: Uuid::new_v4(),
            course_id,
            student: student.clone(),
            completed: false,
            enrolled_at: Utc::now(),
        };
        self.enrollments.insert(record.record_id, record.clone());

        tracing::info!(
            course_id = %course_id,
            student = %student,
            available = course.available,
            escrow_balance = course.escrow.balance(),
            "Student enrolled"
        );
        self.sink
            .emit(MarketEvent::CourseEnrolled { course_id, student });
        if course.available == 0 {
            self.sink
                .emit(MarketEvent::CourseCapacityExhausted { course_id });
        }
        if let Some(m) = &self.metrics {
            m.record_enrollment();
        }

        Ok(record)
    }

    /// Mark an enrollment complete
    ///
    /// Only the record's holder may complete it, and only once.
    pub fn complete(&self, record_id: Uuid, caller: &Principal) -> Result<()> {
        let mut record = self
            .enrollments
            .get_mut(&record_id)
            .ok_or(Error::EnrollmentNotFound(record_id))?;

        if record.student != *caller {
            return Err(Error::Unauthorized(format!(
                "enrollment {} is not held by {}",
                record_id, caller
            )));
        }
        if record.completed {
            return Err(Error::AlreadyCompleted(record_id));
        }

        record.completed = true;

        tracing::info!(
            course_id = %record.course_id,
            student = %record.student,
            "Course completed"
        );
        self.sink.emit(MarketEvent::CourseCompleted {
            course_id: record.course_id,
            student: record.student.clone(),
        });

        Ok(())
    }

    /// Replace the course details
    ///
    /// Requires the capability issued at creation; any other capability
    /// fails [`Error::Unauthorized`].
    pub fn update_details(
        &self,
        capability: &CourseCapability,
        course_id: Uuid,
        new_details: impl Into<String>,
    ) -> Result<()> {
        let mut course = self
            .courses
            .get_mut(&course_id)
            .ok_or(Error::CourseNotFound(course_id))?;

        Self::authorize(capability, &course)?;

        let new_details = new_details.into();
        course.details = new_details.clone();

        tracing::info!(course_id = %course_id, "Course details updated");
        self.sink.emit(MarketEvent::CourseUpdated {
            course_id,
            new_details,
        });

        Ok(())
    }

    /// Withdraw `amount` from the course escrow to `recipient`
    ///
    /// Requires the capability issued at creation. Fails
    /// [`Error::InvalidAmount`] when `amount` is zero or exceeds the escrow
    /// balance; withdrawing the exact balance succeeds and leaves it at 0.
    /// The debited funds are returned for delivery to `recipient`.
    pub fn withdraw(
        &self,
        capability: &CourseCapability,
        course_id: Uuid,
        amount: u64,
        recipient: Principal,
    ) -> Result<Funds> {
        let mut course = self
            .courses
            .get_mut(&course_id)
            .ok_or(Error::CourseNotFound(course_id))?;

        Self::authorize(capability, &course)?;

        let balance = course.escrow.balance();
        let funds = course
            .escrow
            .withdraw(amount)
            .ok_or(Error::InvalidAmount {
                requested: amount,
                balance,
            })?;

        tracing::info!(
            course_id = %course_id,
            amount,
            recipient = %recipient,
            escrow_balance = course.escrow.balance(),
            "Funds withdrawn"
        );
        self.sink
            .emit(MarketEvent::FundWithdrawal { amount, recipient });
        if let Some(m) = &self.metrics {
            m.record_withdrawal(amount);
        }

        Ok(funds)
    }

    /// Snapshot of a course
    pub fn course(&self, course_id: Uuid) -> Option<Course> {
        self.courses.get(&course_id).map(|c| c.clone())
    }

    /// Snapshot of an enrollment record
    pub fn enrollment(&self, record_id: Uuid) -> Option<EnrollmentRecord> {
        self.enrollments.get(&record_id).map(|r| r.clone())
    }

    /// Number of courses in the registry
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    fn authorize(capability: &CourseCapability, course: &Course) -> Result<()> {
        if capability.course_id() != course.course_id {
            tracing::warn!(
                course_id = %course.course_id,
                capability = %capability.course_id(),
                "Capability mismatch"
            );
            return Err(Error::Unauthorized(format!(
                "capability bound to {} does not match course {}",
                capability.course_id(),
                course.course_id
            )));
        }
        Ok(())
    }

    fn record_rejection(&self) {
        if let Some(m) = &self.metrics {
            m.record_enrollment_rejected();
        }
    }
}

impl std::fmt::Debug for CourseRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CourseRegistry")
            .field("courses", &self.courses.len())
            .field("enrollments", &self.enrollments.len())
            .finish()
    }
}
