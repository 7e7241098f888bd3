//! End-to-end marketplace demo binary

use course_registry::CourseRegistry;
use marketplace_core::{
    Config, IdentityRegistry, Metrics, Payment, Principal, Role, TracingSink,
};
use std::error::Error;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Config::default();
    tracing::info!(service = %config.service_name, "Starting EduMarket demo");

    let sink = Arc::new(TracingSink);
    let identity = IdentityRegistry::new(sink.clone());
    let registry = CourseRegistry::new(sink).with_metrics(Metrics::new()?);

    let alice = Principal::new("alice");
    let bob = Principal::new("bob");
    identity.register(alice.clone(), "Alice", Role::Instructor, vec![])?;
    identity.register(bob.clone(), "Bob", Role::Student, vec![])?;

    let (course, cap) =
        registry.create_course(alice.clone(), "Rust 101", "Ownership and borrowing", 100, 2)?;

    let mut payment = Payment::new(150);
    let record = registry.enroll(course.course_id, bob.clone(), &mut payment)?;
    tracing::info!(remainder = payment.amount(), "Enrollment paid");

    registry.complete(record.record_id, &bob)?;

    let funds = registry.withdraw(&cap, course.course_id, 100, alice)?;
    tracing::info!(amount = funds.amount(), "Escrow withdrawn");

    Ok(())
}
