//! EduMarket Core Primitives
//!
//! Leaf components shared by the course and tutoring registries.
//!
//! # Architecture
//!
//! - **Move-only funds**: `Funds` cannot be cloned; money enters escrow by
//!   consuming the value, so conservation is enforced by the type system
//! - **Escrow ledger**: non-negative balance, withdrawal bounded by balance
//! - **Fact events**: one immutable `MarketEvent` per committed transition,
//!   delivered to an [`EventSink`] in per-resource commit order
//! - **Identity glue**: keyed user records with no invariant beyond
//!   one record per principal

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod config;
pub mod error;
pub mod escrow;
pub mod events;
pub mod funds;
pub mod identity;
pub mod metrics;
pub mod types;

// Re-exports
pub use config::{Config, TutoringConfig};
pub use error::{Error, Result};
pub use escrow::EscrowLedger;
pub use events::{EventSink, MarketEvent, MemorySink, TracingSink};
pub use funds::{Funds, Payment};
pub use identity::IdentityRegistry;
pub use metrics::Metrics;
pub use types::{Principal, Role, UserRecord};
