//! # System Lifecycle & Orchestration
//!
//! [`PharmacySystem`] creates the inventory and supplier actors, spawns each
//! in its own Tokio task and hands out their clients. It also owns the
//! workflows that touch more than one record: merging an import by SKU,
//! reserving stock for a sale with rollback, and booking a delivery against
//! its supplier.
//!
//! Shutdown follows the channel-closing pattern: dropping every client ends
//! each actor's message loop, and [`PharmacySystem::shutdown`] awaits the
//! tasks.
//!
//! [`setup_tracing`] installs the log subscriber used by the binary.

pub mod pharmacy_system;
pub mod tracing;

pub use pharmacy_system::*;
pub use tracing::*;
