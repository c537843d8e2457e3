//! # Supplier Actor
//!
//! Registry of the distributors the store buys from. Suppliers are never
//! deleted in day-to-day use; they are switched inactive with
//! [`SupplierAction::ToggleStatus`]. [`SupplierAction::RecordOrder`] is sent
//! whenever stock from the supplier is received.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Supplier;

/// Creates a new supplier actor and its client.
pub fn new() -> (ResourceActor<Supplier>, ResourceClient<Supplier>) {
    ResourceActor::new(32)
}
