//! # Inventory Actor
//!
//! The product catalog as a [`ResourceActor`]. Besides CRUD it offers the
//! stock actions the till and the receiving desk need:
//!
//! - [`ProductAction::CheckStock`] reads the level,
//! - [`ProductAction::ReserveStock`] / [`ProductAction::ReleaseStock`] take
//!   units out for a sale and put them back when a sale is abandoned,
//! - [`ProductAction::ReceiveStock`] books a supplier delivery.
//!
//! ```rust,ignore
//! let (actor, inner) = inventory_actor::new();
//! tokio::spawn(actor.run(()));
//! let inventory = InventoryClient::new(inner);
//! inventory.reserve_stock(ProductId(1), 2).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Product;

/// Creates a new inventory actor and its client.
pub fn new() -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(32)
}
