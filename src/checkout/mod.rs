//! # Checkout Calculator
//!
//! A [`Cart`] holds the lines of a sale in progress and enforces each
//! product's stock ceiling. [`compute_totals`] prices the cart with rupiah
//! integer arithmetic (tax rounded half up), and [`Cart::checkout`] turns it
//! into an immutable [`Receipt`] once the payment covers the total.
//!
//! Nothing here talks to the inventory. [`CatalogItem`] is the snapshot a
//! caller takes of a product before adding it; reserving the sold stock is
//! done by [`PharmacySystem::checkout`](crate::lifecycle::PharmacySystem::checkout).
//!
//! ```
//! use apotek_pos::checkout::{Cart, CatalogItem};
//! use apotek_pos::model::ProductId;
//!
//! let mut cart = Cart::new();
//! let paracetamol = CatalogItem { id: ProductId(1), name: "Paracetamol 500mg".into(), price: 7_500, stock: 50 };
//! cart.add_or_increment(&paracetamol).unwrap();
//! cart.add_or_increment(&paracetamol).unwrap();
//!
//! let totals = cart.totals();
//! assert_eq!((totals.subtotal, totals.tax, totals.total), (15_000, 1_500, 16_500));
//! ```

pub mod cart;
pub mod error;
pub mod receipt;
pub mod totals;

pub use cart::*;
pub use error::*;
pub use receipt::*;
pub use totals::*;

use crate::model::{Product, ProductId};
use serde::Serialize;

/// What the cart needs to know about a product when a unit is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    pub id: ProductId,
    pub name: String,
    /// Selling price in rupiah.
    pub price: u64,
    pub stock: u32,
}

impl From<&Product> for CatalogItem {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            price: p.price,
            stock: p.stock,
        }
    }
}
