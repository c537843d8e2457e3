//! Custom actions for the inventory actor.
//!
//! Every action that moves stock re-derives the product's status with
//! [`StockStatus::for_restock`](crate::model::StockStatus::for_restock).

use super::error::InventoryError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Custom actions for Product entities.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Reads the current stock level.
    CheckStock,
    /// Takes units out of stock for a sale.
    ///
    /// # Errors
    /// Fails if the requested amount exceeds available stock.
    ReserveStock(u32),
    /// Puts previously reserved units back.
    ReleaseStock(u32),
    /// Books a delivery from a supplier.
    ReceiveStock(StockReceipt),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    Stock(u32),
    Reserved { remaining: u32 },
    Released { stock: u32 },
    Received(StockReceived),
}

/// A delivery of one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockReceipt {
    pub quantity: u32,
    /// Price paid per unit, in rupiah.
    pub purchase_price: u64,
    /// New selling price per unit, in rupiah.
    pub selling_price: u64,
    pub supplier: String,
    pub expiry_date: NaiveDate,
    pub batch_number: String,
}

impl StockReceipt {
    /// Checks that every field of the delivery form was filled in.
    pub fn validate(&self) -> Result<(), InventoryError> {
        let missing = [
            (self.quantity == 0, "quantity"),
            (self.purchase_price == 0, "purchase_price"),
            (self.selling_price == 0, "selling_price"),
            (self.supplier.trim().is_empty(), "supplier"),
            (self.batch_number.trim().is_empty(), "batch_number"),
        ];
        match missing.iter().find(|(bad, _)| *bad) {
            Some((_, field)) => Err(InventoryError::InvalidReceipt(format!(
                "{field} is required"
            ))),
            None => Ok(()),
        }
    }

    /// Purchase cost of the whole delivery.
    pub fn total_cost(&self) -> u64 {
        self.purchase_price.saturating_mul(u64::from(self.quantity))
    }
}

/// Outcome of a booked delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockReceived {
    /// Stock level after the delivery.
    pub stock: u32,
    pub total_cost: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt() -> StockReceipt {
        StockReceipt {
            quantity: 24,
            purchase_price: 5_000,
            selling_price: 7_500,
            supplier: "PT Kimia Farma".into(),
            expiry_date: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
            batch_number: "KF-2406".into(),
        }
    }

    #[test]
    fn complete_receipt_is_valid() {
        assert_eq!(receipt().validate(), Ok(()));
        assert_eq!(receipt().total_cost(), 120_000);
    }

    #[test]
    fn missing_fields_are_reported() {
        let mut r = receipt();
        r.quantity = 0;
        assert_eq!(
            r.validate(),
            Err(InventoryError::InvalidReceipt("quantity is required".into()))
        );

        let mut r = receipt();
        r.batch_number = "  ".into();
        assert!(matches!(r.validate(), Err(InventoryError::InvalidReceipt(m)) if m.contains("batch_number")));
    }
}
