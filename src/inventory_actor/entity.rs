//! [`ActorEntity`] implementation for [`Product`].
//!
//! Stock only moves through actions, and each movement re-derives the status
//! with the restock rule. Plain edits go through `on_update`; a re-imported
//! row (`reimport: true`) keeps the import rule instead.

use super::actions::{ProductAction, ProductActionResult, StockReceived};
use super::error::InventoryError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate, StockStatus};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = InventoryError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, InventoryError> {
        if params.name.trim().is_empty() {
            return Err(InventoryError::InvalidProduct("name is required".into()));
        }
        if params.sku.trim().is_empty() {
            return Err(InventoryError::InvalidProduct("sku is required".into()));
        }
        Ok(Self::new(id, params))
    }

    /// Replaces every field the update carries.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), InventoryError> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(InventoryError::InvalidProduct("name is required".into()));
            }
            self.name = name;
        }
        let moves_stock = update.stock.is_some() || update.min_stock.is_some();
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(min_stock) = update.min_stock {
            self.min_stock = min_stock;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(expiry_date) = update.expiry_date {
            self.expiry_date = expiry_date;
        }
        if let Some(batch_number) = update.batch_number {
            self.batch_number = batch_number;
        }
        if let Some(supplier) = update.supplier {
            self.supplier = supplier;
        }
        if let Some(category) = update.category {
            self.category = category;
        }

        if update.reimport {
            self.status = StockStatus::for_import(self.stock, self.min_stock);
        } else if moves_stock {
            self.refresh_status();
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, InventoryError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::Stock(self.stock)),
            ProductAction::ReserveStock(quantity) => {
                if quantity == 0 {
                    return Err(InventoryError::InvalidQuantity(quantity));
                }
                if quantity > self.stock {
                    return Err(InventoryError::InsufficientStock {
                        requested: quantity,
                        available: self.stock,
                    });
                }
                self.stock -= quantity;
                self.refresh_status();
                Ok(ProductActionResult::Reserved {
                    remaining: self.stock,
                })
            }
            ProductAction::ReleaseStock(quantity) => {
                if quantity == 0 {
                    return Err(InventoryError::InvalidQuantity(quantity));
                }
                self.stock = self.stock.saturating_add(quantity);
                self.refresh_status();
                Ok(ProductActionResult::Released { stock: self.stock })
            }
            ProductAction::ReceiveStock(receipt) => {
                receipt.validate()?;
                let total_cost = receipt.total_cost();
                self.stock = self.stock.saturating_add(receipt.quantity);
                self.price = receipt.selling_price;
                self.expiry_date = receipt.expiry_date;
                self.batch_number = receipt.batch_number;
                self.supplier = receipt.supplier;
                self.refresh_status();
                Ok(ProductActionResult::Received(StockReceived {
                    stock: self.stock,
                    total_cost,
                }))
            }
        }
    }
}
