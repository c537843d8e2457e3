use super::error::CheckoutError;
use super::receipt::Receipt;
use super::totals::{checked_totals, compute_change, compute_totals, TaxRate, Totals};
use super::CatalogItem;
use crate::model::ProductId;
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, warn};

/// One product in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    /// Price per unit in rupiah, captured when the line was added.
    pub unit_price: u64,
    /// Always between 1 and `available_stock`.
    pub quantity: u32,
    pub available_stock: u32,
}

impl CartLine {
    /// Exact for lines held by a [`Cart`], which refuses overflowing totals.
    pub fn line_total(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }

    fn insufficient(&self, requested: u32, available: u32) -> CheckoutError {
        CheckoutError::InsufficientStock {
            product_id: self.product_id,
            name: self.name.clone(),
            requested,
            available,
        }
    }
}

/// A sale in progress: lines in the order they were first added, one per
/// product.
///
/// Every operation either applies in full or returns an error and leaves the
/// cart exactly as it was.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    tax_rate: TaxRate,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tax_rate(tax_rate: TaxRate) -> Self {
        Self {
            lines: Vec::new(),
            tax_rate,
        }
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Adds one unit of `item`, returning the line's new quantity.
    ///
    /// The item's current stock becomes the line's ceiling.
    pub fn add_or_increment(&mut self, item: &CatalogItem) -> Result<u32, CheckoutError> {
        match self.lines.iter().position(|l| l.product_id == item.id) {
            Some(index) => {
                let line = &self.lines[index];
                let wanted = line.quantity.saturating_add(1);
                if wanted > item.stock {
                    warn!(product_id = %item.id, wanted, stock = item.stock, "Increment rejected");
                    return Err(line.insufficient(wanted, item.stock));
                }
                self.ensure_totals_fit(item.id, line.unit_price, wanted)?;

                let line = &mut self.lines[index];
                line.quantity = wanted;
                line.available_stock = item.stock;
                debug!(product_id = %item.id, quantity = wanted, "Line incremented");
                Ok(wanted)
            }
            None => {
                let line = CartLine {
                    product_id: item.id,
                    name: item.name.clone(),
                    unit_price: item.price,
                    quantity: 1,
                    available_stock: item.stock,
                };
                if item.stock == 0 {
                    warn!(product_id = %item.id, "Out of stock");
                    return Err(line.insufficient(1, 0));
                }
                self.ensure_totals_fit(item.id, item.price, 1)?;
                debug!(product_id = %item.id, "Line added");
                self.lines.push(line);
                Ok(1)
            }
        }
    }

    /// Sets a line's quantity. Zero removes the line.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) -> Result<(), CheckoutError> {
        let index = self
            .lines
            .iter()
            .position(|l| l.product_id == product_id)
            .ok_or(CheckoutError::LineNotFound(product_id))?;

        if quantity == 0 {
            self.lines.remove(index);
            debug!(%product_id, "Line removed");
            return Ok(());
        }

        let line = &self.lines[index];
        if quantity > line.available_stock {
            warn!(%product_id, quantity, stock = line.available_stock, "Quantity rejected");
            return Err(line.insufficient(quantity, line.available_stock));
        }
        self.ensure_totals_fit(product_id, line.unit_price, quantity)?;

        self.lines[index].quantity = quantity;
        debug!(%product_id, quantity, "Quantity set");
        Ok(())
    }

    /// Fails when the cart, with `product_id` at `quantity` units of
    /// `unit_price`, would total more than a `u64` can hold.
    fn ensure_totals_fit(
        &self,
        product_id: ProductId,
        unit_price: u64,
        quantity: u32,
    ) -> Result<(), CheckoutError> {
        let mut candidate: Vec<CartLine> = self
            .lines
            .iter()
            .filter(|l| l.product_id != product_id)
            .cloned()
            .collect();
        candidate.push(CartLine {
            product_id,
            name: String::new(),
            unit_price,
            quantity,
            available_stock: quantity,
        });
        match checked_totals(&candidate, self.tax_rate) {
            Some(_) => Ok(()),
            None => {
                warn!(%product_id, quantity, unit_price, "Cart total overflows");
                Err(CheckoutError::AmountTooLarge)
            }
        }
    }

    pub fn remove(&mut self, product_id: ProductId) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| l.product_id == product_id)?;
        Some(self.lines.remove(index))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn totals(&self) -> Totals {
        compute_totals(self)
    }

    /// Builds the receipt this cart would produce, without touching the cart.
    ///
    /// An empty cart is refused before the payment is looked at.
    pub fn prepare_receipt(
        &self,
        tendered: u64,
        issued_at: NaiveDateTime,
    ) -> Result<Receipt, CheckoutError> {
        if self.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let totals =
            checked_totals(&self.lines, self.tax_rate).ok_or(CheckoutError::AmountTooLarge)?;
        if tendered < totals.total {
            return Err(CheckoutError::InsufficientPayment {
                total: totals.total,
                tendered,
            });
        }
        Ok(Receipt {
            lines: self.lines.clone(),
            totals,
            tax_rate: self.tax_rate,
            tendered,
            change: compute_change(totals.total, tendered),
            issued_at,
        })
    }

    /// Completes the sale: on success the cart is emptied and the receipt
    /// returned.
    pub fn checkout(
        &mut self,
        tendered: u64,
        issued_at: NaiveDateTime,
    ) -> Result<Receipt, CheckoutError> {
        let receipt = self.prepare_receipt(tendered, issued_at)?;
        self.clear();
        debug!(total = receipt.totals.total, change = receipt.change, "Checkout complete");
        Ok(receipt)
    }
}
