use crate::import::ImportedProduct;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PRD-{:04}", self.0)
    }
}

/// Inventory health of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Normal,
    Low,
    Critical,
}

impl StockStatus {
    /// Status assigned to freshly imported rows: `Low` at or below the
    /// minimum. Import never yields `Critical`.
    pub fn for_import(stock: u32, min_stock: u32) -> Self {
        if stock <= min_stock {
            StockStatus::Low
        } else {
            StockStatus::Normal
        }
    }

    /// Status after any stock movement: `Critical` at or below half the
    /// minimum, `Low` at or below the minimum.
    pub fn for_restock(stock: u32, min_stock: u32) -> Self {
        if u64::from(stock) * 2 <= u64::from(min_stock) {
            StockStatus::Critical
        } else if stock <= min_stock {
            StockStatus::Low
        } else {
            StockStatus::Normal
        }
    }
}

/// A medicine in the store's inventory.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`])
/// - Update parameters ([`ProductUpdate`])
/// - Custom actions ([`ProductAction`](crate::inventory_actor::ProductAction))
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub stock: u32,
    pub min_stock: u32,
    /// Selling price in rupiah.
    pub price: u64,
    pub status: StockStatus,
    pub expiry_date: NaiveDate,
    pub batch_number: String,
    pub supplier: String,
    pub category: String,
}

impl Product {
    /// Builds a product from its creation payload. Status follows the
    /// import rule.
    pub fn new(id: ProductId, params: ProductCreate) -> Self {
        Self {
            id,
            status: StockStatus::for_import(params.stock, params.min_stock),
            sku: params.sku,
            name: params.name,
            stock: params.stock,
            min_stock: params.min_stock,
            price: params.price,
            expiry_date: params.expiry_date,
            batch_number: params.batch_number,
            supplier: params.supplier,
            category: params.category,
        }
    }

    pub(crate) fn refresh_status(&mut self) {
        self.status = StockStatus::for_restock(self.stock, self.min_stock);
    }
}

/// Payload for adding a product to the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub sku: String,
    pub name: String,
    pub stock: u32,
    pub min_stock: u32,
    pub price: u64,
    pub expiry_date: NaiveDate,
    pub batch_number: String,
    pub supplier: String,
    pub category: String,
}

impl From<ImportedProduct> for ProductCreate {
    fn from(p: ImportedProduct) -> Self {
        Self {
            sku: p.sku,
            name: p.name,
            stock: p.stock,
            min_stock: p.min_stock,
            price: p.price,
            expiry_date: p.expiry_date,
            batch_number: p.batch_number,
            supplier: p.supplier,
            category: p.category,
        }
    }
}

/// Payload for editing a product. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub stock: Option<u32>,
    pub min_stock: Option<u32>,
    pub price: Option<u64>,
    pub expiry_date: Option<NaiveDate>,
    pub batch_number: Option<String>,
    pub supplier: Option<String>,
    pub category: Option<String>,
    /// Re-derive the status with the import rule rather than the restock rule.
    #[serde(default)]
    pub reimport: bool,
}

impl From<ImportedProduct> for ProductUpdate {
    /// A re-imported SKU replaces every imported field of the stored record.
    fn from(p: ImportedProduct) -> Self {
        Self {
            name: Some(p.name),
            stock: Some(p.stock),
            min_stock: Some(p.min_stock),
            price: Some(p.price),
            expiry_date: Some(p.expiry_date),
            batch_number: Some(p.batch_number),
            supplier: Some(p.supplier),
            category: Some(p.category),
            reimport: true,
        }
    }
}

/// Counts of products per [`StockStatus`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub normal: usize,
    pub low: usize,
    pub critical: usize,
}

impl InventorySummary {
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        products
            .into_iter()
            .fold(Self::default(), |mut acc, p| {
                match p.status {
                    StockStatus::Normal => acc.normal += 1,
                    StockStatus::Low => acc.low += 1,
                    StockStatus::Critical => acc.critical += 1,
                }
                acc
            })
    }
}
