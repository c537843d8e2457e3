use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Suppliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SupplierId(pub u32);

impl From<u32> for SupplierId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SupplierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SUP-{:03}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplierStatus {
    Active,
    Inactive,
}

impl SupplierStatus {
    pub fn toggled(self) -> Self {
        match self {
            SupplierStatus::Active => SupplierStatus::Inactive,
            SupplierStatus::Inactive => SupplierStatus::Active,
        }
    }
}

/// A pharmaceutical distributor the store buys from.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](crate::framework::ResourceActor); see
/// [`supplier_actor`](crate::supplier_actor) for the hooks and actions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub status: SupplierStatus,
    pub created_at: NaiveDate,
    /// Number of stock receipts recorded against this supplier.
    pub total_orders: u32,
}

impl Supplier {
    /// Case-insensitive match on name or contact person, plain substring on
    /// phone. An empty term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.contact_person.to_lowercase().contains(&needle)
            || self.phone.contains(term.trim())
    }
}

/// Payload for registering a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierCreate {
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    pub created_at: NaiveDate,
}

/// Payload for editing a supplier. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierUpdate {
    pub name: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}
