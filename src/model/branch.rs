use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BranchId(pub u32);

impl From<u32> for BranchId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for BranchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CBG-{:03}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchStatus {
    #[default]
    Active,
    Inactive,
}

impl BranchStatus {
    pub fn toggled(self) -> Self {
        match self {
            BranchStatus::Active => BranchStatus::Inactive,
            BranchStatus::Inactive => BranchStatus::Active,
        }
    }
}

/// One outlet of the pharmacy chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Branch {
    pub id: BranchId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    /// Pharmacist in charge. May be blank.
    pub manager: String,
    pub email: String,
    pub status: BranchStatus,
    pub opening_date: NaiveDate,
    pub total_staff: u32,
    /// Sales this month in rupiah.
    pub monthly_sales: u64,
}

/// Payload for opening a branch. Staff and sales start at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchCreate {
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    #[serde(default)]
    pub manager: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub status: BranchStatus,
    pub opening_date: NaiveDate,
}

/// Payload for editing a branch. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub manager: Option<String>,
    pub email: Option<String>,
    pub status: Option<BranchStatus>,
}

/// Figures shown above the branch list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BranchOverview {
    pub total: usize,
    pub active: usize,
    pub total_staff: u32,
    pub monthly_sales: u64,
}

impl BranchOverview {
    pub fn from_branches(branches: &[Branch]) -> Self {
        branches.iter().fold(Self::default(), |mut acc, b| {
            acc.total += 1;
            if b.status == BranchStatus::Active {
                acc.active += 1;
            }
            acc.total_staff = acc.total_staff.saturating_add(b.total_staff);
            acc.monthly_sales = acc.monthly_sales.saturating_add(b.monthly_sales);
            acc
        })
    }

    /// Monthly sales in millions of rupiah with one decimal, e.g. `"95.0"`.
    pub fn sales_in_millions(&self) -> String {
        format!("{:.1}", self.monthly_sales as f64 / 1_000_000.0)
    }
}
