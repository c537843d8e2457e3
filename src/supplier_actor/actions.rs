use crate::model::SupplierStatus;

#[derive(Debug, Clone, PartialEq)]
pub enum SupplierAction {
    /// Flips between active and inactive.
    ToggleStatus,
    /// Counts one more delivery from this supplier.
    RecordOrder,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SupplierActionResult {
    Status(SupplierStatus),
    Orders(u32),
}
