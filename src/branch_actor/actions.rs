use crate::model::BranchStatus;

#[derive(Debug, Clone, PartialEq)]
pub enum BranchAction {
    /// Opens or closes the branch for business.
    ToggleStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BranchActionResult {
    Status(BranchStatus),
}
