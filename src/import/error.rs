use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// What a row got wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    MissingRequiredField,
    NonNumericField,
    InvalidDateFormat,
}

/// A diagnostic for one field of one row. Collected, never raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// 1-based line of the source file (the header is line 1).
    pub row: usize,
    pub field: String,
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn missing(row: usize, field: &str) -> Self {
        Self {
            row,
            field: field.to_string(),
            kind: ValidationErrorKind::MissingRequiredField,
            message: format!("Field {field} wajib diisi"),
        }
    }

    pub fn non_numeric(row: usize, field: &str) -> Self {
        Self {
            row,
            field: field.to_string(),
            kind: ValidationErrorKind::NonNumericField,
            message: format!("Field {field} harus berupa angka"),
        }
    }

    pub(crate) fn out_of_range(row: usize, field: &str) -> Self {
        Self {
            row,
            field: field.to_string(),
            kind: ValidationErrorKind::NonNumericField,
            message: format!("Field {field} harus berupa angka positif dalam batas wajar"),
        }
    }

    pub fn invalid_date(row: usize, field: &str) -> Self {
        Self {
            row,
            field: field.to_string(),
            kind: ValidationErrorKind::InvalidDateFormat,
            message: "Format tanggal tidak valid (gunakan YYYY-MM-DD)".to_string(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Baris {}: {}", self.row, self.message)
    }
}

/// Failures of the merge step that follows validation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ImportError {
    /// Nothing valid to merge; the inventory is left as it was.
    #[error("Tidak ada data valid untuk diimpor ({invalid_rows} baris bermasalah)")]
    EmptySelection { invalid_rows: usize },

    /// The inventory rejected a product while merging.
    #[error("Import failed for SKU {sku}: {reason}")]
    Merge { sku: String, reason: String },

    /// The current inventory could not be read before merging.
    #[error("Inventory unavailable: {0}")]
    Inventory(String),
}
