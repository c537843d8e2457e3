//! # Bulk Product Import
//!
//! Turns an uploaded CSV master file into products ready to merge into the
//! inventory. The pipeline is two pure steps:
//!
//! 1. [`parse`] splits the text into [`ImportRow`]s, one per non-blank line,
//!    keyed by the header names and numbered by their original line.
//! 2. [`validate`] checks every row independently and partitions the batch
//!    into [`ImportedProduct`]s and [`ValidationError`]s.
//!
//! Nothing here fails as a whole: malformed rows become diagnostics so the
//! caller can show "N valid / M invalid" and still import the good rows.
//! Merging the valid rows is the caller's job, see
//! [`PharmacySystem::import_products`](crate::lifecycle::PharmacySystem::import_products).
//!
//! ```
//! use apotek_pos::import;
//!
//! let outcome = import::import_csv(&import::template_csv());
//! assert_eq!(outcome.products.len(), 2);
//! assert!(outcome.errors.is_empty());
//! ```

pub mod error;
pub mod parse;
pub mod template;
pub mod validate;

pub use error::*;
pub use parse::*;
pub use template::*;
pub use validate::*;

use std::path::Path;
use tracing::{info, warn};

/// Column names recognised in the header row.
pub mod columns {
    pub const NAME: &str = "nama_produk";
    pub const SKU: &str = "sku";
    pub const STOCK: &str = "stok_awal";
    pub const MIN_STOCK: &str = "stok_minimum";
    pub const PRICE: &str = "harga_jual";
    pub const EXPIRY_DATE: &str = "tanggal_kadaluarsa";
    pub const BATCH_NUMBER: &str = "nomor_batch";
    pub const SUPPLIER: &str = "supplier";
    pub const CATEGORY: &str = "kategori";

    /// Every recognised column, in template order.
    pub const ALL: [&str; 9] = [
        NAME,
        SKU,
        STOCK,
        MIN_STOCK,
        PRICE,
        EXPIRY_DATE,
        BATCH_NUMBER,
        SUPPLIER,
        CATEGORY,
    ];
}

/// Parses and validates CSV text in one go.
pub fn import_csv(text: &str) -> ImportOutcome {
    let rows = parse(text);
    let outcome = validate(&rows);
    let summary = outcome.summary();
    info!(
        rows = rows.len(),
        valid = summary.valid,
        invalid_rows = summary.invalid_rows,
        errors = summary.errors,
        "Import processed"
    );
    outcome
}

/// Reads and imports a CSV file. An unreadable file is logged and treated as
/// an empty import.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD, so one badly
/// encoded name only affects its own row.
pub fn import_file(path: impl AsRef<Path>) -> ImportOutcome {
    let path = path.as_ref();
    match std::fs::read(path) {
        Ok(bytes) => import_csv(&String::from_utf8_lossy(&bytes)),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Import file unreadable");
            ImportOutcome::default()
        }
    }
}
