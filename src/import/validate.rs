use super::columns;
use super::error::ValidationError;
use super::parse::ImportRow;
use crate::model::StockStatus;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;
use uuid::Uuid;

/// Columns that must be present and non-blank.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    columns::NAME,
    columns::SKU,
    columns::STOCK,
    columns::MIN_STOCK,
    columns::PRICE,
];

/// Columns that must hold a number when filled in.
pub const NUMERIC_COLUMNS: [&str; 3] = [columns::STOCK, columns::MIN_STOCK, columns::PRICE];

pub const DEFAULT_SUPPLIER: &str = "Unknown";
pub const DEFAULT_CATEGORY: &str = "Umum";

/// Expiry used when the row leaves `tanggal_kadaluarsa` empty.
pub fn default_expiry_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// A row that passed every check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedProduct {
    pub name: String,
    pub sku: String,
    pub stock: u32,
    pub min_stock: u32,
    pub price: u64,
    /// Always derived with [`StockStatus::for_import`].
    pub status: StockStatus,
    pub expiry_date: NaiveDate,
    pub batch_number: String,
    pub supplier: String,
    pub category: String,
}

/// Result of validating a batch, both lists in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportOutcome {
    pub products: Vec<ImportedProduct>,
    pub errors: Vec<ValidationError>,
}

/// Counts shown to the user after processing a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub valid: usize,
    pub invalid_rows: usize,
    pub errors: usize,
}

impl ImportOutcome {
    pub fn summary(&self) -> ImportSummary {
        let invalid_rows: BTreeSet<usize> = self.errors.iter().map(|e| e.row).collect();
        ImportSummary {
            valid: self.products.len(),
            invalid_rows: invalid_rows.len(),
            errors: self.errors.len(),
        }
    }
}

/// Checks every row and splits the batch into products and diagnostics.
///
/// Each row is checked in full: one row can report a missing field, a
/// non-numeric field and a bad date together. A row with any error is left
/// out of `products`.
pub fn validate(rows: &[ImportRow]) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();

    for row in rows {
        match validate_row(row) {
            Ok(product) => {
                debug!(row = row.row_number, sku = %product.sku, "Row valid");
                outcome.products.push(product);
            }
            Err(errors) => {
                debug!(row = row.row_number, errors = errors.len(), "Row rejected");
                outcome.errors.extend(errors);
            }
        }
    }

    outcome
}

fn validate_row(row: &ImportRow) -> Result<ImportedProduct, Vec<ValidationError>> {
    let line = row.row_number;
    let mut errors = Vec::new();

    for column in REQUIRED_COLUMNS {
        if row.get(column).is_empty() {
            errors.push(ValidationError::missing(line, column));
        }
    }

    let mut numbers = [0u64; NUMERIC_COLUMNS.len()];
    for (slot, column) in numbers.iter_mut().zip(NUMERIC_COLUMNS) {
        let raw = row.get(column);
        if raw.is_empty() {
            continue;
        }
        match parse_amount(raw) {
            Ok(value) => *slot = value,
            Err(e) => errors.push(e.into_error(line, column)),
        }
    }
    let [stock, min_stock, price] = numbers;

    let expiry_raw = row.get(columns::EXPIRY_DATE);
    let expiry_date = if expiry_raw.is_empty() {
        Some(default_expiry_date())
    } else {
        let parsed = parse_date(expiry_raw);
        if parsed.is_none() {
            errors.push(ValidationError::invalid_date(line, columns::EXPIRY_DATE));
        }
        parsed
    };

    // Counts must fit a stock counter; price is a plain rupiah amount.
    let stock = u32::try_from(stock);
    let min_stock = u32::try_from(min_stock);
    if stock.is_err() {
        errors.push(ValidationError::out_of_range(line, columns::STOCK));
    }
    if min_stock.is_err() {
        errors.push(ValidationError::out_of_range(line, columns::MIN_STOCK));
    }

    match (stock, min_stock, expiry_date) {
        (Ok(stock), Ok(min_stock), Some(expiry_date)) if errors.is_empty() => Ok(ImportedProduct {
            name: row.get(columns::NAME).to_string(),
            sku: row.get(columns::SKU).to_string(),
            stock,
            min_stock,
            price,
            status: StockStatus::for_import(stock, min_stock),
            expiry_date,
            batch_number: or_default(row.get(columns::BATCH_NUMBER), auto_batch_number),
            supplier: or_default(row.get(columns::SUPPLIER), || DEFAULT_SUPPLIER.to_string()),
            category: or_default(row.get(columns::CATEGORY), || DEFAULT_CATEGORY.to_string()),
        }),
        _ => Err(errors),
    }
}

fn or_default(value: &str, fallback: impl FnOnce() -> String) -> String {
    if value.is_empty() {
        fallback()
    } else {
        value.to_string()
    }
}

/// Fresh `AUTO-` batch token, unique per product.
pub fn auto_batch_number() -> String {
    let token = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("AUTO-{}", &token[..12])
}

enum AmountError {
    NotANumber,
    OutOfRange,
}

impl AmountError {
    fn into_error(self, row: usize, column: &str) -> ValidationError {
        match self {
            AmountError::NotANumber => ValidationError::non_numeric(row, column),
            AmountError::OutOfRange => ValidationError::out_of_range(row, column),
        }
    }
}

/// Reads a non-negative amount. Any decimal or exponent form is accepted and
/// the whole value is truncated, so `"12.9"` is 12 and `"1e1"` is 10 rather
/// than the leading digits alone. Hexadecimal (`"0x10"`) is not a number.
fn parse_amount(raw: &str) -> Result<u64, AmountError> {
    let value: f64 = raw.parse().map_err(|_| AmountError::NotANumber)?;
    if !value.is_finite() {
        return Err(AmountError::NotANumber);
    }
    let whole = value.trunc();
    // -0.5 truncates to -0, which is fine
    if whole < 0.0 || whole >= u64::MAX as f64 {
        return Err(AmountError::OutOfRange);
    }
    Ok(whole as u64)
}

/// `YYYY-MM-DD`, or an RFC 3339 timestamp whose date part is used.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::{parse, ValidationErrorKind};

    const HEADER: &str = "nama_produk,sku,stok_awal,stok_minimum,harga_jual,tanggal_kadaluarsa,nomor_batch,supplier,kategori";

    fn run(data: &str) -> ImportOutcome {
        validate(&parse(&format!("{HEADER}\n{data}")))
    }

    #[test]
    fn well_formed_row_becomes_product() {
        let outcome = run("Paracetamol 500mg,PCM001,100,50,7500,2025-12-15,BCH001-2024,PT Pharma Indonesia,Analgesik");
        assert!(outcome.errors.is_empty());
        let p = &outcome.products[0];
        assert_eq!(p.name, "Paracetamol 500mg");
        assert_eq!((p.stock, p.min_stock, p.price), (100, 50, 7500));
        assert_eq!(p.status, StockStatus::Normal);
        assert_eq!(p.expiry_date, NaiveDate::from_ymd_opt(2025, 12, 15).unwrap());
        assert_eq!(p.batch_number, "BCH001-2024");
        assert_eq!(p.supplier, "PT Pharma Indonesia");
        assert_eq!(p.category, "Analgesik");
    }

    #[test]
    fn missing_sku_is_exactly_one_error() {
        let outcome = run("Amoxicillin 250mg,,50,30,2500,2025-08-20,BCH002,PT X,Antibiotik");
        assert!(outcome.products.is_empty());
        assert_eq!(outcome.errors.len(), 1);
        let e = &outcome.errors[0];
        assert_eq!(e.row, 2);
        assert_eq!(e.field, "sku");
        assert_eq!(e.kind, ValidationErrorKind::MissingRequiredField);
        assert_eq!(e.message, "Field sku wajib diisi");
    }

    #[test]
    fn errors_accumulate_without_short_circuit() {
        let outcome = run(",X1,abc,,12x,31-12-2025");
        let kinds: Vec<(&str, ValidationErrorKind)> = outcome
            .errors
            .iter()
            .map(|e| (e.field.as_str(), e.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("nama_produk", ValidationErrorKind::MissingRequiredField),
                ("stok_minimum", ValidationErrorKind::MissingRequiredField),
                ("stok_awal", ValidationErrorKind::NonNumericField),
                ("harga_jual", ValidationErrorKind::NonNumericField),
                ("tanggal_kadaluarsa", ValidationErrorKind::InvalidDateFormat),
            ]
        );
        assert!(outcome.products.is_empty());
    }

    #[test]
    fn optional_columns_fall_back_to_defaults() {
        let outcome = validate(&parse(
            "nama_produk,sku,stok_awal,stok_minimum,harga_jual\nA,A1,5,1,100\nB,B1,5,1,100",
        ));
        let [a, b] = &outcome.products[..] else {
            panic!("expected two products");
        };
        assert_eq!(a.expiry_date, default_expiry_date());
        assert_eq!(a.supplier, DEFAULT_SUPPLIER);
        assert_eq!(a.category, DEFAULT_CATEGORY);
        assert!(a.batch_number.starts_with("AUTO-"));
        assert_ne!(a.batch_number, b.batch_number);
    }

    #[test]
    fn stock_equal_to_minimum_is_low() {
        let outcome = run("A,A1,30,30,100\nB,B1,29,30,100\nC,C1,31,30,100");
        let statuses: Vec<StockStatus> = outcome.products.iter().map(|p| p.status).collect();
        assert_eq!(
            statuses,
            vec![StockStatus::Low, StockStatus::Low, StockStatus::Normal]
        );
    }

    #[test]
    fn numbers_are_truncated_and_negatives_rejected() {
        let outcome = run("A,A1,12.9,1e1,7500.0\nB,B1,-3,1,1");
        assert_eq!(outcome.products.len(), 1);
        assert_eq!(outcome.products[0].stock, 12);
        assert_eq!(outcome.products[0].min_stock, 10);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].field, "stok_awal");
        assert_eq!(outcome.errors[0].kind, ValidationErrorKind::NonNumericField);
    }

    #[test]
    fn stock_beyond_counter_range_is_rejected() {
        let outcome = run("A,A1,99999999999,1,1");
        assert!(outcome.products.is_empty());
        assert_eq!(outcome.errors[0].field, "stok_awal");
    }

    #[test]
    fn exponents_are_evaluated_and_hex_is_rejected() {
        let outcome = run("A,A1,1e1,2.5e1,1.5e3\nB,B1,0x10,1,1");
        assert_eq!(outcome.products.len(), 1);
        let p = &outcome.products[0];
        assert_eq!((p.stock, p.min_stock, p.price), (10, 25, 1500));
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].row, 3);
        assert_eq!(outcome.errors[0].kind, ValidationErrorKind::NonNumericField);
    }

    #[test]
    fn nan_and_infinity_are_not_numbers() {
        let outcome = run("A,A1,NaN,inf,1");
        assert_eq!(outcome.errors.len(), 2);
        assert!(outcome
            .errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NonNumericField));
    }

    #[test]
    fn calendar_dates_are_checked() {
        let outcome = run("A,A1,1,1,1,2025-02-30\nB,B1,1,1,1,2025-06-01T00:00:00Z");
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].row, 2);
        assert_eq!(
            outcome.products[0].expiry_date,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
    }

    #[test]
    fn input_order_is_kept() {
        let outcome = run("A,A1,1,1,1\n,B1,1,1,1\nC,C1,1,1,1\n,D1,1,1,1");
        let skus: Vec<&str> = outcome.products.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["A1", "C1"]);
        let rows: Vec<usize> = outcome.errors.iter().map(|e| e.row).collect();
        assert_eq!(rows, vec![3, 5]);
    }
}
