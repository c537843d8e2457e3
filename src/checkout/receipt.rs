use super::cart::CartLine;
use super::totals::{format_rupiah, TaxRate, Totals};
use crate::config::StoreConfig;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Width of the printed receipt in characters.
pub const RECEIPT_WIDTH: usize = 44;

/// Record of a completed sale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub lines: Vec<CartLine>,
    pub totals: Totals,
    pub tax_rate: TaxRate,
    pub tendered: u64,
    pub change: u64,
    pub issued_at: NaiveDateTime,
}

impl Receipt {
    /// The printable text for `store`.
    pub fn printed<'a>(&'a self, store: &'a StoreConfig) -> PrintedReceipt<'a> {
        PrintedReceipt {
            receipt: self,
            store,
        }
    }
}

/// Renders with the default store header.
impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.printed(&StoreConfig::default()))
    }
}

/// A [`Receipt`] paired with the store it is printed for.
pub struct PrintedReceipt<'a> {
    receipt: &'a Receipt,
    store: &'a StoreConfig,
}

impl fmt::Display for PrintedReceipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.receipt;
        let rule = "=".repeat(RECEIPT_WIDTH);
        let thin = "-".repeat(RECEIPT_WIDTH);

        writeln!(f, "{rule}")?;
        writeln!(f, "{}", centered(&self.store.store_name))?;
        writeln!(f, "{}", centered(&self.store.address))?;
        writeln!(f, "{}", centered(&format!("Tel: {}", self.store.phone)))?;
        writeln!(f, "{rule}")?;
        writeln!(f)?;
        writeln!(f, "Tanggal: {}", r.issued_at.format("%d/%m/%Y, %H.%M.%S"))?;
        writeln!(f, "Kasir: {}", self.store.cashier)?;
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "DETAIL PEMBELIAN:")?;
        writeln!(f, "{rule}")?;
        for line in &r.lines {
            writeln!(f, "{}", line.name)?;
            writeln!(
                f,
                "{} x Rp {} = Rp {}",
                line.quantity,
                format_rupiah(line.unit_price),
                format_rupiah(line.line_total())
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        amount(f, "Subtotal:", r.totals.subtotal)?;
        amount(f, &format!("Pajak ({}):", r.tax_rate), r.totals.tax)?;
        writeln!(f, "{thin}")?;
        amount(f, "TOTAL:", r.totals.total)?;
        writeln!(f)?;
        amount(f, "Bayar:", r.tendered)?;
        amount(f, "Kembalian:", r.change)?;
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "{}", centered("Terima kasih atas kunjungan Anda!"))?;
        writeln!(f, "{}", centered("Semoga lekas sembuh"))?;
        write!(f, "{rule}")
    }
}

fn amount(f: &mut fmt::Formatter<'_>, label: &str, value: u64) -> fmt::Result {
    writeln!(f, "{label:<14}Rp {}", format_rupiah(value))
}

fn centered(text: &str) -> String {
    let pad = RECEIPT_WIDTH.saturating_sub(text.chars().count()) / 2;
    format!("{}{text}", " ".repeat(pad))
}
