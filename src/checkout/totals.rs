use super::cart::{Cart, CartLine};
use serde::Serialize;
use std::fmt;

/// Sales tax in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxRate(u8);

impl TaxRate {
    pub const fn percent(percent: u8) -> Self {
        Self(percent)
    }

    pub fn as_percent(self) -> u8 {
        self.0
    }

    /// Tax due on `subtotal`, rounded half up to the nearest rupiah.
    /// Saturates at `u64::MAX`; see [`TaxRate::checked_apply`].
    pub fn apply(self, subtotal: u64) -> u64 {
        self.checked_apply(subtotal).unwrap_or(u64::MAX)
    }

    pub fn checked_apply(self, subtotal: u64) -> Option<u64> {
        let scaled = u128::from(subtotal) * u128::from(self.0);
        u64::try_from((scaled + 50) / 100).ok()
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self(10)
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub subtotal: u64,
    pub tax: u64,
    pub total: u64,
}

impl Totals {
    /// `None` when `subtotal + tax` does not fit a rupiah amount.
    pub fn from_subtotal(subtotal: u64, rate: TaxRate) -> Option<Self> {
        let tax = rate.checked_apply(subtotal)?;
        Some(Self {
            subtotal,
            tax,
            total: subtotal.checked_add(tax)?,
        })
    }
}

/// Totals for `lines` at `rate`, or `None` if any sum overflows.
pub fn checked_totals(lines: &[CartLine], rate: TaxRate) -> Option<Totals> {
    let subtotal = lines.iter().try_fold(0u64, |acc, line| {
        let line_total = line.unit_price.checked_mul(u64::from(line.quantity))?;
        acc.checked_add(line_total)
    })?;
    Totals::from_subtotal(subtotal, rate)
}

/// Subtotal, tax and total of everything in the cart at the cart's tax rate.
///
/// A [`Cart`] refuses any change whose totals would overflow, so this is
/// always exact.
pub fn compute_totals(cart: &Cart) -> Totals {
    checked_totals(cart.lines(), cart.tax_rate()).unwrap_or(Totals {
        subtotal: u64::MAX,
        tax: 0,
        total: u64::MAX,
    })
}

/// Change due to the customer, never negative.
pub fn compute_change(total: u64, tendered: u64) -> u64 {
    tendered.saturating_sub(total)
}

/// Formats a rupiah amount with `.` thousands separators: `44000` is `44.000`.
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
