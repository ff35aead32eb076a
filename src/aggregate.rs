//! Subtotal and total derivation.
//!
//! Totals are recomputed on every read from the line items alone; nothing
//! downstream ever trusts a total carried in the input. No rounding happens
//! here, only at display formatting time.

use crate::schema::{BalanceSheet, Category, Section};

impl Category {
    /// Sum of this category's line-item amounts. A category with no items
    /// sums to exactly zero.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(|item| item.amount).sum()
    }
}

impl Section {
    /// Sum of all category subtotals in this section.
    pub fn total(&self) -> f64 {
        self.categories.iter().map(Category::subtotal).sum()
    }
}

/// Section totals for both sides of the document. An absent section
/// contributes zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BalanceTotals {
    pub assets: f64,
    pub liabilities_equity: f64,
}

impl BalanceSheet {
    pub fn totals(&self) -> BalanceTotals {
        BalanceTotals {
            assets: self.assets.as_ref().map_or(0.0, Section::total),
            liabilities_equity: self.liabilities_equity.as_ref().map_or(0.0, Section::total),
        }
    }
}
