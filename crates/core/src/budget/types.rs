//! Budget data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Name of the synthetic summary carrying a new investment.
pub const NEW_INVESTMENT_CATEGORY: &str = "Nieuwe Investering";

/// A budget line item as supplied by the data provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLine {
    /// Grouping key.
    pub category: String,
    /// Amount before the proposed adjustment.
    pub original_amount: Decimal,
    /// Signed proposed change.
    pub adjustment: Decimal,
}

impl BudgetLine {
    /// Creates a new budget line.
    #[must_use]
    pub fn new(category: impl Into<String>, original_amount: Decimal, adjustment: Decimal) -> Self {
        Self {
            category: category.into(),
            original_amount,
            adjustment,
        }
    }
}

/// Per-category aggregate of budget lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category name.
    pub name: String,
    /// Sum of original amounts.
    pub original: Decimal,
    /// Sum of adjusted amounts.
    #[serde(rename = "final")]
    pub final_amount: Decimal,
    /// Net adjustment.
    pub adjustment: Decimal,
}

impl CategorySummary {
    /// Creates an empty summary for a category.
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            original: Decimal::ZERO,
            final_amount: Decimal::ZERO,
            adjustment: Decimal::ZERO,
        }
    }

    /// Returns true if the category was adjusted at all.
    #[must_use]
    pub fn is_adjusted(&self) -> bool {
        !self.adjustment.is_zero()
    }
}

/// Totals across all categories, shown in the dashboard header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetTotals {
    /// Total original budget.
    pub original: Decimal,
    /// Total budget after adjustments.
    #[serde(rename = "final")]
    pub final_amount: Decimal,
    /// Net adjustment.
    pub adjustment: Decimal,
}
