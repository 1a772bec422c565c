//! 100%-stacked original vs final composition.

use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::budget::{CategorySummary, round_amount};

/// Label of the row holding original amounts.
pub const ORIGINAL_ROW_LABEL: &str = "Origineel Budget";

/// Label of the row holding final amounts.
pub const FINAL_ROW_LABEL: &str = "Nieuw Budget";

/// One category's slice of a stacked bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackedSegment {
    /// Category name.
    pub category: String,
    /// Strictly positive amount, or a percentage in a share row.
    pub amount: Decimal,
}

/// A stacked bar: an ordered mapping from category to amount.
///
/// Serializes as a flat object, `{"label": ..., "<category>": amount, ...}`,
/// which is the record shape stacked-bar renderers expect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackedRow {
    /// Bar label.
    pub label: String,
    /// Segments in category order.
    pub segments: Vec<StackedSegment>,
}

impl StackedRow {
    fn from_amounts<'a>(
        label: &str,
        amounts: impl Iterator<Item = (&'a str, Decimal)>,
    ) -> Self {
        // Zero or negative segments break stacked renderers.
        let segments = amounts
            .filter(|(_, amount)| *amount > Decimal::ZERO)
            .map(|(category, amount)| StackedSegment {
                category: category.to_string(),
                amount,
            })
            .collect();

        Self {
            label: label.to_string(),
            segments,
        }
    }

    /// Returns the amount of a category, if present in this row.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.segments
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.amount)
    }

    /// Sum of all segments, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.segments
            .iter()
            .fold(Decimal::ZERO, |total, s| total.saturating_add(s.amount))
    }

    /// Returns the same row with each segment as a percentage of the total.
    ///
    /// A row without segments has no shares. Segments whose share rounds
    /// to zero at `precision` are left out, like any non-positive segment.
    #[must_use]
    pub fn shares(&self, precision: u32) -> Self {
        let total = self.total();
        let segments = if total.is_zero() {
            Vec::new()
        } else {
            self.segments
                .iter()
                .filter_map(|s| {
                    // Divide first: amount * 100 overflows for very large amounts.
                    let share = s.amount.checked_div(total)?.checked_mul(Decimal::ONE_HUNDRED)?;
                    let amount = round_amount(share, precision);
                    (amount > Decimal::ZERO).then(|| StackedSegment {
                        category: s.category.clone(),
                        amount,
                    })
                })
                .collect()
        };

        Self {
            label: self.label.clone(),
            segments,
        }
    }
}

impl Serialize for StackedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.segments.len() + 1))?;
        map.serialize_entry("label", &self.label)?;
        for segment in &self.segments {
            map.serialize_entry(&segment.category, &segment.amount)?;
        }
        map.end()
    }
}

/// Pivots summaries into the original row and the final row.
///
/// Non-positive values are dropped per row, so a category may appear in
/// one row and not the other.
#[must_use]
pub fn to_stacked_view(summaries: &[CategorySummary]) -> [StackedRow; 2] {
    let original = StackedRow::from_amounts(
        ORIGINAL_ROW_LABEL,
        summaries.iter().map(|s| (s.name.as_str(), s.original)),
    );
    let final_row = StackedRow::from_amounts(
        FINAL_ROW_LABEL,
        summaries.iter().map(|s| (s.name.as_str(), s.final_amount)),
    );

    [original, final_row]
}
