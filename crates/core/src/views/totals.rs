//! Grouped totals bars and horizontal delta bars.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::budget::CategorySummary;
use crate::theme::Theme;

/// Returns all summaries sorted descending by final amount.
///
/// The sort is stable, so categories with equal finals keep input order.
#[must_use]
pub fn to_totals_view(summaries: &[CategorySummary]) -> Vec<CategorySummary> {
    let mut rows = summaries.to_vec();
    rows.sort_by(|a, b| b.final_amount.cmp(&a.final_amount));
    rows
}

/// Returns only adjusted summaries, largest increase first, largest cut last.
///
/// An empty result means nothing has been adjusted yet.
#[must_use]
pub fn to_delta_view(summaries: &[CategorySummary]) -> Vec<CategorySummary> {
    let mut rows: Vec<CategorySummary> = summaries
        .iter()
        .filter(|s| s.is_adjusted())
        .cloned()
        .collect();
    rows.sort_by(|a, b| b.adjustment.cmp(&a.adjustment));
    rows
}

/// A single horizontal delta bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeltaBar {
    /// Category name.
    pub name: String,
    /// Signed adjustment.
    pub adjustment: Decimal,
    /// Bar color.
    pub color: String,
}

/// Chart data for the delta view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeltaView {
    /// Bars in display order.
    pub bars: Vec<DeltaBar>,
    /// Set when there are no adjustments and a placeholder must be shown.
    pub no_changes: bool,
}

impl DeltaView {
    /// Builds colored delta bars from category summaries.
    #[must_use]
    pub fn build(summaries: &[CategorySummary], theme: &Theme) -> Self {
        let bars: Vec<DeltaBar> = to_delta_view(summaries)
            .into_iter()
            .map(|s| DeltaBar {
                color: theme.for_adjustment(s.adjustment).to_string(),
                name: s.name,
                adjustment: s.adjustment,
            })
            .collect();

        Self {
            no_changes: bars.is_empty(),
            bars,
        }
    }

    /// Returns true when there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
