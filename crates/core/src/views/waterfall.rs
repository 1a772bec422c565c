//! Waterfall from the original total to the new total.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::budget::{CategorySummary, round_amount, sum_amounts};
use crate::theme::Theme;

/// Name of the opening total.
pub const START_LABEL: &str = "Start (Origineel)";

/// Name of the closing total.
pub const END_LABEL: &str = "Eind (Nieuw)";

/// A bar in the waterfall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WaterfallPoint {
    /// Full-height bar for the start or end total.
    Total {
        /// Bar label.
        name: String,
        /// Total amount.
        value: Decimal,
    },
    /// Floating bar spanning the running total before and after a category.
    #[serde(rename_all = "camelCase")]
    Step {
        /// Category name.
        name: String,
        /// Lower edge of the floating bar.
        range_min: Decimal,
        /// Upper edge of the floating bar.
        range_max: Decimal,
        /// Signed adjustment.
        adjustment: Decimal,
        /// Bar color.
        color: String,
    },
}

impl WaterfallPoint {
    /// Bar label.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Total { name, .. } | Self::Step { name, .. } => name,
        }
    }

    /// Returns the value of a total bar.
    #[must_use]
    pub fn total_value(&self) -> Option<Decimal> {
        match self {
            Self::Total { value, .. } => Some(*value),
            Self::Step { .. } => None,
        }
    }
}

/// Builds the waterfall: start total, one step per adjusted category, end total.
///
/// Steps are ordered by adjustment, increases first, so the bars climb
/// before they fall. The end total does not depend on that order.
#[must_use]
pub fn to_waterfall_view(
    summaries: &[CategorySummary],
    precision: u32,
    theme: &Theme,
) -> Vec<WaterfallPoint> {
    let total_original = round_amount(sum_amounts(summaries.iter().map(|s| s.original)), precision);

    let mut steps: Vec<&CategorySummary> = summaries.iter().filter(|s| s.is_adjusted()).collect();
    steps.sort_by(|a, b| b.adjustment.cmp(&a.adjustment));

    let mut points = Vec::with_capacity(steps.len() + 2);
    points.push(WaterfallPoint::Total {
        name: START_LABEL.to_string(),
        value: total_original,
    });

    let mut running_total = total_original;
    for summary in steps {
        let previous = running_total;
        running_total = round_amount(running_total.saturating_add(summary.adjustment), precision);

        points.push(WaterfallPoint::Step {
            name: summary.name.clone(),
            range_min: previous.min(running_total),
            range_max: previous.max(running_total),
            adjustment: summary.adjustment,
            color: theme.for_adjustment(summary.adjustment).to_string(),
        });
    }

    points.push(WaterfallPoint::Total {
        name: END_LABEL.to_string(),
        value: running_total,
    });

    points
}
