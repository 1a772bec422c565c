//! Treemap of the new budget.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::budget::CategorySummary;
use crate::theme::Theme;

/// A treemap tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreemapNode {
    /// Category name.
    pub name: String,
    /// Tile area, the category's final amount.
    pub size: Decimal,
    /// Signed adjustment, shown in the tooltip.
    pub adjustment: Decimal,
    /// Tile color.
    pub color: String,
}

/// Builds treemap tiles, largest first.
///
/// Categories whose final amount is zero or negative have no area and are
/// dropped rather than clamped.
#[must_use]
pub fn to_treemap_view(summaries: &[CategorySummary], theme: &Theme) -> Vec<TreemapNode> {
    let mut nodes: Vec<TreemapNode> = summaries
        .iter()
        .filter(|s| s.final_amount > Decimal::ZERO)
        .map(|s| TreemapNode {
            name: s.name.clone(),
            size: s.final_amount,
            adjustment: s.adjustment,
            color: theme.for_adjustment(s.adjustment).to_string(),
        })
        .collect();
    nodes.sort_by(|a, b| b.size.cmp(&a.size));
    nodes
}
