//! Dashboard data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::{BudgetLine, BudgetTotals, CategorySummary};
use crate::theme::Theme;
use crate::views::{DeltaView, StackedRow, TreemapNode, ViewMode, WaterfallPoint};

/// Everything the data provider hands to the dashboard for one render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardInput {
    /// Budget line items, in provider order.
    pub lines: Vec<BudgetLine>,
    /// Decimal digits kept when rounding.
    #[serde(default = "default_precision")]
    pub precision: u32,
    /// Render axis labels in thousands.
    #[serde(default)]
    pub show_in_thousands: bool,
    /// Chart colors.
    #[serde(default)]
    pub theme: Theme,
    /// Extra investment shown as its own category.
    #[serde(default)]
    pub new_investment: Option<Decimal>,
}

fn default_precision() -> u32 {
    2
}

impl DashboardInput {
    /// Creates an input with default precision, theme and no investment.
    #[must_use]
    pub fn new(lines: Vec<BudgetLine>) -> Self {
        Self {
            lines,
            precision: default_precision(),
            show_in_thousands: false,
            theme: Theme::default(),
            new_investment: None,
        }
    }
}

/// Stacked bars plus their 100%-normalized counterparts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackedView {
    /// Original and final amounts.
    pub rows: [StackedRow; 2],
    /// The same rows as percentages of their totals.
    pub shares: [StackedRow; 2],
}

/// Chart data for the selected view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "data", rename_all = "kebab-case")]
pub enum ChartData {
    /// Grouped original/final bars, largest final first.
    Totals(Vec<CategorySummary>),
    /// Adjusted categories only.
    Delta(DeltaView),
    /// Tiles with positive area.
    Treemap(Vec<TreemapNode>),
    /// Original vs final composition.
    Stacked(StackedView),
    /// Start, steps, end.
    Waterfall(Vec<WaterfallPoint>),
}

impl ChartData {
    /// Returns the view this data belongs to.
    #[must_use]
    pub const fn mode(&self) -> ViewMode {
        match self {
            Self::Totals(_) => ViewMode::Totals,
            Self::Delta(_) => ViewMode::Delta,
            Self::Treemap(_) => ViewMode::Treemap,
            Self::Stacked(_) => ViewMode::Stacked,
            Self::Waterfall(_) => ViewMode::Waterfall,
        }
    }
}

/// Header totals rendered as currency strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedTotals {
    /// Original budget.
    pub original: String,
    /// New budget.
    #[serde(rename = "final")]
    pub final_amount: String,
    /// Net adjustment.
    pub adjustment: String,
}

/// One rendered dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRender {
    /// Hash of the input and view, usable as a memoization key.
    pub input_hash: String,
    /// Header totals.
    pub totals: BudgetTotals,
    /// Header totals as euro strings.
    pub formatted_totals: FormattedTotals,
    /// Axis labels should be formatted in thousands.
    pub axis_in_thousands: bool,
    /// Chart data for the selected view.
    pub chart: ChartData,
    /// Whether this render was served from the cache.
    pub cached: bool,
}
