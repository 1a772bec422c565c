//! Dashboard assembly: aggregate once, reshape for the selected view.

use std::hash::{DefaultHasher, Hash, Hasher};

use tracing::debug;

use super::types::{ChartData, DashboardInput, DashboardRender, FormattedTotals, StackedView};
use crate::budget::{BudgetAggregator, BudgetTotals, CategorySummary};
use crate::format::format_currency;
use crate::views::{
    DeltaView, ViewMode, to_stacked_view, to_totals_view, to_treemap_view, to_waterfall_view,
};

/// Builds chart data for the dashboard.
pub struct DashboardService;

impl DashboardService {
    /// Aggregates the input lines, including any new investment.
    #[must_use]
    pub fn summarize(input: &DashboardInput) -> Vec<CategorySummary> {
        BudgetAggregator::aggregate_with_investment(
            &input.lines,
            input.precision,
            input.new_investment,
        )
    }

    /// Reshapes summaries for one view.
    #[must_use]
    pub fn chart(summaries: &[CategorySummary], input: &DashboardInput, mode: ViewMode) -> ChartData {
        match mode {
            ViewMode::Totals => ChartData::Totals(to_totals_view(summaries)),
            ViewMode::Delta => ChartData::Delta(DeltaView::build(summaries, &input.theme)),
            ViewMode::Treemap => ChartData::Treemap(to_treemap_view(summaries, &input.theme)),
            ViewMode::Stacked => {
                let rows = to_stacked_view(summaries);
                let shares = [rows[0].shares(input.precision), rows[1].shares(input.precision)];
                ChartData::Stacked(StackedView { rows, shares })
            }
            ViewMode::Waterfall => ChartData::Waterfall(to_waterfall_view(
                summaries,
                input.precision,
                &input.theme,
            )),
        }
    }

    /// Renders the dashboard for the selected view from scratch.
    #[must_use]
    pub fn render(input: &DashboardInput, mode: ViewMode) -> DashboardRender {
        let summaries = Self::summarize(input);
        let totals = BudgetAggregator::totals(&summaries, input.precision);
        let chart = Self::chart(&summaries, input, mode);

        debug!(
            lines = input.lines.len(),
            categories = summaries.len(),
            view = %mode,
            "Rendered dashboard"
        );

        DashboardRender {
            input_hash: Self::hash_input(input, mode),
            formatted_totals: Self::format_totals(&totals, input.precision),
            axis_in_thousands: input.show_in_thousands,
            totals,
            chart,
            cached: false,
        }
    }

    /// Hashes the input and view into a stable key.
    #[must_use]
    pub fn hash_input(input: &DashboardInput, mode: ViewMode) -> String {
        let mut hasher = DefaultHasher::new();
        input.hash(&mut hasher);
        mode.hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }

    fn format_totals(totals: &BudgetTotals, precision: u32) -> FormattedTotals {
        FormattedTotals {
            original: format_currency(totals.original, precision),
            final_amount: format_currency(totals.final_amount, precision),
            adjustment: format_currency(totals.adjustment, precision),
        }
    }
}
