//! Property-based tests for the view transformers.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::stacked::to_stacked_view;
use super::totals::{to_delta_view, to_totals_view};
use super::treemap::to_treemap_view;
use super::waterfall::{WaterfallPoint, to_waterfall_view};
use crate::budget::{BudgetAggregator, BudgetLine, CategorySummary};
use crate::theme::Theme;

/// Strategy for a cent amount that may be negative or zero.
fn amount() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::ZERO),
        (-5_000_000i64..50_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
    ]
}

/// Strategy for aggregated summaries over random lines.
fn summaries() -> impl Strategy<Value = Vec<CategorySummary>> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["Zorg", "Onderwijs", "Defensie", "Cultuur", "Wonen", "Klimaat"]),
            amount(),
            amount(),
        ),
        0..30,
    )
    .prop_map(|raw| {
        let lines: Vec<BudgetLine> = raw
            .into_iter()
            .map(|(category, original, adjustment)| BudgetLine::new(category, original, adjustment))
            .collect();
        BudgetAggregator::aggregate(&lines, 2)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Delta view never contains an unadjusted category.
    #[test]
    fn prop_delta_has_no_zero_adjustments(summaries in summaries()) {
        for row in to_delta_view(&summaries) {
            prop_assert!(!row.adjustment.is_zero());
        }
    }

    /// Delta view is sorted non-increasing by adjustment.
    #[test]
    fn prop_delta_sorted(summaries in summaries()) {
        let rows = to_delta_view(&summaries);
        for pair in rows.windows(2) {
            prop_assert!(pair[0].adjustment >= pair[1].adjustment);
        }
    }

    /// Totals view is sorted non-increasing by final and keeps every category.
    #[test]
    fn prop_totals_sorted(summaries in summaries()) {
        let rows = to_totals_view(&summaries);
        prop_assert_eq!(rows.len(), summaries.len());
        for pair in rows.windows(2) {
            prop_assert!(pair[0].final_amount >= pair[1].final_amount);
        }
    }

    /// Totals are first and last only, and the running total ends on the last value.
    #[test]
    fn prop_waterfall_shape(summaries in summaries()) {
        let points = to_waterfall_view(&summaries, 2, &Theme::default());

        prop_assert!(points.len() >= 2);
        let starts_with_total = matches!(points.first(), Some(WaterfallPoint::Total { .. }));
        let ends_with_total = matches!(points.last(), Some(WaterfallPoint::Total { .. }));
        prop_assert!(starts_with_total);
        prop_assert!(ends_with_total);

        let start = points[0].total_value().unwrap_or_default();
        let mut running = start;
        for point in &points[1..points.len() - 1] {
            match point {
                WaterfallPoint::Step { range_min, range_max, adjustment, .. } => {
                    let next = running + *adjustment;
                    prop_assert_eq!(*range_min, running.min(next));
                    prop_assert_eq!(*range_max, running.max(next));
                    running = next;
                }
                WaterfallPoint::Total { .. } => prop_assert!(false, "total in the middle"),
            }
        }

        prop_assert_eq!(Some(running), points[points.len() - 1].total_value());
    }

    /// The end total is the original total plus every adjustment.
    #[test]
    fn prop_waterfall_end_value(summaries in summaries()) {
        let points = to_waterfall_view(&summaries, 2, &Theme::default());

        let original: Decimal = summaries.iter().map(|s| s.original).sum();
        let adjustments: Decimal = summaries.iter().map(|s| s.adjustment).sum();

        prop_assert_eq!(points.last().and_then(WaterfallPoint::total_value), Some(original + adjustments));
    }

    /// Stacked rows never hold a non-positive value.
    #[test]
    fn prop_stacked_values_positive(summaries in summaries()) {
        for row in to_stacked_view(&summaries) {
            for segment in &row.segments {
                prop_assert!(segment.amount > Decimal::ZERO);
            }
        }
    }

    /// Percentage rows never hold a non-positive value either.
    #[test]
    fn prop_stacked_shares_positive(summaries in summaries(), precision in 0u32..=4) {
        for row in to_stacked_view(&summaries) {
            for segment in &row.shares(precision).segments {
                prop_assert!(segment.amount > Decimal::ZERO);
            }
        }
    }

    /// Treemap tiles always have positive area.
    #[test]
    fn prop_treemap_sizes_positive(summaries in summaries()) {
        for node in to_treemap_view(&summaries, &Theme::default()) {
            prop_assert!(node.size > Decimal::ZERO);
        }
    }

    /// Every transformer is a pure function.
    #[test]
    fn prop_transformers_idempotent(summaries in summaries()) {
        let theme = Theme::default();
        prop_assert_eq!(to_totals_view(&summaries), to_totals_view(&summaries));
        prop_assert_eq!(to_delta_view(&summaries), to_delta_view(&summaries));
        prop_assert_eq!(to_stacked_view(&summaries), to_stacked_view(&summaries));
        prop_assert_eq!(
            to_waterfall_view(&summaries, 2, &theme),
            to_waterfall_view(&summaries, 2, &theme)
        );
        prop_assert_eq!(
            to_treemap_view(&summaries, &theme),
            to_treemap_view(&summaries, &theme)
        );
    }
}

#[test]
fn test_reference_example_end_to_end() {
    let lines = vec![
        BudgetLine::new("A", dec!(100), dec!(10)),
        BudgetLine::new("A", dec!(50), dec!(-5)),
        BudgetLine::new("B", dec!(200), dec!(0)),
    ];
    let summaries = BudgetAggregator::aggregate(&lines, 2);

    let delta = to_delta_view(&summaries);
    assert_eq!(delta.len(), 1);
    assert_eq!(delta[0].name, "A");

    let points = to_waterfall_view(&summaries, 2, &Theme::default());
    let values: Vec<_> = points.iter().map(WaterfallPoint::total_value).collect();
    assert_eq!(values, vec![Some(dec!(350)), None, Some(dec!(355))]);
}
