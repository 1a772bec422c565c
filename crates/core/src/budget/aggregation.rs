//! Reduction of budget lines into per-category summaries.
//!
//! Every intermediate sum is re-rounded to the configured precision after
//! each addition, not once at the end. Long input sequences therefore
//! produce the same totals the dashboard has always shown.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

use super::types::{BudgetLine, BudgetTotals, CategorySummary, NEW_INVESTMENT_CATEGORY};

/// Adds two amounts, clamping at the `Decimal` range instead of panicking.
fn add(a: Decimal, b: Decimal) -> Decimal {
    a.saturating_add(b)
}

/// Sums amounts with saturating addition.
pub(crate) fn sum_amounts(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, add)
}

/// Rounds `value` to `precision` fractional digits, ties away from zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use budget_sim_core::budget::round_amount;
///
/// assert_eq!(round_amount(dec!(2.345), 2), dec!(2.35));
/// assert_eq!(round_amount(dec!(-2.345), 2), dec!(-2.35));
/// ```
#[must_use]
pub fn round_amount(value: Decimal, precision: u32) -> Decimal {
    value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero)
}

/// Aggregates budget lines by category.
pub struct BudgetAggregator;

impl BudgetAggregator {
    /// Groups lines by category, preserving first-seen order.
    ///
    /// For each line the category accumulates
    /// - `original += original_amount`
    /// - `final += round(original_amount + adjustment)`
    /// - `adjustment += adjustment`
    ///
    /// rounding each sum after every addition. Empty input yields an empty
    /// result. Sums beyond the `Decimal` range saturate rather than panic.
    #[must_use]
    pub fn aggregate(lines: &[BudgetLine], precision: u32) -> Vec<CategorySummary> {
        let mut summaries: Vec<CategorySummary> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for line in lines {
            let slot = *index.entry(line.category.as_str()).or_insert_with(|| {
                summaries.push(CategorySummary::empty(line.category.clone()));
                summaries.len() - 1
            });
            let summary = &mut summaries[slot];

            let line_final = round_amount(add(line.original_amount, line.adjustment), precision);
            summary.original = round_amount(add(summary.original, line.original_amount), precision);
            summary.final_amount = round_amount(add(summary.final_amount, line_final), precision);
            summary.adjustment = round_amount(add(summary.adjustment, line.adjustment), precision);
        }

        summaries
    }

    /// Aggregates lines and appends a synthetic new-investment summary.
    ///
    /// The investment summary is only added for a strictly positive amount;
    /// it has no original budget, so `final == adjustment == investment`.
    #[must_use]
    pub fn aggregate_with_investment(
        lines: &[BudgetLine],
        precision: u32,
        investment: Option<Decimal>,
    ) -> Vec<CategorySummary> {
        let mut summaries = Self::aggregate(lines, precision);

        if let Some(amount) = investment.filter(|amount| *amount > Decimal::ZERO) {
            let amount = round_amount(amount, precision);
            summaries.push(CategorySummary {
                name: NEW_INVESTMENT_CATEGORY.to_string(),
                original: Decimal::ZERO,
                final_amount: amount,
                adjustment: amount,
            });
        }

        summaries
    }

    /// Sums the summaries into dashboard header totals.
    #[must_use]
    pub fn totals(summaries: &[CategorySummary], precision: u32) -> BudgetTotals {
        let original = sum_amounts(summaries.iter().map(|s| s.original));
        let final_amount = sum_amounts(summaries.iter().map(|s| s.final_amount));
        let adjustment = sum_amounts(summaries.iter().map(|s| s.adjustment));

        BudgetTotals {
            original: round_amount(original, precision),
            final_amount: round_amount(final_amount, precision),
            adjustment: round_amount(adjustment, precision),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_lines() -> Vec<BudgetLine> {
        vec![
            BudgetLine::new("A", dec!(100), dec!(10)),
            BudgetLine::new("A", dec!(50), dec!(-5)),
            BudgetLine::new("B", dec!(200), dec!(0)),
        ]
    }

    #[test]
    fn test_aggregate_groups_by_category() {
        let summaries = BudgetAggregator::aggregate(&sample_lines(), 2);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "A");
        assert_eq!(summaries[0].original, dec!(150));
        assert_eq!(summaries[0].final_amount, dec!(155));
        assert_eq!(summaries[0].adjustment, dec!(5));
        assert_eq!(summaries[1].name, "B");
        assert_eq!(summaries[1].original, dec!(200));
        assert_eq!(summaries[1].final_amount, dec!(200));
        assert_eq!(summaries[1].adjustment, dec!(0));
    }

    #[test]
    fn test_aggregate_preserves_first_seen_order() {
        let lines = vec![
            BudgetLine::new("Zorg", dec!(1), dec!(0)),
            BudgetLine::new("Onderwijs", dec!(1), dec!(0)),
            BudgetLine::new("Zorg", dec!(1), dec!(0)),
            BudgetLine::new("Defensie", dec!(1), dec!(0)),
        ];

        let names: Vec<_> = BudgetAggregator::aggregate(&lines, 0)
            .into_iter()
            .map(|s| s.name)
            .collect();

        assert_eq!(names, vec!["Zorg", "Onderwijs", "Defensie"]);
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(BudgetAggregator::aggregate(&[], 2).is_empty());
    }

    #[test]
    fn test_aggregate_rounds_every_step() {
        // Each line rounds 0.004 + 0.002 = 0.006 to 0.01 before summing,
        // so three lines give 0.03 rather than round(0.018) = 0.02.
        let lines = vec![
            BudgetLine::new("A", dec!(0.004), dec!(0.002)),
            BudgetLine::new("A", dec!(0.004), dec!(0.002)),
            BudgetLine::new("A", dec!(0.004), dec!(0.002)),
        ];

        let summary = &BudgetAggregator::aggregate(&lines, 2)[0];
        assert_eq!(summary.final_amount, dec!(0.03));
        // original: 0.00 + 0.004 -> 0.00 on every step
        assert_eq!(summary.original, dec!(0.00));
    }

    #[test]
    fn test_round_amount_ties_away_from_zero() {
        assert_eq!(round_amount(dec!(0.5), 0), dec!(1));
        assert_eq!(round_amount(dec!(-0.5), 0), dec!(-1));
        assert_eq!(round_amount(dec!(1.005), 2), dec!(1.01));
        assert_eq!(round_amount(dec!(1.004), 2), dec!(1.00));
    }

    #[test]
    fn test_investment_appended_when_positive() {
        let summaries =
            BudgetAggregator::aggregate_with_investment(&sample_lines(), 2, Some(dec!(1234.567)));

        let last = summaries.last().unwrap();
        assert_eq!(summaries.len(), 3);
        assert_eq!(last.name, NEW_INVESTMENT_CATEGORY);
        assert_eq!(last.original, Decimal::ZERO);
        assert_eq!(last.final_amount, dec!(1234.57));
        assert_eq!(last.adjustment, dec!(1234.57));
    }

    #[test]
    fn test_investment_skipped_when_not_positive() {
        for investment in [None, Some(dec!(0)), Some(dec!(-10))] {
            let summaries =
                BudgetAggregator::aggregate_with_investment(&sample_lines(), 2, investment);
            assert_eq!(summaries.len(), 2);
        }
    }

    #[test]
    fn test_totals() {
        let summaries = BudgetAggregator::aggregate(&sample_lines(), 2);
        let totals = BudgetAggregator::totals(&summaries, 2);

        assert_eq!(totals.original, dec!(350));
        assert_eq!(totals.final_amount, dec!(355));
        assert_eq!(totals.adjustment, dec!(5));
    }

    #[test]
    fn test_aggregate_saturates_instead_of_overflowing() {
        let lines = vec![
            BudgetLine::new("A", Decimal::MAX, dec!(1)),
            BudgetLine::new("A", Decimal::MAX, dec!(0)),
            BudgetLine::new("B", Decimal::MAX, dec!(0)),
        ];

        let summaries = BudgetAggregator::aggregate(&lines, 2);
        assert_eq!(summaries[0].original, Decimal::MAX);
        assert_eq!(summaries[0].final_amount, Decimal::MAX);
        assert_eq!(summaries[0].adjustment, dec!(1));

        let totals = BudgetAggregator::totals(&summaries, 2);
        assert_eq!(totals.original, Decimal::MAX);
        assert_eq!(totals.final_amount, Decimal::MAX);
    }

    #[test]
    fn test_summary_serializes_final_key() {
        let summary = CategorySummary {
            name: "A".to_string(),
            original: dec!(150),
            final_amount: dec!(155),
            adjustment: dec!(5),
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["final"], "155");
        assert!(json.get("final_amount").is_none());
    }

    #[test]
    fn test_budget_line_reads_camel_case() {
        let line: BudgetLine = serde_json::from_str(
            r#"{"category":"Zorg","originalAmount":"100.50","adjustment":-20}"#,
        )
        .unwrap();

        assert_eq!(line.category, "Zorg");
        assert_eq!(line.original_amount, dec!(100.50));
        assert_eq!(line.adjustment, dec!(-20));
    }
}
