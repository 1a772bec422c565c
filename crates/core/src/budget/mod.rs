//! Budget lines and their per-category aggregation.

pub mod aggregation;
pub mod types;


pub use aggregation::{BudgetAggregator, round_amount};
pub(crate) use aggregation::sum_amounts;
pub use types::{BudgetLine, BudgetTotals, CategorySummary, NEW_INVESTMENT_CATEGORY};
