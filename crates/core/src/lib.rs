//! Core budget simulation logic for Budget Sim.
//!
//! This crate turns budget line items into the data behind each dashboard
//! chart. It has ZERO rendering or UI dependencies: the charting library
//! draws, this crate only computes.
//!
//! # Modules
//!
//! - `budget` - Budget lines and per-category aggregation
//! - `views` - Totals, delta, treemap, stacked and waterfall reshaping
//! - `format` - Axis and euro currency labels
//! - `theme` - Chart colors
//! - `dashboard` - Render assembly and memoization

pub mod budget;
pub mod dashboard;
pub mod format;
pub mod theme;
pub mod views;

pub use budget::{BudgetAggregator, BudgetLine, CategorySummary};
pub use dashboard::{ChartData, DashboardCache, DashboardInput, DashboardRender, DashboardService};
pub use format::{format_axis_value, format_currency};
pub use theme::Theme;
pub use views::ViewMode;
