//! Dashboard rendering: one pass from budget lines to chart data.

pub mod cache;
pub mod service;
pub mod types;

pub use cache::DashboardCache;
pub use service::DashboardService;
pub use types::{ChartData, DashboardInput, DashboardRender, FormattedTotals, StackedView};
