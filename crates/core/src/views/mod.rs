//! Chart-specific reshaping of category summaries.

pub mod error;
pub mod mode;
pub mod stacked;
pub mod totals;
pub mod treemap;
pub mod waterfall;

#[cfg(test)]
mod tests;

pub use error::ViewError;
pub use mode::ViewMode;
pub use stacked::{FINAL_ROW_LABEL, ORIGINAL_ROW_LABEL, StackedRow, StackedSegment, to_stacked_view};
pub use totals::{DeltaBar, DeltaView, to_delta_view, to_totals_view};
pub use treemap::{TreemapNode, to_treemap_view};
pub use waterfall::{END_LABEL, START_LABEL, WaterfallPoint, to_waterfall_view};
