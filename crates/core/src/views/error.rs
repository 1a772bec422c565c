//! View selection errors.

use thiserror::Error;

/// View-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    /// The requested view does not exist.
    #[error("Unknown view '{0}', expected one of: totals, delta, treemap, stacked, waterfall")]
    UnknownView(String),
}
