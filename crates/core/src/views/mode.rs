//! Dashboard view selection.

use serde::{Deserialize, Serialize};

use super::error::ViewError;

/// The chart view currently shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Grouped original/final bars per category.
    #[default]
    Totals,
    /// Horizontal bars of the non-zero adjustments.
    Delta,
    /// Area per category, sized by final amount.
    Treemap,
    /// 100%-stacked original vs final composition.
    Stacked,
    /// Start total, signed steps, end total.
    Waterfall,
}

impl ViewMode {
    /// Every view, in toolbar order.
    pub const ALL: [Self; 5] = [
        Self::Totals,
        Self::Delta,
        Self::Treemap,
        Self::Stacked,
        Self::Waterfall,
    ];

    /// Returns the identifier used in config and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Totals => "totals",
            Self::Delta => "delta",
            Self::Treemap => "treemap",
            Self::Stacked => "stacked",
            Self::Waterfall => "waterfall",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ViewMode {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| ViewError::UnknownView(s.to_string()))
    }
}
