//! Chart color theme.

use budget_sim_shared::ThemeConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Named colors handed to the chart renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Main series color (totals, treemap, waterfall totals).
    pub primary: String,
    /// Budget cuts.
    pub high_risk: String,
    /// Budget increases.
    pub low_risk: String,
    /// Unchanged categories.
    pub medium_risk: String,
    /// Labels.
    pub text: String,
}

impl Theme {
    /// Picks the bar color for a signed adjustment.
    #[must_use]
    pub fn for_adjustment(&self, adjustment: Decimal) -> &str {
        match adjustment.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => &self.low_risk,
            std::cmp::Ordering::Less => &self.high_risk,
            std::cmp::Ordering::Equal => &self.medium_risk,
        }
    }
}

impl From<&ThemeConfig> for Theme {
    fn from(config: &ThemeConfig) -> Self {
        Self {
            primary: config.primary.clone(),
            high_risk: config.high_risk.clone(),
            low_risk: config.low_risk.clone(),
            medium_risk: config.medium_risk.clone(),
            text: config.text.clone(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_for_adjustment() {
        let theme = Theme::default();
        assert_eq!(theme.for_adjustment(dec!(5)), theme.low_risk);
        assert_eq!(theme.for_adjustment(dec!(-0.01)), theme.high_risk);
        assert_eq!(theme.for_adjustment(dec!(0)), theme.medium_risk);
    }

    #[test]
    fn test_from_config() {
        let config = ThemeConfig {
            primary: "#111111".to_string(),
            ..ThemeConfig::default()
        };

        let theme = Theme::from(&config);
        assert_eq!(theme.primary, "#111111");
        assert_eq!(theme.text, config.text);
    }
}
