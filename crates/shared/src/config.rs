//! Application configuration management.

use serde::Deserialize;

/// Largest number of fractional digits a `Decimal` can carry.
pub const MAX_PRECISION: u32 = 28;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Dashboard rendering defaults.
    #[serde(default)]
    pub dashboard: DashboardConfig,
    /// Chart color theme.
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Chart data memoization.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Log filtering.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dashboard rendering defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Decimal digits kept when rounding amounts.
    #[serde(default = "default_precision")]
    pub precision: u32,
    /// Render axis labels in thousands ("12.5k").
    #[serde(default)]
    pub show_in_thousands: bool,
    /// View shown when none is requested.
    #[serde(default = "default_view")]
    pub default_view: String,
}

fn default_precision() -> u32 {
    2
}

fn default_view() -> String {
    "totals".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            show_in_thousands: false,
            default_view: default_view(),
        }
    }
}

/// Named chart colors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeConfig {
    /// Main series color.
    #[serde(default = "default_primary")]
    pub primary: String,
    /// Color for cuts.
    #[serde(default = "default_high_risk")]
    pub high_risk: String,
    /// Color for increases.
    #[serde(default = "default_low_risk")]
    pub low_risk: String,
    /// Color for unchanged categories.
    #[serde(default = "default_medium_risk")]
    pub medium_risk: String,
    /// Label color.
    #[serde(default = "default_text")]
    pub text: String,
}

fn default_primary() -> String {
    "#2563eb".to_string()
}

fn default_high_risk() -> String {
    "#dc2626".to_string()
}

fn default_low_risk() -> String {
    "#16a34a".to_string()
}

fn default_medium_risk() -> String {
    "#f59e0b".to_string()
}

fn default_text() -> String {
    "#1f2937".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            high_risk: default_high_risk(),
            low_risk: default_low_risk(),
            medium_risk: default_medium_risk(),
            text: default_text(),
        }
    }
}

/// Chart data cache configuration.
///
/// Sizes the `DashboardCache` the binary renders through. A single run
/// renders each view once, so repeat hits only pay off for library users
/// that keep the cache alive across renders.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached renders.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
    /// Time-to-live of a cached render in seconds.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

fn default_max_capacity() -> u64 {
    100
}

fn default_ttl_secs() -> u64 {
    300 // 5 minutes
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "budget_sim=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `BUDGET_SIM__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is out of range.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("BUDGET_SIM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app: Self = config.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }

    /// Checks values serde cannot constrain.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` when the precision exceeds what a
    /// `Decimal` can represent or the cache capacity is zero.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.dashboard.precision > MAX_PRECISION {
            return Err(config::ConfigError::Message(format!(
                "dashboard.precision must be at most {MAX_PRECISION}, got {}",
                self.dashboard.precision
            )));
        }

        if self.cache.max_capacity == 0 {
            return Err(config::ConfigError::Message(
                "cache.max_capacity must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
