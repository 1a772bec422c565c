//! Budget input files.

use budget_sim_core::{BudgetLine, DashboardInput, Theme};
use budget_sim_shared::{AppConfig, AppError, AppResult};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Settings supplied on the command line, overriding file and config.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    /// Rounding precision.
    pub precision: Option<u32>,
    /// Thousands axis labels.
    pub show_in_thousands: bool,
    /// New investment amount.
    pub new_investment: Option<Decimal>,
}

/// Accepted file shapes: a bare line array or an object with settings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InputFile {
    Lines(Vec<BudgetLine>),
    Document(InputDocument),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InputDocument {
    lines: Vec<BudgetLine>,
    precision: Option<u32>,
    show_in_thousands: Option<bool>,
    new_investment: Option<Decimal>,
}

/// Parses an input file and resolves settings.
///
/// Precedence: command line, then the file, then configuration.
pub fn parse_input(raw: &str, config: &AppConfig, overrides: &Overrides) -> AppResult<DashboardInput> {
    let file: InputFile = serde_json::from_str(raw).map_err(|err| {
        AppError::Input(format!(
            "expected an array of budget lines or an object with \"lines\": {err}"
        ))
    })?;

    let document = match file {
        InputFile::Lines(lines) => InputDocument {
            lines,
            precision: None,
            show_in_thousands: None,
            new_investment: None,
        },
        InputFile::Document(document) => document,
    };

    let precision = overrides
        .precision
        .or(document.precision)
        .unwrap_or(config.dashboard.precision);
    if precision > budget_sim_shared::config::MAX_PRECISION {
        return Err(AppError::Input(format!(
            "precision must be at most {}, got {precision}",
            budget_sim_shared::config::MAX_PRECISION
        )));
    }

    Ok(DashboardInput {
        lines: document.lines,
        precision,
        show_in_thousands: overrides.show_in_thousands
            || document
                .show_in_thousands
                .unwrap_or(config.dashboard.show_in_thousands),
        theme: Theme::from(&config.theme),
        new_investment: overrides.new_investment.or(document.new_investment),
    })
}
