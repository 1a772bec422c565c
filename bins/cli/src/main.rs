//! Budget Sim command-line renderer.
//!
//! Reads budget lines from a JSON file and prints the chart data of one
//! dashboard view (or all of them) as JSON on stdout. Logs go to stderr.

mod input;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use budget_sim_core::{DashboardCache, DashboardRender, ViewMode};
use budget_sim_shared::{AppConfig, AppError};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use input::{Overrides, parse_input};

#[derive(Parser)]
#[command(
    name = "budget-sim",
    version,
    about = "Render budget simulation chart data",
    long_about = "Aggregates budget line items per category and prints the data \
                  behind a dashboard chart: totals, delta, treemap, stacked or waterfall."
)]
struct Cli {
    /// JSON file with budget lines
    input: PathBuf,

    /// View to render (defaults to dashboard.default_view)
    #[arg(long, short)]
    view: Option<ViewMode>,

    /// Render every view
    #[arg(long, conflicts_with = "view")]
    all: bool,

    /// Decimal digits kept when rounding
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=28))]
    precision: Option<u32>,

    /// Show axis labels in thousands
    #[arg(long)]
    thousands: bool,

    /// New investment added as its own category
    #[arg(long)]
    investment: Option<Decimal>,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<AppError>()
                .map_or(1, AppError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = AppConfig::load().map_err(AppError::from)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let raw = std::fs::read_to_string(&cli.input)
        .map_err(|err| AppError::Input(format!("cannot read {}: {err}", cli.input.display())))?;

    let overrides = Overrides {
        precision: cli.precision,
        show_in_thousands: cli.thousands,
        new_investment: cli.investment,
    };
    let input = parse_input(&raw, &config, &overrides)?;
    info!(
        file = %cli.input.display(),
        lines = input.lines.len(),
        precision = input.precision,
        "Loaded budget lines"
    );

    let modes: Vec<ViewMode> = if cli.all {
        ViewMode::ALL.to_vec()
    } else if let Some(mode) = cli.view {
        vec![mode]
    } else {
        vec![
            config
                .dashboard
                .default_view
                .parse::<ViewMode>()
                .map_err(|err| AppError::Config(format!("dashboard.default_view: {err}")))?,
        ]
    };

    let cache = DashboardCache::from(&config.cache);
    let renders: Vec<DashboardRender> = modes
        .into_iter()
        .map(|mode| cache.render_cached(&input, mode))
        .collect();
    cache.run_pending_tasks();
    debug!(entries = cache.entry_count(), "Dashboard cache filled");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let [render] = renders.as_slice() {
        serde_json::to_writer_pretty(&mut out, render).map_err(AppError::from)?;
    } else {
        serde_json::to_writer_pretty(&mut out, &renders).map_err(AppError::from)?;
    }
    writeln!(out)
        .map_err(|err| AppError::Serialization(err.to_string()))
        .context("writing chart data")?;

    Ok(())
}
