use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bracket_core::{TaxCalculator, TaxSchedule};
use bracket_data::TaxScheduleLoader;
use chrono::{Datelike, Local};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod input;
mod report;

/// Calculate progressive income tax from a bracket schedule.
///
/// Uses the built-in bracket table unless --schedule points at a CSV file
/// with columns: tax_year, min_income, max_income (empty for the unbounded
/// top bracket) and rate (percent).
#[derive(Parser, Debug)]
#[command(name = "brackets")]
#[command(version, about, long_about = None)]
struct Args {
    /// Annual income; commas as thousands separators are accepted.
    income: String,

    /// Path to a bracket schedule CSV, replacing the built-in table.
    #[arg(short, long)]
    schedule: Option<PathBuf>,

    /// Tax year to use. Defaults to the newest schedule not after the
    /// current year.
    #[arg(short, long)]
    tax_year: Option<i32>,

    /// Output as JSON instead of a formatted table.
    #[arg(long)]
    json: bool,
}

/// Selects the schedule for the requested year, or falls back to the newest
/// schedule not after `current_year` (oldest available if every table is
/// newer). `schedules` is sorted by year, oldest first.
fn pick_schedule<'a>(
    schedules: &'a [TaxSchedule],
    requested: Option<i32>,
    current_year: i32,
) -> Result<&'a TaxSchedule> {
    anyhow::ensure!(!schedules.is_empty(), "no bracket schedules loaded");

    match requested {
        Some(year) => schedules
            .iter()
            .find(|schedule| schedule.tax_year() == year)
            .ok_or_else(|| {
                let available: Vec<String> = schedules
                    .iter()
                    .map(|schedule| schedule.tax_year().to_string())
                    .collect();
                anyhow::anyhow!(
                    "no schedule for tax year {year} (available: {})",
                    available.join(", ")
                )
            }),
        None => Ok(schedules
            .iter()
            .rev()
            .find(|schedule| schedule.tax_year() <= current_year)
            .unwrap_or(&schedules[0])),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let income = input::parse_amount(&args.income)
        .with_context(|| format!("invalid income '{}'", args.income))?;

    let schedules = match &args.schedule {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open: {}", path.display()))?;
            TaxScheduleLoader::load(file)
                .with_context(|| format!("failed to load schedule: {}", path.display()))?
        }
        None => bracket_data::default_schedules().context("built-in schedule table is invalid")?,
    };

    let schedule = pick_schedule(&schedules, args.tax_year, Local::now().year())?;

    let calculation = TaxCalculator::new(schedule).calculate(income)?;

    if args.json {
        report::print_json(&calculation, schedule.tax_year())?;
    } else {
        report::print_table(&calculation, schedule.tax_year());
    }

    Ok(())
}
