//! Compiled-in default bracket schedule.
//!
//! The application ships a twelve-bracket progressive table spanning 0 to
//! 2,000,000-and-above at rates rising from 0% to 30%. It goes through the
//! same CSV loader and validation path as user-supplied tables.

use bracket_core::TaxSchedule;

use crate::loader::{TaxScheduleLoader, TaxScheduleLoaderError};

const DEFAULT_BRACKETS_CSV: &str = include_str!("../data/default_brackets.csv");

/// Parses and validates the built-in schedule table.
pub fn default_schedules() -> Result<Vec<TaxSchedule>, TaxScheduleLoaderError> {
    TaxScheduleLoader::load(DEFAULT_BRACKETS_CSV.as_bytes())
}
