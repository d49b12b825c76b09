use std::collections::BTreeMap;
use std::io::Read;

use bracket_core::{ScheduleError, TaxBracket, TaxSchedule};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading bracket schedules.
#[derive(Debug, Error)]
pub enum TaxScheduleLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("invalid schedule for tax year {tax_year}: {source}")]
    InvalidSchedule {
        tax_year: i32,
        #[source]
        source: ScheduleError,
    },
}

impl From<csv::Error> for TaxScheduleLoaderError {
    fn from(err: csv::Error) -> Self {
        TaxScheduleLoaderError::CsvParse(err.to_string())
    }
}

/// A single row of a bracket schedule CSV.
///
/// Columns:
/// - `tax_year`: the year the bracket belongs to (e.g., 2025)
/// - `min_income`: lower bound of the bracket
/// - `max_income`: upper bound, empty for the unbounded top bracket
/// - `rate`: marginal rate as a percentage (e.g., 30 for 30%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TaxBracketRecord {
    pub tax_year: i32,
    pub min_income: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for bracket schedule tables from CSV data.
///
/// Rows may arrive in any order and may mix several tax years; each year is
/// assembled and validated independently, so a new year's table can be
/// shipped as data without a code change.
pub struct TaxScheduleLoader;

impl TaxScheduleLoader {
    /// Parse schedule records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<TaxBracketRecord>, TaxScheduleLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: TaxBracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Assemble records into one validated [`TaxSchedule`] per tax year.
    ///
    /// Records are grouped by `tax_year` and sorted by `min_income` within
    /// each group before validation. The returned schedules are sorted by
    /// year, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaxScheduleLoaderError::InvalidSchedule`] naming the year
    /// whose table breaks the bracket invariant.
    pub fn build_schedules(
        records: &[TaxBracketRecord]
    ) -> Result<Vec<TaxSchedule>, TaxScheduleLoaderError> {
        let mut groups: BTreeMap<i32, Vec<&TaxBracketRecord>> = BTreeMap::new();
        for record in records {
            groups.entry(record.tax_year).or_default().push(record);
        }

        let mut schedules = Vec::with_capacity(groups.len());
        for (tax_year, mut group) in groups {
            group.sort_by_key(|record| record.min_income);

            let brackets = group
                .iter()
                .map(|record| TaxBracket {
                    min_income: record.min_income,
                    max_income: record.max_income,
                    rate: record.rate,
                })
                .collect();

            let schedule = TaxSchedule::new(tax_year, brackets)
                .map_err(|source| TaxScheduleLoaderError::InvalidSchedule { tax_year, source })?;
            schedules.push(schedule);
        }

        debug!(schedules = schedules.len(), "built bracket schedules");

        Ok(schedules)
    }

    /// Parse and assemble in one step.
    pub fn load<R: Read>(reader: R) -> Result<Vec<TaxSchedule>, TaxScheduleLoaderError> {
        let records = Self::parse(reader)?;
        Self::build_schedules(&records)
    }
}
