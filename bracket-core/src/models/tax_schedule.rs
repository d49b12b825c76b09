use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::models::TaxBracket;

/// Errors raised when a bracket table fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The table contains no brackets at all.
    #[error("schedule contains no brackets")]
    Empty,

    /// The lowest bracket must start at zero so every income is covered.
    #[error("first bracket must start at zero, got {0}")]
    NonZeroFloor(Decimal),

    /// A bounded bracket whose upper bound does not exceed its lower bound.
    #[error("bracket {index} has max income {max} not above its min income {min}")]
    EmptyBracket {
        index: usize,
        min: Decimal,
        max: Decimal,
    },

    /// A bracket that does not start where the previous one ends.
    #[error("bracket {index} starts at {found} but the previous bracket ends at {expected}")]
    NotContiguous {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    /// An unbounded bracket somewhere other than the top of the table.
    #[error("bracket {index} is unbounded but is not the last bracket")]
    UnboundedBeforeEnd { index: usize },

    /// The top bracket must be unbounded so arbitrarily high incomes are covered.
    #[error("last bracket must be unbounded, got max income {0}")]
    BoundedTop(Decimal),

    /// A rate outside the percentage range.
    #[error("bracket {index} rate {rate} is outside 0-100")]
    RateOutOfRange { index: usize, rate: Decimal },
}

/// A validated, immutable progressive bracket table for one tax year.
///
/// Brackets are ascending, contiguous, start at zero and end in a single
/// unbounded top bracket. The invariant is checked once at construction;
/// calculators rely on it without re-checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxSchedule {
    tax_year: i32,
    brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    /// Validates `brackets` and wraps them into a schedule.
    ///
    /// # Errors
    ///
    /// Returns the [`ScheduleError`] variant for the first broken invariant:
    /// empty table, non-zero floor, gap or overlap between neighbours, an
    /// unbounded bracket before the end, a bounded top bracket, or a rate
    /// outside 0-100.
    pub fn new(
        tax_year: i32,
        brackets: Vec<TaxBracket>,
    ) -> Result<Self, ScheduleError> {
        if brackets.is_empty() {
            return Err(ScheduleError::Empty);
        }
        if !brackets[0].min_income.is_zero() {
            return Err(ScheduleError::NonZeroFloor(brackets[0].min_income));
        }

        let last = brackets.len() - 1;
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE_HUNDRED {
                return Err(ScheduleError::RateOutOfRange {
                    index,
                    rate: bracket.rate,
                });
            }

            if index > 0 {
                // The previous bracket already passed its bounded check, so
                // its max is present here.
                if let Some(prev_max) = brackets[index - 1].max_income {
                    if bracket.min_income != prev_max {
                        return Err(ScheduleError::NotContiguous {
                            index,
                            expected: prev_max,
                            found: bracket.min_income,
                        });
                    }
                }
            }

            match bracket.max_income {
                Some(max) if max <= bracket.min_income => {
                    return Err(ScheduleError::EmptyBracket {
                        index,
                        min: bracket.min_income,
                        max,
                    });
                }
                None if index != last => {
                    return Err(ScheduleError::UnboundedBeforeEnd { index });
                }
                _ => {}
            }
        }

        if let Some(max) = brackets[last].max_income {
            return Err(ScheduleError::BoundedTop(max));
        }

        Ok(Self { tax_year, brackets })
    }

    pub fn tax_year(&self) -> i32 {
        self.tax_year
    }

    /// Brackets in ascending order of `min_income`.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn bracket(
        min: Decimal,
        max: Option<Decimal>,
        rate: Decimal,
    ) -> TaxBracket {
        TaxBracket {
            min_income: min,
            max_income: max,
            rate,
        }
    }

    fn valid_brackets() -> Vec<TaxBracket> {
        vec![
            bracket(dec!(0), Some(dec!(5000)), dec!(0)),
            bracket(dec!(5000), Some(dec!(20000)), dec!(1)),
            bracket(dec!(20000), None, dec!(3)),
        ]
    }

    #[test]
    fn new_accepts_valid_table() {
        let schedule = TaxSchedule::new(2025, valid_brackets()).unwrap();

        assert_eq!(schedule.tax_year(), 2025);
        assert_eq!(schedule.brackets().len(), 3);
        assert_eq!(schedule.brackets()[0].min_income, dec!(0));
        assert_eq!(schedule.brackets()[2].max_income, None);
    }

    #[test]
    fn new_rejects_empty_table() {
        let result = TaxSchedule::new(2025, vec![]);

        assert_eq!(result, Err(ScheduleError::Empty));
    }

    #[test]
    fn new_rejects_non_zero_floor() {
        let brackets = vec![
            bracket(dec!(100), Some(dec!(5000)), dec!(0)),
            bracket(dec!(5000), None, dec!(1)),
        ];

        let result = TaxSchedule::new(2025, brackets);

        assert_eq!(result, Err(ScheduleError::NonZeroFloor(dec!(100))));
    }

    #[test]
    fn new_rejects_gap_between_brackets() {
        let brackets = vec![
            bracket(dec!(0), Some(dec!(5000)), dec!(0)),
            bracket(dec!(6000), None, dec!(1)),
        ];

        let result = TaxSchedule::new(2025, brackets);

        assert_eq!(
            result,
            Err(ScheduleError::NotContiguous {
                index: 1,
                expected: dec!(5000),
                found: dec!(6000),
            })
        );
    }

    #[test]
    fn new_rejects_overlapping_brackets() {
        let brackets = vec![
            bracket(dec!(0), Some(dec!(5000)), dec!(0)),
            bracket(dec!(4000), None, dec!(1)),
        ];

        let result = TaxSchedule::new(2025, brackets);

        assert_eq!(
            result,
            Err(ScheduleError::NotContiguous {
                index: 1,
                expected: dec!(5000),
                found: dec!(4000),
            })
        );
    }

    #[test]
    fn new_rejects_empty_bracket_range() {
        let brackets = vec![
            bracket(dec!(0), Some(dec!(0)), dec!(0)),
            bracket(dec!(0), None, dec!(1)),
        ];

        let result = TaxSchedule::new(2025, brackets);

        assert_eq!(
            result,
            Err(ScheduleError::EmptyBracket {
                index: 0,
                min: dec!(0),
                max: dec!(0),
            })
        );
    }

    #[test]
    fn new_rejects_unbounded_bracket_before_end() {
        let brackets = vec![
            bracket(dec!(0), None, dec!(0)),
            bracket(dec!(5000), None, dec!(1)),
        ];

        let result = TaxSchedule::new(2025, brackets);

        assert_eq!(result, Err(ScheduleError::UnboundedBeforeEnd { index: 0 }));
    }

    #[test]
    fn new_rejects_bounded_top_bracket() {
        let brackets = vec![
            bracket(dec!(0), Some(dec!(5000)), dec!(0)),
            bracket(dec!(5000), Some(dec!(20000)), dec!(1)),
        ];

        let result = TaxSchedule::new(2025, brackets);

        assert_eq!(result, Err(ScheduleError::BoundedTop(dec!(20000))));
    }

    #[test]
    fn new_rejects_negative_rate() {
        let brackets = vec![
            bracket(dec!(0), Some(dec!(5000)), dec!(-1)),
            bracket(dec!(5000), None, dec!(1)),
        ];

        let result = TaxSchedule::new(2025, brackets);

        assert_eq!(
            result,
            Err(ScheduleError::RateOutOfRange {
                index: 0,
                rate: dec!(-1),
            })
        );
    }

    #[test]
    fn new_rejects_rate_above_one_hundred() {
        let brackets = vec![
            bracket(dec!(0), Some(dec!(5000)), dec!(0)),
            bracket(dec!(5000), None, dec!(101)),
        ];

        let result = TaxSchedule::new(2025, brackets);

        assert_eq!(
            result,
            Err(ScheduleError::RateOutOfRange {
                index: 1,
                rate: dec!(101),
            })
        );
    }
}
