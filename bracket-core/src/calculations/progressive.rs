//! Progressive bracket tax calculation.
//!
//! Applies an ordered, contiguous bracket table to an annual income figure.
//! Each bracket taxes only the slice of income between its bounds, so the
//! marginal rate rises with income while the lower slices keep their lower
//! rates. An income sitting exactly on a bracket boundary is taxed entirely
//! within the lower bracket.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use bracket_core::{TaxBracket, TaxCalculator, TaxSchedule};
//!
//! let schedule = TaxSchedule::new(
//!     2025,
//!     vec![
//!         TaxBracket {
//!             min_income: dec!(0),
//!             max_income: Some(dec!(5000)),
//!             rate: dec!(0),
//!         },
//!         TaxBracket {
//!             min_income: dec!(5000),
//!             max_income: Some(dec!(20000)),
//!             rate: dec!(1),
//!         },
//!         TaxBracket {
//!             min_income: dec!(20000),
//!             max_income: None,
//!             rate: dec!(3),
//!         },
//!     ],
//! )
//! .unwrap();
//!
//! let result = TaxCalculator::new(&schedule).calculate(dec!(20000)).unwrap();
//!
//! assert_eq!(result.total_tax, dec!(150.00));
//! assert_eq!(result.effective_rate, dec!(0.0075));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::round_half_up;
use crate::models::{BracketTax, TaxCalculation, TaxSchedule};

/// Errors that can occur during a tax calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxCalculationError {
    /// Negative income is outside the input domain and is rejected rather
    /// than silently taxed at zero.
    #[error("income must be non-negative, got {0}")]
    NegativeIncome(Decimal),
}

/// Calculator over a borrowed, validated bracket schedule.
///
/// Stateless apart from the borrow: calls are independent, side-effect free
/// and safe to issue from any thread.
#[derive(Debug, Clone)]
pub struct TaxCalculator<'a> {
    schedule: &'a TaxSchedule,
}

impl<'a> TaxCalculator<'a> {
    pub fn new(schedule: &'a TaxSchedule) -> Self {
        Self { schedule }
    }

    /// Computes total tax, effective rate and the per-bracket breakdown for
    /// `income`.
    ///
    /// Walks the brackets in ascending order, taxing the slice of income
    /// inside each one, and stops at the bracket containing the income. The
    /// lower bound is exclusive: an income exactly on a boundary never
    /// reaches the next bracket.
    ///
    /// # Errors
    ///
    /// Returns [`TaxCalculationError::NegativeIncome`] when `income` is
    /// below zero.
    pub fn calculate(
        &self,
        income: Decimal,
    ) -> Result<TaxCalculation, TaxCalculationError> {
        if income < Decimal::ZERO {
            warn!(%income, "rejected negative income");
            return Err(TaxCalculationError::NegativeIncome(income));
        }

        let mut tax_by_bracket = Vec::new();
        let mut total_tax = Decimal::ZERO;

        for bracket in self.schedule.brackets() {
            if income <= bracket.min_income {
                break;
            }

            let ceiling = match bracket.max_income {
                Some(max) => income.min(max),
                None => income,
            };
            let taxable_amount = ceiling - bracket.min_income;
            let tax = round_half_up(taxable_amount * bracket.rate / Decimal::ONE_HUNDRED);

            total_tax += tax;
            tax_by_bracket.push(BracketTax {
                bracket: bracket.clone(),
                taxable_amount,
                tax,
            });

            // The bracket containing the income is the last one that applies.
            if bracket.max_income.is_some_and(|max| income <= max) {
                break;
            }
        }

        let effective_rate = if income.is_zero() {
            Decimal::ZERO
        } else {
            total_tax / income
        };

        debug!(
            %income,
            %total_tax,
            %effective_rate,
            brackets = tax_by_bracket.len(),
            "calculated progressive tax"
        );

        Ok(TaxCalculation {
            income,
            total_tax,
            effective_rate,
            tax_by_bracket,
        })
    }
}
