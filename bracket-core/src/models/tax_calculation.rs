use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TaxBracket;

/// Tax owed within a single bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketTax {
    pub bracket: TaxBracket,
    /// Portion of the income that falls inside this bracket.
    pub taxable_amount: Decimal,
    pub tax: Decimal,
}

/// Result of one progressive tax calculation.
///
/// Owned by the caller; each call to the calculator produces a fresh value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculation {
    pub income: Decimal,
    /// Sum of the per-bracket amounts in `tax_by_bracket`.
    pub total_tax: Decimal,
    /// Blended rate as a fraction in `[0, 1)`: `total_tax / income`,
    /// or zero when `income` is zero.
    pub effective_rate: Decimal,
    /// Per-bracket breakdown, lowest bracket first. Only brackets the
    /// income reaches appear.
    pub tax_by_bracket: Vec<BracketTax>,
}
