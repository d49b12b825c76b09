use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    /// `None` marks the unbounded top bracket.
    pub max_income: Option<Decimal>,
    /// Marginal rate as a percentage (e.g. `30` for 30%).
    pub rate: Decimal,
}
