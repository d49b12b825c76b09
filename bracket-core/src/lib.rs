pub mod calculations;
pub mod models;

pub use calculations::progressive::{TaxCalculationError, TaxCalculator};
pub use models::*;
