mod tax_bracket;
mod tax_calculation;
mod tax_schedule;

pub use tax_bracket::TaxBracket;
pub use tax_calculation::{BracketTax, TaxCalculation};
pub use tax_schedule::{ScheduleError, TaxSchedule};
