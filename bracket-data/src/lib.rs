pub mod loader;
pub mod schedules;

pub use loader::{TaxBracketRecord, TaxScheduleLoader, TaxScheduleLoaderError};
pub use schedules::default_schedules;
