pub mod assembly;
pub mod entry;
pub mod time_period;

pub use assembly::Assembly;
pub use entry::{BuildLogEntry, BuildLogs};
pub use time_period::TimePeriod;
