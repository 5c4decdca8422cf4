mod day_set;
mod stored_metadata;
mod timesheet_record;
mod weekday;

pub use day_set::*;
pub use stored_metadata::*;
pub use timesheet_record::*;
pub use weekday::*;

#[cfg(test)]
pub(crate) use stored_metadata::fixtures;
