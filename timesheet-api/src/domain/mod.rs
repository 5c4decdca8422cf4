mod error;
mod stored_record;
mod timesheet_id;
mod timesheet_service;

pub use error::*;
pub use stored_record::*;
pub use timesheet_id::*;
pub use timesheet_service::*;
