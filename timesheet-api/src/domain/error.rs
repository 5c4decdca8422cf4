use thiserror::Error;

use super::TimesheetId;
use crate::repositories::RepositoryError;

/// Errors that can occur when storing or reading timesheets.
#[derive(Debug, Error)]
pub enum TimesheetError {
    #[error("timesheet {0} not found")]
    NotFound(TimesheetId),
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),
    #[error("stored metadata for timesheet {0} is unreadable: {1}")]
    CorruptRecord(TimesheetId, String),
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}
