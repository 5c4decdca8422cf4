pub(crate) mod error;
pub(crate) mod health;
pub(crate) mod metadata;
pub(crate) mod timesheets;

pub(crate) use error::ApiError;
