#[cfg(test)]
mod memory_repo;
mod repo_error;
mod timesheet_repo;

#[cfg(test)]
pub use memory_repo::*;
pub use repo_error::RepositoryError;
pub use timesheet_repo::*;
