//! HTTP service around the `timesheet` checks: stores extraction records in
//! Postgres and checks them, or ad-hoc records, against expected values.

mod app_state;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod router;
mod routes;
#[cfg(test)]
mod test_support;

pub use app_state::AppState;
