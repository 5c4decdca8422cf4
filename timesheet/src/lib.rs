//! Timesheet checking core.
//!
//! Normalizes hour values, projects stored extraction records into the
//! compact [`ExtractedTimesheet`] shape and checks them row by row against an
//! [`ExpectedTimesheet`]. Nothing here performs I/O.

mod check;
mod domain;
mod hours;
mod projection;

pub use check::*;
pub use domain::*;
pub use hours::*;
