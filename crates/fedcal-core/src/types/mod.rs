//! Domain types for the federal calendar engine.
//!
//! This module provides the typed vocabulary the rest of the engine is
//! written in:
//!
//! - [`Date`]: bounded whole-day civil date
//! - [`DateArray`] / [`to_date`]: flexible conversion and date sequences
//! - [`Dept`]: the 17 tracked executive departments
//! - [`DeptStatus`]: ordered funding/operational status

mod convert;
mod date;
mod dept;
mod status;

pub use convert::{to_date, DateArray, DateInput};
pub use date::{Date, MAX_YEAR, MIN_YEAR};
pub use dept::{Dept, DHS_FORMED};
pub use status::DeptStatus;
