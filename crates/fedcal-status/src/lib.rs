//! # fedcal-status
//!
//! Executive department appropriations status for the fedcal US federal
//! calendar engine.
//!
//! The curated dataset records, for each of the 17 tracked departments,
//! maximal runs of identical funding status from FY1970 through the end
//! of the most recently enacted appropriation or continuing resolution:
//! full appropriations, continuing resolutions, funding gaps, and
//! shutdowns, with an explicit ambiguous status for pre-FY99 periods
//! where the data cannot distinguish full-year funding from a CR.
//!
//! Loading is the only I/O; after [`StatusIndex`] construction every
//! query is a read-only binary search, safe for concurrent readers.
//!
//! ## Example
//!
//! ```rust
//! use fedcal_status::StatusIndex;
//! use fedcal_core::types::Date;
//!
//! let index = StatusIndex::bundled();
//! let day = Date::from_ymd(2019, 1, 15).unwrap();
//! let snapshot = index.department_statuses(day);
//! assert!(snapshot.any_shutdown());
//! assert!(!snapshot.all_unfunded());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod aggregate;
mod records;
mod store;

pub use aggregate::DepartmentStatuses;
pub use records::{RawInterval, StatusInterval, StatusRecord};
pub use store::StatusIndex;
