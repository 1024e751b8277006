//! # fedcal-core
//!
//! Core of the fedcal US federal calendar engine: date primitives, the
//! federal holiday calendar, payday and pass-day offsets, and the
//! October-based fiscal calendar.
//!
//! This crate answers the date-pattern questions:
//!
//! - **Types**: bounded [`types::Date`], flexible [`types::to_date`]
//!   conversion, the [`types::Dept`] and [`types::DeptStatus`] enums
//! - **Calendars**: scheduled and proclaimed federal holidays with
//!   nearest-workday observance
//! - **Offsets**: business days, civilian biweekly paydays, military
//!   semi-monthly paydays, probable military pass days
//! - **Fiscal**: FY/FQ mapping and period boundaries
//!
//! Everything is pure after construction: the holiday calendar is
//! realized once behind a `OnceLock` and every query path is read-only,
//! so concurrent readers need no synchronization.
//!
//! ## Example
//!
//! ```rust
//! use fedcal_core::prelude::*;
//!
//! let bday = FedBusinessDay::new();
//! let new_years = Date::from_ymd(2024, 1, 1).unwrap();
//! assert!(!bday.is_on_offset(new_years));
//! assert_eq!(fedcal_core::fiscal::fiscal_year(new_years), 2024);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod calendars;
pub mod error;
pub mod fiscal;
pub mod offsets;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::FedHolidays;
    pub use crate::error::{FedCalError, FedCalResult};
    pub use crate::fiscal::FiscalPeriod;
    pub use crate::offsets::{
        FedBusinessDay, FedPayDay, MilitaryPassDay, MilitaryPayDay, Offset, PassdayMap, WeekMask,
    };
    pub use crate::types::{to_date, Date, DateArray, Dept, DeptStatus};
}

// Re-export commonly used types at crate root
pub use error::{FedCalError, FedCalResult};
pub use types::{Date, Dept, DeptStatus};
