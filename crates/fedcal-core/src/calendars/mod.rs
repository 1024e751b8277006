//! Holiday calendars.
//!
//! This module provides:
//! - The realized US federal holiday calendar, [`FedHolidays`]
//! - The compile-time holiday rule and proclamation tables
//! - A bitmap day set for O(1) holiday membership

mod bitmap;
mod holidays;

pub use bitmap::DaySet;
pub use holidays::{
    last_weekday_of_month, nearest_workday, nth_weekday_of_month, FedHolidays, HolidayRule,
    Observance, Proclamation, Schedule, PROCLAMATIONS, SCHEDULED_RULES,
};
