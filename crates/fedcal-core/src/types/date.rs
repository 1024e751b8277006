//! Date type for federal calendar calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{FedCalError, FedCalResult};

/// First supported year; the range begins 1970-01-01.
pub const MIN_YEAR: i32 = 1970;
/// Last supported year; the range ends 2199-12-31.
pub const MAX_YEAR: i32 = 2199;

/// A whole-day civil date bounded to 1970-01-01..2199-12-31.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing
/// day-count arithmetic for the calendar engine and ensuring every
/// constructed value lies in the supported range. Equality is by
/// calendar day; there is no time-of-day or time-zone component.
///
/// # Example
///
/// ```rust
/// use fedcal_core::types::Date;
///
/// let date = Date::from_ymd(2024, 10, 1).unwrap();
/// assert_eq!(date.day_count(), 19_997);
/// assert_eq!(Date::from_day_count(19_997).unwrap(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `FedCalError::OutOfRange` if the date is invalid or lies
    /// outside the supported range.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> FedCalResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            FedCalError::out_of_range(format!("{year}-{month:02}-{day:02} is not a valid date"))
        })?;
        Self::checked(date)
    }

    /// Creates a date from a count of days since 1970-01-01.
    ///
    /// # Errors
    ///
    /// Returns `FedCalError::OutOfRange` if the day count falls outside
    /// the supported range.
    pub fn from_day_count(days: i64) -> FedCalResult<Self> {
        let date = NaiveDate::from_num_days_from_ce_opt(
            i32::try_from(days + EPOCH_DAYS_FROM_CE).map_err(|_| {
                FedCalError::out_of_range(format!("day count {days} overflows the calendar"))
            })?,
        )
        .ok_or_else(|| FedCalError::out_of_range(format!("day count {days} out of range")))?;
        Self::checked(date)
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `FedCalError::Parse` if the string is not a valid ISO
    /// date, or `FedCalError::OutOfRange` if it parses outside the
    /// supported range.
    pub fn parse(s: &str) -> FedCalResult<Self> {
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| FedCalError::parse(s.to_owned()))?;
        Self::checked(date)
    }

    /// Returns today's date.
    ///
    /// # Panics
    ///
    /// Panics if the system clock is outside the supported range, which
    /// cannot happen before the year 2200.
    #[must_use]
    pub fn today() -> Self {
        Self::checked(chrono::Local::now().date_naive()).expect("system clock within 1970-2199")
    }

    fn checked(date: NaiveDate) -> FedCalResult<Self> {
        if (MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            Ok(Date(date))
        } else {
            Err(FedCalError::out_of_range(format!(
                "{date} has year {}",
                date.year()
            )))
        }
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the (year, month, day) decomposition.
    #[must_use]
    pub fn decompose(&self) -> (i32, u32, u32) {
        (self.year(), self.month(), self.day())
    }

    /// Returns the number of days since 1970-01-01.
    #[must_use]
    pub fn day_count(&self) -> i64 {
        i64::from(self.0.num_days_from_ce()) - EPOCH_DAYS_FROM_CE
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the day of week as a number with Monday = 0.
    #[must_use]
    pub fn weekday_num(&self) -> u32 {
        self.0.weekday().num_days_from_monday()
    }

    /// Checks if the date is a weekend (Saturday or Sunday).
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Adds a number of days to the date.
    ///
    /// Offsets use this for local steps; intermediate values may leave
    /// the supported range near its edges, and saturate there rather
    /// than wrap.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        match self.0.checked_add_signed(chrono::Duration::days(days)) {
            Some(date) if date.year() >= MIN_YEAR && date.year() <= MAX_YEAR => Date(date),
            Some(date) if date.year() < MIN_YEAR => Self::min_date(),
            _ => Self::max_date(),
        }
    }

    /// Calculates the number of calendar days between two dates.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        match self.month() {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if self.0.leap_year() => 29,
            2 => 28,
            _ => unreachable!(),
        }
    }

    /// Returns the first day of the month.
    #[must_use]
    pub fn start_of_month(&self) -> Self {
        Date(
            NaiveDate::from_ymd_opt(self.year(), self.month(), 1)
                .expect("first of month is always valid"),
        )
    }

    /// Returns the last day of the month.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        Date(
            NaiveDate::from_ymd_opt(self.year(), self.month(), self.days_in_month())
                .expect("end of month is always valid"),
        )
    }

    /// Returns the first supported day, 1970-01-01.
    #[must_use]
    pub fn min_date() -> Self {
        Date(NaiveDate::from_ymd_opt(MIN_YEAR, 1, 1).expect("epoch is valid"))
    }

    /// Returns the last supported day, 2199-12-31.
    #[must_use]
    pub fn max_date() -> Self {
        Date(NaiveDate::from_ymd_opt(MAX_YEAR, 12, 31).expect("range end is valid"))
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

/// `num_days_from_ce` value of 1970-01-01 (chrono counts 0001-01-01 as day 1).
const EPOCH_DAYS_FROM_CE: i64 = 719_163;

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = FedCalError;

    fn try_from(date: NaiveDate) -> FedCalResult<Self> {
        Self::checked(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}
