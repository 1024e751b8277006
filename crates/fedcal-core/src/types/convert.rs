//! Flexible date conversion and date arrays.
//!
//! The calendar engine accepts dates in the forms callers actually hold:
//! epoch integers, ISO and US/European strings, `(y, m, d)` triples, or
//! already-typed dates. [`to_date`] funnels all of them into [`Date`];
//! [`DateArray`] carries an ordered sequence for the vectorized query
//! paths.

use chrono::NaiveDate;

use crate::error::{FedCalError, FedCalResult};
use crate::types::Date;

/// Epoch-second value of 2200-01-01; integers at or above this are
/// treated as nanosecond timestamps.
const YEAR_2200_SECONDS: i64 = 7_258_032_000;

/// Seconds per day; smaller integers are treated as day counts.
const SECONDS_PER_DAY: i64 = 86_400;

/// A date in any of the accepted input forms.
///
/// Constructed through `From` impls so call sites can pass the raw
/// value directly to [`to_date`].
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// Days, seconds, or nanoseconds since the Unix epoch, disambiguated
    /// by magnitude: values below 86,400 are day counts, values at or
    /// above the year-2200 epoch-second mark are nanoseconds, and
    /// everything between is seconds.
    Epoch(i64),
    /// A date string: ISO 8601 first, then `%m/%d/%Y`, `%m-%d-%Y`,
    /// `%d/%m/%Y`, `%d-%m-%Y`, tried in that order.
    Text(String),
    /// A `(year, month, day)` triple.
    Ymd(i32, u32, u32),
    /// An already-typed date.
    Typed(Date),
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        DateInput::Epoch(value)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl From<(i32, u32, u32)> for DateInput {
    fn from((y, m, d): (i32, u32, u32)) -> Self {
        DateInput::Ymd(y, m, d)
    }
}

impl From<Date> for DateInput {
    fn from(value: Date) -> Self {
        DateInput::Typed(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Ymd(
            chrono::Datelike::year(&value),
            chrono::Datelike::month(&value),
            chrono::Datelike::day(&value),
        )
    }
}

/// Converts any accepted input form to a [`Date`].
///
/// All conversions normalize to a whole day; sub-day precision in
/// second or nanosecond inputs is truncated.
///
/// # Errors
///
/// Returns `FedCalError::Parse` when a string matches no accepted
/// format and `FedCalError::OutOfRange` when the result lies outside
/// 1970-01-01..2199-12-31.
///
/// # Example
///
/// ```rust
/// use fedcal_core::types::{to_date, Date};
///
/// let d = Date::from_ymd(2013, 10, 1).unwrap();
/// assert_eq!(to_date("2013-10-01").unwrap(), d);
/// assert_eq!(to_date("10/01/2013").unwrap(), d);
/// assert_eq!(to_date((2013, 10, 1)).unwrap(), d);
/// assert_eq!(to_date(15_979).unwrap(), d);
/// ```
pub fn to_date(input: impl Into<DateInput>) -> FedCalResult<Date> {
    match input.into() {
        DateInput::Epoch(value) => epoch_to_date(value),
        DateInput::Text(text) => parse_text(&text),
        DateInput::Ymd(y, m, d) => Date::from_ymd(y, m, d),
        DateInput::Typed(date) => Ok(date),
    }
}

/// Interprets an epoch integer as days, seconds, or nanoseconds.
///
/// The day/second boundary is inherently ambiguous for the first day of
/// the epoch: any value below 86,400 is read as a day count, so epoch
/// seconds within 1970-01-01 cannot be expressed. Callers holding
/// second precision for that single day should pass a `(y, m, d)`
/// triple instead.
fn epoch_to_date(value: i64) -> FedCalResult<Date> {
    if value < 0 {
        return Err(FedCalError::out_of_range(format!(
            "epoch value {value} predates 1970-01-01"
        )));
    }
    let days = if value < SECONDS_PER_DAY {
        value
    } else if value < YEAR_2200_SECONDS {
        value / SECONDS_PER_DAY
    } else {
        value / (SECONDS_PER_DAY * 1_000_000_000)
    };
    Date::from_day_count(days)
}

/// US month-first formats take precedence over European day-first ones.
const TEXT_FORMATS: [&str; 4] = ["%m/%d/%Y", "%m-%d-%Y", "%d/%m/%Y", "%d-%m-%Y"];

fn parse_text(text: &str) -> FedCalResult<Date> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Date::try_from(date);
    }
    for format in TEXT_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Date::try_from(date);
        }
    }
    Err(FedCalError::parse(text.to_owned()))
}

/// An ordered, owned sequence of dates.
///
/// Produced by range expansion or element-wise conversion; consumed by
/// the offsets' vectorized paths as a plain slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateArray(Vec<Date>);

impl DateArray {
    /// Expands an inclusive date range into every day it contains.
    ///
    /// # Errors
    ///
    /// Propagates conversion failures from the endpoints and returns
    /// `FedCalError::Shape` when `start > end`.
    pub fn from_range(
        start: impl Into<DateInput>,
        end: impl Into<DateInput>,
    ) -> FedCalResult<Self> {
        let start = to_date(start)?;
        let end = to_date(end)?;
        if start > end {
            return Err(FedCalError::shape(format!(
                "range start {start} is after range end {end}"
            )));
        }
        let dates = (start.day_count()..=end.day_count())
            .map(|days| Date::from_day_count(days).expect("range bounded by valid dates"))
            .collect();
        Ok(DateArray(dates))
    }

    /// Converts a sequence of date-convertible values.
    ///
    /// # Errors
    ///
    /// Propagates element conversion failures and returns
    /// `FedCalError::Shape` for an empty sequence.
    pub fn try_from_iter<I>(inputs: I) -> FedCalResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<DateInput>,
    {
        let dates = inputs
            .into_iter()
            .map(to_date)
            .collect::<FedCalResult<Vec<Date>>>()?;
        if dates.is_empty() {
            return Err(FedCalError::shape("date array cannot be empty"));
        }
        Ok(DateArray(dates))
    }

    /// Returns the dates as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Date] {
        &self.0
    }

    /// Returns the number of dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the array holds no dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the dates.
    pub fn iter(&self) -> std::slice::Iter<'_, Date> {
        self.0.iter()
    }

    /// Consumes the array, returning the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<Date> {
        self.0
    }

    /// Returns the day-since-epoch count of each date.
    #[must_use]
    pub fn day_counts(&self) -> Vec<i64> {
        self.0.iter().map(Date::day_count).collect()
    }

    /// Returns the weekday of each date, Monday = 0.
    #[must_use]
    pub fn weekday_nums(&self) -> Vec<u32> {
        self.0.iter().map(Date::weekday_num).collect()
    }
}

impl From<Vec<Date>> for DateArray {
    fn from(dates: Vec<Date>) -> Self {
        DateArray(dates)
    }
}

impl std::ops::Deref for DateArray {
    type Target = [Date];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for DateArray {
    type Item = Date;
    type IntoIter = std::vec::IntoIter<Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DateArray {
    type Item = &'a Date;
    type IntoIter = std::slice::Iter<'a, Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_to_date_idempotent() {
        let date = ymd(2024, 5, 31);
        assert_eq!(to_date(date).unwrap(), date);
        assert_eq!(to_date(to_date(date).unwrap()).unwrap(), date);
    }

    #[test]
    fn test_epoch_day_counts() {
        assert_eq!(to_date(0).unwrap(), ymd(1970, 1, 1));
        assert_eq!(to_date(15_979).unwrap(), ymd(2013, 10, 1));
        // day count of the last supported day
        assert_eq!(to_date(84_005).unwrap(), ymd(2199, 12, 31));
        // still read as a day count, but past the supported range
        assert!(matches!(to_date(86_399), Err(FedCalError::OutOfRange { .. })));
    }

    #[test]
    fn test_epoch_seconds() {
        // 2013-10-01 00:00:00 UTC
        assert_eq!(to_date(1_380_585_600).unwrap(), ymd(2013, 10, 1));
        // mid-day truncates to the same day
        assert_eq!(to_date(1_380_585_600 + 43_200).unwrap(), ymd(2013, 10, 1));
    }

    #[test]
    fn test_epoch_nanoseconds() {
        assert_eq!(
            to_date(1_380_585_600_000_000_000).unwrap(),
            ymd(2013, 10, 1)
        );
    }

    #[test]
    fn test_negative_epoch_rejected() {
        assert!(matches!(
            to_date(-1),
            Err(FedCalError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_text_formats() {
        assert_eq!(to_date("2024-06-19").unwrap(), ymd(2024, 6, 19));
        assert_eq!(to_date("06/19/2024").unwrap(), ymd(2024, 6, 19));
        assert_eq!(to_date("06-19-2024").unwrap(), ymd(2024, 6, 19));
        // American parse fails on month 25, European succeeds
        assert_eq!(to_date("25/12/2024").unwrap(), ymd(2024, 12, 25));
        assert_eq!(to_date("25-12-2024").unwrap(), ymd(2024, 12, 25));
    }

    #[test]
    fn test_american_wins_over_european() {
        // ambiguous day/month pairs resolve month-first
        assert_eq!(to_date("03/04/2024").unwrap(), ymd(2024, 3, 4));
    }

    #[test]
    fn test_parse_failures() {
        assert!(matches!(
            to_date("not a date"),
            Err(FedCalError::Parse { .. })
        ));
        assert!(matches!(
            to_date("1969-07-20"),
            Err(FedCalError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_ymd_triples() {
        assert_eq!(to_date((2024, 7, 4)).unwrap(), ymd(2024, 7, 4));
        assert!(to_date((1969, 7, 4)).is_err());
    }

    #[test]
    fn test_range_expansion() {
        let array = DateArray::from_range((2024, 12, 30), (2025, 1, 2)).unwrap();
        assert_eq!(array.len(), 4);
        assert_eq!(array[0], ymd(2024, 12, 30));
        assert_eq!(array[3], ymd(2025, 1, 2));
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert!(matches!(
            DateArray::from_range((2024, 1, 2), (2024, 1, 1)),
            Err(FedCalError::Shape { .. })
        ));
    }

    #[test]
    fn test_sequence_conversion() {
        let array = DateArray::try_from_iter(["2024-01-01", "07/04/2024"]).unwrap();
        assert_eq!(array.as_slice(), &[ymd(2024, 1, 1), ymd(2024, 7, 4)]);

        let empty: [&str; 0] = [];
        assert!(matches!(
            DateArray::try_from_iter(empty),
            Err(FedCalError::Shape { .. })
        ));
    }
}
