//! Federal business day offset.

use chrono::Weekday;

use super::Offset;
use crate::calendars::FedHolidays;
use crate::error::{FedCalError, FedCalResult};
use crate::types::{Date, DateArray};

/// Which weekdays count as open, Monday first.
///
/// The default Mon-Fri mask covers federal practice; a custom mask must
/// keep at least one day open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekMask([bool; 7]);

impl WeekMask {
    /// The standard Monday-Friday working week.
    pub const MON_FRI: WeekMask = WeekMask([true, true, true, true, true, false, false]);

    /// Creates a weekmask from per-day flags, Monday first.
    ///
    /// # Errors
    ///
    /// Returns `FedCalError::InvalidConfig` when every day is closed.
    pub fn new(days: [bool; 7]) -> FedCalResult<Self> {
        if days.iter().any(|open| *open) {
            Ok(WeekMask(days))
        } else {
            Err(FedCalError::invalid_config(
                "weekmask must keep at least one day open",
            ))
        }
    }

    /// Parses a binary weekmask string, Monday first (`"1111100"` is
    /// Mon-Fri).
    ///
    /// # Errors
    ///
    /// Returns `FedCalError::InvalidConfig` for strings that are not
    /// seven `0`/`1` characters or that close every day.
    pub fn parse(mask: &str) -> FedCalResult<Self> {
        let bytes = mask.as_bytes();
        if bytes.len() != 7 || !bytes.iter().all(|b| matches!(b, b'0' | b'1')) {
            return Err(FedCalError::invalid_config(format!(
                "weekmask {mask:?} must be seven binary digits, Monday first"
            )));
        }
        let mut days = [false; 7];
        for (day, byte) in days.iter_mut().zip(bytes) {
            *day = *byte == b'1';
        }
        Self::new(days)
    }

    /// Returns true if the weekday is open under this mask.
    #[inline]
    #[must_use]
    pub fn is_open(&self, weekday: Weekday) -> bool {
        self.0[weekday.num_days_from_monday() as usize]
    }
}

impl Default for WeekMask {
    fn default() -> Self {
        Self::MON_FRI
    }
}

/// The federal business day offset: weekmask days that are not federal
/// holidays.
///
/// # Example
///
/// ```rust
/// use fedcal_core::offsets::{FedBusinessDay, Offset};
/// use fedcal_core::types::Date;
///
/// let bday = FedBusinessDay::new();
/// let new_years = Date::from_ymd(2024, 1, 1).unwrap(); // a Monday
/// assert!(!bday.is_on_offset(new_years));
/// assert_eq!(bday.roll_forward(new_years), Date::from_ymd(2024, 1, 2).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FedBusinessDay {
    weekmask: WeekMask,
    holidays: &'static FedHolidays,
}

impl FedBusinessDay {
    /// Creates the standard Mon-Fri federal business day offset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            weekmask: WeekMask::MON_FRI,
            holidays: FedHolidays::global(),
        }
    }

    /// Creates a business day offset with a custom weekmask.
    #[must_use]
    pub fn with_weekmask(weekmask: WeekMask) -> Self {
        Self {
            weekmask,
            holidays: FedHolidays::global(),
        }
    }

    /// Returns the holiday calendar backing this offset.
    #[must_use]
    pub fn holidays(&self) -> &'static FedHolidays {
        self.holidays
    }

    /// All business days in `[start, end]`, ascending.
    #[must_use]
    pub fn business_days(&self, start: Date, end: Date) -> DateArray {
        let mut days = Vec::new();
        let mut current = self.roll_forward(start);
        while current <= end && self.is_on_offset(current) {
            days.push(current);
            if current == Date::max_date() {
                break;
            }
            current = self.roll_forward(current.add_days(1));
        }
        days.into()
    }
}

impl Default for FedBusinessDay {
    fn default() -> Self {
        Self::new()
    }
}

impl Offset for FedBusinessDay {
    #[inline]
    fn is_on_offset(&self, date: Date) -> bool {
        self.weekmask.is_open(date.weekday()) && !self.holidays.is_holiday(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_weekend_and_holiday_are_off_offset() {
        let bday = FedBusinessDay::new();
        assert!(!bday.is_on_offset(ymd(2024, 1, 6))); // Saturday
        assert!(!bday.is_on_offset(ymd(2024, 1, 1))); // New Year's Day, a Monday
        assert!(bday.is_on_offset(ymd(2024, 1, 2)));
    }

    #[test]
    fn test_roll_is_identity_on_business_days() {
        let bday = FedBusinessDay::new();
        let tuesday = ymd(2024, 1, 2);
        assert_eq!(bday.roll_back(tuesday), tuesday);
        assert_eq!(bday.roll_forward(tuesday), tuesday);
    }

    #[test]
    fn test_roll_over_holiday_weekend() {
        let bday = FedBusinessDay::new();
        // New Year's 2024: Sat Dec 30 - Mon Jan 1 are all off-offset
        assert_eq!(bday.roll_forward(ymd(2023, 12, 30)), ymd(2024, 1, 2));
        assert_eq!(bday.roll_back(ymd(2024, 1, 1)), ymd(2023, 12, 29));
    }

    #[test]
    fn test_shift() {
        let bday = FedBusinessDay::new();
        // Friday Dec 29, 2023 + 1 business day skips the holiday weekend
        assert_eq!(bday.shift(ymd(2023, 12, 29), 1), ymd(2024, 1, 2));
        assert_eq!(bday.shift(ymd(2024, 1, 2), -1), ymd(2023, 12, 29));
        // shift 0 rolls forward off-offset dates
        assert_eq!(bday.shift(ymd(2023, 12, 30), 0), ymd(2024, 1, 2));
        assert_eq!(bday.shift(ymd(2024, 1, 2), 0), ymd(2024, 1, 2));
        // five business days across a plain week
        assert_eq!(bday.shift(ymd(2024, 3, 4), 5), ymd(2024, 3, 11));
    }

    #[test]
    fn test_business_days_range() {
        let bday = FedBusinessDay::new();
        let days = bday.business_days(ymd(2023, 12, 29), ymd(2024, 1, 3));
        assert_eq!(
            days.as_slice(),
            &[ymd(2023, 12, 29), ymd(2024, 1, 2), ymd(2024, 1, 3)]
        );
    }

    #[test]
    fn test_weekmask_validation() {
        assert!(WeekMask::new([false; 7]).is_err());
        assert!(WeekMask::parse("1111100").is_ok());
        assert!(WeekMask::parse("0000000").is_err());
        assert!(WeekMask::parse("11111").is_err());
        assert!(WeekMask::parse("111110x").is_err());
    }

    #[test]
    fn test_custom_weekmask() {
        // Tuesday-Saturday shop
        let mask = WeekMask::parse("0111110").unwrap();
        let bday = FedBusinessDay::with_weekmask(mask);
        assert!(bday.is_on_offset(ymd(2024, 1, 6))); // Saturday
        assert!(!bday.is_on_offset(ymd(2024, 1, 8))); // Monday
    }

    #[test]
    fn test_observed_slice() {
        let bday = FedBusinessDay::new();
        let dates = [ymd(2024, 1, 1), ymd(2024, 1, 2), ymd(2024, 1, 6)];
        assert_eq!(bday.observed(&dates), vec![false, true, false]);
    }
}
