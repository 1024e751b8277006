//! Federal civilian biweekly payday offset.

use chrono::Weekday;

use super::Offset;
use crate::types::{Date, DateArray};

/// Day count of the anchor payday, 1970-01-02 (the first civilian
/// payday of the epoch, a Friday).
const ANCHOR_DAY_COUNT: i64 = 1;

/// Days between consecutive paydays.
const PERIOD: i64 = 14;

/// The federal civilian biweekly payday offset: every other Friday,
/// anchored on 1970-01-02.
///
/// The cadence is fixed by construction and ignores holidays: a payday
/// falling on a federal holiday remains a payday for this calendar.
///
/// # Example
///
/// ```rust
/// use fedcal_core::offsets::{FedPayDay, Offset};
/// use fedcal_core::types::Date;
///
/// let payday = FedPayDay::new();
/// assert!(payday.is_on_offset(Date::from_ymd(1970, 1, 2).unwrap()));
/// assert!(!payday.is_on_offset(Date::from_ymd(1970, 1, 9).unwrap()));
/// assert!(payday.is_on_offset(Date::from_ymd(1970, 1, 16).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FedPayDay;

impl FedPayDay {
    /// Creates the civilian payday offset.
    #[must_use]
    pub fn new() -> Self {
        FedPayDay
    }

    /// Returns the anchor payday, 1970-01-02.
    #[must_use]
    pub fn anchor(&self) -> Date {
        Date::from_day_count(ANCHOR_DAY_COUNT).expect("anchor is in range")
    }

    /// All paydays in `[start, end]`, ascending.
    #[must_use]
    pub fn paydays(&self, start: Date, end: Date) -> DateArray {
        let mut days = Vec::new();
        let mut current = self.roll_forward(start);
        while current <= end && self.is_on_offset(current) {
            days.push(current);
            current = current.add_days(PERIOD);
        }
        days.into()
    }

    /// Whole payday periods elapsed since the week of the anchor.
    fn weeks_since_anchor(date: Date) -> i64 {
        (date.day_count() - ANCHOR_DAY_COUNT).div_euclid(7)
    }
}

impl Offset for FedPayDay {
    fn is_on_offset(&self, date: Date) -> bool {
        date.weekday() == Weekday::Fri && Self::weeks_since_anchor(date) % 2 == 0
    }

    fn roll_back(&self, date: Date) -> Date {
        let to_friday = (i64::from(date.weekday_num()) - 4).rem_euclid(7);
        let friday = date.add_days(-to_friday);
        if self.is_on_offset(friday) {
            friday
        } else {
            friday.add_days(-7)
        }
    }

    fn roll_forward(&self, date: Date) -> Date {
        let to_friday = (4 - i64::from(date.weekday_num())).rem_euclid(7);
        let friday = date.add_days(to_friday);
        if self.is_on_offset(friday) {
            friday
        } else {
            friday.add_days(7)
        }
    }

    fn shift(&self, date: Date, n: i32) -> Date {
        use std::cmp::Ordering;

        match n.cmp(&0) {
            Ordering::Equal => self.roll_forward(date),
            Ordering::Greater => {
                let first = if self.is_on_offset(date) {
                    date.add_days(PERIOD)
                } else {
                    self.roll_forward(date)
                };
                first.add_days(PERIOD * i64::from(n - 1))
            }
            Ordering::Less => {
                let first = if self.is_on_offset(date) {
                    date.add_days(-PERIOD)
                } else {
                    self.roll_back(date)
                };
                first.add_days(-PERIOD * i64::from(n.unsigned_abs() - 1))
            }
        }
    }
}
