//! Military semi-monthly payday offset.

use super::{FedBusinessDay, Offset};
use crate::types::{Date, DateArray};

/// The military payday offset: the 1st and 15th of each month, rolled
/// back to the most recent prior business day when the nominal day is a
/// weekend or holiday.
///
/// A date is an observed payday exactly when some nominal 1st or 15th
/// rolls back to it.
///
/// # Example
///
/// ```rust
/// use fedcal_core::offsets::{MilitaryPayDay, Offset};
/// use fedcal_core::types::Date;
///
/// let milpay = MilitaryPayDay::new();
/// // June 1, 2024 is a Saturday; pay went out Friday May 31
/// assert!(!milpay.is_on_offset(Date::from_ymd(2024, 6, 1).unwrap()));
/// assert!(milpay.is_on_offset(Date::from_ymd(2024, 5, 31).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MilitaryPayDay {
    b_day: FedBusinessDay,
}

impl MilitaryPayDay {
    /// Creates the military payday offset over the standard federal
    /// business day calendar.
    #[must_use]
    pub fn new() -> Self {
        Self {
            b_day: FedBusinessDay::new(),
        }
    }

    /// Creates the offset over a custom business day calendar.
    #[must_use]
    pub fn over(b_day: FedBusinessDay) -> Self {
        Self { b_day }
    }

    /// Returns the observed payday for a nominal 1st or 15th.
    #[must_use]
    pub fn observed_for(&self, nominal: Date) -> Date {
        self.b_day.roll_back(nominal)
    }

    /// All observed paydays in `[start, end]`, ascending.
    #[must_use]
    pub fn paydays(&self, start: Date, end: Date) -> DateArray {
        let mut days = Vec::new();
        let mut current = self.roll_forward(start);
        while current <= end && self.is_on_offset(current) {
            days.push(current);
            if current == Date::max_date() {
                break;
            }
            let next = self.roll_forward(current.add_days(1));
            if next == current {
                break;
            }
            current = next;
        }
        days.into()
    }

    /// Nominal paydays surrounding the date's month, ascending: enough
    /// context to bracket any observed payday near the date.
    fn nominal_window(date: Date) -> [Date; 6] {
        let first = date.start_of_month();
        let prev_mid = prev_month_start(first).add_days(14);
        let mid = first.add_days(14);
        let next_first = next_month_start(first);
        let next_mid = next_first.add_days(14);
        let after_next_first = next_month_start(next_first);
        [prev_mid, first, mid, next_first, next_mid, after_next_first]
    }
}

fn next_month_start(first_of_month: Date) -> Date {
    first_of_month.end_of_month().add_days(1)
}

fn prev_month_start(first_of_month: Date) -> Date {
    first_of_month.add_days(-1).start_of_month()
}

impl Offset for MilitaryPayDay {
    fn is_on_offset(&self, date: Date) -> bool {
        if !self.b_day.is_on_offset(date) {
            return false;
        }
        let day = date.day();
        if day == 1 || day == 15 {
            return true;
        }
        if day < 15 {
            self.observed_for(date.start_of_month().add_days(14)) == date
        } else {
            // saturates to the range end for December 2199, where the
            // next nominal 1st does not exist
            let nominal = next_month_start(date.start_of_month());
            nominal.day() == 1 && self.observed_for(nominal) == date
        }
    }

    fn roll_forward(&self, date: Date) -> Date {
        for nominal in Self::nominal_window(date) {
            let observed = self.observed_for(nominal);
            if observed >= date {
                return observed;
            }
        }
        Date::max_date()
    }

    fn roll_back(&self, date: Date) -> Date {
        for nominal in Self::nominal_window(date).into_iter().rev() {
            let observed = self.observed_for(nominal);
            if observed <= date {
                return observed;
            }
        }
        Date::min_date()
    }
}
