//! Date offsets: recurring day patterns that dates can be tested
//! against, rolled to, and shifted along.
//!
//! This module provides:
//! - [`FedBusinessDay`]: weekdays that are not federal holidays
//! - [`FedPayDay`]: the civilian biweekly payday pattern
//! - [`MilitaryPayDay`]: the 1st/15th military payday pattern
//! - [`MilitaryPassDay`]: probable military pass days adjacent to
//!   holidays

mod business;
mod civpay;
mod milpay;
mod passday;

pub use business::{FedBusinessDay, WeekMask};
pub use civpay::FedPayDay;
pub use milpay::MilitaryPayDay;
pub use passday::{MilitaryPassDay, PassdayMap};

use crate::types::Date;

/// A recurring set of days.
///
/// Offsets are pure after construction: every method is read-only and
/// infallible. The scalar methods define the behavior; the slice forms
/// apply the same logic element-wise.
pub trait Offset {
    /// Returns true if the date is on the offset.
    fn is_on_offset(&self, date: Date) -> bool;

    /// Returns the date itself when on-offset, else the greatest
    /// on-offset day before it.
    ///
    /// Saturates at the start of the supported range when no earlier
    /// on-offset day exists (1970-01-01 was a holiday, so this corner
    /// is reachable).
    fn roll_back(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_on_offset(result) {
            if result == Date::min_date() {
                break;
            }
            result = result.add_days(-1);
        }
        result
    }

    /// Returns the date itself when on-offset, else the smallest
    /// on-offset day after it.
    ///
    /// Saturates at the end of the supported range when no later
    /// on-offset day exists.
    fn roll_forward(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_on_offset(result) {
            if result == Date::max_date() {
                break;
            }
            result = result.add_days(1);
        }
        result
    }

    /// Moves `n` on-offset days away from the date; the date itself
    /// never counts toward `n`.
    ///
    /// `shift(date, 0)` rolls forward off-offset dates; positive `n`
    /// lands on the nth on-offset day strictly after the date, negative
    /// `n` on the nth strictly before.
    fn shift(&self, date: Date, n: i32) -> Date {
        use std::cmp::Ordering;

        match n.cmp(&0) {
            Ordering::Equal => self.roll_forward(date),
            Ordering::Greater => {
                let mut result = date;
                for _ in 0..n {
                    result = self.roll_forward(result.add_days(1));
                }
                result
            }
            Ordering::Less => {
                let mut result = date;
                for _ in 0..n.unsigned_abs() {
                    result = self.roll_back(result.add_days(-1));
                }
                result
            }
        }
    }

    /// Element-wise [`Self::is_on_offset`].
    fn observed(&self, dates: &[Date]) -> Vec<bool> {
        dates.iter().map(|d| self.is_on_offset(*d)).collect()
    }

    /// Element-wise [`Self::roll_back`].
    fn roll_back_all(&self, dates: &[Date]) -> Vec<Date> {
        dates.iter().map(|d| self.roll_back(*d)).collect()
    }

    /// Element-wise [`Self::roll_forward`].
    fn roll_forward_all(&self, dates: &[Date]) -> Vec<Date> {
        dates.iter().map(|d| self.roll_forward(*d)).collect()
    }

    /// Element-wise [`Self::shift`].
    fn shift_all(&self, dates: &[Date], n: i32) -> Vec<Date> {
        dates.iter().map(|d| self.shift(*d, n)).collect()
    }
}
