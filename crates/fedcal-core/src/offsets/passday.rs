//! Military pass day offset.
//!
//! Commands commonly grant an administrative pass on the business day
//! adjacent to a federal holiday. Local practice varies; this offset
//! approximates the majority case through a configurable mapping from
//! holiday weekday to pass-day weekday.

use chrono::Weekday;

use super::{FedBusinessDay, Offset};
use crate::calendars::FedHolidays;
use crate::error::{FedCalError, FedCalResult};
use crate::types::Date;

/// Mapping from the weekday of a holiday (Mon-Fri) to the weekday of
/// its associated pass day (Mon-Fri).
///
/// Validated at construction: values must be weekdays, no weekday maps
/// to itself, and each pair must be within one business day (adjacent,
/// or the Fri/Mon weekend wrap).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassdayMap {
    /// Pass-day weekday indexed by holiday weekday, Monday first.
    map: [Weekday; 5],
}

impl PassdayMap {
    /// The default mapping: Mon→Fri, Tue→Mon, Wed→Thu, Thu→Fri,
    /// Fri→Mon.
    pub const DEFAULT: PassdayMap = PassdayMap {
        map: [
            Weekday::Fri,
            Weekday::Mon,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Mon,
        ],
    };

    /// Creates a mapping from pass-day weekdays indexed by holiday
    /// weekday, Monday first.
    ///
    /// # Errors
    ///
    /// Returns `FedCalError::InvalidConfig` when a value is a weekend
    /// day, equals its key, or is not within one business day of it.
    pub fn new(map: [Weekday; 5]) -> FedCalResult<Self> {
        for (key, value) in map.iter().enumerate() {
            let value_num = value.num_days_from_monday() as i32;
            let key_num = key as i32;
            if value_num > 4 {
                return Err(FedCalError::invalid_config(format!(
                    "pass day for a {} holiday cannot be a weekend day",
                    WEEKDAY_NAMES[key]
                )));
            }
            if value_num == key_num {
                return Err(FedCalError::invalid_config(format!(
                    "pass day for a {} holiday cannot be the holiday itself",
                    WEEKDAY_NAMES[key]
                )));
            }
            if !matches!((key_num - value_num).abs(), 1 | 4) {
                return Err(FedCalError::invalid_config(format!(
                    "pass day for a {} holiday must be within one business day",
                    WEEKDAY_NAMES[key]
                )));
            }
        }
        Ok(PassdayMap { map })
    }

    /// Returns the pass-day weekday for a holiday weekday, or `None`
    /// for weekend holidays (which have no mapping).
    #[must_use]
    pub fn passday_weekday(&self, holiday_weekday: Weekday) -> Option<Weekday> {
        let idx = holiday_weekday.num_days_from_monday() as usize;
        self.map.get(idx).copied()
    }

    /// Returns true when the pass day precedes the holiday.
    fn rolls_backward(&self, holiday_weekday: Weekday) -> bool {
        let key = holiday_weekday.num_days_from_monday() as i32;
        let value = self.map[key as usize].num_days_from_monday() as i32;
        value == key - 1 || (key == 0 && value == 4)
    }
}

impl Default for PassdayMap {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const WEEKDAY_NAMES: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// The probable military pass day offset: business days adjacent to
/// federal holidays per a [`PassdayMap`].
///
/// A date `d` is a probable pass day when all of the following hold for
/// `h`, the nearest holiday to `d` (later holiday on ties):
///
/// 1. `d` is a business day;
/// 2. `d`'s weekday equals the map entry for `h`'s weekday;
/// 3. the day distance is 3 for Monday/Friday holidays (the pass sits
///    across the weekend) and 1 otherwise.
///
/// # Example
///
/// ```rust
/// use fedcal_core::offsets::{MilitaryPassDay, Offset};
/// use fedcal_core::types::Date;
///
/// let passday = MilitaryPassDay::new();
/// // Thanksgiving 2023 fell on Thursday Nov 23; Friday is the pass
/// assert!(passday.is_on_offset(Date::from_ymd(2023, 11, 24).unwrap()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MilitaryPassDay {
    b_day: FedBusinessDay,
    holidays: &'static FedHolidays,
    map: PassdayMap,
}

impl MilitaryPassDay {
    /// Creates the offset with the default mapping.
    #[must_use]
    pub fn new() -> Self {
        Self {
            b_day: FedBusinessDay::new(),
            holidays: FedHolidays::global(),
            map: PassdayMap::DEFAULT,
        }
    }

    /// Creates the offset with a custom validated mapping.
    #[must_use]
    pub fn with_map(map: PassdayMap) -> Self {
        Self {
            b_day: FedBusinessDay::new(),
            holidays: FedHolidays::global(),
            map,
        }
    }

    /// Returns the mapping in use.
    #[must_use]
    pub fn map(&self) -> PassdayMap {
        self.map
    }

    /// Returns the pass day associated with a holiday: the adjacent
    /// business day on the mapped side, or `None` for a weekend holiday.
    #[must_use]
    pub fn pass_day_for(&self, holiday: Date) -> Option<Date> {
        self.map.passday_weekday(holiday.weekday())?;
        Some(if self.map.rolls_backward(holiday.weekday()) {
            self.b_day.roll_back(holiday)
        } else {
            self.b_day.roll_forward(holiday)
        })
    }

    /// Returns the pass day associated with the holiday nearest to the
    /// date.
    #[must_use]
    pub fn nearest_pass_day(&self, date: Date) -> Option<Date> {
        self.pass_day_for(self.holidays.nearest_holiday(date))
    }

    /// Element-wise [`Self::nearest_pass_day`].
    #[must_use]
    pub fn nearest_pass_days(&self, dates: &[Date]) -> Vec<Option<Date>> {
        dates.iter().map(|d| self.nearest_pass_day(*d)).collect()
    }
}

impl Default for MilitaryPassDay {
    fn default() -> Self {
        Self::new()
    }
}

impl Offset for MilitaryPassDay {
    fn is_on_offset(&self, date: Date) -> bool {
        if !self.b_day.is_on_offset(date) {
            return false;
        }
        let holiday = self.holidays.nearest_holiday(date);
        let Some(pass_weekday) = self.map.passday_weekday(holiday.weekday()) else {
            return false;
        };
        if date.weekday() != pass_weekday {
            return false;
        }
        let distance = (date - holiday).abs();
        let expected = match holiday.weekday() {
            Weekday::Mon | Weekday::Fri => 3,
            _ => 1,
        };
        distance == expected
    }
}
