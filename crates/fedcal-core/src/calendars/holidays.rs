//! US federal holiday calendar.
//!
//! Holiday rules per OPM
//! (<https://www.opm.gov/policy-data-oversight/pay-leave/federal-holidays/>)
//! plus the historical one-off holidays proclaimed by executive order,
//! usually for Christmas Eve.

use chrono::Weekday;
use std::sync::OnceLock;

use super::bitmap::DaySet;
use crate::types::{Date, DateArray, MAX_YEAR, MIN_YEAR};

/// Static federal holiday calendar instance.
static FED_HOLIDAYS: OnceLock<FedHolidays> = OnceLock::new();

/// How a fixed-date holiday shifts when its nominal date is a weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observance {
    /// Observed on the nominal date regardless of weekday.
    Exact,
    /// Saturday observed on Friday, Sunday observed on Monday.
    NearestWorkday,
}

/// An annual scheduled holiday rule.
#[derive(Debug, Clone, Copy)]
pub enum Schedule {
    /// Fixed month/day, possibly shifted by observance, possibly with a
    /// first observed date (Juneteenth was enacted mid-2021).
    Fixed {
        /// Nominal month.
        month: u32,
        /// Nominal day of month.
        day: u32,
        /// Weekend observance rule.
        observance: Observance,
        /// Earliest observed date the rule applies, as (y, m, d).
        first_observed: Option<(i32, u32, u32)>,
    },
    /// The nth occurrence of a weekday in a month.
    NthWeekday {
        /// Month of the occurrence.
        month: u32,
        /// Weekday of the occurrence.
        weekday: Weekday,
        /// 1-based occurrence count.
        n: u32,
    },
    /// The last occurrence of a weekday in a month.
    LastWeekday {
        /// Month of the occurrence.
        month: u32,
        /// Weekday of the occurrence.
        weekday: Weekday,
    },
}

/// A named scheduled holiday rule.
#[derive(Debug, Clone, Copy)]
pub struct HolidayRule {
    /// Display name of the holiday.
    pub name: &'static str,
    /// When the holiday is observed.
    pub schedule: Schedule,
}

impl HolidayRule {
    /// Realizes the observed date of this rule in the given year, or
    /// `None` when the rule was not yet in force.
    #[must_use]
    pub fn observed_in(&self, year: i32) -> Option<Date> {
        let date = match self.schedule {
            Schedule::Fixed {
                month,
                day,
                observance,
                first_observed,
            } => {
                let nominal = Date::from_ymd(year, month, day).ok()?;
                let observed = match observance {
                    Observance::Exact => nominal,
                    Observance::NearestWorkday => nearest_workday(nominal),
                };
                if let Some((fy, fm, fd)) = first_observed {
                    let first = Date::from_ymd(fy, fm, fd).expect("rule start date is valid");
                    if observed < first {
                        return None;
                    }
                }
                observed
            }
            Schedule::NthWeekday { month, weekday, n } => {
                nth_weekday_of_month(year, month, weekday, n)?
            }
            Schedule::LastWeekday { month, weekday } => {
                last_weekday_of_month(year, month, weekday)?
            }
        };
        Some(date)
    }
}

/// The 11 scheduled federal holidays.
pub const SCHEDULED_RULES: [HolidayRule; 11] = [
    HolidayRule {
        name: "New Year's Day",
        schedule: Schedule::Fixed {
            month: 1,
            day: 1,
            observance: Observance::NearestWorkday,
            first_observed: None,
        },
    },
    HolidayRule {
        name: "Martin Luther King Jr. Day",
        schedule: Schedule::NthWeekday {
            month: 1,
            weekday: Weekday::Mon,
            n: 3,
        },
    },
    HolidayRule {
        name: "Presidents Day",
        schedule: Schedule::NthWeekday {
            month: 2,
            weekday: Weekday::Mon,
            n: 3,
        },
    },
    HolidayRule {
        name: "Memorial Day",
        schedule: Schedule::LastWeekday {
            month: 5,
            weekday: Weekday::Mon,
        },
    },
    HolidayRule {
        name: "Juneteenth National Independence Day",
        schedule: Schedule::Fixed {
            month: 6,
            day: 19,
            observance: Observance::NearestWorkday,
            first_observed: Some((2021, 6, 18)),
        },
    },
    HolidayRule {
        name: "Independence Day",
        schedule: Schedule::Fixed {
            month: 7,
            day: 4,
            observance: Observance::NearestWorkday,
            first_observed: None,
        },
    },
    HolidayRule {
        name: "Labor Day",
        schedule: Schedule::NthWeekday {
            month: 9,
            weekday: Weekday::Mon,
            n: 1,
        },
    },
    HolidayRule {
        name: "Columbus Day",
        schedule: Schedule::NthWeekday {
            month: 10,
            weekday: Weekday::Mon,
            n: 2,
        },
    },
    HolidayRule {
        name: "Veterans Day",
        schedule: Schedule::Fixed {
            month: 11,
            day: 11,
            observance: Observance::NearestWorkday,
            first_observed: None,
        },
    },
    HolidayRule {
        name: "Thanksgiving Day",
        schedule: Schedule::NthWeekday {
            month: 11,
            weekday: Weekday::Thu,
            n: 4,
        },
    },
    HolidayRule {
        name: "Christmas Day",
        schedule: Schedule::Fixed {
            month: 12,
            day: 25,
            observance: Observance::NearestWorkday,
            first_observed: None,
        },
    },
];

/// A one-off holiday declared by executive order.
#[derive(Debug, Clone, Copy)]
pub struct Proclamation {
    /// Display name, after the proclaiming President and year.
    pub name: &'static str,
    /// Proclaimed date as (y, m, d).
    pub date: (i32, u32, u32),
}

/// The historically proclaimed one-off holidays, newest first.
pub const PROCLAMATIONS: [Proclamation; 11] = [
    Proclamation {
        name: "2020 Christmas Eve proclamation (Trump)",
        date: (2020, 12, 24),
    },
    Proclamation {
        name: "2019 Christmas Eve proclamation (Trump)",
        date: (2019, 12, 24),
    },
    Proclamation {
        name: "2018 Christmas Eve proclamation (Trump)",
        date: (2018, 12, 24),
    },
    Proclamation {
        name: "2015 Christmas Eve proclamation (Obama)",
        date: (2015, 12, 24),
    },
    Proclamation {
        name: "2014 day-after-Christmas proclamation (Obama)",
        date: (2014, 12, 26),
    },
    Proclamation {
        name: "2012 Christmas Eve proclamation (Obama)",
        date: (2012, 12, 24),
    },
    Proclamation {
        name: "2007 Christmas Eve proclamation (GW Bush)",
        date: (2007, 12, 24),
    },
    Proclamation {
        name: "2001 Christmas Eve proclamation (GW Bush)",
        date: (2001, 12, 24),
    },
    Proclamation {
        name: "1979 Christmas Eve proclamation (Carter)",
        date: (1979, 12, 24),
    },
    Proclamation {
        name: "1973 New Year's Eve proclamation (Nixon)",
        date: (1973, 12, 31),
    },
    Proclamation {
        name: "1973 Christmas Eve proclamation (Nixon)",
        date: (1973, 12, 24),
    },
];

/// The realized US federal holiday calendar over the supported range.
///
/// Scheduled holidays are stored as observed dates (not nominal), and
/// the proclamation holidays are merged in. Built once; all queries are
/// read-only.
///
/// # Example
///
/// ```rust
/// use fedcal_core::calendars::FedHolidays;
/// use fedcal_core::types::Date;
///
/// let cal = FedHolidays::global();
/// // Juneteenth 2021 observed on Friday June 18
/// assert!(cal.is_holiday(Date::from_ymd(2021, 6, 18).unwrap()));
/// assert!(!cal.is_holiday(Date::from_ymd(2020, 6, 19).unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct FedHolidays {
    /// All observed holidays, ascending.
    all: Vec<(Date, &'static str)>,
    /// Scheduled subset, ascending.
    scheduled: Vec<(Date, &'static str)>,
    /// Proclamation subset, ascending.
    proclamations: Vec<(Date, &'static str)>,
    /// Bitset over the full range for O(1) membership.
    set: DaySet,
}

impl Default for FedHolidays {
    fn default() -> Self {
        Self::new()
    }
}

impl FedHolidays {
    /// Realizes every holiday over the supported range.
    #[must_use]
    pub fn new() -> Self {
        let mut scheduled: Vec<(Date, &'static str)> = Vec::new();
        for year in MIN_YEAR..=MAX_YEAR {
            for rule in &SCHEDULED_RULES {
                if let Some(date) = rule.observed_in(year) {
                    scheduled.push((date, rule.name));
                }
            }
        }
        scheduled.sort_unstable_by_key(|(date, _)| *date);

        let mut proclamations: Vec<(Date, &'static str)> = PROCLAMATIONS
            .iter()
            .map(|p| {
                let (y, m, d) = p.date;
                (
                    Date::from_ymd(y, m, d).expect("proclamation dates are valid"),
                    p.name,
                )
            })
            .collect();
        proclamations.sort_unstable_by_key(|(date, _)| *date);

        let mut all = scheduled.clone();
        all.extend(proclamations.iter().copied());
        all.sort_unstable_by_key(|(date, _)| *date);

        let set = all.iter().map(|(date, _)| *date).collect();
        log::debug!(
            "realized {} federal holidays over {MIN_YEAR}-{MAX_YEAR}",
            all.len()
        );

        Self {
            all,
            scheduled,
            proclamations,
            set,
        }
    }

    /// Returns the process-wide calendar instance.
    pub fn global() -> &'static FedHolidays {
        FED_HOLIDAYS.get_or_init(FedHolidays::new)
    }

    /// Returns true if the date is an observed federal holiday
    /// (proclamations included).
    #[inline]
    #[must_use]
    pub fn is_holiday(&self, date: Date) -> bool {
        self.set.contains(date)
    }

    /// Observed holidays in `[start, end]`, ascending, proclamations
    /// included.
    #[must_use]
    pub fn holidays(&self, start: Date, end: Date) -> DateArray {
        dates_in(&self.all, start, end)
    }

    /// Observed holidays with names in `[start, end]`, ascending.
    #[must_use]
    pub fn holidays_named(&self, start: Date, end: Date) -> Vec<(Date, &'static str)> {
        slice_range(&self.all, start, end).to_vec()
    }

    /// Scheduled (non-proclamation) holidays in `[start, end]`.
    #[must_use]
    pub fn scheduled_holidays(&self, start: Date, end: Date) -> DateArray {
        dates_in(&self.scheduled, start, end)
    }

    /// Proclamation holidays in `[start, end]`.
    #[must_use]
    pub fn proclamation_holidays(&self, start: Date, end: Date) -> DateArray {
        dates_in(&self.proclamations, start, end)
    }

    /// Proclamation holidays with names in `[start, end]`.
    #[must_use]
    pub fn proclamation_holidays_named(&self, start: Date, end: Date) -> Vec<(Date, &'static str)> {
        slice_range(&self.proclamations, start, end).to_vec()
    }

    /// Finds the holiday nearest to the date by absolute day distance.
    /// Ties go to the later holiday.
    #[must_use]
    pub fn nearest_holiday(&self, date: Date) -> Date {
        let idx = self.all.partition_point(|(h, _)| *h < date);
        match (idx.checked_sub(1), self.all.get(idx)) {
            (None, Some((next, _))) => *next,
            (Some(prev_idx), None) => self.all[prev_idx].0,
            (Some(prev_idx), Some((next, _))) => {
                let prev = self.all[prev_idx].0;
                if date - prev < *next - date {
                    prev
                } else {
                    *next
                }
            }
            (None, None) => unreachable!("holiday calendar is never empty"),
        }
    }

    /// Vectorized [`Self::nearest_holiday`].
    #[must_use]
    pub fn nearest_holidays(&self, dates: &[Date]) -> Vec<Date> {
        dates.iter().map(|d| self.nearest_holiday(*d)).collect()
    }

    /// Estimates the probability that a future Christmas Eve is declared
    /// a proclamation holiday.
    ///
    /// Returns 0 unless `date` is a weekday December 24 strictly after
    /// `today`. Otherwise the estimate is the historical ratio, keyed by
    /// the weekday of the associated Christmas Day, of years whose
    /// December 24 was proclaimed a holiday to years overall. Only the
    /// nine December 24 proclamations feed the numerator; the lone
    /// December 26 proclamation and the 1973 New Year's Eve are one-off
    /// events, not a pattern.
    ///
    /// A weak heuristic over a handful of data points; informational
    /// only.
    #[must_use]
    pub fn estimate_future_proclamation(&self, date: Date, today: Date) -> f64 {
        if date <= today || date.month() != 12 || date.day() != 24 || date.is_weekend() {
            return 0.0;
        }
        let christmas_weekday = |year: i32| {
            Date::from_ymd(year, 12, 25)
                .expect("Christmas is valid in every supported year")
                .weekday()
        };
        let target = christmas_weekday(date.year());

        let mut total = 0u32;
        let mut proclaimed = 0u32;
        for year in MIN_YEAR..=today.year() {
            let eve = Date::from_ymd(year, 12, 24).expect("Christmas Eve is valid");
            if eve > today {
                break;
            }
            if christmas_weekday(year) != target {
                continue;
            }
            total += 1;
            if PROCLAMATIONS
                .iter()
                .any(|p| p.date == (year, 12, 24))
            {
                proclaimed += 1;
            }
        }

        if total == 0 {
            0.0
        } else {
            f64::from(proclaimed) / f64::from(total)
        }
    }

    /// Element-wise [`Self::estimate_future_proclamation`].
    #[must_use]
    pub fn estimate_future_proclamations(&self, dates: &[Date], today: Date) -> Vec<f64> {
        dates
            .iter()
            .map(|d| self.estimate_future_proclamation(*d, today))
            .collect()
    }

    /// [`Self::estimate_future_proclamation`] measured from the system
    /// clock.
    #[must_use]
    pub fn estimate_future_proclamation_today(&self, date: Date) -> f64 {
        self.estimate_future_proclamation(date, Date::today())
    }
}

fn slice_range<'a>(
    holidays: &'a [(Date, &'static str)],
    start: Date,
    end: Date,
) -> &'a [(Date, &'static str)] {
    let lo = holidays.partition_point(|(d, _)| *d < start);
    let hi = holidays.partition_point(|(d, _)| *d <= end);
    &holidays[lo..hi]
}

fn dates_in(holidays: &[(Date, &'static str)], start: Date, end: Date) -> DateArray {
    slice_range(holidays, start, end)
        .iter()
        .map(|(date, _)| *date)
        .collect::<Vec<Date>>()
        .into()
}

/// Shifts a weekend date to its observed workday: Saturday to Friday,
/// Sunday to Monday.
#[must_use]
pub fn nearest_workday(date: Date) -> Date {
    match date.weekday() {
        Weekday::Sat => date.add_days(-1),
        Weekday::Sun => date.add_days(1),
        _ => date,
    }
}

/// Calculates the nth occurrence of a weekday in a month.
#[must_use]
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<Date> {
    let first_of_month = Date::from_ymd(year, month, 1).ok()?;
    let days_until = (weekday.num_days_from_monday() as i32
        - first_of_month.weekday().num_days_from_monday() as i32)
        .rem_euclid(7) as u32;

    let day = 1 + days_until + (n - 1) * 7;
    Date::from_ymd(year, month, day).ok()
}

/// Calculates the last occurrence of a weekday in a month.
#[must_use]
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<Date> {
    let last_day = Date::from_ymd(year, month, 1).ok()?.end_of_month();
    let days_back = (last_day.weekday().num_days_from_monday() as i32
        - weekday.num_days_from_monday() as i32)
        .rem_euclid(7);
    Some(last_day.add_days(-i64::from(days_back)))
}
