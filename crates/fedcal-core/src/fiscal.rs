//! The federal fiscal calendar.
//!
//! The US federal fiscal year begins October 1 and is labeled by the
//! calendar year in which it ends; fiscal quarters count from the
//! October-December quarter.

use std::fmt;

use crate::types::Date;

/// Returns the fiscal year containing the date.
#[must_use]
pub fn fiscal_year(date: Date) -> i32 {
    if date.month() >= 10 {
        date.year() + 1
    } else {
        date.year()
    }
}

/// Returns the fiscal quarter containing the date: 1 for Oct-Dec, 2 for
/// Jan-Mar, 3 for Apr-Jun, 4 for Jul-Sep.
#[must_use]
pub fn fiscal_quarter(date: Date) -> u32 {
    ((date.month() + 2) % 12) / 3 + 1
}

/// Returns true on October 1, the first day of a fiscal year.
#[must_use]
pub fn is_fy_start(date: Date) -> bool {
    date.month() == 10 && date.day() == 1
}

/// Returns true on September 30, the last day of a fiscal year.
#[must_use]
pub fn is_fy_end(date: Date) -> bool {
    date.month() == 9 && date.day() == 30
}

/// Returns true on the first day of a fiscal quarter.
#[must_use]
pub fn is_fq_start(date: Date) -> bool {
    date.day() == 1 && matches!(date.month(), 10 | 1 | 4 | 7)
}

/// Returns true on the last day of a fiscal quarter.
#[must_use]
pub fn is_fq_end(date: Date) -> bool {
    matches!(
        (date.month(), date.day()),
        (12, 31) | (3, 31) | (6, 30) | (9, 30)
    )
}

/// Returns the `"YYYYQ#"` label of the date's fiscal period.
#[must_use]
pub fn fy_fq_label(date: Date) -> String {
    FiscalPeriod::of(date).to_string()
}

/// Element-wise [`fiscal_year`].
#[must_use]
pub fn fiscal_years(dates: &[Date]) -> Vec<i32> {
    dates.iter().map(|d| fiscal_year(*d)).collect()
}

/// Element-wise [`fiscal_quarter`].
#[must_use]
pub fn fiscal_quarters(dates: &[Date]) -> Vec<u32> {
    dates.iter().map(|d| fiscal_quarter(*d)).collect()
}

/// A fiscal year and quarter.
///
/// # Example
///
/// ```rust
/// use fedcal_core::fiscal::FiscalPeriod;
/// use fedcal_core::types::Date;
///
/// let period = FiscalPeriod::of(Date::from_ymd(2024, 10, 1).unwrap());
/// assert_eq!(period.fiscal_year(), 2025);
/// assert_eq!(period.quarter(), 1);
/// assert_eq!(period.to_string(), "2025Q1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FiscalPeriod {
    fy: i32,
    fq: u32,
}

impl FiscalPeriod {
    /// Returns the fiscal period containing the date.
    #[must_use]
    pub fn of(date: Date) -> Self {
        Self {
            fy: fiscal_year(date),
            fq: fiscal_quarter(date),
        }
    }

    /// Returns the fiscal year.
    #[must_use]
    pub fn fiscal_year(&self) -> i32 {
        self.fy
    }

    /// Returns the quarter (1-4).
    #[must_use]
    pub fn quarter(&self) -> u32 {
        self.fq
    }

    /// Returns the first day of the quarter.
    #[must_use]
    pub fn start(&self) -> Date {
        let (year, month) = match self.fq {
            1 => (self.fy - 1, 10),
            2 => (self.fy, 1),
            3 => (self.fy, 4),
            _ => (self.fy, 7),
        };
        Date::from_ymd(year, month, 1).expect("quarter start is a valid date")
    }

    /// Returns the last day of the quarter.
    #[must_use]
    pub fn end(&self) -> Date {
        let (year, month, day) = match self.fq {
            1 => (self.fy - 1, 12, 31),
            2 => (self.fy, 3, 31),
            3 => (self.fy, 6, 30),
            _ => (self.fy, 9, 30),
        };
        Date::from_ymd(year, month, day).expect("quarter end is a valid date")
    }

    /// Returns October 1, the first day of the fiscal year.
    #[must_use]
    pub fn year_start(&self) -> Date {
        Date::from_ymd(self.fy - 1, 10, 1).expect("fiscal year start is a valid date")
    }

    /// Returns September 30, the last day of the fiscal year.
    #[must_use]
    pub fn year_end(&self) -> Date {
        Date::from_ymd(self.fy, 9, 30).expect("fiscal year end is a valid date")
    }
}

impl fmt::Display for FiscalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Q{}", self.fy, self.fq)
    }
}
