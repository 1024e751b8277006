//! Executive department enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Date;

/// The top-level executive departments tracked by the status dataset.
///
/// Judiciary and legislative budgets (federal courts and Congress) are
/// not tracked. Variant names double as the dataset's department codes.
///
/// # Example
///
/// ```rust
/// use fedcal_core::types::Dept;
///
/// assert_eq!(Dept::DOI.abbrev(), "DoI");
/// assert_eq!(Dept::from_short_name("Interior"), Some(Dept::DOI));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dept {
    /// Department of Homeland Security
    DHS,
    /// Department of Commerce
    DOC,
    /// Department of Defense
    DOD,
    /// Department of Energy
    DOE,
    /// Department of the Interior
    DOI,
    /// Department of Justice
    DOJ,
    /// Department of Labor
    DOL,
    /// Department of State
    DOS,
    /// Department of Transportation
    DOT,
    /// Department of Education
    ED,
    /// Department of Health and Human Services
    HHS,
    /// Department of Housing and Urban Development
    HUD,
    /// Independent Agencies
    IA,
    /// Executive Office of the President
    PRES,
    /// Department of Agriculture
    USDA,
    /// Department of the Treasury
    USDT,
    /// Department of Veterans Affairs
    VA,
}

/// Date of DHS formation; status queries before this day treat DHS as
/// absent.
pub const DHS_FORMED: (i32, u32, u32) = (2003, 11, 25);

impl Dept {
    /// All departments in variant order.
    pub const ALL: [Dept; 17] = [
        Dept::DHS,
        Dept::DOC,
        Dept::DOD,
        Dept::DOE,
        Dept::DOI,
        Dept::DOJ,
        Dept::DOL,
        Dept::DOS,
        Dept::DOT,
        Dept::ED,
        Dept::HHS,
        Dept::HUD,
        Dept::IA,
        Dept::PRES,
        Dept::USDA,
        Dept::USDT,
        Dept::VA,
    ];

    /// Returns the mixed-case abbreviation (e.g. `"DoC"`).
    #[must_use]
    pub fn abbrev(&self) -> &'static str {
        match self {
            Dept::DHS => "DHS",
            Dept::DOC => "DoC",
            Dept::DOD => "DoD",
            Dept::DOE => "DoE",
            Dept::DOI => "DoI",
            Dept::DOJ => "DoJ",
            Dept::DOL => "DoL",
            Dept::DOS => "DoS",
            Dept::DOT => "DoT",
            Dept::ED => "ED",
            Dept::HHS => "HHS",
            Dept::HUD => "HUD",
            Dept::IA => "IA",
            Dept::PRES => "PRES",
            Dept::USDA => "USDA",
            Dept::USDT => "USDT",
            Dept::VA => "VA",
        }
    }

    /// Returns the full department name.
    #[must_use]
    pub fn full_name(&self) -> &'static str {
        match self {
            Dept::DHS => "Department of Homeland Security",
            Dept::DOC => "Department of Commerce",
            Dept::DOD => "Department of Defense",
            Dept::DOE => "Department of Energy",
            Dept::DOI => "Department of the Interior",
            Dept::DOJ => "Department of Justice",
            Dept::DOL => "Department of Labor",
            Dept::DOS => "Department of State",
            Dept::DOT => "Department of Transportation",
            Dept::ED => "Department of Education",
            Dept::HHS => "Department of Health and Human Services",
            Dept::HUD => "Department of Housing and Urban Development",
            Dept::IA => "Independent Agencies",
            Dept::PRES => "Executive Office of the President",
            Dept::USDA => "Department of Agriculture",
            Dept::USDT => "Department of the Treasury",
            Dept::VA => "Department of Veterans Affairs",
        }
    }

    /// Returns the short name.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        match self {
            Dept::DHS => "Homeland Security",
            Dept::DOC => "Commerce",
            Dept::DOD => "Defense",
            Dept::DOE => "Energy",
            Dept::DOI => "Interior",
            Dept::DOJ => "Justice",
            Dept::DOL => "Labor",
            Dept::DOS => "State",
            Dept::DOT => "Transportation",
            Dept::ED => "Education",
            Dept::HHS => "Health and Human Services",
            Dept::HUD => "Housing and Urban Development",
            Dept::IA => "Independent Agencies",
            Dept::PRES => "Office of the President",
            Dept::USDA => "Agriculture",
            Dept::USDT => "Treasury",
            Dept::VA => "Veterans Affairs",
        }
    }

    /// Looks a department up by its abbreviation.
    #[must_use]
    pub fn from_abbrev(abbrev: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.abbrev() == abbrev)
    }

    /// Looks a department up by its full name.
    #[must_use]
    pub fn from_full_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.full_name() == name)
    }

    /// Looks a department up by its short name.
    ///
    /// `"Independent Agencies"` is both the full and short name of IA;
    /// both lookups resolve it.
    #[must_use]
    pub fn from_short_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.short_name() == name)
    }

    /// Looks a department up by any of its string projections.
    #[must_use]
    pub fn reverse_lookup(value: &str) -> Option<Self> {
        Self::from_abbrev(value)
            .or_else(|| Self::from_full_name(value))
            .or_else(|| Self::from_short_name(value))
    }

    /// Returns the date the department was formed, for departments
    /// younger than the calendar range.
    #[must_use]
    pub fn formed(&self) -> Option<Date> {
        match self {
            Dept::DHS => Some(
                Date::from_ymd(DHS_FORMED.0, DHS_FORMED.1, DHS_FORMED.2)
                    .expect("DHS formation date is valid"),
            ),
            _ => None,
        }
    }

    /// Returns true if the department existed on the given date.
    #[must_use]
    pub fn existed_on(&self, date: Date) -> bool {
        match self.formed() {
            Some(formed) => date >= formed,
            None => true,
        }
    }

    /// Iterates over the departments active on a date: all 17 from
    /// 2003-11-25, the 16 non-DHS departments before.
    pub fn active_on(date: Date) -> impl Iterator<Item = Dept> {
        Self::ALL.into_iter().filter(move |d| d.existed_on(date))
    }

    /// Position of the department in [`Dept::ALL`], for dense indexing.
    #[must_use]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Dept {
    /// Formats as full name with abbreviation, e.g.
    /// `"Department of State (DoS)"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_name(), self.abbrev())
    }
}
