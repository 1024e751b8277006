//! Department funding/operational status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Appropriations and operational status of an executive department.
///
/// Totally ordered from worst to best: `FUT < SDN < GAP < CR < ND < FA`.
/// Variant names double as the dataset's status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DeptStatus {
    /// Future status unknown: the date is past the dataset's coverage.
    FUT,
    /// No appropriations and shutdown.
    SDN,
    /// No appropriations; minimally open but not shut down.
    GAP,
    /// Operating under a continuing resolution.
    CR,
    /// Appropriated, but the data cannot distinguish full-year
    /// appropriations from a continuing resolution (pre-FY99 records).
    ND,
    /// Full-year appropriations.
    FA,
}

impl DeptStatus {
    /// All statuses in ascending order.
    pub const ALL: [DeptStatus; 6] = [
        DeptStatus::FUT,
        DeptStatus::SDN,
        DeptStatus::GAP,
        DeptStatus::CR,
        DeptStatus::ND,
        DeptStatus::FA,
    ];

    /// Returns the ordering integer (-1 for future, 0-4 otherwise).
    #[must_use]
    pub fn ord(&self) -> i8 {
        match self {
            DeptStatus::FA => 4,
            DeptStatus::ND => 3,
            DeptStatus::CR => 2,
            DeptStatus::GAP => 1,
            DeptStatus::SDN => 0,
            DeptStatus::FUT => -1,
        }
    }

    /// Returns the variable-style identifier.
    #[must_use]
    pub fn var(&self) -> &'static str {
        match self {
            DeptStatus::FA => "full_approps",
            DeptStatus::ND => "approps_cr_or_full",
            DeptStatus::CR => "cont_res",
            DeptStatus::GAP => "approps_gap",
            DeptStatus::SDN => "shutdown",
            DeptStatus::FUT => "future_unknown",
        }
    }

    /// Returns the appropriations-status description.
    #[must_use]
    pub fn approps(&self) -> &'static str {
        match self {
            DeptStatus::FA => "full appropriations",
            DeptStatus::ND => "appropriated but unknown whether full-year or CR",
            DeptStatus::CR => "continuing resolution",
            DeptStatus::GAP => "no appropriations",
            DeptStatus::SDN => "no appropriations and shutdown",
            DeptStatus::FUT => "future status unknown",
        }
    }

    /// Returns the operational-status description.
    #[must_use]
    pub fn ops(&self) -> &'static str {
        match self {
            DeptStatus::FA => "open",
            DeptStatus::ND => "open, unknown capacity",
            DeptStatus::CR => "open with limitations",
            DeptStatus::GAP => "minimally open",
            DeptStatus::SDN => "shutdown",
            DeptStatus::FUT => "future status unknown",
        }
    }

    /// Returns the simplified status descriptor.
    #[must_use]
    pub fn simple(&self) -> &'static str {
        match self {
            DeptStatus::FA => "appropriated",
            DeptStatus::ND => "cr or full",
            DeptStatus::CR => "cr",
            DeptStatus::GAP => "appropriations gap",
            DeptStatus::SDN => "shutdown",
            DeptStatus::FUT => "future",
        }
    }

    /// Returns true for statuses with an appropriation in force
    /// (full-year, continuing resolution, or pre-FY99 ambiguous).
    #[must_use]
    pub fn is_funded(&self) -> bool {
        matches!(self, DeptStatus::FA | DeptStatus::ND | DeptStatus::CR)
    }

    /// Returns true for statuses with no appropriation in force.
    #[must_use]
    pub fn is_unfunded(&self) -> bool {
        matches!(self, DeptStatus::GAP | DeptStatus::SDN)
    }

    /// Looks a status up by its ordering integer.
    #[must_use]
    pub fn from_ord(ord: i8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.ord() == ord)
    }

    /// Looks a status up by any of its string projections.
    #[must_use]
    pub fn reverse_lookup(value: &str) -> Option<Self> {
        for accessor in [
            DeptStatus::var,
            DeptStatus::approps,
            DeptStatus::ops,
            DeptStatus::simple,
        ] {
            if let Some(status) = Self::ALL.into_iter().find(|s| accessor(s) == value) {
                return Some(status);
            }
        }
        None
    }
}

impl fmt::Display for DeptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(DeptStatus::FUT < DeptStatus::SDN);
        assert!(DeptStatus::SDN < DeptStatus::GAP);
        assert!(DeptStatus::GAP < DeptStatus::CR);
        assert!(DeptStatus::CR < DeptStatus::ND);
        assert!(DeptStatus::ND < DeptStatus::FA);
    }

    #[test]
    fn test_ord_round_trip() {
        for status in DeptStatus::ALL {
            assert_eq!(DeptStatus::from_ord(status.ord()), Some(status));
        }
    }

    #[test]
    fn test_reverse_lookup() {
        assert_eq!(DeptStatus::reverse_lookup("cont_res"), Some(DeptStatus::CR));
        assert_eq!(
            DeptStatus::reverse_lookup("open with limitations"),
            Some(DeptStatus::CR)
        );
        assert_eq!(DeptStatus::reverse_lookup("appropriated"), Some(DeptStatus::FA));
        assert_eq!(DeptStatus::reverse_lookup("unheard of"), None);
    }

    #[test]
    fn test_reverse_lookup_prefers_var_on_shared_strings() {
        // "shutdown" is SDN's var, ops, and simple projection; they agree
        assert_eq!(DeptStatus::reverse_lookup("shutdown"), Some(DeptStatus::SDN));
    }

    #[test]
    fn test_funded_predicates() {
        assert!(DeptStatus::FA.is_funded());
        assert!(DeptStatus::ND.is_funded());
        assert!(DeptStatus::CR.is_funded());
        assert!(DeptStatus::GAP.is_unfunded());
        assert!(DeptStatus::SDN.is_unfunded());
        assert!(!DeptStatus::FUT.is_funded());
        assert!(!DeptStatus::FUT.is_unfunded());
    }

    #[test]
    fn test_serde_codes() {
        assert_eq!(serde_json::to_string(&DeptStatus::SDN).unwrap(), "\"SDN\"");
        let parsed: DeptStatus = serde_json::from_str("\"ND\"").unwrap();
        assert_eq!(parsed, DeptStatus::ND);
    }
}
