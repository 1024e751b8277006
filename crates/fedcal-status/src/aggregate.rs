//! Aggregation over all departments.
//!
//! A single date maps to a snapshot of every active department's
//! status; ranges walk the merged interval boundaries so consumers see
//! one entry per change rather than one per day.

use std::collections::{BTreeMap, BTreeSet};

use fedcal_core::error::{FedCalError, FedCalResult};
use fedcal_core::types::{Date, Dept, DeptStatus};

use crate::store::StatusIndex;

/// The per-department statuses on a single date.
///
/// Covers the department set active on the date: all 17 from the DHS
/// formation on 2003-11-25, the 16 others before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentStatuses {
    date: Date,
    statuses: BTreeMap<Dept, DeptStatus>,
}

impl DepartmentStatuses {
    /// Returns the snapshot date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns a department's status, or `None` when the department was
    /// not yet active.
    #[must_use]
    pub fn get(&self, department: Dept) -> Option<DeptStatus> {
        self.statuses.get(&department).copied()
    }

    /// Iterates over (department, status) pairs in department order.
    pub fn iter(&self) -> impl Iterator<Item = (Dept, DeptStatus)> + '_ {
        self.statuses.iter().map(|(d, s)| (*d, *s))
    }

    /// Number of active departments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    /// Returns true when no departments are active (never the case for
    /// valid dates).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// True when every department has full-year appropriations.
    #[must_use]
    pub fn all_full_appropriations(&self) -> bool {
        self.statuses.values().all(|s| *s == DeptStatus::FA)
    }

    /// True when every department is under a continuing resolution.
    #[must_use]
    pub fn all_continuing_resolution(&self) -> bool {
        self.statuses.values().all(|s| *s == DeptStatus::CR)
    }

    /// True when every department has an appropriation in force.
    #[must_use]
    pub fn all_funded(&self) -> bool {
        self.statuses.values().all(DeptStatus::is_funded)
    }

    /// True when every department is in a funding gap or shutdown.
    #[must_use]
    pub fn all_unfunded(&self) -> bool {
        self.statuses.values().all(DeptStatus::is_unfunded)
    }

    /// True when any department is under a continuing resolution.
    #[must_use]
    pub fn any_cr(&self) -> bool {
        self.statuses.values().any(|s| *s == DeptStatus::CR)
    }

    /// True when any department is shut down.
    #[must_use]
    pub fn any_shutdown(&self) -> bool {
        self.statuses.values().any(|s| *s == DeptStatus::SDN)
    }

    /// True when any department is in a non-shutdown funding gap.
    #[must_use]
    pub fn any_gap(&self) -> bool {
        self.statuses.values().any(|s| *s == DeptStatus::GAP)
    }

    /// True when any department has no appropriation in force.
    #[must_use]
    pub fn any_unfunded(&self) -> bool {
        self.statuses.values().any(|s| s.is_unfunded())
    }
}

impl StatusIndex {
    /// Returns every active department's status on a date.
    #[must_use]
    pub fn department_statuses(&self, date: Date) -> DepartmentStatuses {
        let statuses = Dept::active_on(date)
            .map(|dept| {
                let status = self
                    .status_at(dept, date)
                    .expect("active departments always have a status");
                (dept, status)
            })
            .collect();
        DepartmentStatuses { date, statuses }
    }

    /// Walks `[start, end]` yielding one snapshot per change boundary: a
    /// date on which at least one department's status differs from the
    /// previous yielded snapshot, plus the first and last date of the
    /// range.
    ///
    /// # Errors
    ///
    /// Returns `FedCalError::Shape` when `start > end`.
    pub fn status_over_range(
        &self,
        start: Date,
        end: Date,
    ) -> FedCalResult<Vec<(Date, DepartmentStatuses)>> {
        if start > end {
            return Err(FedCalError::shape(format!(
                "range start {start} is after range end {end}"
            )));
        }

        let mut boundaries = BTreeSet::new();
        boundaries.insert(start);
        for dept in Dept::ALL {
            for (run_start, _, _) in self.statuses_in_range(dept, start, end)? {
                boundaries.insert(run_start);
            }
        }
        // the department set itself changes at the DHS formation, and
        // every status flips to FUT past the dataset's coverage
        if let Some(formed) = Dept::DHS.formed() {
            if formed > start && formed <= end {
                boundaries.insert(formed);
            }
        }
        let post_data = self.last_covered().add_days(1);
        if post_data > start && post_data <= end {
            boundaries.insert(post_data);
        }

        let mut entries: Vec<(Date, DepartmentStatuses)> = Vec::new();
        for boundary in boundaries {
            let snapshot = self.department_statuses(boundary);
            match entries.last() {
                Some((_, previous)) if previous.statuses == snapshot.statuses => {}
                _ => entries.push((boundary, snapshot)),
            }
        }
        if entries.last().map(|(date, _)| *date) != Some(end) {
            entries.push((end, self.department_statuses(end)));
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_2013_shutdown_aggregates() {
        let snapshot = StatusIndex::bundled().department_statuses(ymd(2013, 10, 5));
        assert_eq!(snapshot.len(), 17);
        assert!(snapshot.all_unfunded());
        assert!(snapshot.any_shutdown());
        assert!(!snapshot.all_funded());
        assert!(!snapshot.any_gap());
    }

    #[test]
    fn test_2019_partial_shutdown() {
        let snapshot = StatusIndex::bundled().department_statuses(ymd(2019, 1, 15));
        for dept in [
            Dept::DHS,
            Dept::DOC,
            Dept::DOI,
            Dept::DOJ,
            Dept::DOS,
            Dept::DOT,
            Dept::HUD,
            Dept::USDA,
            Dept::USDT,
        ] {
            assert_eq!(snapshot.get(dept), Some(DeptStatus::SDN), "{dept}");
        }
        for dept in [Dept::DOD, Dept::DOE, Dept::DOL, Dept::ED, Dept::HHS, Dept::VA] {
            assert_eq!(snapshot.get(dept), Some(DeptStatus::FA), "{dept}");
        }
        assert!(snapshot.any_shutdown());
        assert!(!snapshot.all_unfunded());
        assert!(!snapshot.all_funded());
    }

    #[test]
    fn test_department_set_respects_dhs_formation() {
        let index = StatusIndex::bundled();
        let before = index.department_statuses(ymd(2003, 11, 24));
        assert_eq!(before.len(), 16);
        assert_eq!(before.get(Dept::DHS), None);

        let after = index.department_statuses(ymd(2003, 11, 25));
        assert_eq!(after.len(), 17);
        assert!(after.get(Dept::DHS).is_some());
    }

    #[test]
    fn test_pre_cutoff_is_ambiguous_not_cr() {
        let snapshot = StatusIndex::bundled().department_statuses(ymd(1995, 6, 1));
        assert!(snapshot.iter().all(|(_, s)| s == DeptStatus::ND));
        assert!(snapshot.all_funded());
        assert!(!snapshot.all_continuing_resolution());
    }

    #[test]
    fn test_future_snapshot() {
        let index = StatusIndex::bundled();
        let beyond = index.last_covered().add_days(30);
        let snapshot = index.department_statuses(beyond);
        assert!(snapshot.iter().all(|(_, s)| s == DeptStatus::FUT));
        assert!(!snapshot.all_funded());
        assert!(!snapshot.all_unfunded());
    }

    #[test]
    fn test_status_over_range_boundaries() {
        let index = StatusIndex::bundled();
        // Around the 2013 shutdown: FY13 CR-free period, Oct 1 shutdown
        // start, Oct 17 CR resumption
        let entries = index
            .status_over_range(ymd(2013, 9, 25), ymd(2013, 10, 20))
            .unwrap();
        let dates: Vec<Date> = entries.iter().map(|(d, _)| *d).collect();
        assert_eq!(
            dates,
            vec![ymd(2013, 9, 25), ymd(2013, 10, 1), ymd(2013, 10, 17), ymd(2013, 10, 20)]
        );
        assert!(entries[1].1.all_unfunded());
        assert!(entries[2].1.all_continuing_resolution());
        // the final entry repeats the last state, bounding the range
        assert_eq!(entries[2].1.get(Dept::DOI), entries[3].1.get(Dept::DOI));
    }

    #[test]
    fn test_status_over_range_single_day() {
        let index = StatusIndex::bundled();
        let entries = index
            .status_over_range(ymd(2013, 10, 5), ymd(2013, 10, 5))
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, ymd(2013, 10, 5));
    }

    #[test]
    fn test_status_over_range_rejects_inverted() {
        let index = StatusIndex::bundled();
        assert!(index
            .status_over_range(ymd(2014, 1, 1), ymd(2013, 1, 1))
            .is_err());
    }
}
