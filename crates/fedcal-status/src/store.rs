//! The status interval store.
//!
//! The curated dataset covers every (department, day) pair from
//! 1970-01-01 (DHS: from its 2003-11-25 formation) through the end of
//! the most recently enacted appropriation or continuing resolution.
//! Per-department intervals are kept in sorted vectors; point lookups
//! binary-search them.

use std::sync::OnceLock;

use fedcal_core::error::{FedCalError, FedCalResult};
use fedcal_core::types::{Date, Dept, DeptStatus};

use crate::records::{StatusInterval, StatusRecord};

/// The bundled dataset, derived from Congressional Research Service
/// appropriations status tables cross-referenced with GAO records.
const DATASET: &str = include_str!("../data/status_intervals.json");

/// Static index over the bundled dataset.
static BUNDLED: OnceLock<StatusIndex> = OnceLock::new();

/// An immutable, validated index of department status intervals.
///
/// # Example
///
/// ```rust
/// use fedcal_status::StatusIndex;
/// use fedcal_core::types::{Date, Dept, DeptStatus};
///
/// let index = StatusIndex::bundled();
/// let day = Date::from_ymd(2013, 10, 5).unwrap();
/// assert_eq!(index.status_at(Dept::DOI, day).unwrap(), DeptStatus::SDN);
/// ```
#[derive(Debug, Clone)]
pub struct StatusIndex {
    /// Interval runs per department, indexed by [`Dept::index`], each
    /// sorted ascending and contiguous.
    by_dept: Vec<Vec<(Date, Date, DeptStatus)>>,
    /// Last day the dataset covers; later days are `FUT`.
    last_covered: Date,
}

impl StatusIndex {
    /// Parses and validates a JSON dataset.
    ///
    /// # Errors
    ///
    /// Returns `FedCalError::Parse` for malformed JSON or unknown codes
    /// and `FedCalError::DatasetInvariantViolated` when any
    /// department's coverage is missing, overlapping, or discontiguous.
    pub fn from_json_str(text: &str) -> FedCalResult<Self> {
        let records: Vec<StatusRecord> = serde_json::from_str(text)
            .map_err(|e| FedCalError::parse(format!("status dataset: {e}")))?;
        Self::from_records(records.into_iter().map(StatusInterval::from))
    }

    /// Builds an index from parsed intervals.
    ///
    /// # Errors
    ///
    /// Returns `FedCalError::DatasetInvariantViolated` when any
    /// department's coverage is missing, overlapping, or discontiguous.
    pub fn from_records(records: impl IntoIterator<Item = StatusInterval>) -> FedCalResult<Self> {
        let mut by_dept: Vec<Vec<(Date, Date, DeptStatus)>> = vec![Vec::new(); Dept::ALL.len()];
        for record in records {
            by_dept[record.department.index()].push((record.start, record.end, record.status));
        }
        for runs in &mut by_dept {
            runs.sort_unstable_by_key(|(start, _, _)| *start);
        }

        let last_covered = by_dept
            .iter()
            .flat_map(|runs| runs.iter().map(|(_, end, _)| *end))
            .max()
            .ok_or_else(|| FedCalError::dataset_invariant(Dept::ALL[0], "dataset is empty"))?;

        let index = StatusIndex {
            by_dept,
            last_covered,
        };
        index.verify_coverage()?;

        log::info!(
            "loaded {} status intervals covering {}..{}",
            index.by_dept.iter().map(Vec::len).sum::<usize>(),
            Date::min_date(),
            index.last_covered,
        );
        Ok(index)
    }

    /// Checks that each department's runs start at its expected first
    /// day, are contiguous and non-overlapping, and reach the dataset's
    /// last covered day.
    fn verify_coverage(&self) -> FedCalResult<()> {
        for dept in Dept::ALL {
            let runs = &self.by_dept[dept.index()];
            let expected_start = dept.formed().unwrap_or_else(Date::min_date);

            let Some((first_start, _, _)) = runs.first() else {
                return Err(FedCalError::dataset_invariant(dept, "no intervals"));
            };
            if *first_start != expected_start {
                return Err(FedCalError::dataset_invariant(
                    dept,
                    format!("coverage starts {first_start}, expected {expected_start}"),
                ));
            }
            for window in runs.windows(2) {
                let (start, end, _) = window[0];
                if start > end {
                    return Err(FedCalError::dataset_invariant(
                        dept,
                        format!("interval {start}..{end} is inverted"),
                    ));
                }
                let (next_start, _, _) = window[1];
                if next_start != end.add_days(1) {
                    return Err(FedCalError::dataset_invariant(
                        dept,
                        format!("coverage breaks between {end} and {next_start}"),
                    ));
                }
            }
            let (last_start, last_end, _) = runs[runs.len() - 1];
            if last_start > last_end {
                return Err(FedCalError::dataset_invariant(
                    dept,
                    format!("interval {last_start}..{last_end} is inverted"),
                ));
            }
            if last_end != self.last_covered {
                return Err(FedCalError::dataset_invariant(
                    dept,
                    format!("coverage ends {last_end}, expected {}", self.last_covered),
                ));
            }
        }
        Ok(())
    }

    /// Returns the index over the bundled dataset, built on first use.
    ///
    /// # Panics
    ///
    /// Panics if the bundled dataset fails validation, which is a build
    /// defect rather than a runtime condition.
    pub fn bundled() -> &'static StatusIndex {
        BUNDLED.get_or_init(|| {
            Self::from_json_str(DATASET).expect("bundled status dataset is valid")
        })
    }

    /// Returns the last day the dataset covers.
    #[must_use]
    pub fn last_covered(&self) -> Date {
        self.last_covered
    }

    /// Returns a department's status on a date.
    ///
    /// Dates past the dataset's coverage are `FUT`.
    ///
    /// # Errors
    ///
    /// Returns `FedCalError::OutOfDepartmentRange` for dates before the
    /// department existed.
    pub fn status_at(&self, department: Dept, date: Date) -> FedCalResult<DeptStatus> {
        if !department.existed_on(date) {
            return Err(FedCalError::OutOfDepartmentRange { department, date });
        }
        if date > self.last_covered {
            return Ok(DeptStatus::FUT);
        }
        let runs = &self.by_dept[department.index()];
        let idx = runs.partition_point(|(start, _, _)| *start <= date);
        let (_, end, status) = runs[idx - 1];
        debug_assert!(date <= end, "coverage verified contiguous at load");
        Ok(status)
    }

    /// Yields each stored interval of a department intersecting
    /// `[start, end]`, clipped to the query range, ascending.
    ///
    /// Days before the department existed or past the dataset's
    /// coverage have no stored intervals and are simply not yielded.
    ///
    /// # Errors
    ///
    /// Returns `FedCalError::Shape` when `start > end`.
    pub fn statuses_in_range(
        &self,
        department: Dept,
        start: Date,
        end: Date,
    ) -> FedCalResult<impl Iterator<Item = (Date, Date, DeptStatus)> + '_> {
        if start > end {
            return Err(FedCalError::shape(format!(
                "range start {start} is after range end {end}"
            )));
        }
        let runs = &self.by_dept[department.index()];
        let from = runs.partition_point(|(_, run_end, _)| *run_end < start);
        Ok(runs[from..]
            .iter()
            .take_while(move |(run_start, _, _)| *run_start <= end)
            .map(move |(run_start, run_end, status)| {
                ((*run_start).max(start), (*run_end).min(end), *status)
            }))
    }

    /// All intervals in `(start, department)` order, for tabular
    /// projections.
    #[must_use]
    pub fn rows(&self) -> Vec<StatusInterval> {
        let mut rows: Vec<StatusInterval> = self
            .by_dept
            .iter()
            .zip(Dept::ALL)
            .flat_map(|(runs, department)| {
                runs.iter().map(move |(start, end, status)| StatusInterval {
                    start: *start,
                    end: *end,
                    department,
                    status: *status,
                })
            })
            .collect();
        rows.sort_unstable_by_key(|row| (row.start, row.department));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_bundled_loads_and_covers_epoch() {
        let index = StatusIndex::bundled();
        assert_eq!(
            index.status_at(Dept::DOC, ymd(1970, 1, 1)).unwrap(),
            DeptStatus::ND
        );
    }

    #[test]
    fn test_dhs_coverage_starts_at_formation() {
        let index = StatusIndex::bundled();
        let before = index.status_at(Dept::DHS, ymd(2003, 11, 24));
        assert!(matches!(
            before,
            Err(FedCalError::OutOfDepartmentRange { .. })
        ));
        assert!(index.status_at(Dept::DHS, ymd(2003, 11, 25)).is_ok());
    }

    #[test]
    fn test_future_is_fut() {
        let index = StatusIndex::bundled();
        let beyond = index.last_covered().add_days(1);
        assert_eq!(
            index.status_at(Dept::USDT, beyond).unwrap(),
            DeptStatus::FUT
        );
    }

    #[test]
    fn test_2013_shutdown() {
        let index = StatusIndex::bundled();
        for dept in Dept::ALL {
            assert_eq!(
                index.status_at(dept, ymd(2013, 10, 5)).unwrap(),
                DeptStatus::SDN,
                "{dept}"
            );
        }
    }

    #[test]
    fn test_range_query_clips() {
        let index = StatusIndex::bundled();
        // The 2013 shutdown ran Oct 1-16; FY14 coverage resumes Oct 17
        let runs: Vec<_> = index
            .statuses_in_range(Dept::DOI, ymd(2013, 10, 10), ymd(2013, 10, 20))
            .unwrap()
            .collect();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], (ymd(2013, 10, 10), ymd(2013, 10, 16), DeptStatus::SDN));
        assert_eq!(runs[1].0, ymd(2013, 10, 17));
        assert_eq!(runs[1].1, ymd(2013, 10, 20));
    }

    #[test]
    fn test_range_query_shape_error() {
        let index = StatusIndex::bundled();
        assert!(index
            .statuses_in_range(Dept::DOI, ymd(2013, 10, 20), ymd(2013, 10, 10))
            .is_err());
    }

    #[test]
    fn test_discontiguous_dataset_rejected() {
        let json = r#"[
            { "interval": { "start": "1970-01-01", "end": "1990-12-31" },
              "department": "DOC", "status": "ND" },
            { "interval": { "start": "1991-01-02", "end": "2000-12-31" },
              "department": "DOC", "status": "FA" }
        ]"#;
        assert!(matches!(
            StatusIndex::from_json_str(json),
            Err(FedCalError::DatasetInvariantViolated { .. })
        ));
    }

    #[test]
    fn test_rows_sorted() {
        let index = StatusIndex::bundled();
        let rows = index.rows();
        assert!(rows.windows(2).all(|w| (w[0].start, w[0].department)
            <= (w[1].start, w[1].department)));
        assert!(rows.len() > 1000);
    }
}
