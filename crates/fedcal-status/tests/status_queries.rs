//! Status index behavior pinned against the historical record, plus
//! coverage properties over the whole dataset.

use proptest::prelude::*;

use fedcal_core::types::{Date, Dept, DeptStatus};
use fedcal_core::FedCalError;
use fedcal_status::StatusIndex;

fn ymd(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn epoch_day_is_ambiguously_funded() {
    let index = StatusIndex::bundled();
    for dept in Dept::active_on(ymd(1970, 1, 1)) {
        assert_eq!(
            index.status_at(dept, ymd(1970, 1, 1)).unwrap(),
            DeptStatus::ND,
            "{dept}"
        );
    }
}

#[test]
fn fy99_opens_on_continuing_resolutions() {
    let index = StatusIndex::bundled();
    // 1998-10-01 is the first day with distinct CR data; every active
    // department opened FY99 on a CR
    for dept in Dept::active_on(ymd(1998, 10, 1)) {
        assert_eq!(
            index.status_at(dept, ymd(1998, 10, 1)).unwrap(),
            DeptStatus::CR,
            "{dept}"
        );
    }
    // the day before is still the ambiguous pre-cutoff status
    assert_eq!(
        index.status_at(Dept::DOC, ymd(1998, 9, 30)).unwrap(),
        DeptStatus::ND
    );
}

#[test]
fn november_1995_shutdown() {
    let index = StatusIndex::bundled();
    // Nov 14-18, 1995: shutdown for most departments; Agriculture and
    // Energy had enacted appropriations
    assert_eq!(
        index.status_at(Dept::DOJ, ymd(1995, 11, 15)).unwrap(),
        DeptStatus::SDN
    );
    assert_eq!(
        index.status_at(Dept::USDA, ymd(1995, 11, 15)).unwrap(),
        DeptStatus::ND
    );
    assert_eq!(
        index.status_at(Dept::DOE, ymd(1995, 11, 15)).unwrap(),
        DeptStatus::ND
    );
}

#[test]
fn october_2013_full_shutdown() {
    let index = StatusIndex::bundled();
    let day = ymd(2013, 10, 5);
    let snapshot = index.department_statuses(day);
    assert!(snapshot.all_unfunded());
    assert!(snapshot.any_shutdown());
    assert!(!snapshot.any_gap());

    // reopened on a CR the day after the shutdown ended
    let after = index.department_statuses(ymd(2013, 10, 17));
    assert!(after.all_continuing_resolution());
}

#[test]
fn winter_2019_partial_shutdown() {
    let index = StatusIndex::bundled();
    let snapshot = index.department_statuses(ymd(2019, 1, 15));

    assert_eq!(snapshot.get(Dept::DOJ), Some(DeptStatus::SDN));
    assert_eq!(snapshot.get(Dept::DHS), Some(DeptStatus::SDN));
    assert_eq!(snapshot.get(Dept::USDA), Some(DeptStatus::SDN));
    assert_eq!(snapshot.get(Dept::DOD), Some(DeptStatus::FA));
    assert_eq!(snapshot.get(Dept::HHS), Some(DeptStatus::FA));

    assert!(snapshot.any_shutdown());
    assert!(snapshot.any_unfunded());
    assert!(!snapshot.all_unfunded());
    assert!(!snapshot.all_funded());
}

#[test]
fn dhs_queries_before_formation_fail() {
    let index = StatusIndex::bundled();
    assert!(matches!(
        index.status_at(Dept::DHS, ymd(2003, 11, 24)),
        Err(FedCalError::OutOfDepartmentRange { .. })
    ));
    assert!(index.status_at(Dept::DHS, ymd(2003, 11, 25)).is_ok());
}

#[test]
fn dataset_scale_and_order() {
    let index = StatusIndex::bundled();
    let rows = index.rows();
    assert!(rows.len() > 1_000, "dataset has {} intervals", rows.len());
    assert!(rows
        .windows(2)
        .all(|w| (w[0].start, w[0].department) <= (w[1].start, w[1].department)));
}

proptest! {
    #[test]
    fn every_covered_day_has_exactly_one_status(
        days in 0i64..=19_741,
        dept_idx in 0usize..17,
    ) {
        let index = StatusIndex::bundled();
        let date = Date::from_day_count(days).unwrap();
        let dept = Dept::ALL[dept_idx];

        if dept.existed_on(date) {
            let status = index.status_at(dept, date).unwrap();
            prop_assert_ne!(status, DeptStatus::FUT);
            // the containing interval agrees with the point lookup
            let runs: Vec<_> = index.statuses_in_range(dept, date, date).unwrap().collect();
            prop_assert_eq!(runs.len(), 1);
            prop_assert_eq!(runs[0], (date, date, status));
        } else {
            prop_assert!(index.status_at(dept, date).is_err());
            prop_assert_eq!(index.statuses_in_range(dept, date, date).unwrap().count(), 0);
        }
    }

    #[test]
    fn range_walks_cover_their_bounds(start in 0i64..=19_741, len in 0i64..400) {
        let index = StatusIndex::bundled();
        let start = Date::from_day_count(start).unwrap();
        let end = start.add_days(len);
        let entries = index.status_over_range(start, end).unwrap();

        prop_assert_eq!(entries.first().map(|(d, _)| *d), Some(start));
        prop_assert_eq!(entries.last().map(|(d, _)| *d), Some(end));
        // snapshots are strictly ordered and change at each interior entry
        for pair in entries.windows(2) {
            prop_assert!(pair[0].0 < pair[1].0);
        }
        for pair in entries.windows(2).take(entries.len().saturating_sub(2)) {
            prop_assert!(pair[0].1.iter().ne(pair[1].1.iter()) || pair[1].0 == end);
        }
    }
}
