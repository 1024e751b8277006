//! Calendar behavior pinned against known historical dates.

use fedcal_core::calendars::FedHolidays;
use fedcal_core::fiscal;
use fedcal_core::offsets::{FedBusinessDay, FedPayDay, MilitaryPassDay, MilitaryPayDay, Offset};
use fedcal_core::types::Date;

fn ymd(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn new_years_2024_is_not_a_business_day() {
    let bday = FedBusinessDay::new();
    assert!(!bday.is_on_offset(ymd(2024, 1, 1)));
    assert_eq!(bday.roll_forward(ymd(2024, 1, 1)), ymd(2024, 1, 2));
}

#[test]
fn juneteenth_observance_begins_in_2021() {
    let holidays = FedHolidays::global();
    assert!(holidays.is_holiday(ymd(2021, 6, 18)));
    assert!(!holidays.is_holiday(ymd(2020, 6, 19)));
}

#[test]
fn civilian_paydays_at_the_epoch() {
    let payday = FedPayDay::new();
    assert!(payday.is_on_offset(ymd(1970, 1, 2)));
    assert!(payday.is_on_offset(ymd(1970, 1, 16)));
    assert!(!payday.is_on_offset(ymd(1970, 1, 9)));
}

#[test]
fn military_pay_for_june_2024_goes_out_may_31() {
    let milpay = MilitaryPayDay::new();
    assert!(!milpay.is_on_offset(ymd(2024, 6, 1)));
    assert!(milpay.is_on_offset(ymd(2024, 5, 31)));
}

#[test]
fn thanksgiving_2023_grants_a_friday_pass() {
    let passday = MilitaryPassDay::new();
    assert!(passday.is_on_offset(ymd(2023, 11, 24)));
}

#[test]
fn fy25_begins_october_2024() {
    let oct1 = ymd(2024, 10, 1);
    assert_eq!(fiscal::fiscal_year(oct1), 2025);
    assert_eq!(fiscal::fiscal_quarter(oct1), 1);
    assert_eq!(fiscal::fy_fq_label(oct1), "2025Q1");
}

#[test]
fn holiday_counts_by_year() {
    let holidays = FedHolidays::global();
    // 2021: 11 scheduled, plus New Year's Day 2022 observed on Dec 31
    assert_eq!(holidays.holidays(ymd(2021, 1, 1), ymd(2021, 12, 31)).len(), 12);
    // 2022: New Year's observed in 2021, Christmas observed Dec 26;
    // nothing borrowed from 2023
    assert_eq!(holidays.holidays(ymd(2022, 1, 1), ymd(2022, 12, 31)).len(), 10);
    // 2020: Juneteenth not yet enacted, one proclamation holiday
    assert_eq!(holidays.holidays(ymd(2020, 1, 1), ymd(2020, 12, 31)).len(), 11);
}

#[test]
fn business_day_sequence_over_a_holiday_weekend() {
    let bday = FedBusinessDay::new();
    let days = bday.business_days(ymd(2023, 12, 29), ymd(2024, 1, 3));
    assert_eq!(
        days.as_slice(),
        &[ymd(2023, 12, 29), ymd(2024, 1, 2), ymd(2024, 1, 3)]
    );
}
