use crate::data::record::TripRecord;
use crate::data::{City, DayFilter, MonthFilter, ParseFilterError, apply_filters};
use chrono::{NaiveDateTime, Weekday};
use pretty_assertions::assert_eq;

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// Helper: a trip starting at `start`, stations and user fields fixed
fn trip(start: &str) -> TripRecord {
    TripRecord::new(
        ts(start),
        ts(start), // zero-length trip, duration is irrelevant here
        "A".to_string(),
        "B".to_string(),
        Some("Subscriber".to_string()),
        None,
        None,
    )
}

#[test]
fn city_parses_known_names_case_insensitively() {
    assert_eq!("chicago".parse::<City>().unwrap(), City::Chicago);
    assert_eq!(" New York City ".parse::<City>().unwrap(), City::NewYorkCity);
    assert_eq!("WASHINGTON".parse::<City>().unwrap(), City::Washington);
}

#[test]
fn city_rejects_unknown_names() {
    assert_eq!(
        "boston".parse::<City>(),
        Err(ParseFilterError::City("boston".to_string()))
    );
    assert!("".parse::<City>().is_err());
}

#[test]
fn month_parses_covered_months_and_all() {
    assert_eq!("june".parse::<MonthFilter>().unwrap(), MonthFilter::Month(6));
    assert_eq!(
        "January".parse::<MonthFilter>().unwrap(),
        MonthFilter::Month(1)
    );
    assert_eq!("ALL".parse::<MonthFilter>().unwrap(), MonthFilter::All);
}

#[test]
fn month_rejects_uncovered_months_and_abbreviations() {
    // the datasets stop at june
    assert!("july".parse::<MonthFilter>().is_err());
    assert!("december".parse::<MonthFilter>().is_err());
    assert!("jun".parse::<MonthFilter>().is_err());
}

#[test]
fn day_parses_full_names_and_all() {
    assert_eq!(
        "friday".parse::<DayFilter>().unwrap(),
        DayFilter::Day(Weekday::Fri)
    );
    assert_eq!(
        "Sunday".parse::<DayFilter>().unwrap(),
        DayFilter::Day(Weekday::Sun)
    );
    assert_eq!("all".parse::<DayFilter>().unwrap(), DayFilter::All);
}

#[test]
fn day_rejects_abbreviations() {
    assert!("fri".parse::<DayFilter>().is_err());
    assert!("weekday".parse::<DayFilter>().is_err());
}

#[test]
fn month_filter_keeps_only_that_month() {
    let records = vec![
        trip("2017-06-23 15:09:32"),
        trip("2017-05-10 08:00:00"),
        trip("2017-06-01 07:30:00"),
    ];

    let filtered = apply_filters(records, MonthFilter::Month(6), DayFilter::All);

    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|r| r.month == 6));
}

#[test]
fn day_filter_keeps_only_that_weekday() {
    // 2017-06-23 is a Friday, 2017-01-02 a Monday
    let records = vec![trip("2017-06-23 15:09:32"), trip("2017-01-02 09:00:00")];

    let filtered = apply_filters(records, MonthFilter::All, DayFilter::Day(Weekday::Mon));

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].weekday, Weekday::Mon);
}

#[test]
fn all_all_is_a_no_op() {
    let records = vec![trip("2017-06-23 15:09:32"), trip("2017-01-02 09:00:00")];

    let filtered = apply_filters(records.clone(), MonthFilter::All, DayFilter::All);

    assert_eq!(filtered, records);
}

#[test]
fn filtering_is_idempotent() {
    let records = vec![
        trip("2017-06-23 15:09:32"),
        trip("2017-05-10 08:00:00"),
        trip("2017-06-02 07:30:00"),
    ];
    let month = MonthFilter::Month(6);
    let day = DayFilter::Day(Weekday::Fri);

    let once = apply_filters(records, month, day);
    let twice = apply_filters(once.clone(), month, day);

    assert_eq!(once, twice);
}

#[test]
fn month_and_day_filters_commute() {
    let records = vec![
        trip("2017-06-23 15:09:32"), // June, Friday
        trip("2017-06-19 10:00:00"), // June, Monday
        trip("2017-05-12 11:00:00"), // May, Friday
        trip("2017-01-02 09:00:00"), // January, Monday
    ];
    let month = MonthFilter::Month(6);
    let day = DayFilter::Day(Weekday::Fri);

    let month_first = apply_filters(
        apply_filters(records.clone(), month, DayFilter::All),
        MonthFilter::All,
        day,
    );
    let day_first = apply_filters(
        apply_filters(records.clone(), MonthFilter::All, day),
        month,
        DayFilter::All,
    );
    let combined = apply_filters(records, month, day);

    assert_eq!(month_first, day_first);
    assert_eq!(month_first, combined);
}
