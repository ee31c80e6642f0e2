use crate::cli::explore::stats::{
    duration_summary, station_summary, travel_time_summary, user_summary,
};
use crate::data::TripRecord;
use chrono::{NaiveDateTime, Weekday};
use pretty_assertions::assert_eq;

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn trip(
    start: &str,
    end: &str,
    stations: (&str, &str),
    user_type: Option<&str>,
    gender: Option<&str>,
    birth_year: Option<i32>,
) -> TripRecord {
    TripRecord::new(
        ts(start),
        ts(end),
        stations.0.to_string(),
        stations.1.to_string(),
        user_type.map(str::to_string),
        gender.map(str::to_string),
        birth_year,
    )
}

fn chicago_style_records() -> Vec<TripRecord> {
    vec![
        // June, Friday, 15h
        trip(
            "2017-06-23 15:09:32",
            "2017-06-23 15:14:53",
            ("Wood St", "Damen Ave"),
            Some("Subscriber"),
            Some("Male"),
            Some(1992),
        ),
        // June, Monday, 15h
        trip(
            "2017-06-19 15:30:00",
            "2017-06-19 16:00:00",
            ("Wood St", "Damen Ave"),
            Some("Customer"),
            Some("Female"),
            Some(1984),
        ),
        // May, Wednesday, 8h
        trip(
            "2017-05-10 08:00:00",
            "2017-05-10 08:20:00",
            ("Theater on the Lake", "Damen Ave"),
            Some("Subscriber"),
            Some("Male"),
            Some(1992),
        ),
    ]
}

#[test]
fn travel_times_pick_the_modal_month_day_and_hour() {
    let summary = travel_time_summary(&chicago_style_records()).unwrap();

    assert_eq!(summary.month, 6);
    // one Friday, one Monday, one Wednesday: first encountered wins
    assert_eq!(summary.weekday, Weekday::Fri);
    assert_eq!(summary.hour, 15);
}

#[test]
fn stations_pick_the_modal_endpoints_and_pair() {
    let summary = station_summary(&chicago_style_records()).unwrap();

    assert_eq!(summary.start_station, "Wood St");
    assert_eq!(summary.end_station, "Damen Ave");
    assert_eq!(
        summary.trip,
        ("Wood St".to_string(), "Damen Ave".to_string())
    );
    assert_eq!(summary.trip_count, 2);
}

#[test]
fn durations_sum_and_average() {
    // 321s + 1800s + 1200s = 3321s total, mean 1107s
    let summary = duration_summary(&chicago_style_records()).unwrap();

    assert_eq!(summary.trips, 3);
    assert_eq!(summary.total.num_seconds(), 3321);
    assert_eq!(summary.mean.num_seconds(), 1107);
}

#[test]
fn mean_duration_rounds_to_the_nearest_second() {
    let records = vec![
        trip(
            "2017-06-23 15:00:00",
            "2017-06-23 15:00:01",
            ("A", "B"),
            None,
            None,
            None,
        ),
        trip(
            "2017-06-23 15:00:00",
            "2017-06-23 15:00:02",
            ("A", "B"),
            None,
            None,
            None,
        ),
    ];

    // (1 + 2) / 2 = 1.5, rounds to 2
    let summary = duration_summary(&records).unwrap();
    assert_eq!(summary.mean.num_seconds(), 2);
}

#[test]
fn users_count_types_genders_and_birth_years() {
    let summary = user_summary(&chicago_style_records()).unwrap();

    assert_eq!(
        summary.user_types,
        vec![("Subscriber".to_string(), 2), ("Customer".to_string(), 1)]
    );
    assert_eq!(
        summary.genders,
        Some(vec![("Male".to_string(), 2), ("Female".to_string(), 1)])
    );

    let years = summary.birth_years.unwrap();
    assert_eq!(years.earliest, 1984);
    assert_eq!(years.most_recent, 1992);
    assert_eq!(years.most_common, 1992);
}

#[test]
fn users_without_member_details_report_none() {
    // Washington-shaped records: no gender, no birth year
    let records = vec![trip(
        "2017-01-02 09:00:00",
        "2017-01-02 09:10:00",
        ("14th & V St NW", "Park Rd NW"),
        Some("Registered"),
        None,
        None,
    )];

    let summary = user_summary(&records).unwrap();

    assert!(summary.genders.is_none());
    assert!(summary.birth_years.is_none());
}

#[test]
fn empty_selection_yields_no_summaries() {
    let records: Vec<TripRecord> = Vec::new();

    assert!(travel_time_summary(&records).is_none());
    assert!(station_summary(&records).is_none());
    assert!(duration_summary(&records).is_none());
    assert!(user_summary(&records).is_none());
}
