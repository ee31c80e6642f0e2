use crate::cli::explore::mode::{counts_in_order, mode_with_count};
use crate::data::TripRecord;
use chrono::{TimeDelta, Weekday};

/// Most frequent month, weekday and start hour across the selection.
pub(crate) struct TravelTimeSummary {
    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,
}

pub(crate) fn travel_time_summary(records: &[TripRecord]) -> Option<TravelTimeSummary> {
    let (month, _) = mode_with_count(records.iter().map(|r| r.month))?;
    let (weekday, _) = mode_with_count(records.iter().map(|r| r.weekday))?;
    let (hour, _) = mode_with_count(records.iter().map(|r| r.hour))?;

    Some(TravelTimeSummary {
        month,
        weekday,
        hour,
    })
}

pub(crate) struct StationSummary {
    pub start_station: String,
    pub end_station: String,
    /// Most frequent (start, end) pair and how many trips rode it.
    pub trip: (String, String),
    pub trip_count: usize,
}

pub(crate) fn station_summary(records: &[TripRecord]) -> Option<StationSummary> {
    let (start_station, _) = mode_with_count(records.iter().map(|r| r.start_station.clone()))?;
    let (end_station, _) = mode_with_count(records.iter().map(|r| r.end_station.clone()))?;
    let (trip, trip_count) = mode_with_count(
        records
            .iter()
            .map(|r| (r.start_station.clone(), r.end_station.clone())),
    )?;

    Some(StationSummary {
        start_station,
        end_station,
        trip,
        trip_count,
    })
}

pub(crate) struct DurationSummary {
    pub trips: usize,
    pub total: TimeDelta,
    pub mean: TimeDelta,
}

pub(crate) fn duration_summary(records: &[TripRecord]) -> Option<DurationSummary> {
    if records.is_empty() {
        return None;
    }

    let total_seconds: i64 = records.iter().map(|r| r.duration().num_seconds()).sum();
    let mean_seconds = (total_seconds as f64 / records.len() as f64).round() as i64;

    Some(DurationSummary {
        trips: records.len(),
        total: TimeDelta::seconds(total_seconds),
        mean: TimeDelta::seconds(mean_seconds),
    })
}

pub(crate) struct BirthYearSummary {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

pub(crate) struct UserSummary {
    /// Trip counts per user type, first-encounter order.
    pub user_types: Vec<(String, usize)>,

    /// None when the city ships no gender column (or every cell is empty).
    pub genders: Option<Vec<(String, usize)>>,

    /// None when the city ships no birth-year column.
    pub birth_years: Option<BirthYearSummary>,
}

pub(crate) fn user_summary(records: &[TripRecord]) -> Option<UserSummary> {
    if records.is_empty() {
        return None;
    }

    let user_types = counts_in_order(records.iter().filter_map(|r| r.user_type.clone()));

    let genders = counts_in_order(records.iter().filter_map(|r| r.gender.clone()));
    let genders = if genders.is_empty() {
        None
    } else {
        Some(genders)
    };

    let birth_years: Vec<i32> = records.iter().filter_map(|r| r.birth_year).collect();
    let birth_years = if birth_years.is_empty() {
        None
    } else {
        // min/max exist: the vec is non-empty here
        let earliest = *birth_years.iter().min().unwrap();
        let most_recent = *birth_years.iter().max().unwrap();
        let (most_common, _) = mode_with_count(birth_years.iter().copied()).unwrap();
        Some(BirthYearSummary {
            earliest,
            most_recent,
            most_common,
        })
    };

    Some(UserSummary {
        user_types,
        genders,
        birth_years,
    })
}
