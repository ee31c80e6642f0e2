use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike, Weekday};

/// One bikeshare ride, as loaded from a city dataset.
///
/// The `month`, `weekday` and `hour` fields are derived from `start_time`
/// when the record is built and stay consistent with it; records are never
/// mutated after load.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,
}

impl TripRecord {
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        start_station: String,
        end_station: String,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        Self {
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
            start_time,
            end_time,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
        }
    }

    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }
}
