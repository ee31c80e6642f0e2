use crate::data::error::DataError;
use crate::data::record::TripRecord;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Columns every city dataset must carry. Gender and birth year are optional
/// (Washington ships without them), and a leading unnamed index column is
/// ignored.
const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "End Time",
    "Start Station",
    "End Station",
    "User Type",
];

#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,

    #[serde(rename = "End Time")]
    end_time: String,

    #[serde(rename = "Start Station")]
    start_station: String,

    #[serde(rename = "End Station")]
    end_station: String,

    /// Empty cells deserialize to None.
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,

    #[serde(rename = "Gender", default)]
    gender: Option<String>,

    /// Float-formatted in the source files (e.g. "1992.0").
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Read a city CSV into trip records, deriving the month/weekday/hour fields
/// from each start time.
pub fn load_city(path: &Path) -> Result<Vec<TripRecord>, DataError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| DataError::Open {
        path: path.to_owned(),
        source,
    })?;

    let headers = reader
        .headers()
        .map_err(|source| DataError::Open {
            path: path.to_owned(),
            source,
        })?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataError::MissingColumn {
                column,
                path: path.to_owned(),
            });
        }
    }

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<RawTrip>().enumerate() {
        let position = idx as u64 + 1;
        let row = row.map_err(|source| DataError::Record {
            path: path.to_owned(),
            position,
            source,
        })?;

        let start_time = parse_timestamp(&row.start_time, position, path)?;
        let end_time = parse_timestamp(&row.end_time, position, path)?;

        records.push(TripRecord::new(
            start_time,
            end_time,
            row.start_station,
            row.end_station,
            row.user_type,
            row.gender,
            row.birth_year.map(|y| y as i32),
        ));
    }

    debug!(path = %path.display(), records = records.len(), "loaded dataset");
    Ok(records)
}

fn parse_timestamp(value: &str, position: u64, path: &Path) -> Result<NaiveDateTime, DataError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| DataError::BadTimestamp {
        value: value.to_string(),
        position,
        path: path.to_owned(),
    })
}
