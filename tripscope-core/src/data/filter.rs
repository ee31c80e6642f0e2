use crate::data::record::TripRecord;
use chrono::Weekday;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// English month names, indexed by month number minus one.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The datasets cover the first half of the year only.
const LAST_COVERED_MONTH: u32 = 6;

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseFilterError {
    #[error("'{0}' is not one of chicago, new york city, washington")]
    City(String),

    #[error("'{0}' is not a month between january and june, or 'all'")]
    Month(String),

    #[error("'{0}' is not a day of the week, or 'all'")]
    Day(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        };
        f.write_str(name)
    }
}

impl FromStr for City {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let answer = s.trim();
        for city in City::ALL {
            if answer.eq_ignore_ascii_case(&city.to_string()) {
                return Ok(city);
            }
        }
        Err(ParseFilterError::City(answer.to_string()))
    }
}

/// Month selection: a specific covered month, or no filtering at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// Month number, 1 through 6.
    Month(u32),
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Month(m) => f.write_str(month_name(*m)),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let answer = s.trim();
        if answer.eq_ignore_ascii_case("all") {
            return Ok(MonthFilter::All);
        }
        let month = MONTH_NAMES[..LAST_COVERED_MONTH as usize]
            .iter()
            .position(|name| name.eq_ignore_ascii_case(answer));
        match month {
            Some(idx) => Ok(MonthFilter::Month(idx as u32 + 1)),
            None => Err(ParseFilterError::Month(answer.to_string())),
        }
    }
}

/// Weekday selection: a specific day, or no filtering at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Day(d) => f.write_str(day_name(*d)),
        }
    }
}

impl FromStr for DayFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let answer = s.trim();
        if answer.eq_ignore_ascii_case("all") {
            return Ok(DayFilter::All);
        }
        // Full names only; abbreviations are not part of the accepted set.
        let days = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        for day in days {
            if answer.eq_ignore_ascii_case(day_name(day)) {
                return Ok(DayFilter::Day(day));
            }
        }
        Err(ParseFilterError::Day(answer.to_string()))
    }
}

/// A validated (city, month, day) triple. Free text never flows past the
/// `FromStr` impls above, so holding one of these means every dimension is a
/// member of its fixed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "city={} month={} day={}",
            self.city, self.month, self.day
        )
    }
}

/// Keep records matching the month and weekday selections. `All` in either
/// dimension is a no-op, so filtering is idempotent and the two dimensions
/// commute.
pub fn apply_filters(
    records: Vec<TripRecord>,
    month: MonthFilter,
    day: DayFilter,
) -> Vec<TripRecord> {
    records
        .into_iter()
        .filter(|r| match month {
            MonthFilter::All => true,
            MonthFilter::Month(m) => r.month == m,
        })
        .filter(|r| match day {
            DayFilter::All => true,
            DayFilter::Day(d) => r.weekday == d,
        })
        .collect()
}
