use crate::cli::explore::stats::{
    DurationSummary, StationSummary, TravelTimeSummary, UserSummary,
};
use crate::data::{TripRecord, day_name, month_name};
use chrono::TimeDelta;
use owo_colors::OwoColorize;

pub(crate) fn render_travel_times(summary: &TravelTimeSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", "Most frequent times of travel".bold()));
    out.push_str(&format!("  {:<12} {}\n", "month", month_name(summary.month)));
    out.push_str(&format!("  {:<12} {}\n", "day", day_name(summary.weekday)));
    out.push_str(&format!(
        "  {:<12} {:02}:00\n",
        "start hour", summary.hour
    ));

    out
}

pub(crate) fn render_stations(summary: &StationSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", "Most popular stations and trip".bold()));
    out.push_str(&format!("  {:<12} {}\n", "start", summary.start_station));
    out.push_str(&format!("  {:<12} {}\n", "end", summary.end_station));

    let (from, to) = &summary.trip;
    out.push_str(&format!(
        "  {:<12} {} -> {} ({} trips)\n",
        "trip", from, to, summary.trip_count
    ));

    out
}

pub(crate) fn render_durations(summary: &DurationSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", "Trip durations".bold()));
    out.push_str(&format!(
        "  {:<12} {} across {} trips\n",
        "total",
        format_timedelta(summary.total),
        summary.trips
    ));
    out.push_str(&format!(
        "  {:<12} {}\n",
        "mean",
        format_timedelta(summary.mean)
    ));

    out
}

pub(crate) fn render_users(summary: &UserSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", "User profile".bold()));

    out.push_str("User types:\n");
    for (label, count) in &summary.user_types {
        out.push_str(&format!("  {:<12} {:>8}\n", label, count));
    }

    match &summary.genders {
        Some(genders) => {
            out.push_str("\nGender:\n");
            for (label, count) in genders {
                out.push_str(&format!("  {:<12} {:>8}\n", label, count));
            }
        }
        None => out.push_str("\nGender information is not available for this city.\n"),
    }

    match &summary.birth_years {
        Some(years) => {
            out.push_str(&format!(
                "\nBirth year: earliest {}, most recent {}, most common {}\n",
                years.earliest, years.most_recent, years.most_common
            ));
        }
        None => out.push_str("\nBirth year information is not available for this city.\n"),
    }

    out
}

/// One raw record, one labelled field per line.
pub(crate) fn render_record(position: usize, record: &TripRecord) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", format!("Trip {position}").bold()));
    out.push_str(&format!("  {:<12} {}\n", "start", record.start_time));
    out.push_str(&format!("  {:<12} {}\n", "end", record.end_time));
    out.push_str(&format!("  {:<12} {}\n", "from", record.start_station));
    out.push_str(&format!("  {:<12} {}\n", "to", record.end_station));

    if let Some(user_type) = &record.user_type {
        out.push_str(&format!("  {:<12} {}\n", "user type", user_type));
    }
    if let Some(gender) = &record.gender {
        out.push_str(&format!("  {:<12} {}\n", "gender", gender));
    }
    if let Some(birth_year) = record.birth_year {
        out.push_str(&format!("  {:<12} {}\n", "birth year", birth_year));
    }

    out
}

/// Break a delta into `H hours M minutes S seconds`.
pub(crate) fn format_timedelta(delta: TimeDelta) -> String {
    let total = delta.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();

    format!(
        "{sign}{} hours {} minutes {} seconds",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
