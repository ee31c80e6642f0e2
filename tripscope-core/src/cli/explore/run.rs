use crate::cli::explore::constants::{
    CITY_PROMPT, DAY_PROMPT, GREETING, MONTH_PROMPT, RESTART_PROMPT, SECTION_RULE,
};
use crate::cli::explore::pager::page_raw_data;
use crate::cli::explore::prompt::{ask_yes_no, prompt_parsed};
use crate::cli::explore::render::{
    render_durations, render_stations, render_travel_times, render_users,
};
use crate::cli::explore::stats::{
    duration_summary, station_summary, travel_time_summary, user_summary,
};
use crate::config::TripscopeConfig;
use crate::data::{
    City, DayFilter, FilterSelection, MonthFilter, apply_filters, load_city,
};
use anyhow::Context;
use std::io;
use std::time::Instant;
use tracing::info;

/// Filter dimensions already settled on the command line. Whatever is missing
/// gets prompted for; presets only apply to the first session iteration.
#[derive(Debug, Default, Clone, Copy)]
pub struct PresetFilters {
    pub city: Option<City>,
    pub month: Option<MonthFilter>,
    pub day: Option<DayFilter>,
}

pub fn run_explore(config: &TripscopeConfig, preset: PresetFilters) -> anyhow::Result<()> {
    println!("{GREETING}");

    let mut preset = preset;
    loop {
        let Some(selection) = collect_filters(preset)? else {
            // stdin closed mid-prompt
            return Ok(());
        };
        preset = PresetFilters::default();

        let path = config.dataset_path(selection.city);
        let records = load_city(&path)
            .with_context(|| format!("loading the {} dataset", selection.city))?;
        let records = apply_filters(records, selection.month, selection.day);
        info!(%selection, records = records.len(), "dataset filtered");

        println!("\n{SECTION_RULE}");
        if records.is_empty() {
            println!("No trips match those filters.");
            println!("{SECTION_RULE}");
        } else {
            section(|| travel_time_summary(&records).map(|s| render_travel_times(&s)));
            section(|| station_summary(&records).map(|s| render_stations(&s)));
            section(|| duration_summary(&records).map(|s| render_durations(&s)));
            section(|| user_summary(&records).map(|s| render_users(&s)));

            page_raw_data(&records, config.page_size)?;
        }

        if !ask_yes_no(RESTART_PROMPT)? {
            return Ok(());
        }
    }
}

/// Prompt for whichever filter dimensions the preset leaves open.
/// None means stdin hit EOF before a full selection was collected.
fn collect_filters(preset: PresetFilters) -> io::Result<Option<FilterSelection>> {
    let city = match preset.city {
        Some(city) => city,
        None => match prompt_parsed::<City>(CITY_PROMPT)? {
            Some(city) => city,
            None => return Ok(None),
        },
    };

    let month = match preset.month {
        Some(month) => month,
        None => match prompt_parsed::<MonthFilter>(MONTH_PROMPT)? {
            Some(month) => month,
            None => return Ok(None),
        },
    };

    let day = match preset.day {
        Some(day) => day,
        None => match prompt_parsed::<DayFilter>(DAY_PROMPT)? {
            Some(day) => day,
            None => return Ok(None),
        },
    };

    Ok(Some(FilterSelection { city, month, day }))
}

/// Print one stat section with its compute time and a closing rule.
fn section<F>(compute: F)
where
    F: FnOnce() -> Option<String>,
{
    let started = Instant::now();
    if let Some(body) = compute() {
        println!("\n{body}");
        println!("(computed in {:.1?})", started.elapsed());
        println!("{SECTION_RULE}");
    }
}
