//! Interactive Exploration Pipeline
//!
//! This module drives one full question-and-answer session over a city's trip
//! records: ask which slice of the data to look at, load it, summarize it,
//! and hand over the raw rows if the user wants them.
//!
//! The overall data processing architecture is:
//!
//! stdin prompts
//! FilterSelection
//! load_city + apply_filters
//! Vec<TripRecord>
//! summaries (stats)
//! render_*
//! stdout
//!
//! Everything here is synchronous and blocks on console input; the loaded
//! table lives only for the current iteration of the session loop.

mod constants;
mod mode;
mod pager;
mod prompt;
mod render;
mod run;
mod stats;

#[cfg(test)]
mod tests;

pub use run::{PresetFilters, run_explore};
