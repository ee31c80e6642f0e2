use crate::config::TripscopeConfig;
use crate::data::{City, load_city};
use owo_colors::OwoColorize;

/// Try a full load of every configured dataset and report per city.
/// Returns false when any dataset fails; the binary turns that into a
/// non-zero exit.
pub fn run_check(config: &TripscopeConfig) -> bool {
    let mut all_ok = true;

    for city in City::ALL {
        let path = config.dataset_path(city);
        match load_city(&path) {
            Ok(records) => {
                println!(
                    "{} {}: {} records ({})",
                    "✔".green(),
                    city,
                    records.len(),
                    path.display()
                );
            }
            Err(err) => {
                all_ok = false;
                eprintln!("{} {}: {err}", "✘".red(), city);
            }
        }
    }

    all_ok
}
