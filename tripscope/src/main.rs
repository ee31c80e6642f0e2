use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tripscope_core::cli::check::run_check;
use tripscope_core::cli::explore::{PresetFilters, run_explore};
use tripscope_core::config::TripscopeConfig;
use tripscope_core::data::{City, DayFilter, MonthFilter};
use tripscope_core::logging::init_logging;

const DEFAULT_CONFIG: &str = "config/tripscope.toml";

#[derive(Parser, Debug)]
#[command(
    name = "tripscope",
    version,
    about = "Tripscope: interactive bikeshare trip explorer"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Explore a city's trip data interactively (default)
    Explore {
        /// Path to the Tripscope config file
        #[arg(long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,

        /// Skip the city prompt, e.g. "chicago"
        #[arg(long)]
        city: Option<City>,

        /// Skip the month prompt, e.g. "june" or "all"
        #[arg(long)]
        month: Option<MonthFilter>,

        /// Skip the day prompt, e.g. "monday" or "all"
        #[arg(long)]
        day: Option<DayFilter>,
    },

    /// Validate the configured datasets
    Check {
        /// Path to the Tripscope config file
        #[arg(long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Explore {
            config,
            city,
            month,
            day,
        }) => {
            let config = TripscopeConfig::from_file_or_default(&config)?;
            run_explore(&config, PresetFilters { city, month, day })
        }

        Some(Command::Check { config }) => {
            let config = TripscopeConfig::from_file_or_default(&config)?;
            if run_check(&config) {
                Ok(())
            } else {
                std::process::exit(1);
            }
        }

        None => {
            let config = TripscopeConfig::from_file_or_default(Path::new(DEFAULT_CONFIG))?;
            run_explore(&config, PresetFilters::default())
        }
    }
}
