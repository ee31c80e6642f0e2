mod error;


pub use error::ConfigError;

use crate::data::City;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Per-city dataset file names, resolved relative to `data_dir`.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetFiles {
    #[serde(default = "default_chicago")]
    pub chicago: PathBuf,

    #[serde(rename = "new york city", default = "default_new_york_city")]
    pub new_york_city: PathBuf,

    #[serde(default = "default_washington")]
    pub washington: PathBuf,
}

fn default_chicago() -> PathBuf {
    PathBuf::from("chicago.csv")
}

fn default_new_york_city() -> PathBuf {
    PathBuf::from("new_york_city.csv")
}

fn default_washington() -> PathBuf {
    PathBuf::from("washington.csv")
}

impl Default for DatasetFiles {
    fn default() -> Self {
        Self {
            chicago: default_chicago(),
            new_york_city: default_new_york_city(),
            washington: default_washington(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TripscopeConfig {
    /// Directory holding the city CSV files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Rows per page in the raw data viewer.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default)]
    pub datasets: DatasetFiles,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_page_size() -> usize {
    5
}

impl Default for TripscopeConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            page_size: default_page_size(),
            datasets: DatasetFiles::default(),
        }
    }
}

impl TripscopeConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config, falling back to defaults when the file does not exist.
    /// A file that exists but fails to read or parse is still an error.
    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidPageSize { value: 0 });
        }
        Ok(())
    }

    /// Full path of the CSV file backing `city`.
    pub fn dataset_path(&self, city: City) -> PathBuf {
        let file = match city {
            City::Chicago => &self.datasets.chicago,
            City::NewYorkCity => &self.datasets.new_york_city,
            City::Washington => &self.datasets.washington,
        };
        self.data_dir.join(file)
    }
}
