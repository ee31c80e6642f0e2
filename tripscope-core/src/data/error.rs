use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to open dataset {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("dataset {path} is missing the '{column}' column")]
    MissingColumn { column: &'static str, path: PathBuf },

    #[error("malformed record {position} in {path}: {source}")]
    Record {
        path: PathBuf,
        position: u64,
        #[source]
        source: csv::Error,
    },

    #[error("record {position} in {path}: invalid timestamp '{value}'")]
    BadTimestamp {
        value: String,
        position: u64,
        path: PathBuf,
    },
}
