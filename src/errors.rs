use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning the input document into record collections.
/// Every variant is fatal: nothing is computed or written after one.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("the file {} was not found", path.display())]
    NotFound { path: PathBuf },

    #[error("an error occurred while reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode JSON from the file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("'players' or 'matches' data is missing or empty in {}", path.display())]
    MissingSection { path: PathBuf },
}

/// Failures while writing output artifacts. Chart and table writes are
/// independent: one failing does not prevent the other from being attempted.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("error saving chart image to {}: {source}", path.display())]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("error saving ELO history CSV to {}: {source}", path.display())]
    TableWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
