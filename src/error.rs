// src/error.rs
//! Error types for both halves of the app.
//!
//! - `CollectError`: anything that aborts a collection run. No partial output
//!   is ever written when one of these is returned.
//! - `DataFormatError`: a dataset file that cannot be loaded into validated
//!   records. Raised before any dashboard view is computed.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectError {
    /// Transport failure or non-success status for a listing page.
    #[error("Fetch failed for {url}: {message}")]
    Fetch { url: String, message: String },

    /// A fetched page does not have the expected listing structure.
    #[error("Parse error on {url}: {reason}")]
    Parse { url: String, reason: String },

    /// The "next" chain ran past the configured page cap.
    #[error("Page limit exceeded: more than {cap} listing pages")]
    LimitExceeded { cap: usize },

    #[error("Invalid URL {url}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Write failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CollectError {
    pub fn fetch(url: impl ToString, message: impl ToString) -> Self {
        Self::Fetch { url: url.to_string(), message: message.to_string() }
    }

    pub fn parse(url: impl ToString, reason: impl Into<String>) -> Self {
        Self::Parse { url: url.to_string(), reason: reason.into() }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column: {0}")]
    MissingColumn(&'static str),

    /// 1-based data row number (header excluded).
    #[error("Row {row}: price {value:?} is not a non-negative decimal")]
    BadPrice { row: usize, value: String },

    #[error("Row {row}: unknown rating {value:?}")]
    BadRating { row: usize, value: String },

    #[error("Dataset has no rows")]
    Empty,
}
