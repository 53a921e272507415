//! Error types for loading task files and resolving CLI input.
//!
//! The layout engine itself never fails; these errors only come from the outer layer.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimelineError {
    /// The task file exists but could not be read.
    #[error("failed to read task file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The task file is not a valid timeline document.
    #[error("failed to parse task file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A date argument that matched none of the accepted forms.
    #[error("invalid date '{0}': expected YYYY-MM-DD, today, tomorrow, 'in 3d' or a weekday")]
    InvalidDate(String),

    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TimelineError>;
