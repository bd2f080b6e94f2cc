use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("no such file '{}': {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("no columns to parse from '{}'", path.display())]
    EmptySpreadsheet { path: PathBuf },

    #[error("row {row} of '{}' has {found} fields, expected at most {expected}", path.display())]
    MalformedRow {
        path: PathBuf,
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("column '{column}' is missing from '{}'", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("{0}")]
    Internal(String),
}

/// The three ways a failed run is reported on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Database,
    FileNotFound,
    Unexpected,
}

impl LoaderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LoaderError::Database(_) => ErrorCategory::Database,
            LoaderError::FileNotFound { .. } => ErrorCategory::FileNotFound,
            LoaderError::Io { .. }
            | LoaderError::Csv { .. }
            | LoaderError::EmptySpreadsheet { .. }
            | LoaderError::MalformedRow { .. }
            | LoaderError::MissingColumn { .. }
            | LoaderError::Internal(_) => ErrorCategory::Unexpected,
        }
    }

    /// Console line for this error, prefixed by its category.
    pub fn report_message(&self) -> String {
        match self.category() {
            ErrorCategory::Database => format!("Database error: {}", self),
            ErrorCategory::FileNotFound => format!(
                "File not found. Make sure the program runs from the root directory of the repo. Error: {}",
                self
            ),
            ErrorCategory::Unexpected => format!("An unexpected error occurred: {}", self),
        }
    }

    pub fn report(&self) {
        tracing::error!("{}", self.report_message());
    }
}

impl From<anyhow::Error> for LoaderError {
    fn from(err: anyhow::Error) -> Self {
        LoaderError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LoaderError>;
