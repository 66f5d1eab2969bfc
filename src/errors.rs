//! Unified application error type.
//! Every module (loader, pipeline, export, config, cli) returns AppError so
//! that a single run fails with one readable message.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("Cannot access '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input tables
    // ---------------------------
    #[error("Missing required column '{column}' in {}", path.display())]
    Schema { path: PathBuf, column: String },

    #[error("Invalid value '{value}' for column '{column}' in {} (line {line})", path.display())]
    DataValidation {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },

    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // ---------------------------
    // Outputs
    // ---------------------------
    #[error("Chart rendering failed: {0}")]
    Chart(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Wraps an I/O failure together with the path it happened on.
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Wraps a csv failure together with the table it happened in.
    /// Failures that are really I/O (unreadable file) become `FileAccess`.
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        let path = path.into();
        if source.is_io_error() {
            return AppError::FileAccess {
                path,
                source: io::Error::from(source),
            };
        }
        AppError::Csv { path, source }
    }
}

pub type AppResult<T> = Result<T, AppError>;
