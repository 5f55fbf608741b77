//! Unified application error type.
//! The timeline core, the exporters and the CLI all return AppError so a
//! single failure can travel up to `main` unchanged.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot read input '{path}': {source}")]
    ReadInput {
        path: String,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // Timeline parsing
    // ---------------------------
    #[error("Cannot parse date for '{title}': {reason} in \"{text}\"")]
    DateParse {
        title: String,
        text: String,
        reason: &'static str,
    },

    #[error("Local time {moment} does not exist in the selected timezone")]
    InvalidLocalTime { moment: String },

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
