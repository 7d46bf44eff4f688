//! Unified application error type.
//! Loading, parsing, exporting and configuration all return AppError so the
//! CLI can report every failure the same way. The engine itself never fails:
//! invalid edits are ignored at the Override Store boundary.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid shift status: {0}")]
    InvalidStatus(String),

    #[error("Invalid cell key: {0} (expected STAFF@YYYY-MM-DD)")]
    InvalidCellKey(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    // ---------------------------
    // Dataset errors
    // ---------------------------
    #[error("Duplicate base record for {0}")]
    DuplicateRecord(String),

    #[error("Duplicate staff member: {0}")]
    DuplicateStaff(String),

    #[error("Invalid rate for staff member {0} (weekday and holiday rates must be positive)")]
    InvalidRate(String),

    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
