//! Unified application error type.
//! All modules (core, store, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Validation errors
    // ---------------------------
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Invalid hourly rate: {0} (must be >= 0)")]
    InvalidRate(f64),

    #[error("Invalid date/time: {0} (expected YYYY-MM-DDTHH:mm)")]
    InvalidDateTime(String),

    #[error("Ambiguous entry id '{0}': matches more than one entry")]
    AmbiguousId(String),

    // ---------------------------
    // Persistence errors
    // ---------------------------
    #[error("Persisted data is corrupt: {0}")]
    PersistenceCorrupt(String),

    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
