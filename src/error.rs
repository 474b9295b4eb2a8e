//! Typed error model for the ingestion pipeline.
//!
//! - `thiserror` for enum derivation — no manual `Display` impls.
//! - Library code propagates these with `?`; the binary wraps them in
//!   `anyhow` context at the top level.

use std::path::PathBuf;

/// All failure modes of the ingestion pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The readiness probe exhausted its retry budget.
    #[error("database not ready after {attempts} attempts")]
    DatabaseUnavailable { attempts: u32 },

    /// The designated primary-key column is not in the CSV header.
    #[error("primary key column {column:?} not found in {}", .path.display())]
    MissingPrimaryKeyColumn { column: String, path: PathBuf },

    /// Malformed or unreadable CSV input.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Any SQL failure, including primary-key violations during load.
    #[error("database error: {0}")]
    Sql(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
