//! Error type for loading and exporting dataset statistics.
//!
//! Every variant carries the path it concerns so the binary can print a
//! diagnostic that points at the offending file without extra context.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while reading datasets or writing the statistics table.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The file could not be opened, read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid delimited text.
    #[error("failed to parse {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A column the loader depends on is absent from the header row.
    #[error("{path} has no '{column}' column")]
    MissingColumn { path: PathBuf, column: String },

    /// A data row has more fields than the header row.
    #[error("{path}: expected {expected} fields on line {line}, saw {found}")]
    RaggedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A statistics table row names a category this version does not know.
    #[error("{path} has unknown category '{category}'")]
    UnknownCategory { path: PathBuf, category: String },
}

impl StatsError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn csv(path: impl AsRef<Path>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn missing_column(path: impl AsRef<Path>, column: &str) -> Self {
        Self::MissingColumn {
            path: path.as_ref().to_path_buf(),
            column: column.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
