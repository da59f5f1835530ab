use std::{io, path::PathBuf, time::TryFromFloatSecsError};

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while reading an override table.
#[derive(Debug, Error)]
pub enum OverrideTableError {
    /// The file exists but could not be read.
    #[error("failed to read override table {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The table has no header line.
    #[error("override table has no header")]
    MissingHeader,

    /// A required column is absent from the header.
    #[error("override table is missing column `{0}`")]
    MissingColumn(&'static str),

    /// The CSV is malformed or a field has the wrong type.
    #[error("malformed override table")]
    Csv(#[from] csv::Error),

    /// A data row holds an out-of-range value.
    #[error("invalid override row at line {line}")]
    Row {
        /// One-based line number in the file.
        line: u64,
        #[source]
        source: RowError,
    },
}

/// Errors in a single override table row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("column `{column}` is out of range")]
    Constraint {
        column: &'static str,
        #[source]
        source: ConstraintError,
    },

    #[error("column `{column}` is not a representable delay")]
    Delay {
        column: &'static str,
        #[source]
        source: TryFromFloatSecsError,
    },
}
