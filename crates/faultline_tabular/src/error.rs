//! Error types for the tabular crate.

use crate::schema::ColumnType;
use thiserror::Error;

/// Result type for tabular operations.
pub type TabularResult<T> = Result<T, TabularError>;

/// Errors raised while describing, decoding or reading records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TabularError {
    /// The schema description is malformed.
    #[error("invalid schema: {message}")]
    InvalidSchema {
        /// Description of the problem.
        message: String,
    },

    /// The header line does not name the schema's columns.
    #[error("header mismatch: expected {expected:?}, found {found:?}")]
    HeaderMismatch {
        /// Column names declared by the schema.
        expected: Vec<String>,
        /// Column names found in the header.
        found: Vec<String>,
    },

    /// A row has the wrong number of fields.
    #[error("line {line}: expected {expected} fields, found {found}")]
    ArityMismatch {
        /// One-based line number.
        line: usize,
        /// Number of schema columns.
        expected: usize,
        /// Number of fields in the row.
        found: usize,
    },

    /// A field could not be parsed as its column type.
    #[error("line {line}, column {column}: cannot read {value:?} as {expected}")]
    InvalidCell {
        /// One-based line number.
        line: usize,
        /// Column name.
        column: String,
        /// The raw field.
        value: String,
        /// Declared column type.
        expected: ColumnType,
    },

    /// A required field is empty.
    #[error("line {line}, column {column}: missing value")]
    MissingValue {
        /// One-based line number.
        line: usize,
        /// Column name.
        column: String,
    },

    /// A record was asked for a column its schema does not have.
    #[error("unknown column: {name}")]
    UnknownColumn {
        /// The requested name.
        name: String,
    },

    /// A typed accessor was used on a cell of another type.
    #[error("column {column} holds {actual}, not {requested}")]
    TypeMismatch {
        /// Column name.
        column: String,
        /// Type asked for.
        requested: ColumnType,
        /// Kind of the stored cell.
        actual: &'static str,
    },
}

impl TabularError {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Self::InvalidSchema {
            message: message.into(),
        }
    }

    /// Creates an unknown column error.
    pub fn unknown_column(name: impl Into<String>) -> Self {
        Self::UnknownColumn { name: name.into() }
    }

    /// Line the error refers to, when it comes from a row.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::ArityMismatch { line, .. }
            | Self::InvalidCell { line, .. }
            | Self::MissingValue { line, .. } => Some(*line),
            _ => None,
        }
    }
}
