//! Validation failure taxonomy.
//!
//! Exactly three failure kinds, each carrying its fully formatted
//! diagnostic as the error message. No error codes and no recovery: a
//! failure aborts the wrapped call and surfaces the message verbatim.

use thiserror::Error;

use crate::frame::render_list;

/// Result type for column validation.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Column validation failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// A declared column is absent from the frame.
    #[error("Column {name} missing from DataFrame. Got columns: {columns}")]
    MissingColumn {
        /// The declared column name
        name: String,
        /// The frame's actual columns, rendered `['A', 'B']`
        columns: String,
    },

    /// A declared column is present but its dtype differs.
    #[error("Column {name} has wrong dtype. Was {observed}, expected {expected}")]
    WrongDtype {
        name: String,
        observed: String,
        expected: String,
    },

    /// Strict mode: the frame carries columns the spec does not declare.
    #[error("DataFrame contained unexpected column(s): {extras}")]
    UnexpectedColumns {
        /// Comma-joined extra column names, in frame order
        extras: String,
    },
}

impl SchemaError {
    /// Create a missing-column failure listing the frame's actual columns.
    pub fn missing_column(name: impl Into<String>, actual: &[String]) -> Self {
        Self::MissingColumn {
            name: name.into(),
            columns: render_list(actual),
        }
    }

    /// Create a dtype-mismatch failure. Observed comes before expected.
    pub fn wrong_dtype(
        name: impl Into<String>,
        observed: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::WrongDtype {
            name: name.into(),
            observed: observed.into(),
            expected: expected.into(),
        }
    }

    /// Create a strict-mode failure from the extra columns, frame order.
    pub fn unexpected_columns<I, S>(extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let extras: Vec<String> = extras.into_iter().map(Into::into).collect();
        Self::UnexpectedColumns {
            extras: extras.join(", "),
        }
    }

    /// The failure category, for callers that branch on kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingColumn { .. } => "missing_column",
            Self::WrongDtype { .. } => "wrong_dtype",
            Self::UnexpectedColumns { .. } => "unexpected_columns",
        }
    }
}
