//! Column validator.
//!
//! Checks a frame's column set and dtypes against a normalized spec.
//! Fail-fast: spec entries are visited in declaration order, presence
//! before dtype for each entry, and the first violation wins. The
//! strict sweep for undeclared columns runs only after every declared
//! entry has passed.

use super::columns::ColumnSpec;
use super::errors::{SchemaError, SchemaResult};
use crate::frame::{Tabular, UNKNOWN_DTYPE};

/// A column check: one normalized spec plus the strictness policy.
///
/// Stateless across calls; checking the same frame twice yields the
/// same outcome. Validation reads column metadata only, never rows.
#[derive(Debug, Clone, Default)]
pub struct ColumnCheck {
    spec: ColumnSpec,
    strict: bool,
}

impl ColumnCheck {
    /// Create a check from any column declaration.
    pub fn new(columns: impl Into<ColumnSpec>) -> Self {
        Self {
            spec: columns.into(),
            strict: false,
        }
    }

    /// Reject frame columns the spec does not declare.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// The normalized spec this check enforces.
    pub fn spec(&self) -> &ColumnSpec {
        &self.spec
    }

    /// Validate a frame against the spec.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in this order:
    /// - [`SchemaError::MissingColumn`] for a declared name absent from
    ///   the frame
    /// - [`SchemaError::WrongDtype`] for a present column whose observed
    ///   dtype differs from the declared one (exact string comparison)
    /// - [`SchemaError::UnexpectedColumns`] in strict mode, once all
    ///   declared entries pass, for frame columns the spec omits
    pub fn check(&self, frame: &dyn Tabular) -> SchemaResult<()> {
        let actual = frame.columns();

        for def in self.spec.defs() {
            if !actual.iter().any(|column| column == &def.name) {
                return Err(SchemaError::missing_column(&def.name, &actual));
            }
            if let Some(expected) = &def.dtype {
                let observed = frame
                    .dtype(&def.name)
                    .unwrap_or_else(|| UNKNOWN_DTYPE.to_string());
                if &observed != expected {
                    return Err(SchemaError::wrong_dtype(&def.name, observed, expected));
                }
            }
        }

        if self.strict {
            let extras: Vec<String> = actual
                .into_iter()
                .filter(|column| !self.spec.contains(column))
                .collect();
            if !extras.is_empty() {
                return Err(SchemaError::unexpected_columns(extras));
            }
        }

        Ok(())
    }
}
