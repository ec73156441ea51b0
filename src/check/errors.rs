//! Wrapper-level errors: usage mistakes plus validation passthrough.
//!
//! Misconfiguring a wrapper (naming an argument the call never binds,
//! leaving the binding ambiguous) is a usage error, distinct from the
//! three validation kinds. Validation failures pass through with their
//! message intact.

use thiserror::Error;

use crate::schema::SchemaError;

/// Result type for wrapped calls.
pub type CheckResult<T> = Result<T, CheckError>;

/// Errors surfaced by wrapped calls.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckError {
    /// A column validation failure, message verbatim.
    #[error(transparent)]
    Validation(#[from] SchemaError),

    /// The call bound no tabular argument to inspect.
    #[error("No tabular argument bound to the call")]
    NoArgument,

    /// More than one tabular argument and no explicit name configured.
    #[error("Call binds {0} tabular arguments; name the one to check")]
    AmbiguousArgument(usize),

    /// The configured argument name matches no binding.
    #[error("No tabular argument named {0} bound to the call")]
    UnknownArgument(String),
}

impl CheckError {
    /// True for configuration mistakes rather than validation failures.
    pub fn is_usage(&self) -> bool {
        !matches!(self, Self::Validation(_))
    }
}
