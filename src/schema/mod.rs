//! Column declarations, normalization, and the column validator.

pub mod columns;
pub mod errors;
pub mod validator;

pub use columns::{ColumnDef, ColumnSpec, Columns};
pub use errors::{SchemaError, SchemaResult};
pub use validator::ColumnCheck;
