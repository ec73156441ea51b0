//! framecheck - runtime column validation for dataframe-like values
//!
//! Declares, where a function is wrapped, which columns (and optionally
//! dtypes) a tabular argument or return value must carry, and checks
//! the declaration on every call without touching the function's own
//! logic or result.
//!
//! ```
//! use framecheck::check::InputCheck;
//! use framecheck::frame::{MemFrame, Tabular};
//! use framecheck::schema::Columns;
//!
//! let load = InputCheck::new(Columns::names(["Brand", "Price"]))
//!     .wrap(|prices: &MemFrame| prices.columns().len());
//!
//! let prices = MemFrame::new([("Brand", "string"), ("Price", "int")]);
//! assert_eq!(load(&prices).unwrap(), 2);
//! ```

pub mod check;
pub mod frame;
pub mod schema;
