//! Tabular capability trait and built-in frame adapters.
//!
//! Validation never touches row data: anything that can report an
//! ordered column list and a dtype label per column can be checked,
//! including the in-memory fixtures the test suite uses.

use serde_json::Value;

/// Label reported when a frame lists a column but cannot name its dtype.
pub const UNKNOWN_DTYPE: &str = "<unknown>";

/// Capability interface for dataframe-like values.
///
/// Implementations must answer `dtype` for every name returned by
/// `columns`; a listed column without a dtype is observed as
/// [`UNKNOWN_DTYPE`] rather than panicking.
pub trait Tabular {
    /// Column names in frame order.
    fn columns(&self) -> Vec<String>;

    /// Observed dtype label for a column, if the column exists.
    fn dtype(&self, name: &str) -> Option<String>;

    /// Observed dtype labels in column order.
    fn dtypes(&self) -> Vec<String> {
        self.columns()
            .iter()
            .map(|name| self.dtype(name).unwrap_or_else(|| UNKNOWN_DTYPE.to_string()))
            .collect()
    }
}

impl std::fmt::Debug for dyn Tabular + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tabular")
            .field("columns", &self.columns())
            .finish()
    }
}

/// In-memory frame: an ordered list of (column, dtype) pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemFrame {
    columns: Vec<(String, String)>,
}

impl MemFrame {
    /// Create a frame from (name, dtype) pairs, kept in the given order.
    pub fn new<I, N, D>(columns: I) -> Self
    where
        I: IntoIterator<Item = (N, D)>,
        N: Into<String>,
        D: Into<String>,
    {
        Self {
            columns: columns
                .into_iter()
                .map(|(name, dtype)| (name.into(), dtype.into()))
                .collect(),
        }
    }
}

impl Tabular for MemFrame {
    fn columns(&self) -> Vec<String> {
        self.columns.iter().map(|(name, _)| name.clone()).collect()
    }

    fn dtype(&self, name: &str) -> Option<String> {
        self.columns
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, dtype)| dtype.clone())
    }
}

/// JSON objects act as single-row frames: keys are the columns and the
/// JSON type of each value is the observed dtype. Non-object values
/// expose no columns.
impl Tabular for Value {
    fn columns(&self) -> Vec<String> {
        match self.as_object() {
            Some(map) => map.keys().cloned().collect(),
            None => Vec::new(),
        }
    }

    fn dtype(&self, name: &str) -> Option<String> {
        self.as_object()
            .and_then(|map| map.get(name))
            .map(|value| json_type_name(value).to_string())
    }
}

/// Returns the JSON type label used as a dtype.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Renders labels the way diagnostics expect: `['Brand', 'Price']`.
pub(crate) fn render_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{}'", item)).collect();
    format!("[{}]", quoted.join(", "))
}
