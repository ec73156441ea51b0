//! Column declarations and their normalized form.
//!
//! A declaration is written where a function is wrapped, either as a
//! bare list of required names or as an ordered name to dtype mapping.
//! Both shapes normalize into one [`ColumnSpec`] so the validator never
//! branches on declaration shape.

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A user-supplied column declaration.
///
/// Dtype strings are carried verbatim; no spelling normalization or
/// aliasing is applied before comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Columns {
    /// Required names, no dtype constraints.
    Names(Vec<String>),
    /// Required names with expected dtypes, in declaration order.
    Typed(Vec<(String, String)>),
}

impl Columns {
    /// Declare required names only.
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Names(names.into_iter().map(Into::into).collect())
    }

    /// Declare required names with expected dtypes.
    pub fn typed<I, N, D>(columns: I) -> Self
    where
        I: IntoIterator<Item = (N, D)>,
        N: Into<String>,
        D: Into<String>,
    {
        Self::Typed(
            columns
                .into_iter()
                .map(|(name, dtype)| (name.into(), dtype.into()))
                .collect(),
        )
    }
}

/// A declaration serializes to the shape it was written in: `Names` as
/// a JSON array, `Typed` as a JSON object in declaration order.
impl Serialize for Columns {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Columns::Names(names) => {
                let mut seq = serializer.serialize_seq(Some(names.len()))?;
                for name in names {
                    seq.serialize_element(name)?;
                }
                seq.end()
            }
            Columns::Typed(pairs) => {
                let mut map = serializer.serialize_map(Some(pairs.len()))?;
                for (name, dtype) in pairs {
                    map.serialize_entry(name, dtype)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Columns {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColumnsVisitor;

        impl<'de> Visitor<'de> for ColumnsVisitor {
            type Value = Columns;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a sequence of column names or a map of column name to dtype")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Columns, A::Error> {
                let mut names = Vec::new();
                while let Some(name) = seq.next_element::<String>()? {
                    names.push(name);
                }
                Ok(Columns::Names(names))
            }

            // Entries arrive in document order, which fixes the
            // declaration order of the resulting spec.
            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Columns, A::Error> {
                let mut pairs = Vec::new();
                while let Some(entry) = map.next_entry::<String, String>()? {
                    pairs.push(entry);
                }
                Ok(Columns::Typed(pairs))
            }
        }

        deserializer.deserialize_any(ColumnsVisitor)
    }
}

/// One normalized spec entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Column name, matched exact and case-sensitive.
    pub name: String,
    /// Expected dtype, compared as an opaque string when present.
    pub dtype: Option<String>,
}

/// Normalized, ordered column spec.
///
/// Built once where a function is wrapped and read-only afterwards.
/// Names are expected to be unique within one spec; lookups are by
/// name, declaration order only fixes iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    defs: Vec<ColumnDef>,
}

impl ColumnSpec {
    /// The normalized entries, in declaration order.
    pub fn defs(&self) -> &[ColumnDef] {
        &self.defs
    }

    /// Whether the spec declares the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.defs.iter().any(|def| def.name == name)
    }

    /// Number of declared columns.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// True when no columns are declared.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Parse a declaration from its JSON form: an array of names or an
    /// object of name to dtype.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let columns: Columns = serde_json::from_str(raw)?;
        Ok(columns.into())
    }
}

impl From<Columns> for ColumnSpec {
    /// Both declaration shapes flatten to one ordered list of
    /// (name, optional dtype) entries.
    fn from(columns: Columns) -> Self {
        let defs = match columns {
            Columns::Names(names) => names
                .into_iter()
                .map(|name| ColumnDef { name, dtype: None })
                .collect(),
            Columns::Typed(pairs) => pairs
                .into_iter()
                .map(|(name, dtype)| ColumnDef {
                    name,
                    dtype: Some(dtype),
                })
                .collect(),
        };
        Self { defs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_normalize_without_dtypes() {
        let spec = ColumnSpec::from(Columns::names(["Brand", "Price"]));
        assert_eq!(spec.len(), 2);
        assert!(spec.defs().iter().all(|def| def.dtype.is_none()));
        assert_eq!(spec.defs()[0].name, "Brand");
        assert_eq!(spec.defs()[1].name, "Price");
    }

    #[test]
    fn test_typed_normalize_preserves_order_and_spelling() {
        let spec = ColumnSpec::from(Columns::typed([("Price", "Int64"), ("Brand", "string")]));
        assert_eq!(spec.defs()[0].name, "Price");
        assert_eq!(spec.defs()[0].dtype.as_deref(), Some("Int64"));
        assert_eq!(spec.defs()[1].name, "Brand");
        assert_eq!(spec.defs()[1].dtype.as_deref(), Some("string"));
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        let spec = ColumnSpec::from(Columns::names(["Brand"]));
        assert!(spec.contains("Brand"));
        assert!(!spec.contains("brand"));
    }

    #[test]
    fn test_from_json_array() {
        let spec = ColumnSpec::from_json(r#"["Brand", "Price"]"#).unwrap();
        assert_eq!(spec.len(), 2);
        assert!(spec.defs()[0].dtype.is_none());
    }

    #[test]
    fn test_from_json_object_keeps_document_order() {
        let spec = ColumnSpec::from_json(r#"{"Price": "int", "Brand": "string"}"#).unwrap();
        assert_eq!(spec.defs()[0].name, "Price");
        assert_eq!(spec.defs()[0].dtype.as_deref(), Some("int"));
        assert_eq!(spec.defs()[1].name, "Brand");
    }

    #[test]
    fn test_from_json_rejects_other_shapes() {
        assert!(ColumnSpec::from_json("42").is_err());
        assert!(ColumnSpec::from_json(r#"{"Brand": 1}"#).is_err());
    }

    #[test]
    fn test_columns_json_round_trip() {
        let names = Columns::names(["Brand", "Price"]);
        let raw = serde_json::to_string(&names).unwrap();
        assert_eq!(raw, r#"["Brand","Price"]"#);
        assert_eq!(serde_json::from_str::<Columns>(&raw).unwrap(), names);

        let typed = Columns::typed([("Brand", "string"), ("Price", "int")]);
        let raw = serde_json::to_string(&typed).unwrap();
        assert_eq!(raw, r#"{"Brand":"string","Price":"int"}"#);
        assert_eq!(serde_json::from_str::<Columns>(&raw).unwrap(), typed);
    }
}
