//! Metadata value types shared by the parser and stringifier.
//!
//! Header metadata decodes into an ordered mapping. The value type mirrors
//! JSON/YAML scalars but separates integers from floats and adds a
//! [`Value::Date`] variant for scalars resolved by the timestamp codec.
//! Mappings use `Vec<(String, Value)>` to maintain insertion order without
//! depending on `IndexMap`.

use chrono::{DateTime, Utc};

/// Reserved mapping key that carries the document body.
///
/// Every parse result contains this key, and [`crate::stringify`] extracts it
/// before encoding the remaining entries as the header.
pub const CONTENT_KEY: &str = "_content";

/// A decoded front matter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// An absolute instant resolved by the timestamp codec.
    Date(DateTime<Utc>),
    Array(Vec<Value>),
    /// Key-value pairs in insertion order.
    Object(Vec<(String, Value)>),
}

/// Ordered metadata mapping. Parse results always carry [`CONTENT_KEY`].
pub type Mapping = Vec<(String, Value)>;

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Date(instant) => Some(instant),
            _ => None,
        }
    }
}

/// Look up a key in an ordered mapping.
pub fn get<'a>(mapping: &'a [(String, Value)], key: &str) -> Option<&'a Value> {
    mapping.iter().find(|(k, _)| k == key).map(|(_, v)| v)
}
