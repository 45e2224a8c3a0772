//! Front matter parsing — decodes a split document into a metadata mapping.
//!
//! The splitter decides which delimiter family matched; its leading character
//! selects the decode mode (`;` is JSON, anything else YAML). Both modes
//! degrade gracefully: a header that fails generic decoding, or decodes to
//! something other than a mapping, is demoted to plain content rather than
//! surfaced as an error. Timestamp resolution failures are the exception:
//! they happen inside our own scalar codec, after the generic decoder has
//! accepted the header, and are reported to the caller.

use serde_json::Value as Json;
use serde_yaml::Value as Yaml;

use crate::error::Result;
use crate::escape::escape;
use crate::split::split;
use crate::timestamp::TimestampCodec;
use crate::types::{Mapping, Value, CONTENT_KEY};

/// Options for [`parse`].
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// IANA timezone applied to header timestamps that carry no zone suffix.
    /// Timestamps with an explicit suffix ignore it; with no default at all,
    /// bare timestamps read as UTC.
    pub default_time_zone: Option<String>,
}

/// Parse a document into its metadata mapping.
///
/// The returned mapping always carries the body under [`CONTENT_KEY`]; a
/// document without a usable header yields only that entry, holding the
/// whole input.
///
/// # Errors
/// Returns [`MatterError::InvalidTimezone`](crate::MatterError::InvalidTimezone)
/// if `default_time_zone` is not a valid IANA identifier, and
/// [`MatterError::Timestamp`](crate::MatterError::Timestamp) if a header
/// scalar looks like a timestamp but does not resolve.
pub fn parse(text: &str, options: &ParseOptions) -> Result<Mapping> {
    let codec = TimestampCodec::new(options.default_time_zone.as_deref())?;
    let pieces = split(text);

    let (raw, separator) = match (pieces.data, pieces.separator) {
        (Some(raw), Some(separator)) => (raw, separator),
        _ => return Ok(content_only(text)),
    };

    let decoded = if separator.starts_with(';') {
        parse_json(raw)
    } else {
        parse_yaml(raw, &codec)?
    };

    match decoded {
        Some(mut mapping) => {
            mapping.push((CONTENT_KEY.to_string(), Value::String(pieces.content.to_string())));
            Ok(mapping)
        }
        None => Ok(content_only(text)),
    }
}

fn content_only(text: &str) -> Mapping {
    vec![(CONTENT_KEY.to_string(), Value::String(text.to_string()))]
}

/// Decode a JSON-mode header: a brace-less `"key": value` sequence, parsed by
/// wrapping it in an object literal. `None` demotes the header to content.
/// Timestamps are not resolved in JSON mode.
fn parse_json(raw: &str) -> Option<Mapping> {
    let wrapped = format!("{{{raw}}}");
    match serde_json::from_str::<Json>(&wrapped).ok()? {
        Json::Object(map) => Some(map.into_iter().map(|(k, v)| (k, from_json(v))).collect()),
        _ => None,
    }
}

fn from_json(value: Json) -> Value {
    match value {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(b),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else {
                Value::Float(n.as_f64().unwrap_or(0.0))
            }
        }
        Json::String(s) => Value::String(s),
        Json::Array(items) => Value::Array(items.into_iter().map(from_json).collect()),
        Json::Object(map) => {
            Value::Object(map.into_iter().map(|(k, v)| (k, from_json(v))).collect())
        }
    }
}

/// Decode a YAML-mode header. Generic YAML failures (syntax error,
/// non-mapping result, composite keys) demote the header; timestamp codec
/// failures do not.
fn parse_yaml(raw: &str, codec: &TimestampCodec) -> Result<Option<Mapping>> {
    let value: Yaml = match serde_yaml::from_str(&escape(raw)) {
        Ok(value) => value,
        Err(_) => return Ok(None),
    };
    match value {
        Yaml::Mapping(map) => from_yaml_mapping(map, codec),
        _ => Ok(None),
    }
}

fn from_yaml_mapping(
    map: serde_yaml::Mapping,
    codec: &TimestampCodec,
) -> Result<Option<Mapping>> {
    let mut entries = Mapping::with_capacity(map.len());
    for (key, value) in map {
        let Some(key) = scalar_key(&key) else {
            return Ok(None);
        };
        match from_yaml(value, codec)? {
            Some(value) => entries.push((key, value)),
            None => return Ok(None),
        }
    }
    Ok(Some(entries))
}

/// Front matter keys are scalars; a composite key means the header is not
/// usable metadata.
fn scalar_key(key: &Yaml) -> Option<String> {
    match key {
        Yaml::String(s) => Some(s.clone()),
        Yaml::Number(n) => Some(n.to_string()),
        Yaml::Bool(b) => Some(b.to_string()),
        Yaml::Null => Some("null".to_string()),
        _ => None,
    }
}

/// Convert a decoded YAML value, resolving timestamp-shaped strings at any
/// depth. `Ok(None)` means the value cannot appear in metadata.
fn from_yaml(value: Yaml, codec: &TimestampCodec) -> Result<Option<Value>> {
    Ok(Some(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else {
                Value::Float(n.as_f64().unwrap_or(0.0))
            }
        }
        Yaml::String(s) => {
            if codec.identify(&s) {
                Value::Date(codec.resolve(&s)?)
            } else {
                Value::String(s)
            }
        }
        Yaml::Sequence(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match from_yaml(item, codec)? {
                    Some(value) => out.push(value),
                    None => return Ok(None),
                }
            }
            Value::Array(out)
        }
        Yaml::Mapping(map) => match from_yaml_mapping(map, codec)? {
            Some(entries) => Value::Object(entries),
            None => return Ok(None),
        },
        Yaml::Tagged(tagged) => return from_yaml(tagged.value, codec),
    }))
}
