//! Front matter stringifying — re-encodes a metadata mapping as a delimited
//! document.
//!
//! YAML mode partitions top-level entries three ways before encoding: plain
//! values go through the generic emitter, date values follow as wall-clock
//! lines, and null values close the header as bare `key:` lines. The generic
//! emitter would otherwise render dates in quoted ISO form and spell nulls
//! out as `null`, neither of which re-parses to the original value. The
//! partition order (plain, dates, nulls) is part of the round-trip contract.
//!
//! JSON mode emits the brace-less object dialect: pretty-printed JSON with
//! the outer braces and one indent level stripped.

use chrono::{DateTime, Utc};
use serde_json::Value as Json;
use serde_yaml::Value as Yaml;

use crate::error::Result;
use crate::timestamp::TimestampCodec;
use crate::types::{Mapping, Value, CONTENT_KEY};

/// Header encoding family. Parsing infers it from the delimiter character;
/// stringify selects it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Yaml,
    Json,
}

/// Options for [`stringify`].
#[derive(Debug, Clone, Default)]
pub struct StringifyOptions {
    pub mode: Mode,
    /// Emit the delimiter before the header as well (old style).
    pub prefix_separator: bool,
    /// Delimiter token; defaults to `---` for YAML and `;;;` for JSON.
    pub separator: Option<String>,
}

/// Re-encode a metadata mapping as a delimited document.
///
/// The reserved [`CONTENT_KEY`] entry becomes the body; the remaining entries
/// become the header. A mapping with no metadata keys returns the body
/// unchanged; no header is ever emitted for empty metadata. The mapping is
/// moved in and consumed.
///
/// # Errors
/// Returns an emit error if the generic YAML/JSON encoder rejects the
/// mapping; this does not happen for values produced by
/// [`parse`](crate::parse).
pub fn stringify(mapping: Mapping, options: &StringifyOptions) -> Result<String> {
    let mut content = String::new();
    let mut metadata = Mapping::with_capacity(mapping.len());
    for (key, value) in mapping {
        if key == CONTENT_KEY {
            if let Value::String(text) = value {
                content = text;
            }
        } else {
            metadata.push((key, value));
        }
    }

    if metadata.is_empty() {
        return Ok(content);
    }

    let separator = options.separator.as_deref().unwrap_or(match options.mode {
        Mode::Yaml => "---",
        Mode::Json => ";;;",
    });

    let mut result = String::new();
    if options.prefix_separator {
        result.push_str(separator);
        result.push('\n');
    }
    match options.mode {
        Mode::Yaml => result.push_str(&stringify_yaml(&metadata)?),
        Mode::Json => result.push_str(&stringify_json(&metadata)?),
    }
    result.push_str(separator);
    result.push('\n');
    result.push_str(&content);
    Ok(result)
}

/// Emit the YAML header: generic emitter output first, then date lines, then
/// null lines.
fn stringify_yaml(metadata: &[(String, Value)]) -> Result<String> {
    let codec = TimestampCodec::default();
    let mut plain = serde_yaml::Mapping::new();
    let mut dates: Vec<(&str, &DateTime<Utc>)> = Vec::new();
    let mut nulls: Vec<&str> = Vec::new();

    for (key, value) in metadata {
        match value {
            Value::Null => nulls.push(key.as_str()),
            Value::Date(instant) => dates.push((key.as_str(), instant)),
            other => {
                plain.insert(Yaml::String(key.clone()), to_yaml(other, &codec));
            }
        }
    }

    let mut out = String::new();
    if !plain.is_empty() {
        out.push_str(&serde_yaml::to_string(&plain)?);
    }
    for (key, instant) in dates {
        out.push_str(key);
        out.push_str(": ");
        out.push_str(&format_wall_clock(instant));
        out.push('\n');
    }
    for key in nulls {
        out.push_str(key);
        out.push_str(":\n");
    }
    Ok(out)
}

/// Format a date's stored UTC wall-clock fields, `YYYY-MM-DD HH:MM:SS`.
///
/// No zone conversion, no ISO `T`, no quoting: re-parsing reads the fields
/// back exactly as written.
fn format_wall_clock(instant: &DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Emit the JSON header dialect: a pretty-printed object with the outer
/// braces and one indent level stripped, leaving `"key": value` lines.
fn stringify_json(metadata: &[(String, Value)]) -> Result<String> {
    let mut map = serde_json::Map::with_capacity(metadata.len());
    for (key, value) in metadata {
        map.insert(key.clone(), to_json(value));
    }

    let pretty = serde_json::to_string_pretty(&Json::Object(map))?;
    let unindented = pretty.replace("\n  ", "\n");
    let body = unindented
        .strip_prefix("{\n")
        .and_then(|s| s.strip_suffix('}'))
        .unwrap_or(&unindented);
    Ok(body.to_string())
}

fn to_yaml(value: &Value, codec: &TimestampCodec) -> Yaml {
    match value {
        Value::Null => Yaml::Null,
        Value::Bool(b) => Yaml::Bool(*b),
        Value::Integer(i) => Yaml::Number((*i).into()),
        Value::Float(f) => Yaml::Number((*f).into()),
        Value::String(s) => Yaml::String(s.clone()),
        // Nested dates stay below the partition; render them canonically.
        Value::Date(instant) => Yaml::String(codec.render(instant)),
        Value::Array(items) => {
            Yaml::Sequence(items.iter().map(|item| to_yaml(item, codec)).collect())
        }
        Value::Object(entries) => Yaml::Mapping(
            entries
                .iter()
                .map(|(k, v)| (Yaml::String(k.clone()), to_yaml(v, codec)))
                .collect(),
        ),
    }
}

fn to_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Integer(i) => Json::Number((*i).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f).map_or(Json::Null, Json::Number),
        Value::String(s) => Json::String(s.clone()),
        // JSON mode renders dates the generic way: full ISO text.
        Value::Date(instant) => {
            Json::String(instant.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
        }
        Value::Array(items) => Json::Array(items.iter().map(to_json).collect()),
        Value::Object(entries) => Json::Object(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), to_json(v)))
                .collect(),
        ),
    }
}
