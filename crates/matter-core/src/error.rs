//! Error types for front matter parsing and stringifying.

use thiserror::Error;

/// Errors that can occur while decoding or encoding front matter.
///
/// Unparseable headers are NOT represented here: a header that fails generic
/// YAML/JSON decoding degrades to plain content instead of erroring. Only
/// failures inside this crate's own machinery surface as errors.
#[derive(Error, Debug)]
pub enum MatterError {
    /// A scalar looked like a timestamp but did not resolve as one
    /// (decoding path).
    #[error("invalid timestamp {text:?}: {message}")]
    Timestamp { text: String, message: String },

    /// The default timezone option is not a valid IANA identifier.
    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),

    /// The metadata mapping could not be emitted as YAML (encoding path).
    #[error("YAML emit error: {0}")]
    YamlEmit(#[from] serde_yaml::Error),

    /// The metadata mapping could not be emitted as JSON (encoding path).
    #[error("JSON emit error: {0}")]
    JsonEmit(#[from] serde_json::Error),
}

/// Convenience alias used throughout matter-core.
pub type Result<T> = std::result::Result<T, MatterError>;
