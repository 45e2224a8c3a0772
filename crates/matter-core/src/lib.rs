//! # matter-core
//!
//! Splitter, parser and stringifier for **front matter** — the delimited
//! metadata header at the top of text documents such as blog posts.
//!
//! Two delimiter families are recognized: `-` lines carry YAML headers, `;`
//! lines carry a brace-less JSON dialect. Both the old style (delimiter
//! before and after the header) and the new style (delimiter after only) are
//! supported, and the original document can be reconstructed from the parsed
//! mapping, including null- and date-valued fields that generic emitters do
//! not round-trip.
//!
//! ## Quick start
//!
//! ```rust
//! use matter_core::{parse, stringify, ParseOptions, StringifyOptions, Value, CONTENT_KEY};
//!
//! let doc = "---\ntitle: Hello\n---\nBody text";
//! let data = parse(doc, &ParseOptions::default()).unwrap();
//! assert_eq!(data[0], ("title".into(), Value::String("Hello".into())));
//! assert_eq!(data[1].0, CONTENT_KEY);
//!
//! // parse and stringify invert each other
//! let out = stringify(data, &StringifyOptions { prefix_separator: true, ..Default::default() }).unwrap();
//! assert_eq!(out, doc);
//! ```
//!
//! ## Modules
//!
//! - [`split`] — delimiter detection: header text vs body text
//! - [`decoder`] — document → metadata mapping (`parse`)
//! - [`encoder`] — metadata mapping → document (`stringify`)
//! - [`escape`] — tab-indentation escaping for YAML headers
//! - [`timestamp`] — timestamp scalar codec with timezone resolution
//! - [`types`] — the ordered `Value`/`Mapping` model
//! - [`error`] — error types

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod escape;
pub mod split;
pub mod timestamp;
pub mod types;

pub use decoder::{parse, ParseOptions};
pub use encoder::{stringify, Mode, StringifyOptions};
pub use error::{MatterError, Result};
pub use escape::escape;
pub use split::{split, SplitResult};
pub use timestamp::TimestampCodec;
pub use types::{Mapping, Value, CONTENT_KEY};
