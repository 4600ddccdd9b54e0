//! JSON to Markdown transcription
//!
//! Depth-first walk over object entries. Every key becomes an ATX heading whose
//! level is the nesting depth of its enclosing object chain (1 at the root).
//! What follows the heading depends on the value:
//!
//! | Value  | Output after the heading                                     |
//! |--------|--------------------------------------------------------------|
//! | Object | its own entries, one level deeper                            |
//! | Array  | one `- item` line per element, then a blank line             |
//! | Scalar | the scalar text, then a blank line                           |
//!
//! Array elements are never expanded into headings. A nested object or array
//! inside an array is written as compact JSON on its bullet line.
//!
//! Keys and strings are copied verbatim. No Markdown escaping happens here.

use crate::error::TranscribeError;
use crate::options::{RootPolicy, TranscribeOptions};
use crate::value::{JsonValue, Map};
use log::{debug, trace};

/// Turns [`JsonValue`] trees into Markdown text.
///
/// Holds only immutable options, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct MarkdownTranscriber {
    options: TranscribeOptions,
}

impl MarkdownTranscriber {
    pub fn new(options: TranscribeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TranscribeOptions {
        &self.options
    }

    /// Transcribe a document of any shape.
    ///
    /// Objects always succeed. Arrays and scalars at the root are handled
    /// according to [`RootPolicy`].
    pub fn transcribe(&self, value: &JsonValue) -> Result<String, TranscribeError> {
        match value {
            JsonValue::Object(map) => Ok(self.transcribe_object(map)),
            other => match &self.options.root {
                RootPolicy::Reject => Err(TranscribeError::NonObjectRoot { kind: other.kind() }),
                RootPolicy::Wrap { title } => {
                    debug!("wrapping top-level {} under heading '{title}'", other.kind());
                    let mut out = String::new();
                    write_entry(title, other, 1, &mut out);
                    Ok(out)
                }
            },
        }
    }

    /// Transcribe an object root. Never fails.
    pub fn transcribe_object(&self, map: &Map) -> String {
        debug!("transcribing object with {} top-level keys", map.len());
        let mut out = String::with_capacity(256);
        write_object(map, 1, &mut out);
        debug!("produced {} bytes of markdown", out.len());
        out
    }
}

fn write_object(map: &Map, depth: usize, out: &mut String) {
    for (key, value) in map {
        write_entry(key, value, depth, out);
    }
}

fn write_entry(key: &str, value: &JsonValue, depth: usize, out: &mut String) {
    trace!("heading level {depth}: {key} ({})", value.kind());

    for _ in 0..depth {
        out.push('#');
    }
    out.push(' ');
    out.push_str(key);
    out.push_str("\n\n");

    match value {
        JsonValue::Object(inner) => write_object(inner, depth + 1, out),
        JsonValue::Array(items) => {
            for item in items {
                out.push_str("- ");
                out.push_str(&item.to_text());
                out.push('\n');
            }
            out.push('\n');
        }
        JsonValue::Scalar(scalar) => {
            out.push_str(&scalar.to_string());
            out.push_str("\n\n");
        }
    }
}
