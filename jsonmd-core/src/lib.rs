//! JSON to Markdown transcription
//!
//!     This crate turns a nested JSON document into Markdown: object keys become headings,
//!     scalars become paragraphs and arrays become bullet lists.
//!
//!     This is a pure lib, that is, it powers jsonmd-cli but is shell agnostic. No code here
//!     should suppose a shell environment, be it std print, env vars, files or dialogs. Callers
//!     hand in an already parsed value and receive a string back.
//!
//!     The file structure:
//!     .
//!     ├── error.rs          # TranscribeError
//!     ├── options.rs        # TranscribeOptions, RootPolicy
//!     ├── transcribe.rs     # MarkdownTranscriber, the recursive walk
//!     ├── value.rs          # JsonValue, the closed object/array/scalar model
//!     └── lib.rs
//!
//! Core Algorithm
//!
//!     Depth-first over object entries, heading depth starting at 1 and growing by one per
//!     nested object. See ./transcribe.rs for the full table of what each value kind emits.
//!
//!     Arrays are deliberately shallow: their elements are written in their natural string
//!     form, nested containers included. Only object values recurse into headings.
//!
//! Testing
//!     tests
//!     └── markdown
//!         ├── export.rs       # whole documents, checked against comrak's parse
//!         └── properties.rs   # proptest properties over generated documents
//!
//!     Note that rust does not by default discover tests in subdirectories, so these are
//!     included from tests/lib.rs.

pub mod error;
pub mod options;
pub mod transcribe;
pub mod value;

pub use error::TranscribeError;
pub use options::{RootPolicy, TranscribeOptions};
pub use transcribe::MarkdownTranscriber;
pub use value::{JsonValue, Map, Scalar, ValueKind};

/// Transcribes a value with default options.
///
/// Object roots always succeed; any other root is rejected with
/// [`TranscribeError::NonObjectRoot`].
pub fn transcribe(value: &JsonValue) -> Result<String, TranscribeError> {
    MarkdownTranscriber::default().transcribe(value)
}

/// Parses JSON text and transcribes it with the given options.
pub fn transcribe_str(source: &str, options: TranscribeOptions) -> Result<String, TranscribeError> {
    let value = JsonValue::from_json_str(source)?;
    MarkdownTranscriber::new(options).transcribe(&value)
}
