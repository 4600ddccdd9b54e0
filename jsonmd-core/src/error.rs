//! Error types for transcription

use crate::value::ValueKind;
use thiserror::Error;

/// Errors that can occur while turning input into Markdown
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranscribeError {
    /// The document root is not an object and the root policy rejects it
    #[error("expected a JSON object at the document root, found {kind}")]
    NonObjectRoot { kind: ValueKind },
    /// A Rust value that has no JSON representation
    #[error("unsupported value of type {type_name}: {message}")]
    UnsupportedValue { type_name: String, message: String },
    /// Invalid JSON text
    #[error("parse error: {0}")]
    Parse(String),
}
