//! Error types for the command-line collaborators

use jsonmd_config::ConfigError;
use jsonmd_core::TranscribeError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Input file could not be read
    #[error("'{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input file is not valid JSON
    #[error("'{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: TranscribeError,
    },

    #[error(transparent)]
    Transcribe(#[from] TranscribeError),

    /// Markdown could not be written to the display stream
    #[error("cannot display markdown: {0}")]
    Display(#[source] io::Error),

    /// Output file could not be written
    #[error("'{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// An --extra-<key> value that cannot be applied
    #[error("invalid value '{value}' for --extra-{key}")]
    InvalidOverride { key: String, value: String },

    /// An --extra-<key> that nothing consumes
    #[error("unknown option --extra-{0}")]
    UnknownOverride(String),
}
