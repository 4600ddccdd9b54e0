//! Shared configuration loader for the jsonmd toolchain.
//!
//! `defaults/jsonmd.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`JsonmdConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use jsonmd_core::{RootPolicy, TranscribeOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/jsonmd.default.toml");

/// Heading used for wrapped roots when neither config nor caller names one.
pub const FALLBACK_ROOT_TITLE: &str = "root";

/// Top-level configuration consumed by jsonmd applications.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JsonmdConfig {
    pub transcribe: TranscribeConfig,
    pub output: OutputConfig,
}

/// Mirrors the knobs exposed by the transcriber.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranscribeConfig {
    pub root: RootMode,
    pub root_title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RootMode {
    Reject,
    Wrap,
}

impl TranscribeConfig {
    /// Build transcriber options, using `fallback_title` when no root title is configured.
    pub fn to_options(&self, fallback_title: &str) -> TranscribeOptions {
        let root = match self.root {
            RootMode::Reject => RootPolicy::Reject,
            RootMode::Wrap => {
                let title = if self.root_title.is_empty() {
                    fallback_title
                } else {
                    self.root_title.as_str()
                };
                RootPolicy::Wrap {
                    title: title.to_string(),
                }
            }
        };
        TranscribeOptions { root }
    }
}

impl From<&TranscribeConfig> for TranscribeOptions {
    fn from(config: &TranscribeConfig) -> Self {
        config.to_options(FALLBACK_ROOT_TITLE)
    }
}

impl From<TranscribeConfig> for TranscribeOptions {
    fn from(config: TranscribeConfig) -> Self {
        TranscribeOptions::from(&config)
    }
}

/// Where and how the generated Markdown is delivered.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub display: bool,
    pub default_extension: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<JsonmdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<JsonmdConfig, ConfigError> {
    Loader::new().build()
}
