//! The convert pipeline: open → transcribe → display → save
//!
//! Each step reports its outcome through a [`StatusSink`]. Failures are
//! reported there first and then returned, so the caller only has to decide
//! on an exit code.

use crate::error::CliError;
use crate::status::StatusSink;
use jsonmd_config::{JsonmdConfig, FALLBACK_ROOT_TITLE};
use jsonmd_core::{JsonValue, MarkdownTranscriber};
use log::debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One conversion job.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub input: PathBuf,
    /// Where to save the Markdown. `None` only displays it.
    pub output: Option<PathBuf>,
}

/// What a successful conversion produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub markdown: String,
    /// Final path written, after the default extension was applied
    pub saved_to: Option<PathBuf>,
}

/// Read and decode a JSON document.
pub fn open_document(path: &Path) -> Result<JsonValue, CliError> {
    let source = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", source.len(), path.display());

    JsonValue::from_json_str(&source).map_err(|source| CliError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Append `default_extension` when `path` has none.
pub fn resolve_output_path(path: &Path, default_extension: &str) -> PathBuf {
    if path.extension().is_some() || default_extension.is_empty() {
        path.to_path_buf()
    } else {
        path.with_extension(default_extension)
    }
}

/// Write Markdown to `path`, returning the path actually written.
pub fn save_markdown(
    path: &Path,
    markdown: &str,
    default_extension: &str,
) -> Result<PathBuf, CliError> {
    let target = resolve_output_path(path, default_extension);
    fs::write(&target, markdown).map_err(|source| CliError::Write {
        path: target.clone(),
        source,
    })?;
    Ok(target)
}

/// Heading for a wrapped root: the input file stem, or a fixed fallback.
pub fn root_title_for(input: &Path) -> String {
    input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or(FALLBACK_ROOT_TITLE)
        .to_string()
}

/// Run the whole pipeline for one request.
pub fn convert(
    request: &ConvertRequest,
    config: &JsonmdConfig,
    display: &mut dyn Write,
    status: &mut dyn StatusSink,
) -> Result<Conversion, CliError> {
    let input = request.input.as_path();

    let value = open_document(input).map_err(|err| {
        status.report(&format!("Error reading file: {err}"));
        err
    })?;

    let options = config.transcribe.to_options(&root_title_for(input));
    let markdown = MarkdownTranscriber::new(options)
        .transcribe(&value)
        .map_err(|err| {
            status.report(&format!("Error processing JSON: {err}"));
            CliError::from(err)
        })?;

    if config.output.display {
        display
            .write_all(markdown.as_bytes())
            .and_then(|()| display.flush())
            .map_err(|err| {
                status.report(&format!("Error displaying Markdown: {err}"));
                CliError::Display(err)
            })?;
    }
    status.report(&format!(
        "Converted JSON from {} to Markdown.",
        input.display()
    ));

    let saved_to = match &request.output {
        Some(path) => {
            let written = save_markdown(path, &markdown, &config.output.default_extension)
                .map_err(|err| {
                    status.report(&format!("Error saving file: {err}"));
                    err
                })?;
            status.report(&format!("Markdown saved to {}", written.display()));
            Some(written)
        }
        None => None,
    };

    Ok(Conversion { markdown, saved_to })
}
