//! `--extra-<key> [value]` command-line overrides
//!
//! Extra parameters are pulled out of argv before clap sees it, then applied on
//! top of the loaded configuration. Supported keys:
//!
//! - `root`: `reject` or `wrap`
//! - `root-title`: heading used when wrapping a non-object root
//! - `display`: boolean, echo Markdown to stdout
//! - `default-extension`: extension appended to extensionless output paths
//!
//! Example: `jsonmd data.json -o out --extra-root wrap --extra-root-title Data`
//!
//! Values that begin with `-` need the `--extra-<key>=<value>` form.

use crate::error::CliError;
use jsonmd_config::{JsonmdConfig, RootMode};
use std::collections::HashMap;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>=<value>` (explicit value, may start with `-`)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
pub fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            if let Some((key, value)) = key.split_once('=') {
                extra_params.insert(key.to_string(), value.to_string());
                i += 1;
                continue;
            }

            let has_value = i + 1 < args.len() && !args[i + 1].starts_with('-');

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

/// Apply known extras to `config`, consuming them from the map.
///
/// Anything left over after the known keys are taken is rejected.
pub fn apply_config_overrides(
    config: &mut JsonmdConfig,
    extra_params: &mut HashMap<String, String>,
) -> Result<(), CliError> {
    if let Some(raw) = extra_params.remove("root") {
        config.transcribe.root = match raw.to_lowercase().as_str() {
            "reject" => RootMode::Reject,
            "wrap" => RootMode::Wrap,
            _ => return Err(invalid("root", &raw)),
        };
    }

    if let Some(raw) = take_override(extra_params, &["root-title", "title"]) {
        config.transcribe.root_title = raw;
    }

    if let Some(raw) = extra_params.remove("display") {
        config.output.display = parse_bool_arg("display", &raw)?;
    }

    if let Some(raw) = take_override(extra_params, &["default-extension", "extension"]) {
        config.output.default_extension = raw.trim_start_matches('.').to_string();
    }

    let mut leftover: Vec<_> = extra_params.keys().cloned().collect();
    leftover.sort();
    match leftover.into_iter().next() {
        Some(key) => Err(CliError::UnknownOverride(key)),
        None => Ok(()),
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> Result<bool, CliError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => Err(invalid(flag, raw)),
    }
}

fn invalid(key: &str, value: &str) -> CliError {
    CliError::InvalidOverride {
        key: key.to_string(),
        value: value.to_string(),
    }
}
