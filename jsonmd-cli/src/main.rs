// Command-line interface for jsonmd
//
// This binary converts JSON documents into Markdown: object keys become headings, scalars become
// paragraphs and arrays become bullet lists. The transcription itself lives in jsonmd-core; this
// crate opens the input, shows the result, saves it and reports status on stderr.
//
// Usage:
//  jsonmd <input.json> [-o <output>]            - Convert (default command)
//  jsonmd convert <input.json> [-o <output>]    - Same as above (explicit)
//  jsonmd print-config                          - Show the effective configuration as JSON
//
// Extra Parameters:
//
// Configuration keys can be overridden with --extra-<name> <value>. See src/overrides.rs.
// Example:
//  jsonmd data.json --extra-root wrap --extra-root-title Data

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use jsonmd_cli::convert::{convert, ConvertRequest};
use jsonmd_cli::overrides::{apply_config_overrides, parse_extra_args};
use jsonmd_cli::status::{StatusSink, StderrStatus};
use jsonmd_cli::CliError;
use jsonmd_config::{JsonmdConfig, Loader};
use log::debug;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

const LOCAL_CONFIG: &str = "jsonmd.toml";
const SUBCOMMANDS: &[&str] = &["convert", "print-config", "help"];

fn build_cli() -> Command {
    Command::new("jsonmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert JSON documents to Markdown")
        .long_about(
            "jsonmd turns a nested JSON document into Markdown.\n\n\
            Object keys become headings (one # per nesting level), scalar values\n\
            become paragraphs and arrays become bullet lists.\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration keys:\n  \
            root, root-title, display, default-extension.\n\n\
            Examples:\n  \
            jsonmd data.json                        # Print Markdown to stdout\n  \
            jsonmd data.json -o data.md             # Print and save\n  \
            jsonmd data.json -o notes --quiet       # Save to notes.md only\n  \
            jsonmd list.json --extra-root wrap      # Accept a top-level array",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a jsonmd.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log output (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a JSON file to Markdown (default command)")
                .long_about(
                    "Read a JSON file, print the Markdown rendering and optionally save it.\n\n\
                    The document root must be an object unless the root policy is 'wrap'.\n\
                    Output paths without an extension get the configured default (.md).\n\n\
                    Examples:\n  \
                    jsonmd convert data.json                # Print to stdout\n  \
                    jsonmd convert data.json -o out.md      # Print and save\n  \
                    jsonmd data.json -o out.md              # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input JSON file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Markdown file to write")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("quiet")
                        .long("quiet")
                        .short('q')
                        .help("Do not print the Markdown to stdout")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("print-config")
                .about("Print the effective configuration as JSON")
                .long_about(
                    "Print the configuration after layering the built-in defaults,\n\
                    ./jsonmd.toml, --config and --extra-* overrides.",
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => match with_default_command(&cleaned_args) {
            Some(new_args) => match cli.try_get_matches_from(&new_args) {
                Ok(m) => m,
                Err(e2) => e2.exit(),
            },
            None => e.exit(),
        },
    };

    init_logging(matches.get_count("verbose"));

    let mut status = StderrStatus;
    let config = match load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        &mut extra_params,
    ) {
        Ok(config) => config,
        Err(err) => {
            status.report(&format!("Error: {err}"));
            std::process::exit(1);
        }
    };

    match matches.subcommand() {
        Some(("convert", sub_matches)) => handle_convert_command(sub_matches, config, &mut status),
        Some(("print-config", _)) => handle_print_config_command(&config),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Insert `convert` before a bare file argument.
///
/// Leading global flags (`-v`, `--verbose`, `--config <path>`) are skipped, so
/// `jsonmd -v data.json` resolves like `jsonmd -v convert data.json`. Returns
/// `None` when the first positional is a subcommand or there is none.
fn with_default_command(args: &[String]) -> Option<Vec<String>> {
    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "--config" {
            i += 2;
        } else if arg.starts_with("--config=") || arg == "--verbose" || is_short_verbose(arg) {
            i += 1;
        } else {
            break;
        }
    }

    let first = args.get(i)?;
    if first.starts_with('-') || SUBCOMMANDS.contains(&first.as_str()) {
        return None;
    }

    let mut new_args = args[..i].to_vec();
    new_args.push("convert".to_string());
    new_args.extend_from_slice(&args[i..]);
    Some(new_args)
}

fn is_short_verbose(arg: &str) -> bool {
    arg.strip_prefix('-')
        .is_some_and(|flags| !flags.is_empty() && flags.chars().all(|c| c == 'v'))
}

fn init_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Handle the convert command
fn handle_convert_command(
    matches: &ArgMatches,
    mut config: JsonmdConfig,
    status: &mut StderrStatus,
) {
    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    if matches.get_flag("quiet") {
        config.output.display = false;
    }

    let request = ConvertRequest {
        input: PathBuf::from(input),
        output: matches.get_one::<String>("output").map(PathBuf::from),
    };
    debug!("convert request: {request:?}");

    let stdout = io::stdout();
    let mut display = stdout.lock();
    // Failures were already reported through the status sink
    if convert(&request, &config, &mut display, status).is_err() {
        std::process::exit(1);
    }
}

/// Handle the print-config command
fn handle_print_config_command(config: &JsonmdConfig) {
    match serde_json::to_string_pretty(config) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("Error: cannot serialize configuration: {err}");
            std::process::exit(1);
        }
    }
}

fn load_cli_config(
    explicit_path: Option<&str>,
    extra_params: &mut HashMap<String, String>,
) -> Result<JsonmdConfig, CliError> {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    let loader = match explicit_path {
        Some(path) => {
            debug!("loading configuration from {path}");
            loader.with_file(path)
        }
        None => loader,
    };

    let mut config = loader.build()?;
    apply_config_overrides(&mut config, extra_params)?;
    Ok(config)
}
