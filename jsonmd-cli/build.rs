use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree in src/main.rs
// Build scripts can't access src/ modules, so the shape is duplicated here
fn completion_cli() -> Command {
    let input = Arg::new("input")
        .help("Input JSON file")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath);

    Command::new("jsonmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert JSON documents to Markdown")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a JSON file to Markdown (default command)")
                .arg(input)
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("quiet")
                        .long("quiet")
                        .short('q')
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("print-config").about("Print the effective configuration as JSON"))
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = completion_cli();

    generate_to(Bash, &mut cmd, "jsonmd", &outdir)?;
    generate_to(Zsh, &mut cmd, "jsonmd", &outdir)?;
    generate_to(Fish, &mut cmd, "jsonmd", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
