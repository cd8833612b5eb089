use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the transforms from src/transforms.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &["lines-json", "blocks-json", "fragment", "document"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    // Compact mirror of the command tree in src/main.rs, enough for
    // completion generation
    let mut cmd = Command::new("resumark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for rendering resume analysis reports to HTML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a resumark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Render a report file to HTML (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input report file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output to render with")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .help("Display name for the document file badge")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write the downloadable report page to disk")
                .arg(
                    Arg::new("input")
                        .help("Input report file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .help("Display name for the badge and file name")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .help("Directory to write into")
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect pipeline stage output for a report file")
                .arg(
                    Arg::new("path")
                        .help("Path to the report file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'blocks-json'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(Command::new("generate-css").about("Output the CSS embedded in exported report pages"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "resumark", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "resumark", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "resumark", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
