// Command-line interface for resumark
//
// This binary renders resume analysis report text (a small markdown
// dialect) into HTML, the same way the analysis web client displays and
// downloads it.
//
// The core capabilities come from the resumark-render crate; this crate is
// only the shell around it. All file reading and writing happens here so
// the library stays pure.
//
// Rendering:
//
// The render command reads a report file and writes HTML to stdout or a
// file. The output is selected by name ("fragment" or "document"); when no
// --to flag is given the configured default applies.
// Usage:
//  resumark <input> [--to <output>] [-o <file>]   - Render a report (default)
//  resumark render <input> [--to <output>]        - Same as above (explicit)
//  resumark export <input> [--name <n>] [--dir <d>] - Write <name>.html
//  resumark inspect <path> [<transform>]          - Execute a transform
//  resumark generate-css                          - Print the report stylesheet
//  resumark --list-transforms                     - List available transforms
//
// Extra Parameters:
//
// Transform- and config-level parameters can be passed using
// --extra-<parameter-name> <value>. The CLI layer strips the "extra-"
// prefix and passes the parameters along.
// Example:
//  resumark inspect report.md document --extra-name jane_cv

use resumark_cli::transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use resumark_config::{Loader, ResumarkConfig};
use resumark_render::{export_file_name, report_css, OutputRegistry, RenderOptions};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
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
            // Found an extra-* argument
            // Check if the next arg is a value or another flag/end
            let has_value = if i + 1 < args.len() {
                let next = &args[i + 1];
                !next.starts_with('-') && !next.starts_with("--")
            } else {
                false
            };

            if has_value {
                // Explicit value provided
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2; // Skip both the key and value
            } else {
                // No value, treat as boolean flag (default to "true")
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

fn build_cli() -> Command {
    Command::new("resumark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for rendering resume analysis reports to HTML")
        .long_about(
            "resumark renders the markdown-flavored report text produced by the\n\
            resume analysis backend into HTML.\n\n\
            Commands:\n  \
            - render: Convert a report to an HTML fragment or full document\n  \
            - export: Write the downloadable report page next to your files\n  \
            - inspect: View pipeline stage output (tagged lines, blocks, HTML)\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass transform or config options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            resumark report.md                      # Render fragment to stdout\n  \
            resumark report.md --to document        # Full report page to stdout\n  \
            resumark export report.md --name jane   # Write jane.html\n  \
            resumark inspect report.md blocks-json  # View merged block structure",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .long_about(
                    "Render report text into HTML.\n\n\
                    Outputs:\n  \
                    - fragment: bare HTML for embedding in a host page\n  \
                    - document: complete self-contained report page\n\n\
                    The default output comes from configuration (render.output).\n\
                    Output goes to stdout by default, or use -o to write a file.\n\n\
                    Examples:\n  \
                    resumark render report.md                    # Fragment to stdout\n  \
                    resumark render report.md --to document      # Full page to stdout\n  \
                    resumark render report.md -o out.html        # Write to file\n  \
                    resumark report.md --to document             # 'render' is optional",
                )
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
                        .help("Output to render with (defaults to the configured output)")
                        .long_help(
                            "Output to render with.\n\n\
                            Available outputs: fragment, document\n\
                            When omitted, the configured render.output applies.",
                        )
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .help("Display name for the document file badge (defaults to the input file stem)")
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
                .long_about(
                    "Render the full report page and write it under its download\n\
                    name, the way the web client's export button does.\n\n\
                    The file is named <display-name>.html, where the display name\n\
                    is --name or the input file's stem. With an empty input file\n\
                    nothing is written and the command exits successfully.\n\n\
                    Examples:\n  \
                    resumark export report.md                # Write report.html\n  \
                    resumark export report.md --name jane_cv # Write jane_cv.html\n  \
                    resumark export report.md --dir out      # Write into out/",
                )
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
                        .help("Display name for the badge and file name (defaults to the input file stem)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .help("Directory to write into (defaults to the configured export.output_dir)")
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect pipeline stage output for a report file")
                .long_about(
                    "View the renderer's intermediate results for a report.\n\n\
                    Transforms:\n  \
                    - lines-json:  classified lines as JSON\n  \
                    - blocks-json: merged block sequence as JSON (default)\n  \
                    - fragment:    the final HTML fragment\n  \
                    - document:    the complete report page\n\n\
                    Extra Parameters:\n  \
                    --extra-name <n>   Display name for the document transform\n\n\
                    Examples:\n  \
                    resumark inspect report.md                   # Block structure\n  \
                    resumark inspect report.md lines-json        # Per-line tags\n  \
                    resumark inspect report.md document --extra-name jane_cv",
                )
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
                        .long_help(
                            "Transform to apply.\n\n\
                            Available transforms:\n  \
                            lines-json, blocks-json, fragment, document.\n\n\
                            Use --list-transforms to see all options.",
                        )
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the CSS embedded in exported report pages")
                .long_about(
                    "Outputs the stylesheet embedded into exported report pages.\n\n\
                    Useful as a reference when a host page wants to match the\n\
                    exported look.\n\n\
                    Examples:\n  \
                    resumark generate-css                   # Print CSS to stdout\n  \
                    resumark generate-css > report.css      # Save to a file",
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "render"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // First, try normal parsing with cleaned args
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the
            // first arg looks like a report file
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "render"
                && cleaned_args[1] != "export"
                && cleaned_args[1] != "inspect"
                && cleaned_args[1] != "generate-css"
                && cleaned_args[1] != "help"
                && looks_like_input_file(&cleaned_args[1])
            {
                // Inject "render" as the subcommand
                let mut new_args = vec![cleaned_args[0].clone(), "render".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                // Try parsing again with "render" injected
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                // Not a case where we should inject render, show original error
                e.exit();
            }
        }
    };

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("render", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let name = sub_matches.get_one::<String>("name").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_render_command(input, to, name, output, &config);
        }
        Some(("export", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let name = sub_matches.get_one::<String>("name").map(|s| s.as_str());
            let dir = sub_matches.get_one::<String>("dir").map(|s| s.as_str());
            handle_export_command(input, name, dir, &config);
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or("blocks-json");
            handle_inspect_command(path, transform, &extra_params);
        }
        Some(("generate-css", _)) => {
            handle_generate_css_command();
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Whether an unrecognized first argument should trigger render injection
fn looks_like_input_file(arg: &str) -> bool {
    let path = Path::new(arg);
    if path.exists() {
        return true;
    }
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("md" | "markdown" | "txt")
    )
}

/// Display name for a report: explicit --name, else the input file's stem
fn display_name_for(input: &str, explicit: Option<&str>) -> Option<String> {
    if let Some(name) = explicit {
        return Some(name.to_string());
    }
    Path::new(input)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_string())
}

/// Handle the render command
fn handle_render_command(
    input: &str,
    to: Option<&str>,
    name: Option<&str>,
    output: Option<&str>,
    config: &ResumarkConfig,
) {
    let registry = OutputRegistry::default();
    let output_name = to.unwrap_or(&config.render.output);

    // Validate the output exists before touching the filesystem
    if let Err(e) = registry.get(output_name) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let mut options = RenderOptions::new();
    options.display_name = display_name_for(input, name);

    let html = registry
        .render(&source, output_name, &options)
        .unwrap_or_else(|e| {
            eprintln!("Render error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, html).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            print!("{html}");
        }
    }
}

/// Handle the export command
fn handle_export_command(
    input: &str,
    name: Option<&str>,
    dir: Option<&str>,
    config: &ResumarkConfig,
) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    // No report text means nothing to export; mirror the web client's
    // download button, which does nothing in that case.
    if source.is_empty() {
        return;
    }

    let registry = OutputRegistry::default();
    let display_name = display_name_for(input, name);

    let mut options = RenderOptions::new();
    options.display_name = display_name.clone();

    let html = registry
        .render(&source, "document", &options)
        .unwrap_or_else(|e| {
            eprintln!("Render error: {e}");
            std::process::exit(1);
        });

    let dir = dir.unwrap_or(&config.export.output_dir);
    let file_name = export_file_name(display_name.as_deref());
    let path = Path::new(dir).join(file_name);

    fs::write(&path, html).unwrap_or_else(|e| {
        eprintln!("Error writing file '{}': {e}", path.display());
        std::process::exit(1);
    });
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, transform: &str, extra_params: &HashMap<String, String>) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let output = transforms::execute_transform(&source, transform, extra_params).unwrap_or_else(
        |e| {
            eprintln!("Execution error: {e}");
            std::process::exit(1);
        },
    );

    print!("{output}");
}

/// Handle the generate-css command
fn handle_generate_css_command() {
    print!("{}", report_css());
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    println!("Stages:");
    println!("  lines-json  - Classified lines (one tag per source line)");
    println!("  blocks-json - Block sequence after emphasis and list merging");
    println!("  fragment    - Final newline-free HTML fragment");
    println!("  document    - Complete standalone report page\n");

    println!("Outputs:");
    let registry = OutputRegistry::default();
    for output_name in registry.list_outputs() {
        println!("  {output_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> ResumarkConfig {
    let loader = Loader::new().with_optional_file("resumark.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut ResumarkConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["output", "to"]) {
        config.render.output = raw;
    }
    if let Some(raw) = take_override(extra_params, &["output-dir", "dir"]) {
        config.export.output_dir = raw;
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
