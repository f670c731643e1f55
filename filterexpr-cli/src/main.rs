//! Command-line interface for filterexpr
//! This binary parses a filter expression and prints its tree in one of the registered formats.
//!
//! Usage:
//!   filterexpr `<expression>` [--format `<format>`] [--config `<path>`] [--indent `<n>`] [--frame]
//!   filterexpr --list-formats                        - List all available output formats
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (e.g. `RUST_LOG=filterexpr=trace`).

mod transforms;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use filterexpr_config::{ExprConfig, Loader};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Optional per-directory configuration file
const LOCAL_CONFIG: &str = ".filterexpr.toml";

fn main() {
    init_tracing();

    let matches = Command::new("filterexpr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting filter expression parse trees")
        .arg_required_else_help(true)
        .arg(
            Arg::new("expression")
                .help("Expression to parse, e.g. '1+2-3'")
                .required_unless_present("list-formats")
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from configuration: tree)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .help("Spaces per nesting level in the tree format")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("frame")
                .long("frame")
                .help("Wrap tree output between --- lines")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    let registry = transforms::registry_for(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let expression = matches
        .get_one::<String>("expression")
        .expect("expression is required unless listing formats");
    let format = matches
        .get_one::<String>("format")
        .unwrap_or(&config.output.format);

    match transforms::execute_expression(expression, format, &registry) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(fmt::layer().without_time().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Defaults, then `.filterexpr.toml` if present, then `--config`, then `FILTEREXPR_*`
/// variables, then flags.
fn load_config(matches: &ArgMatches) -> Result<ExprConfig, String> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader = loader.with_env();
    if let Some(indent) = matches.get_one::<u32>("indent") {
        loader = loader
            .set_override("render.indent_width", i64::from(*indent))
            .map_err(|e| e.to_string())?;
    }
    if matches.get_flag("frame") {
        loader = loader
            .set_override("render.frame", true)
            .map_err(|e| e.to_string())?;
    }
    let config = loader.build().map_err(|e| e.to_string())?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn handle_list_formats_command(registry: &filterexpr::expr::formats::FormatRegistry) {
    println!("Available output formats:\n");

    for (name, description) in registry.describe() {
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}
