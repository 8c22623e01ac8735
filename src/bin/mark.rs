//! Command-line interface for mark
//! Compiles mark documents to HTML and exposes the intermediate token and tree views.
//!
//! Usage:
//!   mark `<path>` [-o `<file>`] [-f `<format>`] [-p] [--base-indent `<n>`]  - Compile or inspect a file
//!   mark --list-formats                                                - List the output formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use mark::mark::config::Loader;
use mark::mark::error::{MarkError, Result};
use mark::mark::processor::{
    available_formats, compile_to_file, process_source, ProcessingSpec,
};
use std::fs;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Optional per-directory configuration picked up when present
const LOCAL_CONFIG: &str = "mark.toml";

fn cli() -> Command {
    Command::new("mark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile mark documents to HTML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the mark source file")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the result to this file instead of stdout"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (see --list-formats)")
                .default_value("html"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .short('p')
                .help("Pretty-print the HTML, one tag or text node per line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("base-indent")
                .long("base-indent")
                .help("Starting indentation level for pretty-printed HTML")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("legacy-href")
                .long("legacy-href")
                .help("Prefix link targets unless they contain both http:// and https://")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("debug-lexer")
                .long("debug-lexer")
                .help("Dump the token stream to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug-parser")
                .long("debug-parser")
                .help("Dump the document tree to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let matches = cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    if let Err(e) = handle_compile_command(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn handle_list_formats_command() {
    println!("Available formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}

fn load_config(matches: &ArgMatches) -> Result<mark::mark::config::MarkConfig> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("pretty") {
        loader = loader.set_override("render.pretty", true)?;
    }
    if let Some(indent) = matches.get_one::<u32>("base-indent") {
        loader = loader.set_override("render.base_indent", i64::from(*indent))?;
    }
    if matches.get_flag("legacy-href") {
        loader = loader.set_override("render.href_policy", "legacy")?;
    }
    if matches.get_flag("debug-lexer") {
        loader = loader.set_override("debug.tokens", true)?;
    }
    if matches.get_flag("debug-parser") {
        loader = loader.set_override("debug.ast", true)?;
    }
    Ok(loader.build()?)
}

fn handle_compile_command(matches: &ArgMatches) -> Result<()> {
    let path = matches.get_one::<String>("path").ok_or_else(|| {
        MarkError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "no input file given",
        ))
    })?;
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("html");

    let config = load_config(matches)?;
    let options = config.render_options();
    let spec = ProcessingSpec::from_string(format)?;
    debug!(?config, ?spec, "loaded configuration");

    let source = fs::read_to_string(path)?;

    if config.debug.tokens {
        let dump = ProcessingSpec::from_string("token-simple")?;
        eprint!("{}", process_source(&source, &dump, &options)?);
    }
    if config.debug.ast {
        let dump = ProcessingSpec::from_string("ast-treeviz")?;
        eprint!("{}", process_source(&source, &dump, &options)?);
    }

    match matches.get_one::<String>("output") {
        Some(output) if spec == ProcessingSpec::HTML => {
            compile_to_file(&source, output, &options)?;
        }
        Some(output) => {
            fs::write(output, process_source(&source, &spec, &options)?)?;
            info!(path = %output, "wrote output");
        }
        None => print!("{}", process_source(&source, &spec, &options)?),
    }
    Ok(())
}
