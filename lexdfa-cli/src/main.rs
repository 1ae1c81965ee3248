//! Lexdfa CLI - Command line interface
//!
//! Reads a source file (or stdin), runs the lexical analyzer and prints
//! the report, a token listing or JSON. Logs go to stderr.

use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

mod config;
mod logging;
mod platform;

use crate::config::{parse_log_level, LogConfig};
use crate::logging::LogFormat;
use crate::platform::{print_error, print_lexical_error_with_source, print_numbered_source};
use lexdfa::{
    analyze_source, load_config, stepper, AnalysisResult, LexdfaConfig, LexdfaError, LogLevel,
    OutputFormat, Summary,
};
use serde_json::json;
use tracing::{debug, info};

const DEFAULT_CONFIG: &str = "lexdfa.json";

#[derive(Parser)]
#[command(
    name = "lexdfa",
    about = "Table-driven DFA lexical analyzer",
    version = "0.1.0"
)]
struct Cli {
    /// Source file to analyze ("-" reads stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    input: PathBuf,

    /// Configuration file path (default: ./lexdfa.json when present)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output format: report, tokens or json (overrides the config file)
    #[arg(short, long, value_parser = parse_output_format)]
    format: Option<OutputFormat>,

    /// Print every automaton step instead of the analysis
    #[arg(long)]
    step: bool,

    /// Print the transition table and exit
    #[arg(long)]
    table: bool,

    /// Print the numbered source before the output
    #[arg(long)]
    show_source: bool,

    /// Log level for every phase: silent, error, warn, info, debug, trace
    #[arg(long, value_parser = parse_level_arg)]
    log_level: Option<LogLevel>,

    /// Log output format
    #[arg(long, value_enum, default_value = "compact")]
    log_format: LogFormat,

    /// Also append logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if cli.table {
        print!("{}", lexdfa_core::automaton::render_table());
        return;
    }

    let config = match resolve_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            print_error(&e);
            process::exit(1);
        }
    };

    let log_config = LogConfig::from_logging(&config.logging, cli.log_level);
    if let Err(e) = logging::init_with_file(&log_config, cli.log_format, cli.log_file.as_deref()) {
        eprintln!("Error: cannot initialize logging: {}", e);
        process::exit(1);
    }

    let source = match read_input(&cli.input) {
        Ok(s) => s,
        Err(e) => {
            print_error(&e);
            process::exit(1);
        }
    };

    if cli.show_source || config.output.show_source {
        print_numbered_source(&source);
    }

    if cli.step {
        run_stepper(&source);
        return;
    }

    let format = cli.format.unwrap_or(config.output.format);
    let result = analyze_source(&source, &config);
    info!(
        target: "lexdfa::cli",
        tokens = result.tokens.len(),
        errors = result.errors.len(),
        "analysis finished"
    );

    if let Err(e) = print_result(&result, format) {
        eprintln!("Error: cannot write output: {}", e);
        process::exit(1);
    }

    if result.has_errors() {
        for error in &result.errors {
            print_lexical_error_with_source(error, &source);
        }
        process::exit(1);
    }
}

/// Explicit `--config` must exist; the default file is optional
fn resolve_config(explicit: Option<&Path>) -> Result<LexdfaConfig, LexdfaError> {
    match explicit {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG).exists() => load_config(DEFAULT_CONFIG),
        None => Ok(LexdfaConfig::default()),
    }
}

fn read_input(input: &Path) -> Result<String, LexdfaError> {
    if input == Path::new("-") {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .map_err(|source_err| LexdfaError::Io {
                path: input.to_path_buf(),
                source: source_err,
            })?;
        return Ok(source);
    }
    debug!(target: "lexdfa::cli", path = %input.display(), "reading source");
    lexdfa::api::read_text(input)
}

fn print_result(result: &AnalysisResult, format: OutputFormat) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Report => print!("{}", lexdfa::render_report(result)),
        OutputFormat::Tokens => {
            for token in result.recognized() {
                println!("{}", token.to_report_line());
            }
        }
        OutputFormat::Json => {
            let frequency: Vec<serde_json::Value> = result
                .frequency
                .iter()
                .map(|((lexeme, kind), count)| {
                    json!({ "lexeme": lexeme, "kind": kind, "count": count })
                })
                .collect();
            let output = json!({
                "tokens": result.tokens,
                "errors": result.errors,
                "summary": Summary::of(result),
                "frequency": frequency,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn run_stepper(source: &str) {
    let mut stepper = stepper(source);
    println!("[Automaton Steps]");
    while let Some(step) = stepper.step_forward() {
        println!("{:>4} {}:{}  {}", step.index, step.row, step.column, step);
    }
    println!();
    println!("[Stepper Log]");
    for line in stepper.log() {
        println!("{}", line);
    }
}

fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    match s.to_lowercase().as_str() {
        "report" => Ok(OutputFormat::Report),
        "tokens" => Ok(OutputFormat::Tokens),
        "json" => Ok(OutputFormat::Json),
        other => Err(format!("unknown format '{}' (report, tokens, json)", other)),
    }
}

fn parse_level_arg(s: &str) -> Result<LogLevel, String> {
    parse_log_level(s).ok_or_else(|| format!("unknown log level '{}'", s))
}
