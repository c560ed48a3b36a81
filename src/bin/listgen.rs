//! listgen CLI - render an eBay UK listing description from 1688 product data
//!
//! Reads a JSON payload from a file (or standard input) and writes the
//! description to standard output.

use clap::Parser;
use listgen::{ListingError, OutputFormat};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted when `--format` is not given
const FORMAT_ENV: &str = "LISTGEN_FORMAT";

/// Exit status for invalid invocations, matching clap's own usage errors
const USAGE_EXIT_CODE: i32 = 2;

#[derive(Parser)]
#[command(name = "listgen")]
#[command(version, about = "Generate an eBay UK product description from 1688 product data", long_about = None)]
struct Cli {
    /// Path to a JSON file exported from 1688 (reads standard input when omitted)
    input: Option<PathBuf>,

    /// Output format for the listing description [default: markdown]
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Log more detail to stderr (-v debug, -vv trace). RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let code = if e.is_usage_error() { USAGE_EXIT_CODE } else { 1 };
        process::exit(code);
    }
}

/// Log to stderr so stdout carries only the rendered document
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn run(cli: Cli) -> Result<(), ListingError> {
    let format = resolve_format(cli.format, std::env::var(FORMAT_ENV).ok())?;

    // An empty path argument means standard input
    let input = cli.input.filter(|path| !path.as_os_str().is_empty());

    tracing::info!(
        input = %input.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "<stdin>".to_string()),
        format = %format,
        "generating listing"
    );

    let payload = listgen::load(input.as_deref())?;
    let record = listgen::normalize(&payload);
    tracing::trace!(
        record = %serde_json::to_string(&record).unwrap_or_default(),
        "normalized record"
    );
    let output = listgen::render(&record, format);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output).map_err(ListingError::Output)?;
    stdout.flush().map_err(ListingError::Output)?;

    Ok(())
}

/// Determine output format with precedence: CLI > ENV > default
fn resolve_format(
    cli_override: Option<OutputFormat>,
    env_value: Option<String>,
) -> Result<OutputFormat, ListingError> {
    if let Some(format) = cli_override {
        return Ok(format);
    }

    if let Some(value) = env_value {
        let format = value.parse::<OutputFormat>()?;
        tracing::debug!(format = %format, "using output format from {}", FORMAT_ENV);
        return Ok(format);
    }

    Ok(OutputFormat::default())
}
