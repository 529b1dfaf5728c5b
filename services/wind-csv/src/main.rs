//! Wind field converter.
//!
//! Reads a GFS-style U/V wind component JSON document and writes one
//! delimited line per grid point: `U,V,la,lo`.

mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use config::{parse_separator, TransformConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
use wind_common::transform_wind_data_with;

#[derive(Parser, Debug)]
#[command(name = "wind-csv")]
#[command(about = "Convert U/V wind component JSON into lat/lon delimited text")]
struct Args {
    /// Input JSON file with U and V components
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output file (created or truncated)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Field separator; `\t` or `tab` for tab-delimited output
    #[arg(short, long, default_value = ",", value_parser = parse_separator)]
    sep: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

impl From<Args> for TransformConfig {
    fn from(args: Args) -> Self {
        TransformConfig::new(args.input, args.output, args.sep)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(parse_level(&args.log_level), args.json_logs)?;

    let config = TransformConfig::from(args);
    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        separator = ?config.options.separator,
        "Starting wind transform"
    );

    let summary = transform_wind_data_with(&config.input, &config.output, &config.options)?;

    info!(
        rows = summary.rows,
        u_len = summary.u_len,
        v_len = summary.v_len,
        "Wind transform complete"
    );

    Ok(())
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

// Logs go to stderr; stdout is left alone.
fn init_tracing(level: Level, json: bool) -> Result<()> {
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    Ok(())
}
