use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use firgolden::config::{FilterConfig, FirConfig, TapList};
use firgolden::output::{OutputFormat, create_formatter};
use firgolden::run_filters;

#[derive(Parser, Debug)]
#[command(name = "firgolden")]
#[command(about = "Apply direct-form FIR filters to a test signal", long_about = None)]
struct Args {
    /// TOML configuration file (input signal and filters)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Apply a single filter with these coefficients (e.g., "0.25,-0.25,-0.25,0.25")
    #[arg(short, long, allow_hyphen_values = true)]
    taps: Option<TapList>,

    /// Output format: text, csv, json
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Number of output samples to show per filter
    #[arg(short = 'n', long)]
    samples: Option<usize>,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .init();

    let mut config = match &args.config {
        Some(path) => FirConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FirConfig::default(),
    };

    if let Some(taps) = args.taps {
        log::info!("Using command-line coefficients: {}", taps);
        config.filters = vec![FilterConfig::new("CUSTOM FILTER", taps.into_inner())];
    }

    let limit = args.samples.unwrap_or(config.display_samples);
    let runs = run_filters(&config).context("Filtering failed")?;

    let formatter = create_formatter(args.format);
    if let Some(header) = formatter.header() {
        println!("{}", header);
    }
    for run in &runs {
        println!("{}", formatter.format(run, limit));
    }

    Ok(())
}
