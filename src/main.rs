mod catalog;
mod generator;
mod models;

use std::fs::File;
use std::io::{stderr, BufWriter, Write};
use std::time::Instant;

use anyhow::Result;
use chrono::Utc;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::generator::{SalesGenerator, RANDOM_SEED};
use crate::models::Transaction;

const DEFAULT_OUTPUT_PATH: &str = "feeds_comprehensive.json";

fn main() -> Result<()> {
    //NOTE: Two optional positional arguments do not warrant pulling in the clap crate;
    //      everything else about the dataset is an embedded constant.
    let args: Vec<String> = std::env::args().collect();

    let path = args.get(1).cloned().unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let timer = Instant::now();
    let mut generator = SalesGenerator::new(RANDOM_SEED, Utc::now());
    let transactions = generator.generate()?;
    let duration = timer.elapsed();

    info!("Generated transactions in: {duration:?}");

    write_transactions(&path, &transactions)?;

    println!("Generated {} transactions for {} customers", transactions.len(), catalog::CUSTOMER_NAMES.len());
    println!("File saved as {path}");

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The generated document goes to a file and the summary to stdout, so logging
    //      is kept on stderr.
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_transactions(path: &str, transactions: &[Transaction]) -> Result<()> {
    let mut output = BufWriter::new(File::create(path)?);

    serde_json::to_writer_pretty(&mut output, transactions)?;
    output.flush()?;

    Ok(())
}
