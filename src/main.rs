mod boundary;
mod config;
mod engine;
mod models;
mod report;
mod responder;
mod types;

use std::io::stderr;
use std::path::{Path, PathBuf};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use tokio::task::spawn_blocking;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::boundary::Document;
use crate::config::LedgerConfig;
use crate::responder::{Incoming, Outgoing, Responder};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: kudir-ledger [statement].xlsx [output_dir:optional] [log_level:optional]");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = PathBuf::from(&args[1]);
    let output_dir = args.get(2).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    let log_level = args.get(3)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let file_name = path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let bytes = tokio::fs::read(&path).await?;

    let responder = Responder::new(LedgerConfig::default()).with_review(true);

    //NOTE: The ledger pipeline is synchronous, only reading and writing files happens on the runtime
    let timer = Instant::now();
    let reply = spawn_blocking(move || responder.handle(Incoming::Document { file_name, bytes })).await?;
    let duration = timer.elapsed();

    info!("Processed statement in: {duration:?}");

    match reply {
        Some(Outgoing::Report { document, caption, review }) => {
            tokio::fs::create_dir_all(&output_dir).await?;

            for document in std::iter::once(document).chain(review) {
                write_document(&output_dir, &document).await?;
            }

            println!("{caption}");
        }
        Some(Outgoing::Text(message)) => {
            eprintln!("{message}");
            exit(1);
        }
        None => exit(1)
    }

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
    //NOTE: stdout carries the report caption, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

async fn write_document(output_dir: &Path, document: &Document) -> Result<()> {
    let path = output_dir.join(&document.file_name);
    tokio::fs::write(&path, &document.bytes).await?;

    info!("Wrote {}", path.display());

    Ok(())
}
