use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{Level, info};

use crate::application::LedgerService;
use crate::http;
use crate::io::{Exporter, ReplayOptions, Replayer};

/// Tillbook - in-memory account ledger
#[derive(Parser)]
#[command(name = "tillbook")]
#[command(about = "A small in-memory account ledger served over HTTP")]
#[command(version)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the ledger over HTTP
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
    },

    /// Apply a file of transaction events to an empty ledger and print the balances
    Replay {
        /// Input file: a JSON array or one JSON event per line (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Format: csv, json
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Report failing events instead of stopping at the first one
        #[arg(long)]
        keep_going: bool,
    },
}

impl Cli {
    /// Install the global log subscriber. Logs go to stderr so that replay
    /// output on stdout stays clean.
    pub fn init_tracing(&self) {
        let level = if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        };
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .init();
    }

    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { host, port } => {
                let addr = format!("{}:{}", host, port);
                let ledger = http::shared(LedgerService::default());
                http::serve(&addr, ledger).await?;
            }

            Commands::Replay {
                input,
                output,
                format,
                keep_going,
            } => {
                run_replay_command(
                    input.as_deref(),
                    output.as_deref(),
                    &format,
                    ReplayOptions { keep_going },
                )?;
            }
        }

        Ok(())
    }
}

fn run_replay_command(
    input: Option<&str>,
    output: Option<&str>,
    format: &str,
    options: ReplayOptions,
) -> Result<()> {
    if !matches!(format, "csv" | "json") {
        bail!("Unknown format '{}'. Use: csv, json", format);
    }

    let reader: Box<dyn Read> = match input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let mut ledger = LedgerService::default();
    let result = Replayer::new(&mut ledger).replay(reader, &options)?;
    info!(
        applied = result.applied,
        failed = result.errors.len(),
        accounts = ledger.account_count(),
        "replay finished"
    );

    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let exporter = Exporter::new(&ledger);
    if format == "json" {
        exporter.export_snapshot_json(writer)?;
    } else {
        exporter.export_balances_csv(writer)?;
    }

    if !result.errors.is_empty() {
        eprintln!("\nFailed events:");
        for err in result.errors.iter().take(10) {
            eprintln!("  Line {}: {}", err.line, err.error);
        }
        if result.errors.len() > 10 {
            eprintln!("  ... and {} more errors", result.errors.len() - 10);
        }
    }

    Ok(())
}
