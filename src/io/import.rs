use anyhow::{Context, Result, bail};
use std::io::Read;
use tracing::{debug, warn};

use crate::application::{LedgerService, dispatch};
use crate::domain::TransactionRequest;

/// Result of a replay
#[derive(Debug, Clone, Default)]
pub struct ReplayResult {
    pub applied: usize,
    pub errors: Vec<ReplayError>,
}

/// An event that could not be parsed or applied
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayError {
    /// Line number for JSON lines input, 1-based position for a JSON array
    pub line: usize,
    pub error: String,
}

/// Options for replay operations
#[derive(Debug, Clone, Default)]
pub struct ReplayOptions {
    /// Record failing events and continue instead of aborting
    pub keep_going: bool,
}

/// Applies a stream of transaction events to a ledger through the dispatcher.
pub struct Replayer<'a> {
    ledger: &'a mut LedgerService,
}

impl<'a> Replayer<'a> {
    pub fn new(ledger: &'a mut LedgerService) -> Self {
        Self { ledger }
    }

    /// Replay events from either a JSON array or one JSON object per line.
    pub fn replay<R: Read>(&mut self, mut reader: R, options: &ReplayOptions) -> Result<ReplayResult> {
        let mut input = String::new();
        reader
            .read_to_string(&mut input)
            .context("Failed to read events")?;

        let events = parse_events(&input)?;
        let mut result = ReplayResult::default();

        for (line, event) in events {
            let outcome = match event {
                Ok(request) => dispatch(&mut *self.ledger, &request).map_err(|e| e.to_string()),
                Err(e) => Err(format!("Invalid event: {}", e)),
            };

            match outcome {
                Ok(_) => {
                    debug!(line, "event applied");
                    result.applied += 1;
                }
                Err(error) if options.keep_going => {
                    warn!(line, %error, "skipping event");
                    result.errors.push(ReplayError { line, error });
                }
                Err(error) => bail!("Event at line {} failed: {}", line, error),
            }
        }

        Ok(result)
    }
}

type ParsedEvent = (usize, Result<TransactionRequest, serde_json::Error>);

fn parse_events(input: &str) -> Result<Vec<ParsedEvent>> {
    if input.trim_start().starts_with('[') {
        let values: Vec<serde_json::Value> =
            serde_json::from_str(input).context("Invalid JSON array of events")?;
        return Ok(values
            .into_iter()
            .enumerate()
            .map(|(i, value)| (i + 1, serde_json::from_value(value)))
            .collect());
    }

    Ok(input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (i + 1, serde_json::from_str(line)))
        .collect())
}
