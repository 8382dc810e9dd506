//! Operator-visible output for each poll cycle

use tracing::{error, info, warn};
use crate::{
    config::OutputFormat,
    errors::{TrackerError, Transition},
    types::{PairContext, PriceQuote, ReserveSnapshot},
    utils::{format_failure_line, format_snapshot_json, format_snapshot_line},
};

pub trait CycleReporter {
    fn snapshot(&mut self, pair: &PairContext, snapshot: &ReserveSnapshot, quote: &PriceQuote);

    fn failure(&mut self, error: &TrackerError);

    fn transition(&mut self, transition: Transition);
}

/// Writes cycle lines through `tracing`.
#[derive(Debug, Clone, Copy)]
pub struct TracingReporter {
    format: OutputFormat,
}

impl TracingReporter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl CycleReporter for TracingReporter {
    fn snapshot(&mut self, pair: &PairContext, snapshot: &ReserveSnapshot, quote: &PriceQuote) {
        match self.format {
            OutputFormat::Text => info!("{}", format_snapshot_line(pair, snapshot, quote)),
            OutputFormat::Json => match format_snapshot_json(pair, snapshot, quote) {
                Ok(line) => info!("{}", line),
                Err(e) => error!("{}", format_failure_line(&e)),
            },
        }
    }

    fn failure(&mut self, error: &TrackerError) {
        error!("{}", format_failure_line(error));
    }

    fn transition(&mut self, transition: Transition) {
        match transition {
            Transition::Escalated { consecutive_failures } => {
                error!("🚨 {} consecutive poll failures; still polling", consecutive_failures)
            }
            Transition::Recovered { after_failures } => {
                warn!("✅ Poll recovered after {} consecutive failures", after_failures)
            }
            Transition::None => {}
        }
    }
}
