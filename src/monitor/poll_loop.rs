//! The sequential reserve polling loop

use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};
use crate::{
    errors::{FailureTracker, TrackerResult},
    monitor::{CycleReporter, ShutdownSignal},
    network::ChainClient,
    pools::sample_reserves,
    types::{PairContext, PriceQuote, ReserveSnapshot},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

#[derive(Debug, Clone)]
pub struct SessionStats {
    pub cycles: u64,
    pub successes: u64,
    pub failures: u64,
    pub started_at: Instant,
}

impl SessionStats {
    fn new() -> Self {
        Self {
            cycles: 0,
            successes: 0,
            failures: 0,
            started_at: Instant::now(),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Samples the pair every `interval` until shutdown. Cycles never overlap:
/// the wait starts only after a sample completes.
pub struct PollLoop<'a, C, R> {
    client: &'a C,
    pair: &'a PairContext,
    interval: Duration,
    reporter: R,
    failures: FailureTracker,
    stats: SessionStats,
    state: LoopState,
}

impl<'a, C, R> PollLoop<'a, C, R>
where
    C: ChainClient,
    R: CycleReporter,
{
    pub fn new(
        client: &'a C,
        pair: &'a PairContext,
        interval: Duration,
        max_consecutive_failures: u32,
        reporter: R,
    ) -> Self {
        Self {
            client,
            pair,
            interval,
            reporter,
            failures: FailureTracker::new(max_consecutive_failures),
            stats: SessionStats::new(),
            state: LoopState::Running,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[cfg(test)]
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Runs until `shutdown` fires, whether mid-request or mid-wait.
    pub async fn run(&mut self, shutdown: &mut ShutdownSignal) -> SessionStats {
        info!("🚀 Polling every {:?}", self.interval);
        let client = self.client;
        let pair = self.pair;

        while self.state == LoopState::Running {
            if shutdown.is_triggered() {
                break;
            }

            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                outcome = sample_reserves(client, pair) => self.record(outcome),
            }

            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        self.state = LoopState::Stopped;
        debug!("Poll loop stopped after {} cycles", self.stats.cycles);
        self.stats.clone()
    }

    fn record(&mut self, outcome: TrackerResult<(ReserveSnapshot, PriceQuote)>) {
        self.stats.cycles += 1;
        let transition = match outcome {
            Ok((snapshot, quote)) => {
                self.stats.successes += 1;
                self.reporter.snapshot(self.pair, &snapshot, &quote);
                self.failures.record_success()
            }
            Err(e) => {
                self.stats.failures += 1;
                self.reporter.failure(&e);
                self.failures.record_failure()
            }
        };
        self.reporter.transition(transition);
    }
}
