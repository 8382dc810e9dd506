//! Consecutive poll failure tracking with optional escalation

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureState {
    Healthy,
    Escalated,
}

/// What the loop should report after recording an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    Escalated { consecutive_failures: u32 },
    Recovered { after_failures: u32 },
}

/// A threshold of zero disables escalation entirely.
#[derive(Debug)]
pub struct FailureTracker {
    threshold: u32,
    consecutive_failures: u32,
    state: FailureState,
}

impl FailureTracker {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            consecutive_failures: 0,
            state: FailureState::Healthy,
        }
    }

    pub fn record_success(&mut self) -> Transition {
        let previous = std::mem::replace(&mut self.consecutive_failures, 0);
        match std::mem::replace(&mut self.state, FailureState::Healthy) {
            FailureState::Escalated => {
                debug!("Failure streak of {} ended", previous);
                Transition::Recovered { after_failures: previous }
            }
            FailureState::Healthy => Transition::None,
        }
    }

    pub fn record_failure(&mut self) -> Transition {
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);

        if self.threshold == 0 || self.state == FailureState::Escalated {
            return Transition::None;
        }

        if self.consecutive_failures >= self.threshold {
            self.state = FailureState::Escalated;
            debug!("Failure threshold {} reached", self.threshold);
            return Transition::Escalated {
                consecutive_failures: self.consecutive_failures,
            };
        }
        Transition::None
    }

    #[cfg(test)]
    pub fn state(&self) -> FailureState {
        self.state
    }

    #[cfg(test)]
    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }
}
