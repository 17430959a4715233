//! Run configuration.
//!
//! Warm-up and sample budgets are part of the public contract rather than an
//! accident of the host runtime: callers can tighten or loosen them, and the
//! runner validates them before any tier executes.

use std::time::Duration;
use thiserror::Error;

/// Configuration errors. All of these are fatal; the run does not start.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No size tiers configured.
    #[error("no size tiers configured")]
    NoTiers,

    /// No codecs registered.
    #[error("no codecs registered")]
    NoCodecs,

    /// A timing budget value is out of range.
    #[error("invalid timing budget: {0}")]
    InvalidBudget(&'static str),
}

/// Sample budget for one measured operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingBudget {
    /// Minimum cumulative measured time before stopping.
    pub min_duration: Duration,
    /// Minimum number of measured samples before stopping.
    pub min_iterations: usize,
    /// Hard ceiling on measured samples, bounding very fast operations.
    pub max_iterations: usize,
    /// Warm-up iteration cap (excluded from statistics).
    pub warmup_iterations: usize,
    /// Warm-up time cap; warm-up stops at whichever cap is hit first.
    pub warmup_duration: Duration,
}

impl Default for TimingBudget {
    fn default() -> Self {
        Self {
            min_duration: Duration::from_millis(500),
            min_iterations: 32,
            max_iterations: 1_000_000,
            warmup_iterations: 16,
            warmup_duration: Duration::from_millis(100),
        }
    }
}

/// Whether a codec disabled by verification stays disabled for the whole run.
///
/// Verification failures are usually structural (a format that cannot
/// represent the workload), not size-dependent, so the default is to disable
/// for the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LivenessPolicy {
    /// Once a codec fails verification it is skipped at every later tier.
    #[default]
    PerRun,
    /// Re-verify previously failed codecs at each tier.
    PerTier,
}

/// Full configuration for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Workload size tiers, in the order they will execute.
    pub tiers: Vec<usize>,
    /// Timing budget applied to every measured operation.
    pub budget: TimingBudget,
    /// Liveness policy across tiers.
    pub liveness: LivenessPolicy,
}

impl RunConfig {
    /// Configuration with the given tiers and default budget/policy.
    #[must_use]
    pub fn new(tiers: Vec<usize>) -> Self {
        Self {
            tiers,
            budget: TimingBudget::default(),
            liveness: LivenessPolicy::default(),
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if there are no tiers or the budget values
    /// are inconsistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tiers.is_empty() {
            return Err(ConfigError::NoTiers);
        }
        if self.budget.min_iterations == 0 {
            return Err(ConfigError::InvalidBudget("min_iterations must be at least 1"));
        }
        if self.budget.max_iterations < self.budget.min_iterations {
            return Err(ConfigError::InvalidBudget(
                "max_iterations must be >= min_iterations",
            ));
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        // The two standard tiers from the reference workload.
        Self::new(vec![10, 100])
    }
}
