//! Wall-clock timing engine.
//!
//! Runs a warm-up phase, then samples a single operation's wall-clock
//! duration until the configured budget is satisfied, and summarizes the
//! samples. The margin of error is a 95% confidence bound on the mean using
//! the normal approximation (`1.96 * sd / sqrt(n)`), expressed as a percent
//! of the mean; it shrinks with sample count for a fixed variance model,
//! which is the property the harness relies on.

use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::trace;

use crate::config::TimingBudget;

/// 95% two-sided z-score, normal approximation.
const Z_95: f64 = 1.96;

/// Timing failures.
#[derive(Debug, Error)]
pub enum TimingError {
    /// The operation failed during warm-up or the measured phase.
    #[error("operation failed after {completed} samples: {message}")]
    Operation {
        /// Samples collected before the failure.
        completed: usize,
        /// Underlying failure message.
        message: String,
    },
}

/// Summary statistics for one measured operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSummary {
    /// Arithmetic mean duration per call, nanoseconds.
    pub mean_ns: f64,
    /// 95% confidence margin of error as a percent of the mean.
    pub margin_of_error_pct: f64,
    /// `1e9 / mean_ns`.
    pub ops_per_sec: f64,
    /// Number of measured samples.
    pub samples: usize,
}

/// Measure an operation under the given budget.
///
/// Warm-up runs until either the iteration cap or the time cap is hit,
/// whichever first, and is excluded from statistics. The measured phase then
/// continues until both `min_iterations` samples and `min_duration`
/// cumulative time are reached, capped at `max_iterations`.
///
/// # Errors
///
/// Returns [`TimingError::Operation`] if the operation fails at any point;
/// partial samples are discarded.
pub fn measure<F>(mut op: F, budget: &TimingBudget) -> Result<TimingSummary, TimingError>
where
    F: FnMut() -> Result<(), String>,
{
    let warmup_start = Instant::now();
    let mut warmed = 0;
    while warmed < budget.warmup_iterations && warmup_start.elapsed() < budget.warmup_duration {
        op().map_err(|message| TimingError::Operation {
            completed: 0,
            message,
        })?;
        warmed += 1;
    }
    trace!(warmed, "Warm-up complete");

    let mut samples: Vec<f64> = Vec::with_capacity(budget.min_iterations);
    let mut total = Duration::ZERO;
    loop {
        let start = Instant::now();
        op().map_err(|message| TimingError::Operation {
            completed: samples.len(),
            message,
        })?;
        let elapsed = start.elapsed();

        samples.push(elapsed.as_nanos() as f64);
        total += elapsed;

        if samples.len() >= budget.max_iterations {
            break;
        }
        if samples.len() >= budget.min_iterations && total >= budget.min_duration {
            break;
        }
    }

    Ok(summarize(&samples))
}

/// Summarize raw duration samples (nanoseconds).
#[must_use]
pub fn summarize(samples: &[f64]) -> TimingSummary {
    let n = samples.len();
    debug_assert!(n > 0, "summarize requires at least one sample");

    let mean = samples.iter().sum::<f64>() / n as f64;
    let variance = if n > 1 {
        samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1) as f64
    } else {
        0.0
    };
    let std_dev = variance.sqrt();

    let margin = Z_95 * std_dev / (n as f64).sqrt();
    let margin_pct = if mean > 0.0 { margin / mean * 100.0 } else { 0.0 };
    let ops = if mean > 0.0 { 1e9 / mean } else { 0.0 };

    TimingSummary {
        mean_ns: mean,
        margin_of_error_pct: margin_pct,
        ops_per_sec: ops,
        samples: n,
    }
}
