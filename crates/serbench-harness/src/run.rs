//! Run orchestration.
//!
//! Walks the configured tiers in order. For each tier: generate the workload,
//! verify every codec, then time encode and decode for the codecs that are
//! live. The runner is the sole owner of the liveness map and the result
//! vectors; both are mutated only between phases, never inside a sampling
//! loop.

use std::collections::HashMap;

use serbench_core::{generate, Registry, Value};
use tracing::{debug, info};

use crate::config::{ConfigError, LivenessPolicy, RunConfig};
use crate::report::{Operation, RunReport, TimingRecord, VerificationRecord};
use crate::timing::measure;
use crate::verify::{guarded, verify};

/// Sequential benchmark runner.
pub struct Runner {
    registry: Registry,
    config: RunConfig,
}

impl Runner {
    /// Build a runner, validating the configuration up front.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an empty registry, empty tier list, or
    /// inconsistent timing budget. These are the only errors a run can raise;
    /// everything after this point is captured in the report.
    pub fn new(registry: Registry, config: RunConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if registry.is_empty() {
            return Err(ConfigError::NoCodecs);
        }
        Ok(Self { registry, config })
    }

    /// Execute all tiers and return the accumulated report.
    ///
    /// Never fails: codec breakage of any kind is recorded per tier and the
    /// run continues. A tier with zero live codecs still appears in the
    /// report and does not stop later tiers.
    #[must_use]
    pub fn run(&self) -> RunReport {
        let mut report = RunReport::default();
        // Codec name -> tier at which verification first failed.
        let mut disabled: HashMap<String, usize> = HashMap::new();

        for &tier in &self.config.tiers {
            info!(tier, codecs = self.registry.len(), "Running tier");
            if self.config.liveness == LivenessPolicy::PerTier {
                disabled.clear();
            }

            let workload = generate(tier);
            self.verify_tier(tier, &workload, &mut disabled, &mut report);
            self.time_tier(tier, &workload, &disabled, &mut report);
        }

        info!(
            verifications = report.verifications.len(),
            timings = report.timings.len(),
            "Run complete"
        );
        report
    }

    fn verify_tier(
        &self,
        tier: usize,
        workload: &Value,
        disabled: &mut HashMap<String, usize>,
        report: &mut RunReport,
    ) {
        for codec in self.registry.iter() {
            let record = if let Some(&failed_tier) = disabled.get(codec.name()) {
                // Failure is assumed structural, not size-dependent; the
                // codec is not retried within the run.
                VerificationRecord {
                    codec: codec.name().to_string(),
                    tier,
                    live: false,
                    payload_bytes: None,
                    error: Some(format!("disabled since tier {failed_tier}")),
                }
            } else {
                verify(codec, workload, tier)
            };

            if !record.live {
                disabled.entry(record.codec.clone()).or_insert(tier);
            }
            report.verifications.push(record);
        }
    }

    fn time_tier(
        &self,
        tier: usize,
        workload: &Value,
        disabled: &HashMap<String, usize>,
        report: &mut RunReport,
    ) {
        for codec in self.registry.iter() {
            if disabled.contains_key(codec.name()) {
                continue;
            }
            debug!(codec = %codec.name(), tier, "Timing");

            let encode = measure(
                || guarded(|| codec.encode(workload).map(drop)),
                &self.config.budget,
            );
            report.timings.push(TimingRecord {
                codec: codec.name().to_string(),
                tier,
                operation: Operation::Encode,
                outcome: encode.map_err(|e| e.to_string()),
            });

            // Decode is timed against a payload produced outside the loop.
            // An encode failure here (or above) does not suppress decode.
            let decode = match guarded(|| codec.encode(workload)) {
                Ok(payload) => measure(
                    || guarded(|| codec.decode(&payload).map(drop)),
                    &self.config.budget,
                )
                .map_err(|e| e.to_string()),
                Err(message) => Err(format!("could not produce payload: {message}")),
            };
            report.timings.push(TimingRecord {
                codec: codec.name().to_string(),
                tier,
                operation: Operation::Decode,
                outcome: decode,
            });
        }
    }
}
