//! Result records handed to the reporter.
//!
//! Records are append-only data: the runner creates them during
//! orchestration, and failures travel inside them rather than as errors
//! crossing the runner boundary.

use std::fmt;

use crate::timing::TimingSummary;

/// The measured operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Encode,
    Decode,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Encode => f.write_str("encode"),
            Operation::Decode => f.write_str("decode"),
        }
    }
}

/// Outcome of verifying one codec against one tier's workload.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationRecord {
    /// Codec name.
    pub codec: String,
    /// Workload size tier.
    pub tier: usize,
    /// Whether the codec passed and is eligible for timing.
    pub live: bool,
    /// Encoded payload size in bytes; absent if encoding failed.
    pub payload_bytes: Option<usize>,
    /// Failure message; absent on success.
    pub error: Option<String>,
}

/// Outcome of timing one (codec, operation) pair at one tier.
///
/// A failed measurement is reported here, not dropped: a codec that passes
/// verification but breaks under repeated timing still shows up in the
/// report, and a failed encode measurement does not suppress the decode one.
#[derive(Debug, Clone)]
pub struct TimingRecord {
    /// Codec name.
    pub codec: String,
    /// Workload size tier.
    pub tier: usize,
    /// Which operation was measured.
    pub operation: Operation,
    /// Summary statistics, or the failure message.
    pub outcome: Result<TimingSummary, String>,
}

/// Everything a completed run produced, in deterministic order:
/// tier-major, then codec registration order (and encode before decode).
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// One record per (tier, codec), including disabled codecs.
    pub verifications: Vec<VerificationRecord>,
    /// One record per (tier, live codec, operation).
    pub timings: Vec<TimingRecord>,
}

impl RunReport {
    /// Verification records for one tier, in registration order.
    pub fn verifications_for_tier(&self, tier: usize) -> impl Iterator<Item = &VerificationRecord> {
        self.verifications.iter().filter(move |r| r.tier == tier)
    }

    /// Timing records for one tier, in registration order.
    pub fn timings_for_tier(&self, tier: usize) -> impl Iterator<Item = &TimingRecord> {
        self.timings.iter().filter(move |r| r.tier == tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Encode.to_string(), "encode");
        assert_eq!(Operation::Decode.to_string(), "decode");
    }

    #[test]
    fn test_tier_filters() {
        let report = RunReport {
            verifications: vec![
                VerificationRecord {
                    codec: "a".into(),
                    tier: 10,
                    live: true,
                    payload_bytes: Some(1),
                    error: None,
                },
                VerificationRecord {
                    codec: "a".into(),
                    tier: 100,
                    live: true,
                    payload_bytes: Some(2),
                    error: None,
                },
            ],
            timings: vec![],
        };

        assert_eq!(report.verifications_for_tier(10).count(), 1);
        assert_eq!(report.verifications_for_tier(100).count(), 1);
        assert_eq!(report.verifications_for_tier(7).count(), 0);
    }
}
