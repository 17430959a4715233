//! # serbench-harness
//!
//! Correctness verification and statistical timing for pluggable codecs.
//!
//! The harness takes a [`serbench_core::Registry`] of codecs and a
//! [`RunConfig`], round-trips synthetic workloads through every codec to
//! judge correctness, then measures encode/decode wall-clock performance for
//! the codecs that passed. A broken codec is recorded and skipped; it never
//! aborts the run.
//!
//! ## Phases
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐
//! │ Generate │──▶│  Verify  │──▶│  Filter  │──▶│   Time   │
//! └──────────┘   └──────────┘   └──────────┘   └──────────┘
//!       per tier, strictly sequential, single-threaded
//! ```
//!
//! Execution is deliberately single-threaded: overlapping measurements would
//! add scheduler noise to the timing statistics.

pub mod config;
pub mod report;
pub mod run;
pub mod timing;
pub mod verify;

pub use config::{ConfigError, LivenessPolicy, RunConfig, TimingBudget};
pub use report::{Operation, RunReport, TimingRecord, VerificationRecord};
pub use run::Runner;
pub use timing::{measure, TimingError, TimingSummary};
pub use verify::verify;
