//! Runner settings.
//!
//! Settings can be loaded from:
//! - Environment variables (SERBENCH_*)
//! - TOML configuration file

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use serbench_harness::{LivenessPolicy, RunConfig, TimingBudget};

/// Runner settings, as read from file/environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Workload size tiers, in run order.
    #[serde(default = "default_tiers")]
    pub tiers: Vec<usize>,

    /// Timing budget.
    #[serde(default)]
    pub timing: TimingSettings,

    /// Re-verify previously failed codecs at every tier.
    #[serde(default)]
    pub reverify_per_tier: bool,
}

/// Timing budget settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingSettings {
    /// Minimum cumulative measured time per operation, milliseconds.
    #[serde(default = "default_min_duration_ms")]
    pub min_duration_ms: u64,

    /// Minimum measured samples per operation.
    #[serde(default = "default_min_iterations")]
    pub min_iterations: usize,

    /// Hard ceiling on measured samples.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Warm-up iteration cap.
    #[serde(default = "default_warmup_iterations")]
    pub warmup_iterations: usize,

    /// Warm-up time cap, milliseconds.
    #[serde(default = "default_warmup_duration_ms")]
    pub warmup_duration_ms: u64,
}

// Default value functions
fn default_tiers() -> Vec<usize> {
    std::env::var("SERBENCH_TIERS")
        .ok()
        .and_then(|raw| {
            raw.split(',')
                .map(|t| t.trim().parse().ok())
                .collect::<Option<Vec<usize>>>()
        })
        .unwrap_or_else(|| vec![10, 100])
}

fn default_min_duration_ms() -> u64 {
    500
}

fn default_min_iterations() -> usize {
    32
}

fn default_max_iterations() -> usize {
    1_000_000
}

fn default_warmup_iterations() -> usize {
    16
}

fn default_warmup_duration_ms() -> u64 {
    100
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
            timing: TimingSettings::default(),
            reverify_per_tier: false,
        }
    }
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            min_duration_ms: default_min_duration_ms(),
            min_iterations: default_min_iterations(),
            max_iterations: default_max_iterations(),
            warmup_iterations: default_warmup_iterations(),
            warmup_duration_ms: default_warmup_duration_ms(),
        }
    }
}

impl Settings {
    /// Load settings from file or defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_paths = ["serbench.toml", "~/.config/serbench/serbench.toml"];

        for path in &config_paths {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                return Self::from_file(expanded.as_ref());
            }
        }

        // Fall back to defaults with environment overrides
        Ok(Self::default())
    }

    /// Load settings from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

        Ok(settings)
    }

    /// Convert into the harness run configuration.
    #[must_use]
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            tiers: self.tiers.clone(),
            budget: TimingBudget {
                min_duration: Duration::from_millis(self.timing.min_duration_ms),
                min_iterations: self.timing.min_iterations,
                max_iterations: self.timing.max_iterations,
                warmup_iterations: self.timing.warmup_iterations,
                warmup_duration: Duration::from_millis(self.timing.warmup_duration_ms),
            },
            liveness: if self.reverify_per_tier {
                LivenessPolicy::PerTier
            } else {
                LivenessPolicy::PerRun
            },
        }
    }
}
