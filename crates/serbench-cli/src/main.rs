//! # serbench
//!
//! Round-trip verification and timing for serialization codecs.
//!
//! ## Usage
//!
//! ```bash
//! # Run with default settings
//! serbench
//!
//! # Run with custom tiers
//! SERBENCH_TIERS=10,100,1000 serbench
//!
//! # Run with a settings file (serbench.toml in the working directory)
//! serbench
//! ```
//!
//! The process exits 0 whenever all tiers complete, regardless of individual
//! codec failures; a non-zero exit is reserved for configuration errors.

mod render;
mod settings;

use anyhow::Result;
use serbench_core::Registry;
use serbench_harness::Runner;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "serbench=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load settings
    let settings = settings::Settings::load()?;
    let config = settings.run_config();

    tracing::info!("Starting serbench run over tiers {:?}", config.tiers);

    // Register the bundled adapters
    let mut registry = Registry::new();
    for codec in serbench_adapters::default_codecs() {
        registry.register(codec)?;
    }

    // Run all tiers; per-codec failures are data in the report
    let runner = Runner::new(registry, config.clone())?;
    let report = runner.run();

    for &tier in &config.tiers {
        println!("{}", render::verification_table(&report, tier));
        println!("{}", render::timing_table(&report, tier));
    }

    Ok(())
}
