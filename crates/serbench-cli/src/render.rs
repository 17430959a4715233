//! Console rendering of run reports.
//!
//! Fixed-width tables, one verification table and one timing table per tier.

use serbench_harness::RunReport;

const NAME_WIDTH: usize = 18;

/// Render the verification table for one tier.
#[must_use]
pub fn verification_table(report: &RunReport, tier: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "--- Payload Size and Verification (size: {tier}) ---\n"
    ));

    for record in report.verifications_for_tier(tier) {
        let size = record
            .payload_bytes
            .map_or_else(|| "    -".to_string(), |b| format!("{b:>5}"));
        let status = if record.live { "ok" } else { "FAILED" };
        out.push_str(&format!(
            "[{:<NAME_WIDTH$}] Size: {size} bytes  {status}\n",
            record.codec
        ));
        if let Some(error) = &record.error {
            out.push_str(&format!("    {error}\n"));
        }
    }
    out
}

/// Render the timing table for one tier.
#[must_use]
pub fn timing_table(report: &RunReport, tier: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("--- Benchmark Results (size: {tier}) ---\n"));
    out.push_str(&format!(
        "{:<NAME_WIDTH$} {:<6}  {:>12}  {:>8}  {:>14}  {:>8}\n",
        "codec", "op", "mean", "moe", "ops/s", "samples"
    ));

    let mut any = false;
    for record in report.timings_for_tier(tier) {
        any = true;
        match &record.outcome {
            Ok(summary) => {
                out.push_str(&format!(
                    "{:<NAME_WIDTH$} {:<6}  {:>12}  {:>7.2}%  {:>14.0}  {:>8}\n",
                    record.codec,
                    record.operation.to_string(),
                    format_ns(summary.mean_ns),
                    summary.margin_of_error_pct,
                    summary.ops_per_sec,
                    summary.samples,
                ));
            }
            Err(message) => {
                out.push_str(&format!(
                    "{:<NAME_WIDTH$} {:<6}  failed: {message}\n",
                    record.codec,
                    record.operation.to_string(),
                ));
            }
        }
    }
    if !any {
        out.push_str("(no live codecs)\n");
    }
    out
}

fn format_ns(ns: f64) -> String {
    if ns < 1_000.0 {
        format!("{ns:.0} ns")
    } else if ns < 1_000_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{:.2} ms", ns / 1_000_000.0)
    }
}
