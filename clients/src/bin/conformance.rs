//! `pc-conformance` — validates a produced artifacts directory against the
//! publication rules and prints the aggregated report.
//!
//! **Usage:**
//! ```text
//! pc-conformance [--artifacts <dir>] [--json]
//! ```
//!
//! Exits non-zero when any check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use pc_conformance::Severity;

/// Validate triplification artifacts.
#[derive(Parser)]
#[command(name = "pc-conformance", about = "Validate N-Triples artifacts")]
struct Args {
    /// Directory containing the produced artifacts.
    #[arg(long, default_value = "out/rdf-output")]
    artifacts: PathBuf,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let report = pc_conformance::run_all(&args.artifacts)
        .with_context(|| format!("Failed to validate {}", args.artifacts.display()))?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        for result in &report.checks {
            let status = match result.severity {
                Severity::Pass => "PASS",
                Severity::Warning => "WARN",
                Severity::Failure => "FAIL",
            };
            println!("[{status}] {}: {}", result.check, result.message);
            for detail in &result.details {
                println!("       {detail}");
            }
        }
        println!(
            "{} checks, {} failures",
            report.checks.len(),
            report.failure_count()
        );
    }

    Ok(if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
