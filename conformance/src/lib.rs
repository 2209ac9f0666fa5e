//! Conformance suite for the triplification artifacts.
//!
//! Validates a produced `rdf-output` directory against the publication
//! rules:
//!
//! | Check | Rule |
//! |-------|------|
//! | `rdf` | every artifact is well-formed N-Triples (structural + full parse) |
//! | `artifacts` | names match `{date}_{hour}_rdf[_{count}].nt`; one final artifact |
//! | `artifacts` | the 18-label taxonomy block appears in exactly one artifact |
//!
//! # Entry point
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let report = pc_conformance::run_all(Path::new("out/rdf-output"))?;
//! assert!(report.all_passed());
//! # Ok(())
//! # }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use std::path::Path;

use anyhow::Result;

pub use report::{CheckResult, ConformanceReport, Severity};

/// Runs every validator over `artifacts` and returns the aggregated report.
///
/// # Errors
///
/// Returns an error when the artifacts directory cannot be traversed or an
/// artifact cannot be read; individual rule violations are reported as
/// failures inside the report instead.
pub fn run_all(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    report.extend(validators::artifacts::validate(artifacts)?);
    report.extend(validators::rdf::validate(artifacts)?);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::num::NonZeroUsize;

    use pc_triplifier::{taxonomy, triplify, BatchPublisher, NtWriter};

    use super::*;

    const RECORD: &str = r#"{
        "cig": "5128833EDE",
        "cigValid": "true",
        "oggetto": "Fornitura di sistemi",
        "cfStrutturaProponenteANAC": "80004990927"
    }"#;

    fn publish_run(out: &Path) {
        let threshold = NonZeroUsize::new(20_000).unwrap_or(NonZeroUsize::MIN);
        let mut publisher = BatchPublisher::new(NtWriter, out, threshold);
        publisher.seed(taxonomy::statements());
        if let Ok(statements) = triplify(RECORD) {
            publisher.append(statements).ok();
        }
        publisher.finish().ok();
    }

    #[test]
    fn a_real_run_passes_all_checks() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        publish_run(dir.path());
        let report = run_all(&dir.path().join("rdf-output")).unwrap_or_default();
        assert!(!report.checks.is_empty());
        assert!(
            report.all_passed(),
            "unexpected failures: {:?}",
            report
                .checks
                .iter()
                .filter(|c| c.is_failure())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn a_truncated_artifact_fails_the_rdf_check() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let out = dir.path().join("rdf-output");
        fs::create_dir_all(&out).ok();
        fs::write(out.join("2015-05-19_14_rdf.nt"), "<http://e/s> <http://e/p>\n").ok();
        let report = run_all(&out).unwrap_or_default();
        assert!(!report.all_passed());
    }

    #[test]
    fn an_empty_directory_fails() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let report = run_all(dir.path()).unwrap_or_default();
        assert!(!report.all_passed());
    }
}
