//! Artifact-naming and taxonomy-presence checks.
//!
//! A run publishes artifacts named `{date}_{hour}_rdf_{count}.nt` for
//! periodic flushes and one `{date}_{hour}_rdf.nt` for the final flush, and
//! the procedure-type taxonomy block must land in exactly one of them.

use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

use pc_triplifier::serializer::ntriples;
use pc_triplifier::taxonomy;

use super::nt_artifacts;
use crate::report::{CheckResult, ConformanceReport};

/// Artifact names: a date-hour stamp, the `_rdf` marker, and an optional
/// cumulative document count for periodic flushes.
const NAME_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}_\d{2}_rdf(_\d+)?\.nt$";

/// Validates artifact naming and run-level taxonomy placement.
///
/// # Errors
///
/// Returns an error when the directory cannot be traversed, an artifact
/// cannot be read, or the name pattern fails to compile.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let files = nt_artifacts(artifacts)?;
    if files.is_empty() {
        report.push(CheckResult::fail(
            "artifacts",
            format!("no .nt artifacts found under {}", artifacts.display()),
        ));
        return Ok(report);
    }

    let pattern = Regex::new(NAME_PATTERN).context("Failed to compile artifact name pattern")?;
    let names: Vec<String> = files
        .iter()
        .map(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
        .collect();

    let misnamed: Vec<String> = names
        .iter()
        .filter(|n| !pattern.is_match(n))
        .cloned()
        .collect();
    if misnamed.is_empty() {
        report.push(CheckResult::pass(
            "artifacts",
            format!("{} artifact names match the publication pattern", names.len()),
        ));
    } else {
        report.push(
            CheckResult::fail("artifacts", "artifact names outside the publication pattern")
                .with_details(misnamed),
        );
    }

    let final_count = names.iter().filter(|n| n.ends_with("_rdf.nt")).count();
    if final_count == 1 {
        report.push(CheckResult::pass(
            "artifacts",
            "exactly one final artifact present",
        ));
    } else {
        report.push(CheckResult::fail(
            "artifacts",
            format!("expected exactly one final artifact, found {final_count}"),
        ));
    }

    report.push(taxonomy_presence(&files)?);

    Ok(report)
}

/// The taxonomy block — identified by its 18 label statements — must appear
/// in exactly one artifact per run.
fn taxonomy_presence(files: &[std::path::PathBuf]) -> Result<CheckResult> {
    let label_lines: Vec<String> = ntriples::to_ntriples(&taxonomy::statements())
        .lines()
        .filter(|line| line.contains("rdf-schema#label"))
        .map(str::to_owned)
        .collect();

    let mut carriers = Vec::new();
    for path in files {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if label_lines.iter().all(|line| content.contains(line.as_str())) {
            carriers.push(
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            );
        }
    }

    Ok(if carriers.len() == 1 {
        CheckResult::pass(
            "artifacts",
            format!(
                "taxonomy block ({} labels) present in exactly one artifact",
                label_lines.len()
            ),
        )
    } else {
        CheckResult::fail(
            "artifacts",
            format!(
                "taxonomy block present in {} artifacts, expected exactly one",
                carriers.len()
            ),
        )
        .with_details(carriers)
    })
}
