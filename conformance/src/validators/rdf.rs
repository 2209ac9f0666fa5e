//! RDF 1.1 / N-Triples well-formedness checks.
//!
//! Two layers per artifact: a structural pass (every non-blank line must
//! end with `" ."`) and a full parse through the `sophia` N-Triples parser,
//! which also yields the triple count.

use std::path::Path;

use anyhow::{Context, Result};
use sophia_api::parser::TripleParser;
use sophia_api::source::TripleSource;
use sophia_turtle::parser::nt::NTriplesParser;

use super::nt_artifacts;
use crate::report::{CheckResult, ConformanceReport};

/// Validates every N-Triples artifact under `artifacts`.
///
/// # Errors
///
/// Returns an error when the directory cannot be traversed or an artifact
/// cannot be read.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let files = nt_artifacts(artifacts)?;
    if files.is_empty() {
        report.push(CheckResult::fail(
            "rdf",
            format!("no .nt artifacts found under {}", artifacts.display()),
        ));
        return Ok(report);
    }

    for path in &files {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let malformed: Vec<String> = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty() && !line.ends_with(" ."))
            .map(|(i, _)| format!("line {}: does not end with \" .\"", i + 1))
            .collect();
        if malformed.is_empty() {
            report.push(CheckResult::pass(
                "rdf",
                format!("{name}: every statement line is terminated"),
            ));
        } else {
            let shown = malformed.into_iter().take(10).collect();
            report.push(
                CheckResult::fail("rdf", format!("{name}: malformed statement lines"))
                    .with_details(shown),
            );
        }

        match triple_count(&content) {
            Ok(count) => report.push(CheckResult::pass(
                "rdf",
                format!("{name}: parses as N-Triples ({count} triples)"),
            )),
            Err(err) => report.push(CheckResult::fail(
                "rdf",
                format!("{name}: does not parse as N-Triples: {err}"),
            )),
        }
    }

    Ok(report)
}

/// Parses `content` as N-Triples and returns the triple count.
///
/// # Errors
///
/// Returns an error when any line fails to parse.
pub fn triple_count(content: &str) -> Result<usize> {
    let mut count = 0usize;
    NTriplesParser {}
        .parse_str(content)
        .for_each_triple(|_| {
            count += 1;
        })
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(count)
}
