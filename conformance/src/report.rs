//! Conformance report types: results, severity levels, and aggregation.

use serde::Serialize;

/// Severity of a conformance check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The check passed.
    Pass,
    /// The check identified a non-blocking issue.
    Warning,
    /// The check failed.
    Failure,
}

/// A single conformance check result.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Short identifier of the check that produced this result.
    pub check: String,
    /// Human-readable outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Additional detail lines, if any.
    pub details: Vec<String>,
}

impl CheckResult {
    /// Creates a passing result.
    pub fn pass(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(check, message, Severity::Pass)
    }

    /// Creates a warning result.
    pub fn warn(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(check, message, Severity::Warning)
    }

    /// Creates a failure result.
    pub fn fail(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(check, message, Severity::Failure)
    }

    /// Attaches detail lines to this result.
    #[must_use]
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    /// Returns true if this result represents a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }

    fn with_severity(
        check: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            check: check.into(),
            message: message.into(),
            severity,
            details: Vec::new(),
        }
    }
}

/// Aggregated report across all validators.
#[derive(Debug, Default, Serialize)]
pub struct ConformanceReport {
    /// All individual check results.
    pub checks: Vec<CheckResult>,
}

impl ConformanceReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one result.
    pub fn push(&mut self, result: CheckResult) {
        self.checks.push(result);
    }

    /// Merges the results of another report into this one.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.checks.extend(other.checks);
    }

    /// Number of failed checks.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.checks.iter().filter(|r| r.is_failure()).count()
    }

    /// True when no check failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_count_ignores_warnings() {
        let mut report = ConformanceReport::new();
        report.push(CheckResult::pass("a", "fine"));
        report.push(CheckResult::warn("b", "odd"));
        report.push(CheckResult::fail("c", "broken"));
        assert_eq!(report.failure_count(), 1);
        assert!(!report.all_passed());
    }

    #[test]
    fn serializes_to_json() {
        let mut report = ConformanceReport::new();
        report.push(CheckResult::pass("rdf", "ok").with_details(vec!["42 triples".into()]));
        let json = serde_json::to_string(&report).unwrap_or_default();
        assert!(json.contains("\"severity\":\"pass\""));
    }
}
