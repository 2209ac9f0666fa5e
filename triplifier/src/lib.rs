//! Triplification engine for Italian public-procurement records.
//!
//! Converts JSON-shaped procurement records — contracts, winners,
//! participants, bidder groups, payments — into subject–predicate–object
//! statements under the `http://public-contracts.nexacenter.org/id/`
//! vocabulary, and publishes them as N-Triples artifacts in memory-bounded
//! batches.
//!
//! # Entry points
//!
//! [`triplify`] maps one raw record to its statement set;
//! [`BatchPublisher`] accumulates per-record sets and flushes them to a
//! [`GraphWriter`] at a configurable document threshold;
//! [`taxonomy::statements`] yields the run-level procedure-type block.
//!
//! ```
//! # fn main() -> Result<(), pc_triplifier::TriplifyError> {
//! let record = r#"{ "cig": "5128833EDE", "cigValid": "true", "oggetto": "Fornitura" }"#;
//! let statements = pc_triplifier::triplify(record)?;
//! assert!(!statements.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! A record that fails to parse contributes zero statements; the caller
//! reports its source identifier and moves on. Write failures are fatal.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod batch;
pub mod builders;
pub mod document;
pub mod error;
pub mod model;
pub mod resolver;
pub mod serializer;
pub mod slug;
pub mod source;
pub mod taxonomy;

pub use batch::{BatchPublisher, GraphWriter, NtWriter, RunSummary};
pub use error::TriplifyError;
pub use model::{Statement, Term};
pub use source::RawDocument;

/// Converts one raw JSON procurement record into its full statement set.
///
/// # Errors
///
/// Returns [`TriplifyError::Parse`] when the document is not well-formed
/// JSON; the document then contributes no statements at all, never a
/// partial set.
pub fn triplify(input: &str) -> Result<Vec<Statement>, TriplifyError> {
    let record: serde_json::Value = serde_json::from_str(input)?;
    Ok(builders::contract::statements(&record))
}
