//! Error taxonomy of the engine.
//!
//! Two failure classes exist. A parse failure is isolated to its document:
//! the document contributes zero statements, its source identifier is
//! reported, and the run continues. A write failure is fatal: an unwritable
//! destination invalidates the whole batch, so it propagates. Absent input
//! fields are never errors — they resolve to the empty string in
//! [`document`](crate::document).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while triplifying records and publishing graphs.
#[derive(Debug, Error)]
pub enum TriplifyError {
    /// The input document is not well-formed JSON. Isolated per document.
    #[error("malformed JSON document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The output destination could not be written. Fatal to the run.
    #[error("failed to write graph to {}: {source}", .path.display())]
    Write {
        /// Destination path that could not be written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
}
