//! Graph accumulation and batch publication.
//!
//! The publisher holds the open statement collection and a counter of
//! processed documents. Appending a document's statements happens before
//! the periodic-flush check; at every positive multiple of the threshold
//! the collection is written out and cleared while the counter keeps
//! counting. A final, unconditional flush publishes whatever remains —
//! possibly nothing — once the input is exhausted. This two-tier flush is
//! the engine's only resource bound: without it a large input set would
//! accumulate the whole run in memory.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::TriplifyError;
use crate::model::Statement;
use crate::serializer::ntriples;

/// Subdirectory of the output directory that receives the artifacts.
const OUTPUT_SUBDIR: &str = "rdf-output";

/// Output capability: serializes a statement collection to a destination.
pub trait GraphWriter {
    /// Writes `statements` to `path`, creating intermediate directories and
    /// overwriting any existing file at that path.
    ///
    /// # Errors
    ///
    /// Returns [`TriplifyError::Write`] when the destination cannot be
    /// written; the failure is fatal to the run.
    fn write(&mut self, path: &Path, statements: &[Statement]) -> Result<(), TriplifyError>;
}

/// Filesystem writer producing N-Triples files.
#[derive(Debug, Default, Clone, Copy)]
pub struct NtWriter;

impl GraphWriter for NtWriter {
    fn write(&mut self, path: &Path, statements: &[Statement]) -> Result<(), TriplifyError> {
        let io = |source: std::io::Error| TriplifyError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io)?;
        }
        std::fs::write(path, ntriples::to_ntriples(statements)).map_err(io)
    }
}

/// Accumulates statements and publishes them in memory-bounded batches.
pub struct BatchPublisher<W> {
    writer: W,
    out_dir: PathBuf,
    stamp: String,
    threshold: NonZeroUsize,
    graph: Vec<Statement>,
    processed: usize,
    artifacts: Vec<PathBuf>,
}

impl<W: GraphWriter> BatchPublisher<W> {
    /// Creates a publisher writing under `<out_dir>/rdf-output/`. The
    /// date-hour stamp in artifact names is captured once, here, so every
    /// artifact of a run shares it.
    pub fn new(writer: W, out_dir: impl Into<PathBuf>, threshold: NonZeroUsize) -> Self {
        Self {
            writer,
            out_dir: out_dir.into(),
            stamp: Local::now().format("%Y-%m-%d_%H").to_string(),
            threshold,
            graph: Vec::new(),
            processed: 0,
            artifacts: Vec::new(),
        }
    }

    /// Merges run-level statements (the taxonomy block) into the open
    /// collection without counting a document.
    pub fn seed(&mut self, statements: Vec<Statement>) {
        self.graph.extend(statements);
    }

    /// Appends one document's statements, then applies the periodic-flush
    /// rule.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the periodic flush.
    pub fn append(&mut self, statements: Vec<Statement>) -> Result<(), TriplifyError> {
        self.graph.extend(statements);
        self.processed += 1;
        self.maybe_flush()
    }

    fn maybe_flush(&mut self) -> Result<(), TriplifyError> {
        if self.processed % self.threshold.get() != 0 {
            return Ok(());
        }
        let path = self
            .artifact_dir()
            .join(format!("{}_rdf_{}.nt", self.stamp, self.processed));
        self.writer.write(&path, &self.graph)?;
        self.graph.clear();
        self.artifacts.push(path);
        Ok(())
    }

    /// Publishes whatever remains — possibly nothing — and returns the run
    /// summary.
    ///
    /// # Errors
    ///
    /// Propagates the write failure of the final flush.
    pub fn finish(mut self) -> Result<RunSummary, TriplifyError> {
        let path = self.artifact_dir().join(format!("{}_rdf.nt", self.stamp));
        self.writer.write(&path, &self.graph)?;
        self.artifacts.push(path);
        Ok(RunSummary {
            processed: self.processed,
            artifacts: self.artifacts,
        })
    }

    /// Number of documents appended so far; not reset by periodic flushes.
    #[must_use]
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Number of statements currently held in memory.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.graph.len()
    }

    fn artifact_dir(&self) -> PathBuf {
        self.out_dir.join(OUTPUT_SUBDIR)
    }
}

/// Totals reported after the final flush.
#[derive(Debug)]
pub struct RunSummary {
    /// Documents appended over the whole run.
    pub processed: usize,
    /// Paths of every artifact written, periodic flushes first, the final
    /// artifact last.
    pub artifacts: Vec<PathBuf>,
}
