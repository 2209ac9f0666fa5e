//! Output serializers.
//!
//! The engine publishes graphs in the line-oriented N-Triples exchange
//! format: one statement per line, no graph-level framing, suitable for
//! streaming and bulk loading.

pub mod ntriples;
