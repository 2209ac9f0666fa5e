//! `pc-triples` — triplifies a directory of procurement-record JSONs into
//! batched N-Triples artifacts.
//!
//! **Outputs:** `<out>/rdf-output/{date}_{hour}_rdf_{count}.nt` per periodic
//! flush, plus `<out>/rdf-output/{date}_{hour}_rdf.nt` as the final flush.
//!
//! **Usage:**
//! ```text
//! pc-triples <input-dir> <out-dir> [--batch-size N]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use walkdir::WalkDir;

use pc_triplifier::{source, taxonomy, BatchPublisher, NtWriter};

/// Triplify procurement records into N-Triples batches.
#[derive(Parser)]
#[command(name = "pc-triples", about = "Triplify public-contracts records")]
struct Args {
    /// Directory scanned recursively for record JSON files.
    input: PathBuf,

    /// Output directory; artifacts land under `<out>/rdf-output/`.
    out: PathBuf,

    /// Documents accumulated before a periodic flush.
    #[arg(long, default_value = "20000")]
    batch_size: NonZeroUsize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let started = Instant::now();

    let files: Vec<PathBuf> = WalkDir::new(&args.input)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| source::is_record_file(&entry.file_name().to_string_lossy()))
        .map(walkdir::DirEntry::into_path)
        .collect();

    println!("{} JSONs to triplify", files.len());

    let mut publisher = BatchPublisher::new(NtWriter, &args.out, args.batch_size);
    publisher.seed(taxonomy::statements());

    let mut skipped = 0usize;
    for path in files {
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("Skipping {}: {err}", path.display());
                skipped += 1;
                continue;
            }
        };
        match pc_triplifier::triplify(&text) {
            Ok(statements) => publisher
                .append(statements)
                .context("Failed to publish batch")?,
            Err(err) => {
                eprintln!("Skipping {}: {err}", path.display());
                skipped += 1;
                continue;
            }
        }
        if publisher.processed() % args.batch_size.get() == 0 {
            println!("Published batch at {} documents", publisher.processed());
        } else if publisher.processed() % 100 == 0 {
            println!("Processed {} files...", publisher.processed());
        }
    }

    println!("Publish final RDF...");
    let summary = publisher.finish().context("Failed to publish final batch")?;

    println!(
        "Triplified {} documents ({} skipped) into {} artifacts in {:.1}s",
        summary.processed,
        skipped,
        summary.artifacts.len(),
        started.elapsed().as_secs_f64()
    );
    for artifact in &summary.artifacts {
        println!("  Written: {}", artifact.display());
    }
    Ok(())
}
