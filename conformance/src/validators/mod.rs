//! Validators over a produced artifacts directory.

pub mod artifacts;
pub mod rdf;

use std::path::{Path, PathBuf};

use anyhow::Result;
use walkdir::WalkDir;

/// Collects every `.nt` artifact under `dir`, sorted by path.
///
/// # Errors
///
/// Returns an error when the directory cannot be traversed.
pub fn nt_artifacts(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == "nt")
        {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}
