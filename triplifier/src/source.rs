//! Input-document interface.
//!
//! The engine consumes a lazy, finite sequence of raw JSON documents with a
//! source identifier; directory traversal itself belongs to the driver. The
//! record-file filter lives here so both sides agree on what counts as a
//! procurement record.

/// One raw input document and its source identifier.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Raw JSON text, not yet parsed.
    pub text: String,
    /// Where the document came from; reported when the document fails to
    /// parse.
    pub source: String,
}

impl RawDocument {
    /// Creates a raw document from its text and source identifier.
    pub fn new(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
        }
    }
}

/// Summary files published next to the records; never triplified.
const EXCLUDED_NAMES: [&str; 3] = ["stats.json", "proposingStructure.json", "downloadStats.json"];

/// Marker carried by shard-index files; never triplified.
const INDEX_MARKER: &str = "_index";

/// Returns true when `name` names a procurement record file.
///
/// Record files end in `.json` (case-insensitive) and contain no
/// whitespace; the known summary files and anything carrying the index
/// marker are excluded.
#[must_use]
pub fn is_record_file(name: &str) -> bool {
    if name.chars().any(char::is_whitespace) {
        return false;
    }
    if !name.to_lowercase().ends_with(".json") {
        return false;
    }
    !(EXCLUDED_NAMES.contains(&name) || name.contains(INDEX_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_record_files_case_insensitively() {
        assert!(is_record_file("5128833EDE.json"));
        assert!(is_record_file("record.JSON"));
    }

    #[test]
    fn rejects_non_json_and_whitespace_names() {
        assert!(!is_record_file("record.xml"));
        assert!(!is_record_file("record .json"));
        assert!(!is_record_file("notes.json.bak"));
    }

    #[test]
    fn rejects_summary_and_index_files() {
        assert!(!is_record_file("stats.json"));
        assert!(!is_record_file("proposingStructure.json"));
        assert!(!is_record_file("downloadStats.json"));
        assert!(!is_record_file("2014_index.json"));
    }
}
