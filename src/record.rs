//! The persisted extraction record.
//!
//! One JSON artifact per successful extraction run, written next to wherever
//! the operator invoked the tool and consumed read-only by the notification
//! stage later. The schema is fixed: `file_path`, `full_text`, `keyword`,
//! `keyword_results`, `result_count`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while persisting or loading a record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Malformed record: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of one OCR extraction run.
///
/// `result_count` is redundant with `keyword_results.len()` but part of the
/// on-disk format; [`ExtractionRecord::new`] derives it so the two can never
/// disagree. Every field defaults on load so any JSON document carrying at
/// least a `full_text` string (or none at all) is accepted by the
/// notification stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionRecord {
    /// Path of the source file at extraction time.
    #[serde(default)]
    pub file_path: String,
    /// All recognized text, with page markers for multi-page sources.
    #[serde(default)]
    pub full_text: String,
    /// The search term, matched case-insensitively.
    #[serde(default)]
    pub keyword: String,
    /// Lines of `full_text` containing the keyword, in original order.
    #[serde(default)]
    pub keyword_results: Vec<String>,
    /// Always equal to `keyword_results.len()`.
    #[serde(default)]
    pub result_count: usize,
}

impl ExtractionRecord {
    /// Build a record, deriving `result_count` from the results.
    pub fn new(
        file_path: &Path,
        full_text: String,
        keyword: String,
        keyword_results: Vec<String>,
    ) -> Self {
        let result_count = keyword_results.len();
        Self {
            file_path: file_path.to_string_lossy().into_owned(),
            full_text,
            keyword,
            keyword_results,
            result_count,
        }
    }

    /// Output filename derived from the source path: strip directory and
    /// extension, append `_ocr_results.json`.
    pub fn output_filename(&self) -> String {
        let stem = Path::new(&self.file_path)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{}_ocr_results.json", stem)
    }

    /// Serialize into `dir`, overwriting any existing file of the same name.
    ///
    /// Pretty-printed UTF-8; non-ASCII text is written literally, not escaped.
    pub fn save_in(&self, dir: &Path) -> Result<PathBuf, RecordError> {
        let output_path = dir.join(self.output_filename());
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&output_path, json)?;
        Ok(output_path)
    }

    /// Serialize into the current working directory.
    pub fn save(&self) -> Result<PathBuf, RecordError> {
        self.save_in(Path::new("."))
    }

    /// Load a record (or any compatible JSON document) from disk.
    pub fn load(path: &Path) -> Result<Self, RecordError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExtractionRecord {
        ExtractionRecord::new(
            Path::new("/tmp/scans/invoice.pdf"),
            "Facture n° 42\nTotal: 100€\n".to_string(),
            "total".to_string(),
            vec!["Total: 100€".to_string()],
        )
    }

    #[test]
    fn test_result_count_matches_results() {
        let record = sample();
        assert_eq!(record.result_count, record.keyword_results.len());
    }

    #[test]
    fn test_output_filename_strips_directory_and_extension() {
        assert_eq!(sample().output_filename(), "invoice_ocr_results.json");
    }

    #[test]
    fn test_round_trip_preserves_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let record = sample();

        let path = record.save_in(dir.path()).unwrap();
        let loaded = ExtractionRecord::load(&path).unwrap();

        assert_eq!(loaded.file_path, record.file_path);
        assert_eq!(loaded.full_text, record.full_text);
        assert_eq!(loaded.keyword, record.keyword);
        assert_eq!(loaded.keyword_results, record.keyword_results);
        assert_eq!(loaded.result_count, record.result_count);

        // Non-ASCII characters are stored literally, not as \u escapes.
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("100€"));
    }

    #[test]
    fn test_load_defaults_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("minimal.json");
        std::fs::write(&path, r#"{"full_text": "contact a@b.com"}"#).unwrap();

        let record = ExtractionRecord::load(&path).unwrap();
        assert_eq!(record.full_text, "contact a@b.com");
        assert_eq!(record.keyword, "");
        assert_eq!(record.result_count, 0);
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            ExtractionRecord::load(&path),
            Err(RecordError::Malformed(_))
        ));
    }

    #[test]
    fn test_save_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let mut record = sample();
        record.save_in(dir.path()).unwrap();

        record.full_text = "second run".to_string();
        let path = record.save_in(dir.path()).unwrap();

        let loaded = ExtractionRecord::load(&path).unwrap();
        assert_eq!(loaded.full_text, "second run");
    }
}
