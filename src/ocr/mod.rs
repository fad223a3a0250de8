//! OCR and text extraction module.
//!
//! Extracts text from scanned inputs using external Poppler/Tesseract tools:
//! - Tesseract OCR for raster images
//! - pdftoppm (Poppler) to rasterize PDF pages before OCR
//! - pdfinfo (Poppler) for page counts in diagnostics
//!
//! The engine is probed once before any extraction; a missing or broken
//! Tesseract install aborts the run before any file is touched.

mod engine;
mod extractor;

pub use engine::{check_binary, probe, recognize};
pub use extractor::{Extraction, TextExtractor, OCR_DPI};

use thiserror::Error;

use crate::classify::UnsupportedFormat;

/// Errors that can occur during text extraction.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error(transparent)]
    Unsupported(#[from] UnsupportedFormat),

    #[error("OCR engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("External tool not found: {0}")]
    ToolNotFound(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
