//! Text extraction from images and PDF documents.

use std::path::{Path, PathBuf};
use std::process::Command;

use indicatif::{ProgressBar, ProgressStyle};
use tempfile::TempDir;

use super::engine::{check_binary, recognize};
use super::ExtractionError;
use crate::classify::{classify, FileKind};

/// Rasterization resolution for PDF pages. 300 DPI trades recognition
/// accuracy against per-page processing time and memory.
pub const OCR_DPI: u32 = 300;

/// Result of extracting text from one file.
#[derive(Debug)]
pub struct Extraction {
    /// Recognized text; multi-page sources carry page markers.
    pub text: String,
    /// Number of pages processed (1 for images).
    pub page_count: u32,
}

/// Text extractor backed by the external Tesseract/Poppler tools.
pub struct TextExtractor {
    /// Tesseract language setting.
    language: String,
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
        }
    }
}

impl TextExtractor {
    /// Create a new text extractor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Tesseract language.
    pub fn with_language(mut self, lang: &str) -> Self {
        self.language = lang.to_string();
        self
    }

    /// Extract text from a file, dispatching on its classified kind.
    pub fn extract(&self, path: &Path) -> Result<Extraction, ExtractionError> {
        match classify(path)? {
            FileKind::Image => self.extract_image(path),
            FileKind::Document => self.extract_document(path),
        }
    }

    /// OCR a raster image in a single pass.
    fn extract_image(&self, path: &Path) -> Result<Extraction, ExtractionError> {
        let text = recognize(path, &self.language)?;
        Ok(Extraction {
            text,
            page_count: 1,
        })
    }

    /// Rasterize every page of a PDF at [`OCR_DPI`] and OCR them in page
    /// order, concatenating with a marker line before each page's text.
    ///
    /// All-or-nothing: a failure on any single page fails the whole document
    /// and nothing is returned for the pages that did succeed.
    fn extract_document(&self, path: &Path) -> Result<Extraction, ExtractionError> {
        let temp_dir = TempDir::new()?;
        self.rasterize_pdf(path, temp_dir.path())?;

        let images = sorted_page_images(temp_dir.path())?;
        if images.is_empty() {
            return Err(ExtractionError::ExtractionFailed(
                "No images generated from PDF".to_string(),
            ));
        }

        // pdftoppm exits zero even when it could not render every page;
        // cross-check against the document's own page count.
        if let Some(expected) = pdf_page_count(path) {
            if images.len() as u32 != expected {
                return Err(ExtractionError::ExtractionFailed(format!(
                    "Rasterized {} of {} pages",
                    images.len(),
                    expected
                )));
            }
        }

        let bar = ProgressBar::new(images.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:30.cyan/blue}] page {pos}/{len}")
                .unwrap(),
        );

        let mut pages = Vec::with_capacity(images.len());
        for image_path in &images {
            pages.push(recognize(image_path, &self.language)?);
            bar.inc(1);
        }
        bar.finish_and_clear();

        // Rasterized images are dropped with the temp dir; only text survives.
        Ok(Extraction {
            text: assemble_pages(&pages),
            page_count: pages.len() as u32,
        })
    }

    /// Convert a PDF to one PNG per page using pdftoppm.
    fn rasterize_pdf(&self, pdf_path: &Path, output_dir: &Path) -> Result<(), ExtractionError> {
        let dpi = OCR_DPI.to_string();
        let status = Command::new("pdftoppm")
            .args(["-png", "-r", &dpi])
            .arg(pdf_path)
            .arg(output_dir.join("page"))
            .status();

        match status {
            Ok(s) if s.success() => Ok(()),
            Ok(_) => Err(ExtractionError::ExtractionFailed(
                "pdftoppm failed to convert PDF".to_string(),
            )),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(
                ExtractionError::ToolNotFound("pdftoppm (install poppler-utils)".to_string()),
            ),
            Err(e) => Err(ExtractionError::Io(e)),
        }
    }

    /// Check if required external tools are available.
    pub fn check_tools() -> Vec<(String, bool)> {
        ["tesseract", "pdftoppm", "pdfinfo"]
            .iter()
            .map(|tool| (tool.to_string(), check_binary(tool)))
            .collect()
    }
}

/// Concatenate page texts, preceding each with a 1-based page marker line.
fn assemble_pages(pages: &[String]) -> String {
    let mut all_text = String::new();
    for (i, page) in pages.iter().enumerate() {
        all_text.push_str(&format!("\n--- Page {} ---\n", i + 1));
        all_text.push_str(page);
    }
    all_text
}

/// List the rasterized page images in page order.
///
/// pdftoppm zero-pads page numbers to a uniform width (page-01.png,
/// page-02.png, ...), so a lexicographic sort is page order.
fn sorted_page_images(dir: &Path) -> Result<Vec<PathBuf>, ExtractionError> {
    let mut images: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| ext == "png")
                .unwrap_or(false)
        })
        .map(|e| e.path())
        .collect();

    images.sort();
    Ok(images)
}

/// Get the page count of a PDF via pdfinfo, if available.
fn pdf_page_count(pdf_path: &Path) -> Option<u32> {
    let output = Command::new("pdfinfo").arg(pdf_path).output().ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        if line.starts_with("Pages:") {
            return line.split_whitespace().nth(1).and_then(|s| s.parse().ok());
        }
    }
    None
}
