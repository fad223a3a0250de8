//! File type classification by extension.
//!
//! Decides whether an input file goes down the image path (single Tesseract
//! pass) or the document path (per-page rasterization first). Anything else is
//! rejected before any processing starts.

use std::path::Path;

use thiserror::Error;

/// Image extensions handled by direct OCR.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "gif"];

/// Document extensions that require rasterization before OCR.
pub const DOCUMENT_EXTENSIONS: &[&str] = &["pdf"];

/// Kind of input file, determined from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Raster image, OCR'd in one pass.
    Image,
    /// Paginated document (PDF), rasterized page by page.
    Document,
}

/// Error for files whose extension is not recognized.
#[derive(Debug, Error)]
#[error("Unsupported file format: .{extension}")]
pub struct UnsupportedFormat {
    /// The offending extension, lowercased (empty if the path had none).
    pub extension: String,
}

impl UnsupportedFormat {
    /// All supported extensions, for reporting to the operator.
    pub fn supported() -> Vec<&'static str> {
        IMAGE_EXTENSIONS
            .iter()
            .chain(DOCUMENT_EXTENSIONS.iter())
            .copied()
            .collect()
    }
}

/// Classify a file by its extension (case-insensitive).
pub fn classify(path: &Path) -> Result<FileKind, UnsupportedFormat> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Ok(FileKind::Image)
    } else if DOCUMENT_EXTENSIONS.contains(&extension.as_str()) {
        Ok(FileKind::Document)
    } else {
        Err(UnsupportedFormat { extension })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_classify_images() {
        for ext in IMAGE_EXTENSIONS {
            let path = PathBuf::from(format!("scan.{}", ext));
            assert_eq!(classify(&path).unwrap(), FileKind::Image);
        }
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(
            classify(Path::new("SCAN.JPG")).unwrap(),
            FileKind::Image
        );
        assert_eq!(
            classify(Path::new("report.PDF")).unwrap(),
            FileKind::Document
        );
    }

    #[test]
    fn test_classify_pdf() {
        assert_eq!(
            classify(Path::new("dir/report.pdf")).unwrap(),
            FileKind::Document
        );
    }

    #[test]
    fn test_classify_rejects_docx() {
        let err = classify(Path::new("letter.docx")).unwrap_err();
        assert_eq!(err.extension, "docx");
        assert!(UnsupportedFormat::supported().contains(&"pdf"));
        assert!(UnsupportedFormat::supported().contains(&"jpg"));
    }

    #[test]
    fn test_classify_rejects_missing_extension() {
        let err = classify(Path::new("README")).unwrap_err();
        assert_eq!(err.extension, "");
    }
}
