//! Tesseract engine invocation and health probing.

use std::path::Path;
use std::process::Command;

use super::ExtractionError;

/// Check if a binary is available in PATH.
pub fn check_binary(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Probe the OCR engine once before any extraction attempt.
///
/// Runs `tesseract --version` and returns the reported version line, or
/// [`ExtractionError::EngineUnavailable`] when the engine is missing or
/// misconfigured. Callers abort the whole run on failure.
pub fn probe() -> Result<String, ExtractionError> {
    let output = Command::new("tesseract").arg("--version").output();

    match output {
        Ok(output) if output.status.success() => {
            // Tesseract prints its version banner on stderr on some builds.
            let banner = if output.stdout.is_empty() {
                String::from_utf8_lossy(&output.stderr).to_string()
            } else {
                String::from_utf8_lossy(&output.stdout).to_string()
            };
            let version = banner.lines().next().unwrap_or("tesseract").to_string();
            tracing::info!(%version, "OCR engine available");
            Ok(version)
        }
        Ok(output) => Err(ExtractionError::EngineUnavailable(format!(
            "tesseract --version failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        ))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ExtractionError::EngineUnavailable(
                "tesseract not found in PATH (install tesseract-ocr)".to_string(),
            ))
        }
        Err(e) => Err(ExtractionError::Io(e)),
    }
}

/// Run Tesseract OCR on a single image file and return the recognized text.
pub fn recognize(image_path: &Path, language: &str) -> Result<String, ExtractionError> {
    let output = Command::new("tesseract")
        .arg(image_path)
        .arg("stdout")
        .args(["-l", language])
        .output();

    match output {
        Ok(output) => {
            if output.status.success() {
                Ok(String::from_utf8_lossy(&output.stdout).to_string())
            } else {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(ExtractionError::ExtractionFailed(format!(
                    "tesseract failed: {}",
                    stderr.trim()
                )))
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ExtractionError::ToolNotFound(
            "tesseract (install tesseract-ocr)".to_string(),
        )),
        Err(e) => Err(ExtractionError::Io(e)),
    }
}
