//! The extraction pipeline command.

use std::path::PathBuf;

use anyhow::Context;
use console::style;

use super::prompt;
use crate::classify::UnsupportedFormat;
use crate::keyword;
use crate::ocr::{self, ExtractionError, TextExtractor};
use crate::record::ExtractionRecord;

/// Matching lines shown in the summary before deferring to the JSON file.
const DISPLAY_LIMIT: usize = 10;

/// Run the extraction pipeline: probe engine, OCR the file, filter by
/// keyword, persist the record, print a summary.
pub fn cmd_extract(
    file: Option<PathBuf>,
    keyword_arg: Option<String>,
    lang: &str,
) -> anyhow::Result<()> {
    println!("{}", style("OCR Text Extraction").bold());
    println!("{}", "=".repeat(50));

    // The engine is probed before the operator types anything; a missing
    // install fails the whole run up front.
    let version = ocr::probe().context(
        "Tesseract OCR is not properly installed or configured. \
         Install it and ensure it is in your PATH",
    )?;
    println!("  {} {}", style("✓").green(), version);

    let keyword_term = match keyword_arg {
        Some(k) => k,
        None => prompt::prompt_line("Enter the keyword you want to extract")?,
    };
    let file = match file {
        Some(f) => f,
        None => PathBuf::from(prompt::prompt_line("Enter the path to the file (image or PDF)")?),
    };

    if !file.exists() {
        anyhow::bail!("The file {} does not exist", file.display());
    }

    println!("\nProcessing file, please wait...");

    let extractor = TextExtractor::new().with_language(lang);
    let extraction = match extractor.extract(&file) {
        Ok(extraction) => extraction,
        Err(ExtractionError::Unsupported(err)) => {
            anyhow::bail!(
                "{} (supported formats: {})",
                err,
                UnsupportedFormat::supported().join(", ")
            );
        }
        Err(err) => {
            return Err(err).context("Failed to extract text from the file");
        }
    };
    tracing::info!(pages = extraction.page_count, "extraction finished");

    let results = keyword::filter_lines(&extraction.text, &keyword_term);
    let record = ExtractionRecord::new(&file, extraction.text, keyword_term, results);
    let output_path = record.save()?;

    println!("\n{}", style("Text extraction completed!").green());
    println!("Results saved to: {}", output_path.display());

    println!("\nSummary:");
    println!(
        "Total characters extracted: {}",
        record.full_text.chars().count()
    );
    println!(
        "Found {} lines containing '{}'",
        record.result_count, record.keyword
    );

    if !record.keyword_results.is_empty() {
        let shown = record.result_count.min(DISPLAY_LIMIT);
        println!("\nFirst {} lines containing the keyword:", shown);
        for (i, line) in record.keyword_results.iter().take(shown).enumerate() {
            println!("{}. {}", i + 1, line);
        }
        if record.result_count > shown {
            println!(
                "...and {} more results (see JSON file for the complete list)",
                record.result_count - shown
            );
        }
    }

    Ok(())
}
