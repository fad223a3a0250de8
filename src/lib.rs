//! OCRScan - OCR text extraction, keyword search, and email discovery.
//!
//! A two-stage batch utility: the `extract` stage pulls text out of scanned
//! images and PDFs with Tesseract, filters it by a search keyword, and persists
//! the result as a JSON record. The `notify` stage reads such a record back,
//! harvests email addresses from the recognized text, and prints a simulated
//! notification per address.

pub mod classify;
pub mod cli;
pub mod emails;
pub mod keyword;
pub mod notify;
pub mod ocr;
pub mod record;
