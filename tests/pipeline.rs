//! Pipeline integration tests.
//!
//! Exercises the two stages the way the CLI chains them, bypassing the
//! external OCR engine: recognized text goes through the keyword filter into
//! a persisted record, and the record is read back for email discovery.

use std::path::Path;

use ocrscan::classify::{classify, FileKind};
use ocrscan::emails::find_emails;
use ocrscan::keyword::filter_lines;
use ocrscan::notify;
use ocrscan::record::ExtractionRecord;

const RECOGNIZED_TEXT: &str = "\n--- Page 1 ---\n\
    Invoice 2041\n\
    Contact: billing@example.com\n\
    \n--- Page 2 ---\n\
    Reminder: INVOICE overdue\n\
    Second contact: billing@example.com, ops@example.org\n";

#[test]
fn extraction_record_feeds_notification_stage() {
    let dir = tempfile::tempdir().unwrap();

    // Stage one: filter and persist.
    let results = filter_lines(RECOGNIZED_TEXT, "invoice");
    assert_eq!(results, vec!["Invoice 2041", "Reminder: INVOICE overdue"]);

    let record = ExtractionRecord::new(
        Path::new("scan.pdf"),
        RECOGNIZED_TEXT.to_string(),
        "invoice".to_string(),
        results,
    );
    assert_eq!(record.result_count, 2);

    let record_path = record.save_in(dir.path()).unwrap();
    assert_eq!(
        record_path.file_name().unwrap(),
        "scan_ocr_results.json"
    );

    // Stage two: load, harvest, persist addresses.
    let loaded = ExtractionRecord::load(&record_path).unwrap();
    let found = find_emails(&loaded.full_text);
    assert_eq!(found, vec!["billing@example.com", "ops@example.org"]);

    let addresses_path = notify::save_addresses(&record_path, &found).unwrap();
    assert_eq!(
        addresses_path.file_name().unwrap(),
        "scan_ocr_results_emails.txt"
    );
    let contents = std::fs::read_to_string(&addresses_path).unwrap();
    assert_eq!(contents, "billing@example.com\nops@example.org\n");
}

#[test]
fn page_markers_survive_the_round_trip_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let record = ExtractionRecord::new(
        Path::new("doc.pdf"),
        RECOGNIZED_TEXT.to_string(),
        String::new(),
        Vec::new(),
    );
    let path = record.save_in(dir.path()).unwrap();

    let loaded = ExtractionRecord::load(&path).unwrap();
    let p1 = loaded.full_text.find("--- Page 1 ---").unwrap();
    let p2 = loaded.full_text.find("--- Page 2 ---").unwrap();
    assert!(p1 < p2);
}

#[test]
fn unsupported_input_is_rejected_before_any_processing() {
    let err = classify(Path::new("notes.docx")).unwrap_err();
    assert_eq!(err.extension, "docx");

    // Supported inputs still classify; nothing about the rejection is fatal
    // to a later run.
    assert_eq!(classify(Path::new("photo.png")).unwrap(), FileKind::Image);
}
