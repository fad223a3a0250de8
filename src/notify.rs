//! Simulated outreach to discovered addresses.
//!
//! No mail transport is involved anywhere in this module: the "send" is a
//! printed transcript, and the only persistence is an opt-in plain-text list
//! of the discovered addresses.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

/// Fixed subject line used in every simulated message.
pub const SUBJECT: &str = "Automated Message from OCR System";

/// Render the simulated message for one recipient, dated `date`
/// (human-readable, e.g. "March 05, 2026").
pub fn transcript_on(recipient: &str, date: &str) -> String {
    format!(
        "\n--- Simulated Email to: {recipient} ---\n\
         Date: {date}\n\
         Subject: {SUBJECT}\n\
         \n\
         Hello,\n\
         This is an automated message sent on {date}.\n\
         Your email address was detected by our OCR system.\n\
         This is a test message and requires no action on your part.\n\
         \n\
         Best regards,\n\
         Automated System\n\
         --- End of Simulated Email ---\n"
    )
}

/// Render the simulated message for one recipient, dated today.
pub fn transcript(recipient: &str) -> String {
    transcript_on(recipient, &Local::now().format("%B %d, %Y").to_string())
}

/// Print the simulated message for one recipient.
pub fn simulate_send(recipient: &str) {
    tracing::info!(recipient, "simulating notification");
    print!("{}", transcript(recipient));
}

/// Derive the address-list path from the record path: extension replaced by
/// `_emails.txt`, in the same directory.
pub fn addresses_path(record_path: &Path) -> PathBuf {
    let stem = record_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    record_path.with_file_name(format!("{}_emails.txt", stem))
}

/// Write each address on its own line, newline-terminated, next to the
/// record. Overwrites silently. Returns the output path.
pub fn save_addresses(record_path: &Path, emails: &[String]) -> std::io::Result<PathBuf> {
    let output_path = addresses_path(record_path);
    let mut file = std::fs::File::create(&output_path)?;
    for email in emails {
        writeln!(file, "{}", email)?;
    }
    Ok(output_path)
}
