//! The notification pipeline command.

use std::path::PathBuf;

use anyhow::Context;
use console::style;

use super::prompt;
use crate::emails;
use crate::notify;
use crate::record::ExtractionRecord;

/// Run the notification pipeline: load a saved record, harvest email
/// addresses from its text, simulate one notification per address, and
/// optionally persist the address list.
pub fn cmd_notify(file: Option<PathBuf>, save_without_asking: bool) -> anyhow::Result<()> {
    println!("{}", style("Email Discovery from OCR Records").bold());
    println!("{}", "=".repeat(50));

    let file = match file {
        Some(f) => f,
        None => PathBuf::from(prompt::prompt_line("Enter the path to the OCR JSON file")?),
    };

    if !file.exists() {
        anyhow::bail!("The file {} does not exist", file.display());
    }

    println!("\nLoading OCR data...");
    let record = ExtractionRecord::load(&file).context("Failed to load OCR data")?;

    println!("Searching for email addresses...");
    let found = emails::find_emails(&record.full_text);

    if found.is_empty() {
        println!("No email addresses found in the OCR data.");
        return Ok(());
    }

    println!(
        "\n{} Found {} email address(es):",
        style("✓").green(),
        found.len()
    );
    for (i, email) in found.iter().enumerate() {
        println!("{}. {}", i + 1, email);
    }

    println!(
        "\n{}",
        style("SIMULATING EMAIL SENDING (no actual emails sent)").bold()
    );
    println!("{}", "=".repeat(50));
    for email in &found {
        notify::simulate_send(email);
    }
    println!(
        "Simulation complete. Would have sent emails to {} addresses.",
        found.len()
    );

    let wants_save = save_without_asking
        || prompt::prompt_yes_no("\nDo you want to save the found email addresses to a file?")?;
    if wants_save {
        let output_path = notify::save_addresses(&file, &found)?;
        println!("Email addresses saved to {}", output_path.display());
    }

    Ok(())
}
