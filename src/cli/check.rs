//! External tool availability check.

use console::style;

use crate::ocr::{self, TextExtractor};

/// Report availability of the external OCR tools.
pub fn cmd_check() -> anyhow::Result<()> {
    println!("\n{}", style("OCR Tool Status").bold());
    println!("{}", "-".repeat(50));

    let tools = TextExtractor::check_tools();
    let mut all_found = true;

    for (tool, available) in &tools {
        let status = if *available {
            style("✓ found").green()
        } else {
            all_found = false;
            style("✗ not found").red()
        };
        println!("  {:<12} {}", tool, status);
    }

    match ocr::probe() {
        Ok(version) => println!("\n  {} {}", style("→").green(), version),
        Err(err) => println!("\n  {} {}", style("!").yellow(), err),
    }

    if !all_found {
        println!("\nInstall missing tools: apt install tesseract-ocr poppler-utils");
    }

    Ok(())
}
