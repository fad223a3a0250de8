//! Interactive prompting helpers.

use std::io::{self, Write};

/// Print a prompt and read one trimmed line from stdin.
pub fn prompt_line(message: &str) -> io::Result<String> {
    print!("{}: ", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask a yes/no question; only an explicit "y" or "yes" counts as yes.
pub fn prompt_yes_no(message: &str) -> io::Result<bool> {
    let answer = prompt_line(&format!("{} (y/n)", message))?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}
