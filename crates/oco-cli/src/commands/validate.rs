//! Validate command implementation
//!
//! Loads an OCO file and reports whether it is usable.

use anyhow::Result;
use colored::Colorize;
use oco_format::{Document, OcoError};
use std::path::Path;
use std::process::ExitCode;

/// Loads `file`, returning the document or the load error.
pub fn check(file: &Path) -> Result<Document, OcoError> {
    Document::from_file(file)
}

/// Run the validate command
///
/// # Arguments
/// * `file` - Path to the OCO file
///
/// # Returns
/// Exit code: 0 if the file loads, 1 otherwise
pub fn run(file: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), file);

    match check(Path::new(file)) {
        Ok(doc) => {
            if doc.limbs.is_empty() {
                println!("  {} document has no limbs", "!".yellow());
            }
            println!(
                "{} {} ({} limbs, {} bones)",
                "SUCCESS".green().bold(),
                doc.name,
                doc.num_limbs(),
                doc.num_bones()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{} {}", "FAILED".red().bold(), e);
            Ok(ExitCode::from(1))
        }
    }
}
