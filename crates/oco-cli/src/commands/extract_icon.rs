//! Extract-icon command implementation
//!
//! Finds the icon of an OCO file, decoding embedded icons to a PNG file.

use anyhow::{Context, Result};
use colored::Colorize;
use oco_format::Document;
use std::path::Path;
use std::process::ExitCode;

/// Run the extract-icon command
///
/// # Arguments
/// * `file` - Path to the OCO file
/// * `out` - Where to write an embedded icon (default: next to the file, with a `.png` extension)
///
/// # Returns
/// Exit code: 0 when an icon was found, 1 otherwise
pub fn run(file: &str, out: Option<&str>) -> Result<ExitCode> {
    println!("{} {}", "Extracting icon:".cyan().bold(), file);

    let icon = Document::extract_icon(Path::new(file), out.map(Path::new))
        .with_context(|| format!("Failed to extract icon from: {}", file))?;

    match icon {
        Some(path) => {
            println!("{} {}", "SUCCESS".green().bold(), path.display());
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("{} no icon stored in {}", "!".yellow(), file);
            Ok(ExitCode::from(1))
        }
    }
}
