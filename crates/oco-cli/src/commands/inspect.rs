//! Inspect command implementation
//!
//! Prints a summary of an OCO file: document fields, counts, bounds and one
//! line per limb.

use anyhow::{Context, Result};
use colored::Colorize;
use oco_format::{Bounds, Document, DocumentType, Limb, LimbCategory, LimbType, Location, Side};
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

/// Machine-readable summary of a document.
#[derive(Debug, Serialize)]
pub struct InspectOutput {
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub height: f64,
    pub width: f64,
    pub resolution: [u32; 2],
    pub bones: usize,
    pub limbs: usize,
    pub bounds: Option<Bounds>,
    pub limb_list: Vec<LimbSummary>,
}

/// One limb of [`InspectOutput`], nested limbs included.
#[derive(Debug, Serialize)]
pub struct LimbSummary {
    pub category: LimbCategory,
    #[serde(rename = "type")]
    pub limb_type: LimbType,
    pub side: Side,
    pub location: Location,
    pub bones: usize,
    /// Names of the root bones.
    pub roots: Vec<String>,
}

impl LimbSummary {
    fn new(limb: &Limb) -> Self {
        Self {
            category: limb.category,
            limb_type: limb.limb_type,
            side: limb.side,
            location: limb.location,
            bones: limb.num_bones(),
            roots: limb.armature.iter().map(|b| b.name.clone()).collect(),
        }
    }
}

/// Builds the summary of `doc`.
pub fn summarize(doc: &Document) -> InspectOutput {
    InspectOutput {
        name: doc.name.clone(),
        doc_type: doc.doc_type,
        height: doc.height,
        width: doc.width,
        resolution: doc.resolution,
        bones: doc.num_bones(),
        limbs: doc.num_limbs(),
        bounds: doc.bounds(),
        limb_list: doc.limbs_recursive().into_iter().map(LimbSummary::new).collect(),
    }
}

/// Run the inspect command
///
/// # Arguments
/// * `file` - Path to the OCO file
/// * `json_output` - Print the summary as JSON instead of colored text
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(file: &str, json_output: bool) -> Result<ExitCode> {
    let doc = Document::from_file(Path::new(file))
        .with_context(|| format!("Failed to load OCO file: {}", file))?;
    let summary = summarize(&doc);

    if json_output {
        let output = serde_json::to_string_pretty(&summary)?;
        println!("{}", output);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Inspecting:".cyan().bold(), file);
    println!("{} {} ({})", "Name:".dimmed(), summary.name.bold(), summary.doc_type);
    println!(
        "{} {:.1} x {:.1} cm",
        "Size:".dimmed(),
        summary.width,
        summary.height
    );
    println!(
        "{} {}x{}",
        "Resolution:".dimmed(),
        summary.resolution[0],
        summary.resolution[1]
    );
    println!(
        "{} {} bones in {} limbs",
        "Armature:".dimmed(),
        summary.bones,
        summary.limbs
    );
    match summary.bounds {
        Some(b) => println!(
            "{} left {:.1}, top {:.1}, right {:.1}, bottom {:.1}",
            "Bounds:".dimmed(),
            b.left,
            b.top,
            b.right,
            b.bottom
        ),
        None => println!("{} {}", "Bounds:".dimmed(), "none".yellow()),
    }

    if !summary.limb_list.is_empty() {
        println!();
        for limb in &summary.limb_list {
            println!("  {} {}", "-".dimmed(), describe(limb));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// One-line description of a limb, e.g. `arm (hominoid, L, Fr): 4 bones [Arm]`.
fn describe(limb: &LimbSummary) -> String {
    let qualifiers: Vec<&str> = [limb.limb_type.as_str(), limb.side.as_str(), limb.location.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    format!(
        "{} ({}): {} bones [{}]",
        limb.category.as_str().bold(),
        qualifiers.join(", "),
        limb.bones,
        limb.roots.join(", ")
    )
}
