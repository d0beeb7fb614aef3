//! New command implementation
//!
//! Creates an OCO file from a rig template.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use oco_format::rig::DEFAULT_CHAIN_BONES;
use oco_format::{
    ArmOptions, BoneTree, Document, FinOptions, FishSpineOptions, ImageEncoding, LegOptions,
    LimbType, Location, Side, SnakeSpineOptions, SpineOptions, WingOptions,
};
use std::fmt;
use std::path::Path;
use std::process::ExitCode;
use std::str::FromStr;

/// Names accepted by `--template`.
pub const TEMPLATE_NAMES: [&str; 5] = ["biped", "quadruped", "bird", "fish", "snake"];

/// Names accepted by `--encoding`.
pub const ENCODING_NAMES: [&str; 3] = ["path", "abs-path", "base64"];

/// Predefined rigs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Template {
    /// Spine, two arms and two legs.
    #[default]
    Biped,
    /// Spine, front and back digitigrade legs, and a tail.
    Quadruped,
    /// Spine, digitigrade legs, wings and a tail.
    Bird,
    /// Fish spine and two fins.
    Fish,
    /// Snake spine.
    Snake,
}

impl Template {
    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Biped => "biped",
            Template::Quadruped => "quadruped",
            Template::Bird => "bird",
            Template::Fish => "fish",
            Template::Snake => "snake",
        }
    }

    /// Appends the template's limbs to `doc`.
    pub fn build(&self, doc: &mut Document) -> Result<()> {
        const SIDES: [Side; 2] = [Side::Left, Side::Right];
        match self {
            Template::Biped => {
                doc.new_spine(&SpineOptions::default())?;
                for side in SIDES {
                    doc.new_arm(&ArmOptions { side, ..Default::default() })?;
                    doc.new_leg(&LegOptions { side, ..Default::default() })?;
                }
            }
            Template::Quadruped => {
                doc.new_spine(&SpineOptions { hips: true, ..Default::default() })?;
                for side in SIDES {
                    doc.new_leg(&LegOptions {
                        side,
                        limb_type: LimbType::Digitigrade,
                        location: Location::Front,
                        ..Default::default()
                    })?;
                    doc.new_leg(&LegOptions {
                        side,
                        limb_type: LimbType::Digitigrade,
                        ..Default::default()
                    })?;
                }
                doc.new_tail(DEFAULT_CHAIN_BONES)?;
            }
            Template::Bird => {
                doc.new_spine(&SpineOptions::default())?;
                for side in SIDES {
                    doc.new_leg(&LegOptions {
                        side,
                        limb_type: LimbType::Digitigrade,
                        claws: true,
                        ..Default::default()
                    })?;
                    doc.new_wing(&WingOptions { side, ..Default::default() })?;
                }
                doc.new_tail(DEFAULT_CHAIN_BONES)?;
            }
            Template::Fish => {
                doc.new_fish_spine(&FishSpineOptions::default())?;
                for side in SIDES {
                    doc.new_fin(&FinOptions { side, ..Default::default() })?;
                }
            }
            Template::Snake => {
                doc.new_snake_spine(&SnakeSpineOptions::default())?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Template {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "biped" => Ok(Template::Biped),
            "quadruped" => Ok(Template::Quadruped),
            "bird" => Ok(Template::Bird),
            "fish" => Ok(Template::Fish),
            "snake" => Ok(Template::Snake),
            _ => Err(format!(
                "unknown template '{}' (expected {})",
                s,
                TEMPLATE_NAMES.join(", ")
            )),
        }
    }
}

/// Maps an `--encoding` name to the stored icon encoding.
pub fn parse_encoding(name: &str) -> Result<ImageEncoding> {
    match name {
        "path" => Ok(ImageEncoding::RelativePath),
        "abs-path" => Ok(ImageEncoding::AbsolutePath),
        "base64" => Ok(ImageEncoding::PngBase64),
        _ => bail!(
            "unknown icon encoding '{}' (expected {})",
            name,
            ENCODING_NAMES.join(", ")
        ),
    }
}

/// Options of the new command.
#[derive(Debug, Clone)]
pub struct NewOptions<'a> {
    pub name: Option<&'a str>,
    pub template: Template,
    pub height: Option<f64>,
    pub encoding: ImageEncoding,
    pub icon: Option<&'a str>,
    pub force: bool,
}

/// Builds the document described by `options`.
///
/// Without a name the document is named after the file stem of `out`.
pub fn build_document(out: &Path, options: &NewOptions<'_>) -> Result<Document> {
    let name = match options.name {
        Some(name) => name.to_owned(),
        None => out
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Character".to_owned()),
    };

    let mut doc = Document::new(name);
    if let Some(height) = options.height {
        if !(height.is_finite() && height > 0.0) {
            bail!("height must be a positive number of centimeters, got {}", height);
        }
        doc.height = height;
    }
    doc.image_encoding = options.encoding;
    if let Some(icon) = options.icon {
        doc.icon = icon.to_owned();
    }

    options.template.build(&mut doc)?;
    doc.normalize_z_indices(0);
    Ok(doc)
}

/// Run the new command
///
/// # Arguments
/// * `out` - Path of the OCO file to create
/// * `options` - Template, document name, height and icon settings
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(out: &str, options: &NewOptions<'_>) -> Result<ExitCode> {
    let out_path = Path::new(out);
    if out_path.exists() && !options.force {
        bail!("Destination already exists: {} (use --force to overwrite)", out);
    }

    println!(
        "{} {} ({})",
        "Creating:".cyan().bold(),
        out,
        options.template
    );

    let doc = build_document(out_path, options)?;
    doc.to_file(out_path)
        .with_context(|| format!("Failed to write OCO file: {}", out))?;

    println!(
        "{} {} with {} limbs and {} bones",
        "SUCCESS".green().bold(),
        doc.name,
        doc.num_limbs(),
        doc.num_bones()
    );
    Ok(ExitCode::SUCCESS)
}
