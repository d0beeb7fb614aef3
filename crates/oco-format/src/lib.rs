//! Open Cut-Out Rig Format Library
//!
//! This crate reads, writes and generates OCO rigs: character armatures made
//! of limbs and bones, stored as JSON `.oco` files, along with the YAML config
//! file shared by OCO tools.
//!
//! # Overview
//!
//! - **Documents** own limbs, limbs own chains of bones, and bones can own
//!   further limbs. Positions are in centimeters with Y up.
//! - **Generators** append anatomical templates (arms, legs, spines, tails,
//!   hair, wings, snake and fish spines, fins) scaled to the document height.
//! - **Config** is a small YAML key/value store written by a hand-rolled YAML
//!   engine.
//!
//! # Example
//!
//! ```
//! use oco_format::{ArmOptions, BoneTree, Document, LegOptions, Side, SpineOptions};
//!
//! // Build a biped meta-rig
//! let mut doc = Document::new("Rex");
//! doc.new_spine(&SpineOptions::default()).unwrap();
//! for side in [Side::Left, Side::Right] {
//!     doc.new_arm(&ArmOptions { side, ..Default::default() }).unwrap();
//!     doc.new_leg(&LegOptions { side, ..Default::default() }).unwrap();
//! }
//! assert_eq!(doc.num_limbs(), 5);
//!
//! // Renumber the stacking order and save it
//! doc.normalize_z_indices(0);
//! let json = doc.to_json(None).unwrap();
//! assert_eq!(Document::from_json(&json).unwrap(), doc);
//! ```
//!
//! # Modules
//!
//! - [`rig`]: Documents, limbs, bones and the limb generators
//! - [`yaml`]: The restricted YAML engine
//! - [`config`]: The OCO config file and the rig library location
//! - [`icon`]: Document icon encoding and extraction
//! - [`paths`]: Path helpers
//! - [`math`]: Interpolation and distance helpers
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod icon;
pub mod math;
pub mod paths;
pub mod rig;
pub mod yaml;

// Re-export commonly used types at the crate root
pub use config::{Config, Library};
pub use error::{ConfigError, DumpError, GeneratorError, KeyPathError, OcoError, YamlError};
pub use rig::{
    get_bounds, unique_name, ArmOptions, Bone, BoneCursor, BoneTree, BoneType, Bounds, Document,
    DocumentType, Envelope, FinOptions, FishSpineOptions, ImageEncoding, LegOptions, Limb,
    LimbCategory, LimbType, Location, Side, SnakeSpineOptions, SpineOptions, View, WingOptions,
};
pub use yaml::{dump, load, KeyPath, Mapping, Scalar, Yaml};
