//! The OCO rig tree.
//!
//! A [`Document`] owns [`Limb`]s, each limb owns chains of [`Bone`]s, and any
//! bone may own further limbs (feathers on a wing bone, fingers on a hand).
//! Every level serializes to and from the JSON objects stored in `.oco` files
//! and shares the z-index helpers of [`BoneTree`].
//!
//! # Example
//! ```
//! use oco_format::rig::{BoneTree, Document, SpineOptions, DEFAULT_CHAIN_BONES};
//!
//! let mut doc = Document::new("Rex");
//! doc.new_spine(&SpineOptions::default()).unwrap();
//! doc.new_tail(DEFAULT_CHAIN_BONES).unwrap();
//!
//! let json = doc.to_json(None).unwrap();
//! let loaded = Document::from_json(&json).unwrap();
//! assert_eq!(loaded.num_bones(), doc.num_bones());
//! assert_eq!(loaded.bones().len(), doc.num_bones());
//! ```

mod bone;
mod bounds;
mod cursor;
mod document;
mod fields;
mod generators;
mod limb;
mod naming;
mod tree;
mod types;

#[cfg(test)]
mod tests;

pub use bone::{Bone, Envelope, DEFAULT_BONE_NAME};
pub use bounds::{get_bounds, Bounds};
pub use cursor::BoneCursor;
pub use document::{
    Document, DEFAULT_CENTER_OF_MASS, DEFAULT_DOCUMENT_NAME, DEFAULT_HEIGHT, DEFAULT_PIXELS_PER_CM,
    DEFAULT_RESOLUTION, DEFAULT_WIDTH, DEFAULT_WORLD,
};
pub use generators::{
    ArmOptions, FinOptions, FishSpineOptions, LegOptions, SnakeSpineOptions, SpineOptions,
    WingOptions, DEFAULT_CHAIN_BONES, DEFAULT_FEATHERS, DEFAULT_FISHBONES,
};
pub use limb::{Limb, DEFAULT_ARMATURE_BONES, DEFAULT_ARMATURE_LENGTH};
pub use naming::unique_name;
pub use tree::BoneTree;
pub use types::{
    BoneType, DocumentType, ImageEncoding, LimbCategory, LimbType, Location, Side, View,
};
