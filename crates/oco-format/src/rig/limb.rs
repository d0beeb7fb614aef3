//! Limbs: categorized chains of bones.

use serde_json::{json, Value};

use super::bone::Bone;
use super::bounds::{get_bounds, Bounds};
use super::fields;
use super::naming::unique_name;
use super::tree::BoneTree;
use super::types::{LimbCategory, LimbType, Location, Side};

/// Default bone count for [`Limb::new_armature`].
pub const DEFAULT_ARMATURE_BONES: usize = 2;
/// Default chain length for [`Limb::new_armature`], in centimeters.
pub const DEFAULT_ARMATURE_LENGTH: f64 = 100.0;

/// A limb of a document (or of a bone), holding one or more bone chains.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Limb {
    /// Stored under the `limb` key.
    pub category: LimbCategory,
    /// Stored under the `type` key.
    pub limb_type: LimbType,
    pub side: Side,
    pub location: Location,
    /// Root bones.
    pub armature: Vec<Bone>,
}

impl Limb {
    pub fn new(category: LimbCategory, side: Side, location: Location, limb_type: LimbType) -> Self {
        Self {
            category,
            limb_type,
            side,
            location,
            armature: Vec::new(),
        }
    }

    pub fn num_bones(&self) -> usize {
        self.armature.iter().map(Bone::num_bones).sum()
    }

    /// Counts this limb and the limbs attached to its bones.
    pub fn num_limbs(&self) -> usize {
        1 + self.armature.iter().map(Bone::num_limbs).sum::<usize>()
    }

    /// Every limb attached to the bones of this limb, recursively.
    pub fn limbs_recursive(&self) -> Vec<&Limb> {
        self.armature.iter().flat_map(Bone::limbs_recursive).collect()
    }

    /// Bounding box of all bones, or `None` for an empty limb.
    pub fn bounds(&self) -> Option<Bounds> {
        get_bounds(&self.armature)
    }

    /// Appends a straight chain of `count` bones named after `name` and
    /// returns its root.
    ///
    /// Bones are spread along X from `-length / 2` with `y = 100`; z-indices
    /// decrease from `round(length)` so each bone sits above its parent.
    /// Names are made unique within the chain (`Arm`, `Arm 2`, `Arm 3`...).
    /// Returns `None` when `count` is 0.
    ///
    /// # Example
    /// ```
    /// use oco_format::rig::{Limb, LimbCategory, LimbType, Location, Side};
    ///
    /// let mut limb = Limb::new(LimbCategory::Tail, Side::None, Location::Back, LimbType::Custom);
    /// let root = limb.new_armature("Tail", 3, 100.0).unwrap();
    /// assert_eq!(root.x, -50.0);
    /// assert_eq!(root.children[0].name, "Tail 2");
    /// assert_eq!(limb.num_bones(), 3);
    /// ```
    pub fn new_armature(&mut self, name: &str, count: usize, length: f64) -> Option<&mut Bone> {
        let step = if count > 1 {
            length / (count - 1) as f64
        } else {
            0.0
        };
        let mut names: Vec<String> = Vec::with_capacity(count);
        let mut chain: Vec<Bone> = Vec::with_capacity(count);
        for i in 0..count {
            let bone_name = unique_name(name, &names);
            names.push(bone_name.clone());
            let mut bone = Bone::new(bone_name);
            bone.x = -length / 2.0 + step * i as f64;
            bone.y = 100.0;
            bone.z_index = length.round() as i64 - i as i64;
            bone.attached = i > 0;
            chain.push(bone);
        }

        let mut root = chain.pop()?;
        while let Some(mut parent) = chain.pop() {
            parent.children.push(root);
            root = parent;
        }
        self.armature.push(root);
        self.armature.last_mut()
    }

    pub fn to_object(&self) -> Value {
        json!({
            "limb": self.category.as_str(),
            "type": self.limb_type.as_str(),
            "side": self.side.as_str(),
            "location": self.location.as_str(),
            "armature": self.armature.iter().map(Bone::to_object).collect::<Vec<_>>(),
        })
    }

    /// Builds a limb from its JSON object. Missing fields take their defaults.
    pub fn from_object(data: &Value) -> Self {
        Self {
            category: fields::enum_or_default(data, "limb"),
            limb_type: fields::enum_or_default(data, "type"),
            side: fields::enum_or_default(data, "side"),
            location: fields::enum_or_default(data, "location"),
            armature: fields::array(data, "armature").iter().map(Bone::from_object).collect(),
        }
    }
}

impl BoneTree for Limb {
    fn collect_bones<'a>(&'a self, out: &mut Vec<&'a Bone>) {
        for bone in &self.armature {
            bone.collect_bones(out);
        }
    }

    fn visit_bones_mut(&mut self, f: &mut dyn FnMut(&mut Bone)) {
        for bone in &mut self.armature {
            bone.visit_bones_mut(f);
        }
    }
}
