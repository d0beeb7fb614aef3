//! Bones: named joints with child bones and child limbs.

use serde_json::{json, Value};

use super::bounds::Bounds;
use super::fields;
use super::limb::Limb;
use super::tree::BoneTree;
use super::types::{BoneType, LimbCategory, LimbType, Location, Side};
use crate::math;

/// Name given to bones loaded without one.
pub const DEFAULT_BONE_NAME: &str = "Bone";

/// Silhouette around a bone.
///
/// In a meta-rig it contains the design and helps place the joint; in a
/// rigged character it follows the artwork's outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    /// Width around the joint, `-1` when unset.
    pub width: f64,
    /// Offset along the local X axis; positive is to the right when the bone
    /// points at the ground.
    pub offset: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            width: -1.0,
            offset: 0.0,
        }
    }
}

/// A joint of a limb, in centimeters with Y up.
#[derive(Debug, Clone, PartialEq)]
pub struct Bone {
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// Arbitrary stacking order: higher is under, lower is above.
    pub z_index: i64,
    /// Whether the bone is attached to its parent.
    pub attached: bool,
    pub bone_type: BoneType,
    pub envelope: Envelope,
    pub children: Vec<Bone>,
    pub limbs: Vec<Limb>,
}

impl Bone {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x: 0.0,
            y: 0.0,
            z_index: 0,
            attached: false,
            bone_type: BoneType::Custom,
            envelope: Envelope::default(),
            children: Vec::new(),
            limbs: Vec::new(),
        }
    }

    /// Distance to the first child, 0 without children.
    ///
    /// Bones with several children (a wing bone carrying feathers, for
    /// instance) still measure to the first one only.
    pub fn length(&self) -> f64 {
        match self.children.first() {
            Some(child) => math::length([self.x, self.y], [child.x, child.y]),
            None => 0.0,
        }
    }

    pub fn position(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Moves the bone by `(dx, dy)`, and every descendant bone when
    /// `translate_children` is set. Child limbs don't move.
    pub fn translate(&mut self, dx: f64, dy: f64, translate_children: bool) {
        self.x += dx;
        self.y += dy;
        if translate_children {
            for child in &mut self.children {
                child.translate(dx, dy, true);
            }
        }
    }

    /// Moves the bone to `(x, y)`. Descendant bones follow when
    /// `translate_children` is set.
    pub fn translate_to(&mut self, x: f64, y: f64, translate_children: bool) {
        let (dx, dy) = (x - self.x, y - self.y);
        self.x = x;
        self.y = y;
        if translate_children {
            for child in &mut self.children {
                child.translate(dx, dy, true);
            }
        }
    }

    /// This bone, its descendants, and the bones of its child limbs.
    pub fn num_bones(&self) -> usize {
        1 + self.children.iter().map(Bone::num_bones).sum::<usize>()
            + self.limbs.iter().map(Limb::num_bones).sum::<usize>()
    }

    /// Own limbs plus the limbs counted by the child bones.
    pub fn num_limbs(&self) -> usize {
        self.children.iter().map(Bone::num_limbs).sum::<usize>() + self.limbs.len()
    }

    /// Every limb reachable from this bone: own limbs (and theirs), then the
    /// children's.
    pub fn limbs_recursive(&self) -> Vec<&Limb> {
        let mut limbs = Vec::new();
        for limb in &self.limbs {
            limbs.push(limb);
            limbs.extend(limb.limbs_recursive());
        }
        for child in &self.children {
            limbs.extend(child.limbs_recursive());
        }
        limbs
    }

    /// Appends an empty child limb and returns it.
    pub fn new_limb(
        &mut self,
        category: LimbCategory,
        side: Side,
        location: Location,
        limb_type: LimbType,
    ) -> &mut Limb {
        self.limbs.push(Limb::new(category, side, location, limb_type));
        let index = self.limbs.len() - 1;
        &mut self.limbs[index]
    }

    /// Bounding box of the bone and everything below it.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::from_point(self.x, self.y);
        for child in &self.children {
            bounds = bounds.union(child.bounds());
        }
        for limb in &self.limbs {
            if let Some(limb_bounds) = limb.bounds() {
                bounds = bounds.union(limb_bounds);
            }
        }
        bounds
    }

    pub fn to_object(&self) -> Value {
        json!({
            "name": self.name,
            "x": self.x,
            "y": self.y,
            "zIndex": self.z_index,
            "attached": self.attached,
            "children": self.children.iter().map(Bone::to_object).collect::<Vec<_>>(),
            "limbs": self.limbs.iter().map(Limb::to_object).collect::<Vec<_>>(),
            "type": self.bone_type.as_str(),
            "envelop": {
                "width": self.envelope.width,
                "offset": self.envelope.offset,
            },
        })
    }

    /// Builds a bone from its JSON object. Missing fields take their defaults.
    pub fn from_object(data: &Value) -> Self {
        let defaults = Envelope::default();
        let envelope = data.get("envelop").unwrap_or(&Value::Null);
        Self {
            name: fields::string_or(data, "name", DEFAULT_BONE_NAME),
            x: fields::f64_or(data, "x", 0.0),
            y: fields::f64_or(data, "y", 0.0),
            z_index: fields::i64_or(data, "zIndex", 0),
            attached: fields::bool_or(data, "attached", false),
            bone_type: fields::enum_or_default(data, "type"),
            envelope: Envelope {
                width: fields::f64_or(envelope, "width", defaults.width),
                offset: fields::f64_or(envelope, "offset", defaults.offset),
            },
            children: fields::array(data, "children").iter().map(Bone::from_object).collect(),
            limbs: fields::array(data, "limbs").iter().map(Limb::from_object).collect(),
        }
    }
}

impl BoneTree for Bone {
    fn collect_bones<'a>(&'a self, out: &mut Vec<&'a Bone>) {
        out.push(self);
        for child in &self.children {
            child.collect_bones(out);
        }
        for limb in &self.limbs {
            limb.collect_bones(out);
        }
    }

    fn visit_bones_mut(&mut self, f: &mut dyn FnMut(&mut Bone)) {
        f(self);
        for child in &mut self.children {
            child.visit_bones_mut(f);
        }
        for limb in &mut self.limbs {
            limb.visit_bones_mut(f);
        }
    }
}
