//! Procedural limb generators.
//!
//! Bone positions come from anatomical tables expressed as fractions of the
//! document height `u`. X is multiplied by a side sign so one table serves
//! both sides of the body in every view. A `position` option moves the whole
//! limb so that its first bone lands on the requested point.
//!
//! Every generator returns `Ok(None)` when the options ask for fewer than two
//! bones, and otherwise appends the new limb to the document and returns it.

mod appendages;
mod axial;
mod limbs;

pub use appendages::{FinOptions, WingOptions, DEFAULT_FEATHERS, DEFAULT_FISHBONES};
pub use axial::{FishSpineOptions, SnakeSpineOptions, SpineOptions, DEFAULT_CHAIN_BONES};
pub use limbs::{ArmOptions, LegOptions};

use super::bone::Bone;
use super::cursor::BoneCursor;
use super::naming::unique_name;
use super::types::{BoneType, Side, View};
use crate::error::GeneratorError;

type Point = [f64; 2];

/// X sign for arms and legs.
fn limb_side_sign(side: Side, view: View) -> f64 {
    match (side, view) {
        (Side::Right, View::Front) | (Side::Left, View::Back) | (_, View::Left) => -1.0,
        _ => 1.0,
    }
}

/// X sign for wings and fins.
fn appendage_side_sign(side: Side, view: View) -> f64 {
    match (side, view) {
        (Side::Right, View::Top | View::Back) | (Side::Left, View::Bottom | View::Front) | (_, View::Left) => -1.0,
        _ => 1.0,
    }
}

/// Maps table fractions to document coordinates.
#[derive(Debug, Clone, Copy)]
struct Placement {
    u: f64,
    s: f64,
    ox: f64,
    oy: f64,
}

impl Placement {
    /// `anchor` is the table position the `position` option refers to.
    fn new(u: f64, s: f64, anchor: Point, position: Option<Point>) -> Self {
        let (ax, ay) = (s * u * anchor[0], u * anchor[1]);
        let (ox, oy) = position.map_or((0.0, 0.0), |p| (p[0] - ax, p[1] - ay));
        Self { u, s, ox, oy }
    }

    fn point(&self, fraction: Point) -> Point {
        [
            self.s * self.u * fraction[0] + self.ox,
            self.u * fraction[1] + self.oy,
        ]
    }
}

/// Renames, retypes and moves a chain bone.
fn shape(bone: &mut Bone, name: &str, bone_type: BoneType, at: Point) {
    bone.name = name.to_owned();
    bone.bone_type = bone_type;
    bone.x = at[0];
    bone.y = at[1];
}

fn placed(name: impl Into<String>, bone_type: BoneType, at: Point) -> Bone {
    let mut bone = Bone::new(name);
    bone.bone_type = bone_type;
    bone.x = at[0];
    bone.y = at[1];
    bone
}

/// A bone with an attached tip, named uniquely against `names`.
fn bone_with_tip(
    name: &str,
    bone_type: BoneType,
    base: Point,
    tip: Point,
    names: &mut Vec<String>,
) -> Bone {
    let bone_name = unique_name(name, names);
    names.push(bone_name.clone());
    let tip_name = unique_name(&format!("{}_Tip", name), names);
    names.push(tip_name.clone());

    let mut tip_bone = placed(tip_name, BoneType::Tip, tip);
    tip_bone.attached = true;
    let mut bone = placed(bone_name, bone_type, base);
    bone.children.push(tip_bone);
    bone
}

/// A chain bone: whether it is wanted, its name, type and table position.
type Step<'n> = (bool, &'n str, BoneType, Point);

/// Shapes the wanted steps down the chain starting at `root`, then the tip,
/// and returns the tip.
fn lay_out_chain<'a>(
    root: &'a mut Bone,
    place: &Placement,
    steps: &[Step<'_>],
    tip_name: &str,
    tip: Point,
) -> Result<&'a mut Bone, GeneratorError> {
    let mut cursor = BoneCursor::new(root);
    for &(wanted, name, bone_type, at) in steps {
        if !wanted {
            continue;
        }
        shape(cursor.bone(), name, bone_type, place.point(at));
        cursor = cursor.advance()?;
    }
    let tip_bone = cursor.into_bone();
    shape(tip_bone, tip_name, BoneType::Tip, place.point(tip));
    Ok(tip_bone)
}

/// Adds each bone as a child of the chain bone at its depth.
///
/// Deeper bones are attached first, so walking to a shallower depth never
/// crosses a bone that already carries extra children.
fn attach_along_chain(root: &mut Bone, mut pending: Vec<(usize, Bone)>) -> Result<(), GeneratorError> {
    pending.sort_by(|a, b| b.0.cmp(&a.0));
    for (depth, bone) in pending {
        BoneCursor::new(&mut *root)
            .advance_by(depth)?
            .into_bone()
            .children
            .push(bone);
    }
    Ok(())
}
