//! Tests for the rig tree, its serialization and the limb generators.

mod test_bone;
mod test_generators;
mod test_limb;

use super::{Bone, Limb};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn assert_at(bone: &Bone, x: f64, y: f64) {
    assert!(
        approx_eq(bone.x, x) && approx_eq(bone.y, y),
        "{} is at ({}, {}), expected ({}, {})",
        bone.name,
        bone.x,
        bone.y,
        x,
        y
    );
}

/// The first chain of a limb, following first children down to the tip.
fn chain(limb: &Limb) -> Vec<&Bone> {
    let mut bones = Vec::new();
    let mut current = limb.armature.first();
    while let Some(bone) = current {
        bones.push(bone);
        current = bone.children.first();
    }
    bones
}

fn names(bones: &[&Bone]) -> Vec<String> {
    bones.iter().map(|b| b.name.clone()).collect()
}
