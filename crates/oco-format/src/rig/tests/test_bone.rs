//! Tests for bones.

use pretty_assertions::assert_eq;
use serde_json::json;

use super::super::{Bone, BoneTree, BoneType, Envelope, LimbCategory, LimbType, Location, Side};
use super::approx_eq;

fn bone_at(name: &str, x: f64, y: f64, z_index: i64) -> Bone {
    let mut bone = Bone::new(name);
    bone.x = x;
    bone.y = y;
    bone.z_index = z_index;
    bone
}

/// `root` with two children, the first one carrying a limb of two bones.
fn sample_tree() -> Bone {
    let mut root = bone_at("Root", 0.0, 0.0, 5);
    let mut first = bone_at("First", 3.0, 4.0, 1);
    let limb = first.new_limb(LimbCategory::Wing, Side::Left, Location::None, LimbType::Custom);
    limb.armature.push(bone_at("Feather", 10.0, 10.0, 5));
    limb.armature[0].children.push(bone_at("Feather_Tip", 12.0, 14.0, 0));
    root.children.push(first);
    root.children.push(bone_at("Second", -2.0, 1.0, 3));
    root
}

#[test]
fn length_measures_to_first_child() {
    let root = sample_tree();
    assert!(approx_eq(root.length(), 5.0));
    assert_eq!(Bone::new("Lonely").length(), 0.0);
}

#[test]
fn translate_moves_children_but_not_limbs() {
    let mut root = sample_tree();
    root.translate(1.0, -1.0, true);
    assert_eq!(root.position(), [1.0, -1.0]);
    assert_eq!(root.children[0].position(), [4.0, 3.0]);
    assert_eq!(root.children[1].position(), [-1.0, 0.0]);
    assert_eq!(root.children[0].limbs[0].armature[0].position(), [10.0, 10.0]);

    root.translate(1.0, 1.0, false);
    assert_eq!(root.position(), [2.0, 0.0]);
    assert_eq!(root.children[0].position(), [4.0, 3.0]);
}

#[test]
fn translate_to_applies_the_delta() {
    let mut root = sample_tree();
    root.translate_to(10.0, 20.0, true);
    assert_eq!(root.position(), [10.0, 20.0]);
    assert_eq!(root.children[0].position(), [13.0, 24.0]);

    root.translate_to(0.0, 0.0, false);
    assert_eq!(root.children[0].position(), [13.0, 24.0]);
}

#[test]
fn counts_include_child_limbs() {
    let root = sample_tree();
    assert_eq!(root.num_bones(), 5);
    assert_eq!(root.num_limbs(), 1);
    assert_eq!(root.limbs_recursive().len(), 1);
    assert_eq!(root.bones().len(), root.num_bones());
}

#[test]
fn bones_are_sorted_by_z_index_with_stable_ties() {
    let root = sample_tree();
    let order: Vec<&str> = root.bones().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(order, vec!["Feather_Tip", "First", "Second", "Root", "Feather"]);
    assert_eq!(root.z_bounds(), Some((0, 5)));
}

#[test]
fn normalize_keeps_relative_order() {
    let mut root = sample_tree();
    let last = root.normalize_z_indices(10);
    assert_eq!(last, Some(14));

    let order: Vec<(&str, i64)> = root.bones().iter().map(|b| (b.name.as_str(), b.z_index)).collect();
    assert_eq!(
        order,
        vec![
            ("Feather_Tip", 10),
            ("First", 11),
            ("Second", 12),
            ("Root", 13),
            ("Feather", 14)
        ]
    );
}

#[test]
fn bounds_cover_children_and_limbs() {
    let bounds = sample_tree().bounds();
    assert_eq!(bounds.to_array(), [-2.0, 14.0, 12.0, 0.0]);
}

#[test]
fn object_round_trip() {
    let mut root = sample_tree();
    root.attached = true;
    root.bone_type = BoneType::Humerus;
    root.envelope = Envelope {
        width: 12.5,
        offset: -3.0,
    };
    let reloaded = Bone::from_object(&root.to_object());
    assert_eq!(reloaded, root);
}

#[test]
fn object_keys() {
    let object = Bone::new("Arm").to_object();
    assert_eq!(
        object,
        json!({
            "name": "Arm",
            "x": 0.0,
            "y": 0.0,
            "zIndex": 0,
            "attached": false,
            "children": [],
            "limbs": [],
            "type": "custom",
            "envelop": { "width": -1.0, "offset": 0.0 },
        })
    );
}

#[test]
fn missing_fields_use_defaults() {
    let bone = Bone::from_object(&json!({ "type": "wingBone", "zIndex": 2.6, "x": "nope" }));
    assert_eq!(bone.name, "Bone");
    assert_eq!(bone.bone_type, BoneType::Custom);
    assert_eq!(bone.z_index, 3);
    assert_eq!(bone.x, 0.0);
    assert_eq!(bone.envelope, Envelope::default());
    assert!(bone.children.is_empty());
}
