//! Tests for limbs and armature chains.

use pretty_assertions::assert_eq;
use serde_json::json;

use super::super::{Bone, BoneTree, Limb, LimbCategory, LimbType, Location, Side};
use super::{chain, names};

fn arm() -> Limb {
    Limb::new(LimbCategory::Arm, Side::Right, Location::Front, LimbType::Hominoid)
}

#[test]
fn new_armature_builds_a_straight_chain() {
    let mut limb = arm();
    limb.new_armature("Arm", 3, 100.0).unwrap();

    let bones = chain(&limb);
    assert_eq!(names(&bones), vec!["Arm", "Arm 2", "Arm 3"]);
    let xs: Vec<f64> = bones.iter().map(|b| b.x).collect();
    assert_eq!(xs, vec![-50.0, 0.0, 50.0]);
    assert!(bones.iter().all(|b| b.y == 100.0));
    let z: Vec<i64> = bones.iter().map(|b| b.z_index).collect();
    assert_eq!(z, vec![100, 99, 98]);
    let attached: Vec<bool> = bones.iter().map(|b| b.attached).collect();
    assert_eq!(attached, vec![false, true, true]);
}

#[test]
fn new_armature_edge_counts() {
    let mut limb = arm();
    assert!(limb.new_armature("Arm", 0, 100.0).is_none());
    assert!(limb.armature.is_empty());

    let root = limb.new_armature("Arm", 1, 40.0).unwrap();
    assert!(root.children.is_empty());
    assert_eq!(root.x, -20.0);
    assert_eq!(root.z_index, 40);
    assert_eq!(limb.num_bones(), 1);
}

#[test]
fn counts_and_nested_limbs() {
    let mut limb = arm();
    let root = limb.new_armature("Arm", 2, 100.0).unwrap();
    let hand = root.new_limb(LimbCategory::Custom, Side::Right, Location::None, LimbType::Custom);
    hand.new_armature("Finger", 2, 10.0);

    assert_eq!(limb.num_bones(), 4);
    assert_eq!(limb.num_limbs(), 2);
    assert_eq!(limb.limbs_recursive().len(), 1);
    assert_eq!(limb.bones().len(), 4);
}

#[test]
fn normalize_z_indices_on_a_chain() {
    let mut limb = arm();
    limb.new_armature("Arm", 3, 100.0);
    assert_eq!(limb.normalize_z_indices(0), Some(2));

    let z: Vec<i64> = chain(&limb).iter().map(|b| b.z_index).collect();
    assert_eq!(z, vec![2, 1, 0]);
    assert_eq!(limb.z_bounds(), Some((0, 2)));
}

#[test]
fn empty_limb() {
    let mut limb = Limb::default();
    assert_eq!(limb.num_bones(), 0);
    assert_eq!(limb.num_limbs(), 1);
    assert_eq!(limb.bounds(), None);
    assert_eq!(limb.z_bounds(), None);
    assert_eq!(limb.normalize_z_indices(0), None);
}

#[test]
fn bounds_cover_every_bone() {
    let mut limb = arm();
    let root = limb.new_armature("Arm", 2, 100.0).unwrap();
    root.children[0].y = 20.0;
    let mut extra = Bone::new("Extra");
    extra.x = 5.0;
    extra.y = 150.0;
    limb.armature.push(extra);

    let bounds = limb.bounds().unwrap();
    assert_eq!(bounds.to_array(), [-50.0, 150.0, 50.0, 20.0]);
}

#[test]
fn object_round_trip() {
    let mut limb = arm();
    limb.new_armature("Arm", 3, 60.0);
    let object = limb.to_object();
    assert_eq!(object["limb"], json!("arm"));
    assert_eq!(object["type"], json!("hominoid"));
    assert_eq!(object["side"], json!("R"));
    assert_eq!(object["location"], json!("Fr"));
    assert_eq!(Limb::from_object(&object), limb);
}

#[test]
fn missing_fields_use_defaults() {
    let limb = Limb::from_object(&json!({ "limb": "tentacle", "side": "L" }));
    assert_eq!(limb.category, LimbCategory::Custom);
    assert_eq!(limb.limb_type, LimbType::Custom);
    assert_eq!(limb.side, Side::Left);
    assert_eq!(limb.location, Location::None);
    assert!(limb.armature.is_empty());
}
