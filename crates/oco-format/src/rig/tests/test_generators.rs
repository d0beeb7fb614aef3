//! Tests for the procedural limb generators.

use pretty_assertions::assert_eq;

use super::super::{
    ArmOptions, BoneType, Document, FinOptions, FishSpineOptions, LegOptions, Limb, LimbCategory,
    LimbType, Location, Side, SnakeSpineOptions, SpineOptions, View, WingOptions,
};
use super::{assert_at, chain, names};

const U: f64 = 185.0;

fn types(limb: &Limb) -> Vec<BoneType> {
    chain(limb).iter().map(|b| b.bone_type).collect()
}

#[test]
fn default_arm() {
    let mut doc = Document::new("Rex");
    let arm = doc.new_arm(&ArmOptions::default()).unwrap().unwrap();

    assert_eq!(arm.category, LimbCategory::Arm);
    assert_eq!(arm.limb_type, LimbType::Hominoid);
    assert_eq!(arm.side, Side::Left);
    assert_eq!(arm.location, Location::Front);
    assert_eq!(names(&chain(arm)), vec!["Arm", "Forearm", "Hand", "Arm_Tip"]);
    assert_eq!(
        types(arm),
        vec![BoneType::Humerus, BoneType::Radius, BoneType::Carpus, BoneType::Tip]
    );

    let bones = chain(arm);
    assert_at(bones[0], 0.12 * U, 0.77 * U);
    assert_at(bones[1], 0.15 * U, 0.65 * U);
    assert_at(bones[2], 0.12 * U, 0.51 * U);
    assert_at(bones[3], 0.08 * U, 0.42 * U);
    assert!(bones[1..].iter().all(|b| b.attached));
    assert_eq!(doc.limbs.len(), 1);
}

#[test]
fn arm_is_mirrored_by_side_and_view() {
    let mut doc = Document::new("Rex");
    let options = ArmOptions {
        side: Side::Right,
        view: Some(View::Front),
        ..Default::default()
    };
    let arm = doc.new_arm(&options).unwrap().unwrap();
    assert_at(chain(arm)[0], -0.12 * U, 0.77 * U);
}

#[test]
fn arm_position_moves_the_shoulder_joint() {
    let mut doc = Document::new("Rex");
    let options = ArmOptions {
        shoulder: true,
        position: Some([1.0, 2.0]),
        ..Default::default()
    };
    let arm = doc.new_arm(&options).unwrap().unwrap();
    let bones = chain(arm);
    assert_eq!(bones[0].name, "Shoulder");
    assert_eq!(bones[0].bone_type, BoneType::Clavicle);
    assert_at(bones[0], 1.0, 2.0);
    assert_at(bones[1], 1.0 + 0.10 * U, 2.0 - 0.01 * U);
}

#[test]
fn clawed_plantigrade_arm_has_a_heel() {
    let mut doc = Document::new("Bear");
    let options = ArmOptions {
        limb_type: LimbType::Plantigrade,
        claws: true,
        ..Default::default()
    };
    let arm = doc.new_arm(&options).unwrap().unwrap();
    assert_eq!(arm.num_bones(), 6);
    assert_eq!(names(&chain(arm)), vec!["Arm", "Forearm", "Hand", "Claws", "Arm_Tip", "Heel"]);

    let heel = chain(arm)[5];
    assert_eq!(heel.bone_type, BoneType::Heel);
    assert_at(heel, 0.38 * U, 0.0);
}

#[test]
fn arthropod_arm_table_depends_on_location() {
    let mut doc = Document::new("Crab");
    for (location, shoulder_x) in [
        (Location::Front, 0.33),
        (Location::Middle, 0.09),
        (Location::Back, -0.03),
    ] {
        let options = ArmOptions {
            limb_type: LimbType::Arthropod,
            shoulder: true,
            location,
            ..Default::default()
        };
        let arm = doc.new_arm(&options).unwrap().unwrap();
        assert_at(chain(arm)[0], shoulder_x * U, chain(arm)[0].y);
    }
    assert_eq!(doc.limbs.len(), 3);
}

#[test]
fn arm_without_parts_is_none() {
    let mut doc = Document::new("Rex");
    let options = ArmOptions {
        arm: false,
        forearm: false,
        hand: false,
        ..Default::default()
    };
    assert!(doc.new_arm(&options).unwrap().is_none());
    assert!(doc.limbs.is_empty());
}

#[test]
fn default_leg() {
    let mut doc = Document::new("Rex");
    let leg = doc.new_leg(&LegOptions::default()).unwrap().unwrap();
    assert_eq!(leg.category, LimbCategory::Leg);
    assert_eq!(leg.location, Location::Back);
    assert_eq!(names(&chain(leg)), vec!["Thigh", "Calf", "Foot", "Leg_Tip"]);
    assert_eq!(
        types(leg),
        vec![BoneType::Femur, BoneType::Tibia, BoneType::Tarsus, BoneType::Tip]
    );
    assert_at(chain(leg)[0], 0.04 * U, 0.53 * U);
    assert_eq!(leg.num_bones(), 4);
}

#[test]
fn leg_claw_names_and_heels() {
    let mut doc = Document::new("Rex");

    let hominoid = LegOptions {
        claws: true,
        ..Default::default()
    };
    let leg = doc.new_leg(&hominoid).unwrap().unwrap();
    assert_eq!(names(&chain(leg)), vec!["Thigh", "Calf", "Foot", "Toes", "Leg_Tip", "Heel"]);
    assert_at(chain(leg)[5], 0.01 * U, 0.0);

    let ungulate = LegOptions {
        limb_type: LimbType::Ungulate,
        claws: true,
        ..Default::default()
    };
    let leg = doc.new_leg(&ungulate).unwrap().unwrap();
    assert_eq!(names(&chain(leg)), vec!["Thigh", "Calf", "Foot", "Hoof", "Leg_Tip"]);
    assert_at(chain(leg)[0], -0.26 * U, 0.69 * U);

    let digitigrade = LegOptions {
        limb_type: LimbType::Digitigrade,
        claws: true,
        ..Default::default()
    };
    let leg = doc.new_leg(&digitigrade).unwrap().unwrap();
    assert_eq!(chain(leg)[3].name, "Claws");
    assert_eq!(leg.num_bones(), 5);
}

#[test]
fn only_hominoid_and_plantigrade_legs_get_heels() {
    let mut doc = Document::new("Rex");

    let plantigrade = LegOptions {
        limb_type: LimbType::Plantigrade,
        claws: true,
        ..Default::default()
    };
    let leg = doc.new_leg(&plantigrade).unwrap().unwrap();
    assert_eq!(names(&chain(leg)), vec!["Thigh", "Calf", "Foot", "Claws", "Leg_Tip", "Heel"]);

    for limb_type in [LimbType::Arthropod, LimbType::Custom] {
        let clawed = LegOptions {
            limb_type,
            claws: true,
            ..Default::default()
        };
        let leg = doc.new_leg(&clawed).unwrap().unwrap();
        assert_eq!(names(&chain(leg)), vec!["Thigh", "Calf", "Foot", "Claws", "Leg_Tip"]);
        assert_eq!(leg.num_bones(), 5);
    }
}

#[test]
fn default_spine() {
    let mut doc = Document::new("Rex");
    let spine = doc.new_spine(&SpineOptions::default()).unwrap().unwrap();
    assert_eq!(spine.category, LimbCategory::Spine);
    assert_eq!(spine.side, Side::None);
    assert_eq!(names(&chain(spine)), vec!["Spine", "Torso", "Neck", "Head", "Spine_Tip"]);
    assert_eq!(
        types(spine),
        vec![
            BoneType::Spine,
            BoneType::Torso,
            BoneType::Neck,
            BoneType::Skull,
            BoneType::Tip
        ]
    );

    let bones = chain(spine);
    assert_at(bones[0], 0.0, 0.56 * U);
    assert_at(bones[1], 0.0, 0.695 * U);
    assert_at(bones[2], 0.0, 0.83 * U);
    assert_at(bones[3], 0.0, 0.89 * U);
    assert_at(bones[4], 0.0, U);
}

#[test]
fn spine_with_hips_and_position() {
    let mut doc = Document::new("Rex");
    let options = SpineOptions {
        hips: true,
        neck: 2,
        spine: 3,
        position: Some([10.0, 100.0]),
        ..Default::default()
    };
    let spine = doc.new_spine(&options).unwrap().unwrap();
    let bones = chain(spine);
    assert_eq!(
        names(&bones),
        vec!["Hips", "Spine", "Spine", "Torso", "Neck", "Neck", "Head", "Spine_Tip"]
    );
    let oy = 100.0 - 0.53 * U;
    assert_at(bones[0], 10.0, 100.0);
    assert_at(bones[2], 10.0, (0.56 + 0.0675) * U + oy);
    assert_at(bones[5], 10.0, (0.83 + 0.03) * U + oy);
    assert_at(bones[7], 10.0, U + oy);
}

#[test]
fn empty_spine_is_none() {
    let mut doc = Document::new("Rex");
    let options = SpineOptions {
        head: false,
        neck: 0,
        spine: 0,
        hips: false,
        position: None,
    };
    assert!(doc.new_spine(&options).unwrap().is_none());
}

#[test]
fn tail_types_split_in_thirds() {
    let mut doc = Document::new("Rex");
    let tail = doc.new_tail(3).unwrap().unwrap();
    assert_eq!(tail.category, LimbCategory::Tail);
    assert_eq!(names(&chain(tail)), vec!["Tail", "Tail", "Tail", "Tail_Tip"]);
    assert_eq!(
        types(tail),
        vec![BoneType::TailRoot, BoneType::TailMid, BoneType::TailEnd, BoneType::Tip]
    );
    assert_at(chain(tail)[0], -50.0, 100.0);

    assert!(doc.new_tail(0).unwrap().is_none());
    assert_eq!(doc.limbs.len(), 1);
}

#[test]
fn hair_strand_hangs_down() {
    let mut doc = Document::new("Rex");
    let hair = doc.new_hair_strand(4).unwrap().unwrap();
    assert_eq!(hair.category, LimbCategory::Hair);
    let ys: Vec<f64> = chain(hair).iter().map(|b| b.y).collect();
    assert_eq!(ys, vec![150.0, 125.0, 100.0, 75.0, 50.0]);
    assert!(chain(hair).iter().all(|b| b.x == 0.0));
    assert_eq!(
        types(hair),
        vec![
            BoneType::HairRoot,
            BoneType::HairRoot,
            BoneType::HairMid,
            BoneType::HairEnd,
            BoneType::Tip
        ]
    );
}

#[test]
fn default_wing_carries_feathers() {
    let mut doc = Document::new("Bird");
    let wing = doc.new_wing(&WingOptions::default()).unwrap().unwrap();
    assert_eq!(wing.category, LimbCategory::Wing);
    assert_eq!(wing.num_bones(), 14);
    assert_eq!(names(&chain(wing)), vec!["Arm", "Forearm", "Hand", "Wing_Tip"]);

    let arm = &wing.armature[0];
    let forearm = &arm.children[0];
    let hand = &forearm.children[0];
    let hand_children: Vec<&str> = hand.children.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(hand_children, vec!["Wing_Tip", "Feather", "Feather 2", "Feather 3"]);
    let forearm_children: Vec<&str> = forearm.children.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(forearm_children, vec!["Hand", "Feather 4", "Feather 5"]);

    let feather = &hand.children[1];
    assert_eq!(feather.bone_type, BoneType::Feather);
    assert_at(feather, -0.54 * U, 0.66 * U);
    let tip = &feather.children[0];
    assert_eq!(tip.name, "Feather_Tip");
    assert_eq!(tip.bone_type, BoneType::Tip);
    assert!(tip.attached);
    assert_at(tip, -0.96 * U, 0.62 * U);

    assert_at(&forearm.children[2], -0.22 * U, 0.51 * U);
}

#[test]
fn wing_feather_parents_fall_back() {
    let mut doc = Document::new("Bird");

    let single = WingOptions {
        feathers: 1,
        ..Default::default()
    };
    let wing = doc.new_wing(&single).unwrap().unwrap();
    let forearm = &wing.armature[0].children[0];
    assert_eq!(forearm.children.len(), 2);
    assert_at(&forearm.children[1], -0.38 * U, 0.63 * U);

    let arm_only = WingOptions {
        forearm: false,
        hand: false,
        feathers: 2,
        ..Default::default()
    };
    let wing = doc.new_wing(&arm_only).unwrap().unwrap();
    assert_eq!(wing.num_bones(), 6);
    assert_eq!(wing.armature[0].children.len(), 3);
}

#[test]
fn wing_side_mirrors_and_side_views_stay_straight() {
    let mut doc = Document::new("Bird");
    let right = WingOptions {
        side: Side::Right,
        ..Default::default()
    };
    let wing = doc.new_wing(&right).unwrap().unwrap();
    assert_at(chain(wing)[0], 0.12 * U, 0.64 * U);

    let front = WingOptions {
        view: View::Front,
        ..Default::default()
    };
    let wing = doc.new_wing(&front).unwrap().unwrap();
    assert_eq!(wing.num_bones(), 4);
    assert_eq!(names(&chain(wing)), vec!["Wing", "Wing 2", "Wing 3", "Wing 4"]);
}

#[test]
fn snake_spine_with_head() {
    let mut doc = Document::new("Kaa");
    let snake = doc.new_snake_spine(&SnakeSpineOptions::default()).unwrap().unwrap();
    assert_eq!(snake.category, LimbCategory::SnakeSpine);
    assert_eq!(snake.num_bones(), 8);

    let head = &snake.armature[0];
    assert_eq!(head.name, "Head");
    assert_eq!(head.bone_type, BoneType::Skull);
    assert_at(head, 0.75 * U, 0.5 * U);
    let skull_tip = &head.children[1];
    assert_eq!(skull_tip.name, "Head_Tip");
    assert_eq!(skull_tip.bone_type, BoneType::SkullTip);
    assert!(skull_tip.attached);
    assert_at(skull_tip, 0.95 * U, 0.5 * U);

    let mut spine = vec![&head.children[0]];
    while let Some(next) = spine.last().and_then(|b| b.children.first()) {
        spine.push(next);
    }
    let spine_types: Vec<BoneType> = spine.iter().map(|b| b.bone_type).collect();
    assert_eq!(
        spine_types,
        vec![
            BoneType::SnakeSpineRoot,
            BoneType::SnakeSpineRoot,
            BoneType::SnakeSpineMid,
            BoneType::SnakeSpineEnd,
            BoneType::SnakeSpineEnd,
            BoneType::Tip
        ]
    );
    assert_at(spine[0], 0.75 * U, 0.5 * U);
    assert_at(spine[1], 0.45 * U, 0.5 * U);
    assert_at(spine[5], -0.75 * U, 0.5 * U);
}

#[test]
fn snake_spine_position_moves_everything() {
    let mut doc = Document::new("Kaa");
    let options = SnakeSpineOptions {
        position: Some([0.0, 0.0]),
        ..Default::default()
    };
    let snake = doc.new_snake_spine(&options).unwrap().unwrap();
    let head = &snake.armature[0];
    assert_at(head, 0.0, 0.0);
    assert_at(&head.children[0], 0.0, 0.0);
    assert_at(&head.children[1], 0.2 * U, 0.0);
}

#[test]
fn headless_fish_spine() {
    let mut doc = Document::new("Nemo");
    let options = FishSpineOptions {
        head: false,
        ..Default::default()
    };
    let fish = doc.new_fish_spine(&options).unwrap().unwrap();
    assert_eq!(fish.category, LimbCategory::FishSpine);
    assert_eq!(names(&chain(fish)), vec!["Spine", "Spine", "Spine", "Spine_Tip"]);
    assert_eq!(
        types(fish),
        vec![
            BoneType::FishSpineRoot,
            BoneType::FishSpineMid,
            BoneType::FishSpineEnd,
            BoneType::Tip
        ]
    );
    assert_at(chain(fish)[1], (0.75 - 1.0 / 3.0) * U, 0.5 * U);
    assert_at(chain(fish)[3], -0.25 * U, 0.5 * U);

    let with_head = doc.new_fish_spine(&FishSpineOptions::default()).unwrap().unwrap();
    assert_at(&with_head.armature[0].children[1], 1.05 * U, 0.5 * U);
    assert_eq!(with_head.num_bones(), 6);
}

#[test]
fn default_fin() {
    let mut doc = Document::new("Nemo");
    let fin = doc.new_fin(&FinOptions::default()).unwrap().unwrap();
    assert_eq!(fin.category, LimbCategory::Fin);
    assert_eq!(fin.side, Side::Left);
    assert_eq!(fin.num_bones(), 12);

    let root = &fin.armature[0];
    assert_eq!(root.bone_type, BoneType::Fin);
    assert_at(root, -0.17 * U, 0.47 * U);
    let children: Vec<&str> = root.children.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(
        children,
        vec!["Fin_Tip", "Fishbone", "Fishbone 2", "Fishbone 3", "Fishbone 4", "Fishbone 5"]
    );
    assert_at(&root.children[1], -0.24 * U, 0.63 * U);
    assert_at(&root.children[5], -0.15 * U, 0.41 * U);
    assert_eq!(root.children[5].children[0].name, "Fishbone_Tip 5");
}

#[test]
fn fin_variants() {
    let mut doc = Document::new("Nemo");
    let bare = FinOptions {
        fishbones: 0,
        ..Default::default()
    };
    assert_eq!(doc.new_fin(&bare).unwrap().unwrap().num_bones(), 2);

    let single = FinOptions {
        fishbones: 1,
        side: Side::Right,
        view: View::Top,
        ..Default::default()
    };
    let fin = doc.new_fin(&single).unwrap().unwrap();
    assert_at(&fin.armature[0], 0.17 * U, 0.47 * U);
    assert_at(&fin.armature[0].children[1], 0.22 * U, 0.43 * U);
}

#[test]
fn every_default_generator_builds_a_chain() {
    let mut doc = Document::new("Chimera");
    doc.new_arm(&ArmOptions::default()).unwrap();
    doc.new_leg(&LegOptions::default()).unwrap();
    doc.new_spine(&SpineOptions::default()).unwrap();
    doc.new_tail(3).unwrap();
    doc.new_hair_strand(3).unwrap();
    doc.new_wing(&WingOptions::default()).unwrap();
    doc.new_snake_spine(&SnakeSpineOptions::default()).unwrap();
    doc.new_fish_spine(&FishSpineOptions::default()).unwrap();
    doc.new_fin(&FinOptions::default()).unwrap();

    assert_eq!(doc.limbs.len(), 9);
    for limb in &doc.limbs {
        assert!(chain(limb).len() >= 2, "{} is degenerate", limb.category);
    }
}
