//! Spines, tails and hair: chains along the body axis.

use super::{lay_out_chain, placed, Placement, Point, Step};
use crate::error::GeneratorError;
use crate::rig::bone::Bone;
use crate::rig::cursor::BoneCursor;
use crate::rig::document::Document;
use crate::rig::limb::{Limb, DEFAULT_ARMATURE_LENGTH};
use crate::rig::types::{chain_part, BoneType, LimbCategory, LimbType, Location, Side};

/// Default bone count for tails and hair strands.
pub const DEFAULT_CHAIN_BONES: usize = 3;

/// Options for [`Document::new_spine`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpineOptions {
    pub head: bool,
    pub neck: usize,
    /// Spine bones, the last one being the torso.
    pub spine: usize,
    pub hips: bool,
    /// Where the hips joint goes.
    pub position: Option<Point>,
}

impl Default for SpineOptions {
    fn default() -> Self {
        Self {
            head: true,
            neck: 1,
            spine: 2,
            hips: false,
            position: None,
        }
    }
}

/// Options for [`Document::new_snake_spine`].
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeSpineOptions {
    pub head: bool,
    pub spine: usize,
    /// Where the first spine bone goes.
    pub position: Option<Point>,
}

impl Default for SnakeSpineOptions {
    fn default() -> Self {
        Self {
            head: true,
            spine: 5,
            position: None,
        }
    }
}

/// Options for [`Document::new_fish_spine`].
#[derive(Debug, Clone, PartialEq)]
pub struct FishSpineOptions {
    pub head: bool,
    pub spine: usize,
    /// Where the first spine bone goes.
    pub position: Option<Point>,
}

impl Default for FishSpineOptions {
    fn default() -> Self {
        Self {
            head: true,
            spine: 3,
            position: None,
        }
    }
}

const SPINE_ANCHOR: Point = [0.0, 0.53];
const SPINE_START: f64 = 0.56;
/// Spine bones before the torso share half of the 0.27 back length.
const SPINE_LENGTH: f64 = 0.135;
const NECK_START: f64 = 0.83;
const NECK_LENGTH: f64 = 0.06;
const HEAD: f64 = 0.89;

const HORIZONTAL_SPINE_ANCHOR: Point = [0.75, 0.5];

/// A horizontal spine: snakes and fish differ only by their proportions.
struct HorizontalSpine {
    category: LimbCategory,
    parts: [BoneType; 3],
    /// Total length of the spine bones.
    length: f64,
    tip: Point,
    skull_tip: Point,
}

const SNAKE_SPINE: HorizontalSpine = HorizontalSpine {
    category: LimbCategory::SnakeSpine,
    parts: [BoneType::SnakeSpineRoot, BoneType::SnakeSpineMid, BoneType::SnakeSpineEnd],
    length: 1.5,
    tip: [-0.75, 0.5],
    skull_tip: [0.95, 0.5],
};

const FISH_SPINE: HorizontalSpine = HorizontalSpine {
    category: LimbCategory::FishSpine,
    parts: [BoneType::FishSpineRoot, BoneType::FishSpineMid, BoneType::FishSpineEnd],
    length: 1.0,
    tip: [-0.25, 0.5],
    skull_tip: [1.05, 0.5],
};

impl Document {
    /// Appends a vertical spine.
    ///
    /// Bottom to top: hips, spine bones ending with the torso, neck bones,
    /// head, then a tip at the top of the character.
    pub fn new_spine(&mut self, options: &SpineOptions) -> Result<Option<&mut Limb>, GeneratorError> {
        let count = 1
            + usize::from(options.head)
            + options.neck
            + options.spine
            + usize::from(options.hips);
        if count == 1 {
            tracing::debug!("spine generator: no part requested");
            return Ok(None);
        }

        let place = Placement::new(self.height, 1.0, SPINE_ANCHOR, options.position);

        let mut steps: Vec<Step<'_>> = Vec::with_capacity(count - 1);
        steps.push((options.hips, "Hips", BoneType::Hips, SPINE_ANCHOR));
        if options.spine > 0 {
            let segment = if options.spine > 1 {
                SPINE_LENGTH / (options.spine - 1) as f64
            } else {
                0.0
            };
            for i in 0..options.spine - 1 {
                steps.push((true, "Spine", BoneType::Spine, [0.0, SPINE_START + i as f64 * segment]));
            }
            let torso = SPINE_START + (options.spine - 1) as f64 * segment;
            steps.push((true, "Torso", BoneType::Torso, [0.0, torso]));
        }
        let neck_segment = NECK_LENGTH / options.neck.max(1) as f64;
        for i in 0..options.neck {
            steps.push((true, "Neck", BoneType::Neck, [0.0, NECK_START + i as f64 * neck_segment]));
        }
        steps.push((options.head, "Head", BoneType::Skull, [0.0, HEAD]));

        let mut limb = Limb::new(LimbCategory::Spine, Side::None, Location::None, LimbType::Custom);
        if let Some(root) = limb.new_armature("Spine", count, DEFAULT_ARMATURE_LENGTH) {
            lay_out_chain(root, &place, &steps, "Spine_Tip", [0.0, 1.0])?;
        }

        Ok(Some(self.push_limb(limb)))
    }

    /// Appends a tail of `bones` bones plus a tip.
    ///
    /// Bones keep the straight layout of [`Limb::new_armature`]; only names
    /// and types are set, splitting the chain in root, middle and end thirds.
    pub fn new_tail(&mut self, bones: usize) -> Result<Option<&mut Limb>, GeneratorError> {
        if bones == 0 {
            tracing::debug!("tail generator: no bone requested");
            return Ok(None);
        }

        let parts = [BoneType::TailRoot, BoneType::TailMid, BoneType::TailEnd];
        let mut limb = Limb::new(LimbCategory::Tail, Side::None, Location::None, LimbType::Custom);
        if let Some(root) = limb.new_armature("Tail", bones + 1, DEFAULT_ARMATURE_LENGTH) {
            let mut cursor = BoneCursor::new(root);
            for i in 0..bones {
                let bone = cursor.bone();
                bone.name = "Tail".to_owned();
                bone.bone_type = chain_part(i, bones, parts);
                cursor = cursor.advance()?;
            }
            let tip = cursor.into_bone();
            tip.name = "Tail_Tip".to_owned();
            tip.bone_type = BoneType::Tip;
        }

        Ok(Some(self.push_limb(limb)))
    }

    /// Appends a vertical hair strand of `bones` bones hanging from y = 150
    /// down to a tip at y = 50.
    pub fn new_hair_strand(&mut self, bones: usize) -> Result<Option<&mut Limb>, GeneratorError> {
        if bones == 0 {
            tracing::debug!("hair generator: no bone requested");
            return Ok(None);
        }

        let parts = [BoneType::HairRoot, BoneType::HairMid, BoneType::HairEnd];
        let segment = 100.0 / bones as f64;
        let mut limb = Limb::new(LimbCategory::Hair, Side::None, Location::None, LimbType::Custom);
        if let Some(root) = limb.new_armature("Hair", bones + 1, DEFAULT_ARMATURE_LENGTH) {
            let mut cursor = BoneCursor::new(root);
            for i in 0..bones {
                let bone = cursor.bone();
                bone.name = "Hair".to_owned();
                bone.bone_type = chain_part(i, bones, parts);
                bone.x = 0.0;
                bone.y = 150.0 - i as f64 * segment;
                cursor = cursor.advance()?;
            }
            let tip = cursor.into_bone();
            tip.name = "Hair_Tip".to_owned();
            tip.bone_type = BoneType::Tip;
            tip.x = 0.0;
            tip.y = 50.0;
        }

        Ok(Some(self.push_limb(limb)))
    }

    /// Appends a horizontal snake spine, head to the right.
    pub fn new_snake_spine(
        &mut self,
        options: &SnakeSpineOptions,
    ) -> Result<Option<&mut Limb>, GeneratorError> {
        self.new_horizontal_spine(&SNAKE_SPINE, options.head, options.spine, options.position)
    }

    /// Appends a horizontal fish spine, head to the right.
    pub fn new_fish_spine(
        &mut self,
        options: &FishSpineOptions,
    ) -> Result<Option<&mut Limb>, GeneratorError> {
        self.new_horizontal_spine(&FISH_SPINE, options.head, options.spine, options.position)
    }

    fn new_horizontal_spine(
        &mut self,
        shape: &HorizontalSpine,
        head: bool,
        spine: usize,
        position: Option<Point>,
    ) -> Result<Option<&mut Limb>, GeneratorError> {
        if spine == 0 {
            tracing::debug!(limb = %shape.category, "spine generator: no bone requested");
            return Ok(None);
        }

        let place = Placement::new(self.height, 1.0, HORIZONTAL_SPINE_ANCHOR, position);
        let segment = shape.length / spine as f64;
        let [ax, ay] = HORIZONTAL_SPINE_ANCHOR;
        let steps: Vec<Step<'_>> = (0..spine)
            .map(|i| (true, "Spine", chain_part(i, spine, shape.parts), [ax - segment * i as f64, ay]))
            .collect();

        let mut limb = Limb::new(shape.category, Side::None, Location::None, LimbType::Custom);
        if let Some(root) = limb.new_armature("Spine", spine + 1, DEFAULT_ARMATURE_LENGTH) {
            lay_out_chain(root, &place, &steps, "Spine_Tip", shape.tip)?;
        }

        if head {
            if let Some(chain) = limb.armature.pop() {
                let mut skull_tip = placed("Head_Tip", BoneType::SkullTip, place.point(shape.skull_tip));
                skull_tip.attached = true;
                let mut skull: Bone = placed("Head", BoneType::Skull, place.point(HORIZONTAL_SPINE_ANCHOR));
                skull.children.push(chain);
                skull.children.push(skull_tip);
                limb.armature.push(skull);
            }
        }

        Ok(Some(self.push_limb(limb)))
    }
}
