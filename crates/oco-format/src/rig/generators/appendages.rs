//! Wings and fins: chains carrying fans of feathers or fishbones.

use super::{appendage_side_sign, attach_along_chain, bone_with_tip, lay_out_chain, placed, Placement, Point};
use crate::error::GeneratorError;
use crate::math::linear_interpolation;
use crate::rig::bone::Bone;
use crate::rig::document::Document;
use crate::rig::limb::{Limb, DEFAULT_ARMATURE_LENGTH};
use crate::rig::types::{BoneType, LimbCategory, LimbType, Location, Side, View};

/// Default feather count for wings.
pub const DEFAULT_FEATHERS: usize = 5;
/// Default fishbone count for fins.
pub const DEFAULT_FISHBONES: usize = 5;

/// Options for [`Document::new_wing`].
#[derive(Debug, Clone, PartialEq)]
pub struct WingOptions {
    pub side: Side,
    pub arm: bool,
    pub forearm: bool,
    pub hand: bool,
    pub feathers: usize,
    /// Where the first wing bone goes.
    pub position: Option<Point>,
    /// Only top and bottom views are laid out.
    pub view: View,
}

impl Default for WingOptions {
    fn default() -> Self {
        Self {
            side: Side::Left,
            arm: true,
            forearm: true,
            hand: true,
            feathers: DEFAULT_FEATHERS,
            position: None,
            view: View::Top,
        }
    }
}

/// Options for [`Document::new_fin`].
#[derive(Debug, Clone, PartialEq)]
pub struct FinOptions {
    pub side: Side,
    pub fishbones: usize,
    pub view: View,
    /// Where the fin root goes.
    pub position: Option<Point>,
}

impl Default for FinOptions {
    fn default() -> Self {
        Self {
            side: Side::Left,
            fishbones: DEFAULT_FISHBONES,
            view: View::Right,
            position: None,
        }
    }
}

/// Base and tip of a feather or fishbone, interpolated along a fan.
#[derive(Debug, Clone, Copy)]
struct Fan {
    from: [Point; 2],
    to: [Point; 2],
}

impl Fan {
    /// Base and tip of entry `value` when entries `min..=max` span the fan.
    fn at(&self, value: f64, min: f64, max: f64) -> (Point, Point) {
        let lerp = |a: f64, b: f64| linear_interpolation(value, min, max, a, b);
        (
            [lerp(self.from[0][0], self.to[0][0]), lerp(self.from[0][1], self.to[0][1])],
            [lerp(self.from[1][0], self.to[1][0]), lerp(self.from[1][1], self.to[1][1])],
        )
    }
}

const WING_ARM: Point = [-0.12, 0.64];
const WING_FOREARM: Point = [-0.22, 0.53];
const WING_HAND: Point = [-0.37, 0.64];
const WING_TIP: Point = [-0.53, 0.66];

/// A lone feather sits in the middle of the wing.
const MIDDLE_FEATHER: (Point, Point) = ([-0.38, 0.63], [-0.56, 0.28]);
/// Outer feathers, on the hand.
const PRIMARY_FEATHERS: Fan = Fan {
    from: [[-0.54, 0.66], [-0.96, 0.62]],
    to: [[-0.38, 0.63], [-0.56, 0.28]],
};
/// Inner feathers, on the forearm.
const SECONDARY_FEATHERS: Fan = Fan {
    from: [[-0.38, 0.63], [-0.56, 0.28]],
    to: [[-0.22, 0.51], [-0.08, 0.39]],
};

const FIN_ROOT: Point = [-0.17, 0.47];
const FIN_TIP: Point = [-0.24, 0.62];
const MIDDLE_FISHBONE: (Point, Point) = ([-0.22, 0.43], [-0.77, 0.60]);
const FISHBONES: Fan = Fan {
    from: [[-0.24, 0.63], [-0.82, 0.60]],
    to: [[-0.15, 0.41], [-0.17, 0.29]],
};

impl Document {
    /// Appends a wing: arm, forearm and hand bones, a tip, and feathers.
    ///
    /// Feathers get an attached tip each. The outer half of them hang from
    /// the hand and the inner half from the forearm; missing bones fall back
    /// to their nearest neighbour. Views other than top and bottom keep the
    /// default straight chain and get no feathers.
    pub fn new_wing(&mut self, options: &WingOptions) -> Result<Option<&mut Limb>, GeneratorError> {
        let parts = [options.arm, options.forearm, options.hand];
        let count = 1 + parts.iter().filter(|enabled| **enabled).count();
        if count == 1 {
            tracing::debug!("wing generator: no part requested");
            return Ok(None);
        }

        let mut limb = Limb::new(LimbCategory::Wing, options.side, Location::None, LimbType::Custom);
        limb.new_armature("Wing", count, DEFAULT_ARMATURE_LENGTH);
        if !matches!(options.view, View::Top | View::Bottom) {
            tracing::debug!(view = %options.view, "wing generator: view not laid out");
            return Ok(Some(self.push_limb(limb)));
        }

        let s = appendage_side_sign(options.side, options.view);
        let place = Placement::new(self.height, s, WING_ARM, options.position);

        // Chain depth of each enabled bone.
        let arm = options.arm.then_some(0);
        let forearm = options.forearm.then_some(usize::from(options.arm));
        let hand = options
            .hand
            .then_some(usize::from(options.arm) + usize::from(options.forearm));
        let inner = forearm.or(hand).or(arm).unwrap_or(0);
        let outer = hand.or(forearm).or(arm).unwrap_or(0);

        let mut names = Vec::new();
        let mut feather = |(base, tip): (Point, Point)| {
            bone_with_tip("Feather", BoneType::Feather, place.point(base), place.point(tip), &mut names)
        };
        let n = options.feathers;
        let mut pending: Vec<(usize, Bone)> = Vec::with_capacity(n);
        if n == 1 {
            pending.push((inner, feather(MIDDLE_FEATHER)));
        } else {
            let half = n as f64 / 2.0;
            for i in 0..n {
                let i = i as f64;
                if i < half {
                    pending.push((outer, feather(PRIMARY_FEATHERS.at(i, 0.0, half))));
                } else {
                    pending.push((inner, feather(SECONDARY_FEATHERS.at(i, half, (n - 1) as f64))));
                }
            }
        }

        if let Some(root) = limb.armature.last_mut() {
            let steps = [
                (options.arm, "Arm", BoneType::Humerus, WING_ARM),
                (options.forearm, "Forearm", BoneType::Radius, WING_FOREARM),
                (options.hand, "Hand", BoneType::Carpus, WING_HAND),
            ];
            lay_out_chain(root, &place, &steps, "Wing_Tip", WING_TIP)?;
            attach_along_chain(root, pending)?;
        }

        Ok(Some(self.push_limb(limb)))
    }

    /// Appends a fin: a root bone with an attached tip and a fan of
    /// fishbones, each with its own attached tip.
    pub fn new_fin(&mut self, options: &FinOptions) -> Result<Option<&mut Limb>, GeneratorError> {
        let s = appendage_side_sign(options.side, options.view);
        let place = Placement::new(self.height, s, FIN_ROOT, options.position);

        let mut tip = placed("Fin_Tip", BoneType::Tip, place.point(FIN_TIP));
        tip.attached = true;
        let mut root = placed("Fin", BoneType::Fin, place.point(FIN_ROOT));
        root.children.push(tip);

        let mut names = Vec::new();
        let mut fishbone = |(base, tip): (Point, Point)| {
            bone_with_tip("Fishbone", BoneType::FinFishbone, place.point(base), place.point(tip), &mut names)
        };
        let n = options.fishbones;
        if n == 1 {
            root.children.push(fishbone(MIDDLE_FISHBONE));
        } else {
            for i in 0..n {
                root.children.push(fishbone(FISHBONES.at(i as f64, 0.0, (n - 1) as f64)));
            }
        }

        let mut limb = Limb::new(LimbCategory::Fin, options.side, Location::None, LimbType::Custom);
        limb.armature.push(root);
        Ok(Some(self.push_limb(limb)))
    }
}
