//! Arm and leg generators.

use super::{lay_out_chain, limb_side_sign, placed, Placement, Point};
use crate::error::GeneratorError;
use crate::rig::document::Document;
use crate::rig::limb::{Limb, DEFAULT_ARMATURE_LENGTH};
use crate::rig::types::{BoneType, LimbCategory, LimbType, Location, Side, View};

/// Options for [`Document::new_arm`].
#[derive(Debug, Clone, PartialEq)]
pub struct ArmOptions {
    pub limb_type: LimbType,
    pub side: Side,
    pub shoulder: bool,
    pub arm: bool,
    pub forearm: bool,
    pub hand: bool,
    pub claws: bool,
    /// Where the shoulder joint goes (even without a shoulder bone).
    pub position: Option<Point>,
    pub location: Location,
    /// Front for plantigrade arms without claws, right otherwise.
    pub view: Option<View>,
}

impl Default for ArmOptions {
    fn default() -> Self {
        Self {
            limb_type: LimbType::Hominoid,
            side: Side::Left,
            shoulder: false,
            arm: true,
            forearm: true,
            hand: true,
            claws: false,
            position: None,
            location: Location::Front,
            view: None,
        }
    }
}

/// Options for [`Document::new_leg`].
#[derive(Debug, Clone, PartialEq)]
pub struct LegOptions {
    pub limb_type: LimbType,
    pub side: Side,
    pub thigh: bool,
    pub calf: bool,
    pub foot: bool,
    pub claws: bool,
    /// Where the thigh joint goes.
    pub position: Option<Point>,
    pub location: Location,
    /// Front for plantigrade legs, right otherwise.
    pub view: Option<View>,
}

impl Default for LegOptions {
    fn default() -> Self {
        Self {
            limb_type: LimbType::Hominoid,
            side: Side::Left,
            thigh: true,
            calf: true,
            foot: true,
            claws: false,
            position: None,
            location: Location::Back,
            view: None,
        }
    }
}

struct ArmTable {
    shoulder: Point,
    arm: Point,
    forearm: Point,
    hand: Point,
    claws: Point,
    tip: Point,
    heel: Option<Point>,
}

const HOMINOID_ARM: ArmTable = ArmTable {
    shoulder: [0.02, 0.78],
    arm: [0.12, 0.77],
    forearm: [0.15, 0.65],
    hand: [0.12, 0.51],
    // Midway between the hand and the tip.
    claws: [0.10, 0.465],
    tip: [0.08, 0.42],
    heel: None,
};

const PLANTIGRADE_ARM: ArmTable = ArmTable {
    shoulder: [0.40, 0.92],
    arm: [0.48, 0.74],
    forearm: [0.36, 0.44],
    hand: [0.38, 0.05],
    claws: [0.455, 0.035],
    tip: [0.585, 0.0],
    heel: Some([0.38, 0.0]),
};

const DIGITIGRADE_ARM: ArmTable = ArmTable {
    shoulder: [0.45, 0.86],
    arm: [0.45, 0.66],
    forearm: [0.21, 0.45],
    hand: [0.45, 0.14],
    claws: [0.49, 0.03],
    tip: [0.59, 0.03],
    heel: None,
};

const UNGULATE_ARM: ArmTable = ArmTable {
    shoulder: [0.33, 0.80],
    arm: [0.35, 0.63],
    forearm: [0.24, 0.53],
    hand: [0.19, 0.31],
    claws: [0.19, 0.14],
    tip: [0.21, 0.0],
    heel: None,
};

const ARTHROPOD_FRONT_ARM: ArmTable = ArmTable {
    shoulder: [0.33, 0.65],
    arm: [0.24, 0.45],
    forearm: [0.55, 0.80],
    hand: [0.77, 0.28],
    claws: [0.86, 0.07],
    tip: [0.93, 0.0],
    heel: None,
};

const ARTHROPOD_MIDDLE_ARM: ArmTable = ArmTable {
    shoulder: [0.09, 0.50],
    arm: [-0.01, 0.44],
    forearm: [-0.08, 0.82],
    hand: [-0.17, 0.42],
    claws: [-0.25, 0.07],
    tip: [-0.31, 0.0],
    heel: None,
};

const ARTHROPOD_BACK_ARM: ArmTable = ArmTable {
    shoulder: [-0.03, 0.48],
    arm: [-0.17, 0.43],
    forearm: [-0.44, 0.92],
    hand: [-0.77, 0.47],
    claws: [-0.98, 0.07],
    tip: [-1.06, 0.0],
    heel: None,
};

/// Plantigrade arms without claws are drawn like hominoid arms, and so are
/// custom arms.
fn arm_table(limb_type: LimbType, claws: bool, location: Location) -> &'static ArmTable {
    match limb_type {
        LimbType::Plantigrade if claws => &PLANTIGRADE_ARM,
        LimbType::Digitigrade => &DIGITIGRADE_ARM,
        LimbType::Ungulate => &UNGULATE_ARM,
        LimbType::Arthropod => match location {
            Location::Middle => &ARTHROPOD_MIDDLE_ARM,
            Location::Back => &ARTHROPOD_BACK_ARM,
            _ => &ARTHROPOD_FRONT_ARM,
        },
        _ => &HOMINOID_ARM,
    }
}

struct LegTable {
    thigh: Point,
    calf: Point,
    foot: Point,
    claws: Point,
    tip: Point,
    heel: Option<Point>,
}

const PLANTIGRADE_LEG: LegTable = LegTable {
    thigh: [0.04, 0.53],
    calf: [0.05, 0.28],
    foot: [0.036, 0.027],
    claws: [0.10, 0.0125],
    tip: [0.145, 0.0],
    heel: Some([0.01, 0.0]),
};

const DIGITIGRADE_LEG: LegTable = LegTable {
    thigh: [-0.45, 0.73],
    calf: [-0.16, 0.54],
    foot: [-0.5, 0.24],
    claws: [-0.37, 0.03],
    tip: [-0.25, 0.0],
    heel: None,
};

const UNGULATE_LEG: LegTable = LegTable {
    thigh: [-0.26, 0.69],
    calf: [-0.2, 0.52],
    foot: [-0.38, 0.33],
    claws: [-0.37, 0.08],
    tip: [-0.34, 0.0],
    heel: None,
};

/// Hominoid, plantigrade, arthropod and custom legs share one table.
fn leg_table(limb_type: LimbType) -> &'static LegTable {
    match limb_type {
        LimbType::Digitigrade => &DIGITIGRADE_LEG,
        LimbType::Ungulate => &UNGULATE_LEG,
        _ => &PLANTIGRADE_LEG,
    }
}

impl Document {
    /// Appends an arm limb.
    ///
    /// The chain is, in order and when enabled: shoulder, arm, forearm, hand,
    /// claws, then a tip. Clawed plantigrade arms also get a heel bone under
    /// the tip.
    ///
    /// # Example
    /// ```
    /// use oco_format::rig::{ArmOptions, Document, LimbType};
    ///
    /// let mut doc = Document::new("Bear");
    /// let arm = doc
    ///     .new_arm(&ArmOptions { limb_type: LimbType::Plantigrade, claws: true, ..Default::default() })
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(arm.num_bones(), 6);
    /// ```
    pub fn new_arm(&mut self, options: &ArmOptions) -> Result<Option<&mut Limb>, GeneratorError> {
        let parts = [
            options.shoulder,
            options.arm,
            options.forearm,
            options.hand,
            options.claws,
        ];
        let count = 1 + parts.iter().filter(|enabled| **enabled).count();
        if count == 1 {
            tracing::debug!("arm generator: no part requested");
            return Ok(None);
        }

        let view = options.view.unwrap_or(
            if options.limb_type == LimbType::Plantigrade && !options.claws {
                View::Front
            } else {
                View::Right
            },
        );
        let table = arm_table(options.limb_type, options.claws, options.location);
        let place = Placement::new(
            self.height,
            limb_side_sign(options.side, view),
            table.shoulder,
            options.position,
        );

        let mut limb = Limb::new(LimbCategory::Arm, options.side, options.location, options.limb_type);
        if let Some(root) = limb.new_armature("Arm", count, DEFAULT_ARMATURE_LENGTH) {
            let steps = [
                (options.shoulder, "Shoulder", BoneType::Clavicle, table.shoulder),
                (options.arm, "Arm", BoneType::Humerus, table.arm),
                (options.forearm, "Forearm", BoneType::Radius, table.forearm),
                (options.hand, "Hand", BoneType::Carpus, table.hand),
                (options.claws, "Claws", BoneType::Finger, table.claws),
            ];
            let tip = lay_out_chain(root, &place, &steps, "Arm_Tip", table.tip)?;
            if let Some(heel) = table.heel {
                tip.children.push(placed("Heel", BoneType::Heel, place.point(heel)));
            }
        }

        Ok(Some(self.push_limb(limb)))
    }

    /// Appends a leg limb.
    ///
    /// The chain is, in order and when enabled: thigh, calf, foot, claws, then
    /// a tip. Claws are named "Toes" on hominoid legs and "Hoof" on ungulate
    /// legs. Clawed hominoid and plantigrade legs also get a heel bone under
    /// the tip.
    pub fn new_leg(&mut self, options: &LegOptions) -> Result<Option<&mut Limb>, GeneratorError> {
        let parts = [options.thigh, options.calf, options.foot, options.claws];
        let count = 1 + parts.iter().filter(|enabled| **enabled).count();
        if count == 1 {
            tracing::debug!("leg generator: no part requested");
            return Ok(None);
        }

        let view = options.view.unwrap_or(if options.limb_type == LimbType::Plantigrade {
            View::Front
        } else {
            View::Right
        });
        let table = leg_table(options.limb_type);
        let place = Placement::new(
            self.height,
            limb_side_sign(options.side, view),
            table.thigh,
            options.position,
        );
        let claws_name = match options.limb_type {
            LimbType::Hominoid => "Toes",
            LimbType::Ungulate => "Hoof",
            _ => "Claws",
        };

        let mut limb = Limb::new(LimbCategory::Leg, options.side, options.location, options.limb_type);
        if let Some(root) = limb.new_armature("Leg", count, DEFAULT_ARMATURE_LENGTH) {
            let steps = [
                (options.thigh, "Thigh", BoneType::Femur, table.thigh),
                (options.calf, "Calf", BoneType::Tibia, table.calf),
                (options.foot, "Foot", BoneType::Tarsus, table.foot),
                (options.claws, claws_name, BoneType::Toe, table.claws),
            ];
            let tip = lay_out_chain(root, &place, &steps, "Leg_Tip", table.tip)?;
            let heeled = matches!(options.limb_type, LimbType::Hominoid | LimbType::Plantigrade);
            if let (true, true, Some(heel)) = (options.claws, heeled, table.heel) {
                tip.children.push(placed("Heel", BoneType::Heel, place.point(heel)));
            }
        }

        Ok(Some(self.push_limb(limb)))
    }
}
