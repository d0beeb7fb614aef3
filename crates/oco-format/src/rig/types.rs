//! String-backed enums used by OCO documents.
//!
//! Every enum serializes to the exact string stored in OCO files. Parsing is
//! strict through [`FromStr`]; loaders fall back to the default variant when a
//! stored string is unknown.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident (default $default:ident) {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the string stored in OCO files.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| format!("unknown {} '{}'", stringify!($name), s))
            }
        }
    };
}

string_enum! {
    /// Kind of OCO document.
    DocumentType (default Meta) {
        /// A meta-rig, used to build a default armature for an auto-rig.
        Meta => "meta",
        /// An actual rigged character.
        Character => "character",
    }
}

string_enum! {
    /// Predefined limb categories (stored under the `limb` key).
    LimbCategory (default Custom) {
        Spine => "spine",
        Arm => "arm",
        Leg => "leg",
        Tail => "tail",
        Wing => "wing",
        Hair => "hair",
        SnakeSpine => "snakeSpine",
        FishSpine => "fishSpine",
        Fin => "fin",
        Custom => "custom",
    }
}

string_enum! {
    /// Anatomical family of a limb (stored under the limb's `type` key).
    LimbType (default Custom) {
        Hominoid => "hominoid",
        Plantigrade => "plantigrade",
        Digitigrade => "digitigrade",
        Ungulate => "ungulate",
        Arthropod => "arthropod",
        Custom => "custom",
    }
}

string_enum! {
    /// Role of a bone in its limb.
    BoneType (default Custom) {
        Custom => "custom",
        Tip => "tip",
        Clavicle => "clavicle",
        Humerus => "humerus",
        Radius => "radius",
        Carpus => "carpus",
        Finger => "finger",
        Heel => "heel",
        Femur => "femur",
        Tibia => "tibia",
        Tarsus => "tarsus",
        Toe => "toe",
        Hips => "hips",
        Spine => "spine",
        Torso => "torso",
        Neck => "neck",
        SkullTip => "skullTip",
        Skull => "skull",
        Tail => "tail",
        TailRoot => "tail1",
        TailMid => "tail2",
        TailEnd => "tail3",
        Feather => "feather",
        SnakeSpineRoot => "snakeSpine1",
        SnakeSpineMid => "snakeSpine2",
        SnakeSpineEnd => "snakeSpine3",
        FishSpineRoot => "fishSpine1",
        FishSpineMid => "fishSpine2",
        FishSpineEnd => "fishSpine3",
        Hair => "hair",
        HairRoot => "hair1",
        HairMid => "hair2",
        HairEnd => "hair3",
        Fin => "fin",
        FinFishbone => "finBone",
    }
}

string_enum! {
    /// Side of a limb. Combined with [`Location`] to tell similar limbs apart.
    Side (default None) {
        Left => "L",
        Right => "R",
        None => "",
    }
}

string_enum! {
    /// Location of a limb on the body.
    Location (default None) {
        Front => "Fr",
        Back => "Bk",
        Tail => "Tl",
        Middle => "Md",
        Above => "Ab",
        Under => "Un",
        None => "",
    }
}

string_enum! {
    /// Axis a limb is drawn from. Generators use it to mirror and lay out bones.
    View (default Front) {
        Front => "front",
        Left => "left",
        Right => "right",
        Back => "back",
        Top => "top",
        Bottom => "bottom",
    }
}

string_enum! {
    /// How the document icon is stored.
    ImageEncoding (default RelativePath) {
        /// The PNG bytes, base64 encoded.
        PngBase64 => "PNG/BASE64",
        /// A path relative to the OCO file's folder.
        RelativePath => "PATH",
        /// An absolute path.
        AbsolutePath => "ABS_PATH",
    }
}

/// Bone types along a three-part chain (root, middle, end), indexed by thirds.
pub(crate) fn chain_part(index: usize, count: usize, parts: [BoneType; 3]) -> BoneType {
    let last = count.saturating_sub(1) as f64;
    let i = index as f64;
    if i <= last / 3.0 {
        parts[0]
    } else if i <= last * 2.0 / 3.0 {
        parts[1]
    } else {
        parts[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_match_file_format() {
        assert_eq!(LimbCategory::SnakeSpine.as_str(), "snakeSpine");
        assert_eq!(BoneType::TailRoot.as_str(), "tail1");
        assert_eq!(BoneType::FinFishbone.as_str(), "finBone");
        assert_eq!(ImageEncoding::PngBase64.as_str(), "PNG/BASE64");
        assert_eq!(Side::None.as_str(), "");
        assert_eq!(Location::Middle.as_str(), "Md");
    }

    #[test]
    fn test_from_str_round_trips_every_variant() {
        for bone_type in BoneType::ALL {
            assert_eq!(bone_type.as_str().parse::<BoneType>(), Ok(*bone_type));
        }
        for location in Location::ALL {
            assert_eq!(location.to_string().parse::<Location>(), Ok(*location));
        }
    }

    #[test]
    fn test_unknown_strings_fall_back_to_default() {
        assert!("elbow".parse::<BoneType>().is_err());
        assert_eq!("elbow".parse::<BoneType>().unwrap_or_default(), BoneType::Custom);
        assert_eq!("x".parse::<ImageEncoding>().unwrap_or_default(), ImageEncoding::RelativePath);
        assert_eq!(DocumentType::default(), DocumentType::Meta);
    }

    #[test]
    fn test_serde_uses_file_strings() {
        let json = serde_json::to_string(&LimbCategory::FishSpine).unwrap();
        assert_eq!(json, "\"fishSpine\"");
        let side: Side = serde_json::from_str("\"R\"").unwrap();
        assert_eq!(side, Side::Right);
    }

    #[test]
    fn test_chain_part_splits_in_thirds() {
        let parts = [BoneType::TailRoot, BoneType::TailMid, BoneType::TailEnd];
        let types: Vec<BoneType> = (0..3).map(|i| chain_part(i, 3, parts)).collect();
        assert_eq!(types, parts.to_vec());
        assert_eq!(chain_part(0, 1, parts), BoneType::TailRoot);
    }
}
