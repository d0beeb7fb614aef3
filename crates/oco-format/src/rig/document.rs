//! OCO documents: the root of a rig.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{json, Value};

use super::bone::Bone;
use super::bounds::{get_bounds, Bounds};
use super::fields;
use super::limb::Limb;
use super::tree::BoneTree;
use super::types::{DocumentType, ImageEncoding, LimbCategory, LimbType, Location, Side};
use crate::error::{OcoError, MAX_RESOLUTION};
use crate::icon;

/// Name given to documents loaded without one.
pub const DEFAULT_DOCUMENT_NAME: &str = "Character";
pub const DEFAULT_HEIGHT: f64 = 185.0;
pub const DEFAULT_WIDTH: f64 = 60.0;
pub const DEFAULT_CENTER_OF_MASS: [f64; 2] = [0.0, 107.0];
pub const DEFAULT_RESOLUTION: [u32; 2] = [1920, 1080];
pub const DEFAULT_WORLD: [f64; 2] = [960.0, 980.0];
pub const DEFAULT_PIXELS_PER_CM: f64 = 4.22;

/// An OCO document.
///
/// Positions are in centimeters with Y up; `world` is the pixel position of
/// the origin and `pixels_per_cm` the scale used to convert to pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Stored under the `type` key.
    pub doc_type: DocumentType,
    pub name: String,
    pub height: f64,
    pub width: f64,
    pub center_of_mass: [f64; 2],
    /// Each component is in `]0, 30000]`.
    pub resolution: [u32; 2],
    pub world: [f64; 2],
    pub pixels_per_cm: f64,
    /// An image path or base64 PNG data, depending on `image_encoding`.
    pub icon: String,
    pub image_encoding: ImageEncoding,
    pub limbs: Vec<Limb>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_DOCUMENT_NAME)
    }
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            doc_type: DocumentType::default(),
            name: name.into(),
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            center_of_mass: DEFAULT_CENTER_OF_MASS,
            resolution: DEFAULT_RESOLUTION,
            world: DEFAULT_WORLD,
            pixels_per_cm: DEFAULT_PIXELS_PER_CM,
            icon: String::new(),
            image_encoding: ImageEncoding::default(),
            limbs: Vec::new(),
        }
    }

    /// Appends `limb` and returns it.
    pub fn push_limb(&mut self, limb: Limb) -> &mut Limb {
        self.limbs.push(limb);
        let index = self.limbs.len() - 1;
        &mut self.limbs[index]
    }

    /// Appends an empty limb and returns it.
    pub fn new_limb(
        &mut self,
        category: LimbCategory,
        side: Side,
        location: Location,
        limb_type: LimbType,
    ) -> &mut Limb {
        self.push_limb(Limb::new(category, side, location, limb_type))
    }

    /// The first spine or fish spine of the document.
    pub fn spine(&self) -> Option<&Limb> {
        self.limbs
            .iter()
            .find(|limb| matches!(limb.category, LimbCategory::Spine | LimbCategory::FishSpine))
    }

    pub fn num_bones(&self) -> usize {
        self.limbs.iter().map(Limb::num_bones).sum()
    }

    /// Counts every limb, including limbs attached to bones.
    pub fn num_limbs(&self) -> usize {
        self.limbs.iter().map(Limb::num_limbs).sum()
    }

    /// Every limb: each root limb followed by the limbs attached to its bones.
    pub fn limbs_recursive(&self) -> Vec<&Limb> {
        let mut limbs = Vec::new();
        for limb in &self.limbs {
            limbs.push(limb);
            limbs.extend(limb.limbs_recursive());
        }
        limbs
    }

    /// Bounding box of every bone, or `None` without bones.
    pub fn bounds(&self) -> Option<Bounds> {
        self.limbs
            .iter()
            .filter_map(|limb| get_bounds(&limb.armature))
            .reduce(Bounds::union)
    }

    /// Sets `width` and `height` from the bounds of the bones.
    ///
    /// Returns `false`, leaving the size unchanged, when there are no bones.
    pub fn update_size(&mut self) -> bool {
        match self.bounds() {
            Some(bounds) => {
                self.width = bounds.width();
                self.height = bounds.height();
                true
            }
            None => false,
        }
    }

    /// Converts a point from the document space to pixels in world space.
    pub fn from_world(&self, point: [f64; 2]) -> [f64; 2] {
        [point[0] + self.world[0], self.world[1] - point[1]]
    }

    /// Converts a pixel point in world space to the document space.
    pub fn to_world(&self, point: [f64; 2]) -> [f64; 2] {
        [point[0] - self.world[0], self.world[1] - point[1]]
    }

    /// Converts a point in centimeters to a pixel position.
    ///
    /// # Example
    /// ```
    /// use oco_format::rig::Document;
    ///
    /// let doc = Document::new("Rex");
    /// let px = doc.to_pixels([10.0, 20.0]);
    /// let back = doc.from_pixels(px);
    /// assert!((back[0] - 10.0).abs() < 1e-9 && (back[1] - 20.0).abs() < 1e-9);
    /// ```
    pub fn to_pixels(&self, point: [f64; 2]) -> [f64; 2] {
        self.from_world([point[0] * self.pixels_per_cm, point[1] * self.pixels_per_cm])
    }

    /// Converts a pixel position to centimeters.
    pub fn from_pixels(&self, point: [f64; 2]) -> [f64; 2] {
        let [x, y] = self.to_world(point);
        [x / self.pixels_per_cm, y / self.pixels_per_cm]
    }

    /// Converts a length in centimeters to pixels.
    pub fn to_pixels_scalar(&self, value: f64) -> f64 {
        value * self.pixels_per_cm
    }

    /// Converts a length in pixels to centimeters.
    pub fn from_pixels_scalar(&self, value: f64) -> f64 {
        value / self.pixels_per_cm
    }

    /// The document as a JSON object, with the icon stored as it is.
    pub fn to_object(&self) -> Value {
        json!({
            "type": self.doc_type.as_str(),
            "name": self.name,
            "height": self.height,
            "width": self.width,
            "centerOfMass": self.center_of_mass,
            "limbs": self.limbs.iter().map(Limb::to_object).collect::<Vec<_>>(),
            "resolution": self.resolution,
            "world": self.world,
            "pixelsPerCm": self.pixels_per_cm,
            "icon": self.icon,
            "imageEncoding": self.image_encoding.as_str(),
        })
    }

    /// Pretty-printed JSON for a file saved at `destination`.
    ///
    /// The icon is converted according to `image_encoding`: embedded as
    /// base64, made relative to the destination folder, or made absolute.
    pub fn to_json(&self, destination: Option<&Path>) -> Result<String, OcoError> {
        let mut object = self.to_object();
        object["icon"] = Value::String(icon::resolve_for_output(
            &self.icon,
            self.image_encoding,
            destination,
        )?);

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        object.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Writes the document to `path`.
    #[tracing::instrument(skip(self), fields(name = %self.name))]
    pub fn to_file(&self, path: &Path) -> Result<(), OcoError> {
        let json = self.to_json(Some(path))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json)?;
        tracing::debug!(bones = self.num_bones(), "document written");
        Ok(())
    }

    /// Builds a document from its JSON object.
    ///
    /// Missing or malformed fields take their defaults, except `resolution`,
    /// whose components are rounded to whole pixels and must then be in
    /// `]0, 30000]`.
    pub fn from_object(data: &Value) -> Result<Self, OcoError> {
        let resolution = fields::pair_or(
            data,
            "resolution",
            [f64::from(DEFAULT_RESOLUTION[0]), f64::from(DEFAULT_RESOLUTION[1])],
        );
        let resolution = [
            check_resolution("width", resolution[0])?,
            check_resolution("height", resolution[1])?,
        ];

        Ok(Self {
            doc_type: fields::enum_or_default(data, "type"),
            name: fields::string_or(data, "name", DEFAULT_DOCUMENT_NAME),
            height: fields::f64_or(data, "height", DEFAULT_HEIGHT),
            width: fields::f64_or(data, "width", DEFAULT_WIDTH),
            center_of_mass: fields::pair_or(data, "centerOfMass", DEFAULT_CENTER_OF_MASS),
            resolution,
            world: fields::pair_or(data, "world", DEFAULT_WORLD),
            pixels_per_cm: fields::f64_or(data, "pixelsPerCm", DEFAULT_PIXELS_PER_CM),
            icon: fields::string_or(data, "icon", ""),
            image_encoding: fields::enum_or_default(data, "imageEncoding"),
            limbs: fields::array(data, "limbs").iter().map(Limb::from_object).collect(),
        })
    }

    pub fn from_json(text: &str) -> Result<Self, OcoError> {
        let data: Value = serde_json::from_str(text)?;
        Self::from_object(&data)
    }

    /// Reads a document from an OCO file.
    #[tracing::instrument]
    pub fn from_file(path: &Path) -> Result<Self, OcoError> {
        let text = fs::read_to_string(path)?;
        let doc = Self::from_json(&text)?;
        tracing::debug!(name = %doc.name, limbs = doc.limbs.len(), "document loaded");
        Ok(doc)
    }

    /// Finds or extracts the icon of the OCO file `file` without loading its
    /// limbs.
    ///
    /// Path icons are returned resolved; base64 icons are decoded to
    /// `destination`, by default the file's path with a `.png` extension.
    /// Returns `None` when there's no icon or the embedded data is invalid.
    #[tracing::instrument]
    pub fn extract_icon(file: &Path, destination: Option<&Path>) -> Result<Option<PathBuf>, OcoError> {
        let data: Value = serde_json::from_str(&fs::read_to_string(file)?)?;
        let icon = fields::string_or(&data, "icon", "");
        let encoding: ImageEncoding = fields::enum_or_default(&data, "imageEncoding");
        icon::extract(&icon, encoding, file, destination)
    }
}

/// Rounds a resolution component to whole pixels and checks the result.
fn check_resolution(axis: &'static str, value: f64) -> Result<u32, OcoError> {
    let pixels = value.round();
    if pixels.is_nan() || pixels < 1.0 || pixels > f64::from(MAX_RESOLUTION) {
        tracing::warn!(axis, value, "resolution out of range");
        return Err(OcoError::InvalidResolution { axis, value });
    }
    Ok(pixels as u32)
}

impl BoneTree for Document {
    fn collect_bones<'a>(&'a self, out: &mut Vec<&'a Bone>) {
        for limb in &self.limbs {
            limb.collect_bones(out);
        }
    }

    fn visit_bones_mut(&mut self, f: &mut dyn FnMut(&mut Bone)) {
        for limb in &mut self.limbs {
            limb.visit_bones_mut(f);
        }
    }
}
