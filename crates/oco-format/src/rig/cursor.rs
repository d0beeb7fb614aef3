//! Walking single-child bone chains.

use super::bone::Bone;
use crate::error::GeneratorError;

/// A mutable position in a chain of bones.
///
/// Advancing follows the only child of the current bone. At the tip the
/// cursor stays in place; on a bone with several children it fails with
/// [`GeneratorError::AmbiguousTip`].
#[derive(Debug)]
pub struct BoneCursor<'a> {
    bone: &'a mut Bone,
    depth: usize,
}

impl<'a> BoneCursor<'a> {
    pub fn new(root: &'a mut Bone) -> Self {
        Self {
            bone: root,
            depth: 0,
        }
    }

    /// The bone under the cursor.
    pub fn bone(&mut self) -> &mut Bone {
        self.bone
    }

    /// Number of bones between the root and the cursor.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_tip(&self) -> bool {
        self.bone.children.is_empty()
    }

    /// Moves to the only child of the current bone.
    pub fn advance(self) -> Result<Self, GeneratorError> {
        let Self { bone, depth } = self;
        match bone.children.len() {
            0 => Ok(Self { bone, depth }),
            1 => Ok(Self {
                bone: &mut bone.children[0],
                depth: depth + 1,
            }),
            children => Err(GeneratorError::AmbiguousTip {
                bone: bone.name.clone(),
                children,
            }),
        }
    }

    /// Advances `steps` times.
    pub fn advance_by(mut self, steps: usize) -> Result<Self, GeneratorError> {
        for _ in 0..steps {
            self = self.advance()?;
        }
        Ok(self)
    }

    /// Releases the bone under the cursor.
    pub fn into_bone(self) -> &'a mut Bone {
        self.bone
    }
}
