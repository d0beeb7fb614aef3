//! Slash-separated key paths into nested mappings.

use std::fmt;
use std::str::FromStr;

use super::value::{Mapping, Yaml};
use crate::error::KeyPathError;

/// A parsed key path such as `library/path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    pub const SEPARATOR: char = '/';

    /// Splits `path` on `/`.
    ///
    /// # Example
    /// ```
    /// use oco_format::yaml::KeyPath;
    ///
    /// let path = KeyPath::parse("metadata/created by").unwrap();
    /// assert_eq!(path.segments(), ["metadata", "created by"]);
    /// assert!(KeyPath::parse("a//b").is_err());
    /// ```
    pub fn parse(path: &str) -> Result<Self, KeyPathError> {
        if path.is_empty() {
            return Err(KeyPathError::Empty);
        }
        let segments: Vec<String> = path.split(Self::SEPARATOR).map(str::to_owned).collect();
        if segments.iter().any(String::is_empty) {
            return Err(KeyPathError::EmptySegment(path.to_owned()));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The last segment.
    pub fn leaf(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }
}

impl FromStr for KeyPath {
    type Err = KeyPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

impl Mapping {
    /// Follows `path` through nested mappings.
    pub fn get_path(&self, path: &KeyPath) -> Option<&Yaml> {
        let (leaf, parents) = path.segments.split_last()?;
        let mut current = self;
        for segment in parents {
            current = current.get(segment)?.as_mapping()?;
        }
        current.get(leaf)
    }

    /// Stores `value` at `path`, creating intermediate mappings and replacing
    /// intermediate values that aren't mappings.
    ///
    /// Returns the value previously stored at `path`.
    pub fn set_path(&mut self, path: &KeyPath, value: impl Into<Yaml>) -> Option<Yaml> {
        let (leaf, parents) = path.segments.split_last()?;
        let mut current = self;
        for segment in parents {
            current = current.child_mapping_mut(segment);
        }
        current.insert(leaf.clone(), value)
    }
}
