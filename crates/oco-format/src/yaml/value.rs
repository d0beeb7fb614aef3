//! Tagged value model for the YAML engine.

use std::fmt;

use chrono::NaiveDateTime;

/// Format used to write and recognize date scalars.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Date(NaiveDateTime),
}

impl Scalar {
    /// Returns the string content if this is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the numeric value of an integer or float scalar.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(i) => Some(*i as f64),
            Scalar::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Scalar::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::String(s) => f.write_str(s),
            Scalar::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
        }
    }
}

/// A YAML node: a scalar, an ordered mapping, or a sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Yaml {
    Scalar(Scalar),
    Mapping(Mapping),
    Sequence(Vec<Yaml>),
}

impl Yaml {
    /// Short name of the node kind, for messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Yaml::Scalar(_) => "scalar",
            Yaml::Mapping(_) => "mapping",
            Yaml::Sequence(_) => "sequence",
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Yaml::Mapping(_))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Yaml::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Yaml::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Yaml::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Yaml]> {
        match self {
            Yaml::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Scalar::as_bool)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_scalar().and_then(Scalar::as_i64)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(Scalar::as_f64)
    }

    pub fn as_date(&self) -> Option<NaiveDateTime> {
        self.as_scalar().and_then(Scalar::as_date)
    }
}

impl From<Scalar> for Yaml {
    fn from(value: Scalar) -> Self {
        Yaml::Scalar(value)
    }
}

impl From<bool> for Yaml {
    fn from(value: bool) -> Self {
        Yaml::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for Yaml {
    fn from(value: i64) -> Self {
        Yaml::Scalar(Scalar::Int(value))
    }
}

impl From<i32> for Yaml {
    fn from(value: i32) -> Self {
        Yaml::Scalar(Scalar::Int(i64::from(value)))
    }
}

impl From<f64> for Yaml {
    fn from(value: f64) -> Self {
        Yaml::Scalar(Scalar::Float(value))
    }
}

impl From<&str> for Yaml {
    fn from(value: &str) -> Self {
        Yaml::Scalar(Scalar::String(value.to_owned()))
    }
}

impl From<String> for Yaml {
    fn from(value: String) -> Self {
        Yaml::Scalar(Scalar::String(value))
    }
}

impl From<NaiveDateTime> for Yaml {
    fn from(value: NaiveDateTime) -> Self {
        Yaml::Scalar(Scalar::Date(value))
    }
}

impl From<Mapping> for Yaml {
    fn from(value: Mapping) -> Self {
        Yaml::Mapping(value)
    }
}

impl From<Vec<Yaml>> for Yaml {
    fn from(value: Vec<Yaml>) -> Self {
        Yaml::Sequence(value)
    }
}

/// An insertion-ordered mapping with unique string keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    entries: Vec<(String, Yaml)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&Yaml> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Yaml> {
        let index = self.position(key)?;
        Some(&mut self.entries[index].1)
    }

    /// Inserts a value, replacing an existing key in place.
    ///
    /// Returns the previous value if the key was already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Yaml>) -> Option<Yaml> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Yaml> {
        let index = self.position(key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Yaml)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Returns the mapping stored under `key`, replacing any other value with
    /// an empty mapping first.
    pub(crate) fn child_mapping_mut(&mut self, key: &str) -> &mut Mapping {
        let index = match self.position(key) {
            Some(index) => index,
            None => {
                self.entries.push((key.to_owned(), Yaml::Mapping(Mapping::new())));
                self.entries.len() - 1
            }
        };
        let slot = &mut self.entries[index].1;
        if !slot.is_mapping() {
            *slot = Yaml::Mapping(Mapping::new());
        }
        match slot {
            Yaml::Mapping(mapping) => mapping,
            _ => unreachable!("slot holds a mapping"),
        }
    }
}

impl FromIterator<(String, Yaml)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (String, Yaml)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Yaml);
    type IntoIter = std::vec::IntoIter<(String, Yaml)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
