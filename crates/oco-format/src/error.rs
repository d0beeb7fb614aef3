//! Error types for OCO documents, the YAML engine, and the config store.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Largest accepted resolution component, in pixels.
pub const MAX_RESOLUTION: u32 = 30000;

/// The kind of block the YAML parser inferred from a block's first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// A block of `key: value` lines.
    Mapping,
    /// A block of `- item` lines.
    Sequence,
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::Mapping => write!(f, "mapping"),
            BlockKind::Sequence => write!(f, "sequence"),
        }
    }
}

/// Errors raised while parsing YAML text.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YamlError {
    /// The line can't be read as a key, a value, or a sequence item.
    #[error("YAML syntax error at line {line}: \"{text}\": {message}")]
    Syntax {
        line: usize,
        text: String,
        message: String,
    },

    /// A line doesn't match the kind of the block it belongs to.
    #[error("YAML block error at line {line}: \"{text}\" is inside a {expected} block")]
    MixedBlock {
        line: usize,
        text: String,
        expected: BlockKind,
    },

    /// A `key:` line isn't followed by a more indented block.
    #[error("YAML value error at line {line}: key \"{key}\" doesn't have a value")]
    MissingValue { line: usize, key: String },

    /// A double-quoted string has invalid escapes.
    #[error("YAML string error at line {line}: {message}")]
    QuotedString { line: usize, message: String },
}

impl YamlError {
    /// Returns the 1-based line number of the offending line.
    pub fn line(&self) -> usize {
        match self {
            YamlError::Syntax { line, .. }
            | YamlError::MixedBlock { line, .. }
            | YamlError::MissingValue { line, .. }
            | YamlError::QuotedString { line, .. } => *line,
        }
    }
}

/// Errors raised while dumping a value as YAML.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DumpError {
    /// Sequences can't directly contain other sequences.
    #[error("YAML dump error: a sequence can't contain another sequence; wrap it in a single-key mapping")]
    NestedSequence,

    /// Sequence items can only be single-key mappings.
    #[error("YAML dump error: a sequence item can only be a mapping with a single key, found {keys} keys")]
    MultiKeyItem { keys: usize },

    /// The key can't be written on a `key: value` line.
    #[error("YAML dump error: invalid key \"{0}\"")]
    InvalidKey(String),

    /// Only dates with a four-digit year can be written as date scalars.
    #[error("YAML dump error: date {0} has a year outside 0000-9999")]
    DateOutOfRange(NaiveDateTime),
}

/// Errors raised while parsing a slash-separated key path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyPathError {
    /// The key path is empty.
    #[error("can't use an empty string as a key")]
    Empty,

    /// One of the segments between separators is empty.
    #[error("key path \"{0}\" contains an empty segment")]
    EmptySegment(String),
}

/// Errors raised by the limb generators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// A chain walk reached a bone with several children, so the next bone is ambiguous.
    #[error("bone \"{bone}\" has {children} children; can't follow the chain to its tip")]
    AmbiguousTip { bone: String, children: usize },
}

/// Top-level error type for OCO document operations.
#[derive(Debug, Error)]
pub enum OcoError {
    /// A resolution component is outside `]0, 30000]`.
    #[error("Invalid resolution; the {axis} must be in the range ]0, {max}], got {value}", max = MAX_RESOLUTION)]
    InvalidResolution { axis: &'static str, value: f64 },

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Base64 decoding error.
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// A generator failed to walk its chain.
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the config store.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file couldn't be parsed.
    #[error("invalid config file: {0}")]
    Yaml(#[from] YamlError),

    /// The config couldn't be serialized.
    #[error("can't write config: {0}")]
    Dump(#[from] DumpError),

    /// The key isn't a valid key path.
    #[error("invalid config key: {0}")]
    Key(#[from] KeyPathError),

    /// I/O error.
    #[error("I/O error on config file: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_error_line() {
        let err = YamlError::MissingValue {
            line: 4,
            key: "b".to_string(),
        };
        assert_eq!(err.line(), 4);
        assert!(err.to_string().contains("\"b\""));
    }

    #[test]
    fn test_resolution_error_message() {
        let err = OcoError::InvalidResolution {
            axis: "width",
            value: 0.0,
        };
        let message = err.to_string();
        assert!(message.contains("width"));
        assert!(message.contains("30000"));
    }

    #[test]
    fn test_mixed_block_message_names_kind() {
        let err = YamlError::MixedBlock {
            line: 2,
            text: "- a".to_string(),
            expected: BlockKind::Mapping,
        };
        assert!(err.to_string().contains("mapping block"));
    }
}
