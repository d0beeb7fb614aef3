//! YAML writer.

use super::scalar::format_scalar;
use super::value::{Mapping, Yaml};
use crate::error::DumpError;

/// Default number of spaces per nesting level.
pub const DEFAULT_INDENT: usize = 2;

/// Dumps a node with the default indentation.
pub fn dump(value: &Yaml) -> Result<String, DumpError> {
    dump_with_indent(value, DEFAULT_INDENT)
}

/// Dumps a node, indenting nested blocks by `indent` spaces per level.
///
/// Lines are joined with `\n`, without a trailing newline. An `indent` of 0
/// is treated as 1, since nested blocks must be indented to load back.
///
/// # Example
/// ```
/// use oco_format::yaml::{dump, Mapping, Yaml};
///
/// let mut library = Mapping::new();
/// library.insert("path", "OCO Library");
/// let mut root = Mapping::new();
/// root.insert("library", library);
/// assert_eq!(dump(&Yaml::Mapping(root)).unwrap(), "library:\n  path: OCO Library");
/// ```
pub fn dump_with_indent(value: &Yaml, indent: usize) -> Result<String, DumpError> {
    let tab = " ".repeat(indent.max(1));
    let lines = match value {
        Yaml::Scalar(scalar) => vec![format_scalar(scalar)?],
        Yaml::Mapping(mapping) if mapping.is_empty() => vec!["{}".to_owned()],
        Yaml::Sequence(items) if items.is_empty() => vec!["[]".to_owned()],
        Yaml::Mapping(mapping) => dump_mapping(mapping, &tab)?,
        Yaml::Sequence(items) => dump_sequence(items, &tab)?,
    };
    Ok(lines.join("\n"))
}

fn dump_mapping(mapping: &Mapping, tab: &str) -> Result<Vec<String>, DumpError> {
    let mut lines = Vec::new();
    for (key, value) in mapping.iter() {
        check_key(key)?;
        match value {
            Yaml::Scalar(scalar) => lines.push(format!("{}: {}", key, format_scalar(scalar)?)),
            Yaml::Mapping(nested) if nested.is_empty() => lines.push(format!("{}: {{}}", key)),
            Yaml::Sequence(items) if items.is_empty() => lines.push(format!("{}: []", key)),
            Yaml::Mapping(nested) => {
                lines.push(format!("{}:", key));
                lines.extend(dump_mapping(nested, tab)?.into_iter().map(|l| format!("{}{}", tab, l)));
            }
            Yaml::Sequence(items) => {
                lines.push(format!("{}:", key));
                lines.extend(dump_sequence(items, tab)?.into_iter().map(|l| format!("{}{}", tab, l)));
            }
        }
    }
    Ok(lines)
}

fn dump_sequence(items: &[Yaml], tab: &str) -> Result<Vec<String>, DumpError> {
    let mut lines = Vec::new();
    for item in items {
        match item {
            Yaml::Sequence(_) => return Err(DumpError::NestedSequence),
            Yaml::Scalar(scalar) => lines.push(format!("- {}", format_scalar(scalar)?)),
            Yaml::Mapping(mapping) if mapping.is_empty() => lines.push("- {}".to_owned()),
            Yaml::Mapping(mapping) if mapping.len() > 1 => {
                return Err(DumpError::MultiKeyItem { keys: mapping.len() })
            }
            Yaml::Mapping(mapping) => {
                let mut entry = dump_mapping(mapping, tab)?.into_iter();
                if let Some(first) = entry.next() {
                    lines.push(format!("- {}", first));
                }
                lines.extend(entry.map(|l| format!("{}{}", tab, l)));
            }
        }
    }
    Ok(lines)
}

fn check_key(key: &str) -> Result<(), DumpError> {
    let invalid = key.is_empty()
        || key != key.trim()
        || key.contains(": ")
        || key.ends_with(':')
        || key.starts_with("- ")
        || key == "-"
        || key.starts_with(['#', ':', '"', '\''])
        || key.chars().any(char::is_control);
    if invalid {
        Err(DumpError::InvalidKey(key.to_owned()))
    } else {
        Ok(())
    }
}
