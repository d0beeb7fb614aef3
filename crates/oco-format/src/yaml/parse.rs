//! Line-oriented parser for the restricted YAML dialect.

use super::scalar::parse_scalar;
use super::value::{Mapping, Yaml};
use crate::error::{BlockKind, YamlError};

const DOCUMENT_START: &str = "---";
const DOCUMENT_END: &str = "...";

/// What a content line holds once the indentation and the dash are removed.
#[derive(Debug, Clone, PartialEq)]
enum Content<'a> {
    /// `key: value`
    Pair(&'a str, &'a str),
    /// `key:` opening a nested block
    Key(&'a str),
    /// A bare value
    Value(&'a str),
    /// A lone `-` whose value is the following nested block
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
enum Line<'a> {
    Blank,
    End,
    Content {
        indent: usize,
        item: bool,
        content: Content<'a>,
    },
}

/// Parses YAML text into a node.
///
/// An empty document loads as an empty mapping, and a document made of a
/// single bare value loads as that value.
///
/// # Example
/// ```
/// use oco_format::yaml::{load, Yaml};
///
/// let doc = load("---\nname: Rex\nlegs:\n  - left\n  - right\n").unwrap();
/// let map = doc.as_mapping().unwrap();
/// assert_eq!(map.get("name").and_then(Yaml::as_str), Some("Rex"));
/// assert_eq!(map.get("legs").and_then(Yaml::as_sequence).map(<[Yaml]>::len), Some(2));
/// ```
pub fn load(text: &str) -> Result<Yaml, YamlError> {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines
        .iter()
        .position(|l| l.trim() == DOCUMENT_START)
        .map_or(0, |i| i + 1);

    let parser = Parser { lines };
    let classified = parser.classify_all(start)?;

    let content_lines: Vec<usize> = classified
        .iter()
        .take_while(|(_, line)| *line != Line::End)
        .filter(|(_, line)| *line != Line::Blank)
        .map(|(i, _)| *i)
        .collect();

    match content_lines.as_slice() {
        [] => return Ok(Yaml::Mapping(Mapping::new())),
        [only] => {
            if let Some((
                _,
                Line::Content {
                    item: false,
                    content: Content::Value(raw),
                    ..
                },
            )) = classified.iter().find(|(i, _)| i == only)
            {
                return parse_scalar(raw, only + 1);
            }
        }
        _ => {}
    }

    let (value, _) = parser.parse_block(&classified, 0)?;
    Ok(value)
}

struct Parser<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Parser<'a> {
    /// Classifies every line from `start`, pairing each with its 0-based index.
    /// Lines after a `...` marker are not read.
    fn classify_all(&self, start: usize) -> Result<Vec<(usize, Line<'a>)>, YamlError> {
        let mut classified = Vec::new();
        for (i, raw) in self.lines.iter().enumerate().skip(start) {
            let line = classify(raw, i + 1)?;
            let end = line == Line::End;
            classified.push((i, line));
            if end {
                break;
            }
        }
        Ok(classified)
    }

    fn text(&self, index: usize) -> String {
        self.lines[index].trim().to_owned()
    }

    /// Parses the block whose first line is at `pos` in `lines`.
    ///
    /// Returns the node and the position of the first line after the block.
    fn parse_block(&self, lines: &[(usize, Line<'a>)], pos: usize) -> Result<(Yaml, usize), YamlError> {
        let Some(first) = next_content(lines, pos) else {
            return Ok((Yaml::Mapping(Mapping::new()), lines.len()));
        };
        let (block_indent, kind) = match &lines[first].1 {
            Line::Content { indent, item, .. } => (
                *indent,
                if *item {
                    BlockKind::Sequence
                } else {
                    BlockKind::Mapping
                },
            ),
            _ => return Ok((Yaml::Mapping(Mapping::new()), lines.len())),
        };

        let mut mapping = Mapping::new();
        let mut sequence = Vec::new();
        let mut pos = first;

        while pos < lines.len() {
            let (index, line) = &lines[pos];
            let (indent, item, content) = match line {
                Line::Blank => {
                    pos += 1;
                    continue;
                }
                Line::End => {
                    pos = lines.len();
                    break;
                }
                Line::Content {
                    indent,
                    item,
                    content,
                } => (*indent, *item, content),
            };
            if indent < block_indent {
                break;
            }
            let line_number = index + 1;

            if item != (kind == BlockKind::Sequence) {
                return Err(YamlError::MixedBlock {
                    line: line_number,
                    text: self.text(*index),
                    expected: kind,
                });
            }

            let (key, value, next) = match content {
                Content::Pair(key, raw) => (Some(*key), parse_scalar(raw, line_number)?, pos + 1),
                Content::Value(raw) => {
                    if !item {
                        return Err(YamlError::Syntax {
                            line: line_number,
                            text: self.text(*index),
                            message: "not a named value nor an item in a list".to_owned(),
                        });
                    }
                    (None, parse_scalar(raw, line_number)?, pos + 1)
                }
                Content::Key(key) => match self.parse_child(lines, pos, indent, key)? {
                    Some((child, next)) => (Some(*key), child, next),
                    None => {
                        pos = lines.len();
                        break;
                    }
                },
                Content::Empty => match self.parse_child(lines, pos, indent, "-")? {
                    Some((child, next)) => (None, child, next),
                    None => {
                        pos = lines.len();
                        break;
                    }
                },
            };

            match (kind, key) {
                (BlockKind::Mapping, Some(key)) => {
                    mapping.insert(key, value);
                }
                (BlockKind::Sequence, Some(key)) => {
                    let mut entry = Mapping::new();
                    entry.insert(key, value);
                    sequence.push(Yaml::Mapping(entry));
                }
                (BlockKind::Sequence, None) => sequence.push(value),
                (BlockKind::Mapping, None) => {
                    return Err(YamlError::Syntax {
                        line: line_number,
                        text: self.text(*index),
                        message: "a mapping entry needs a key".to_owned(),
                    })
                }
            }
            pos = next;
        }

        let node = match kind {
            BlockKind::Mapping => Yaml::Mapping(mapping),
            BlockKind::Sequence => Yaml::Sequence(sequence),
        };
        Ok((node, pos))
    }

    /// Parses the nested block opened by the key line at `pos`.
    ///
    /// Returns `None` when the document ends before the block starts; the key
    /// is then dropped.
    fn parse_child(
        &self,
        lines: &[(usize, Line<'a>)],
        pos: usize,
        parent_indent: usize,
        key: &str,
    ) -> Result<Option<(Yaml, usize)>, YamlError> {
        let missing = || YamlError::MissingValue {
            line: lines[pos].0 + 1,
            key: key.to_owned(),
        };
        let child = next_content(lines, pos + 1).ok_or_else(missing)?;
        match &lines[child].1 {
            Line::End => Ok(None),
            Line::Content { indent, .. } if *indent > parent_indent => self.parse_block(lines, child).map(Some),
            _ => Err(missing()),
        }
    }
}

/// Position of the first content or end line at or after `pos`.
fn next_content(lines: &[(usize, Line<'_>)], pos: usize) -> Option<usize> {
    (pos..lines.len()).find(|&p| lines[p].1 != Line::Blank)
}

fn classify(raw: &str, line_number: usize) -> Result<Line<'_>, YamlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(Line::Blank);
    }
    if trimmed == DOCUMENT_END {
        return Ok(Line::End);
    }

    let indent = raw.len() - raw.trim_start_matches([' ', '\t']).len();

    let (item, rest) = if trimmed == "-" {
        (true, "")
    } else if let Some(rest) = trimmed.strip_prefix("- ") {
        (true, rest.trim_start())
    } else {
        (false, trimmed)
    };

    let syntax = |message: &str| YamlError::Syntax {
        line: line_number,
        text: trimmed.to_owned(),
        message: message.to_owned(),
    };

    let content = if rest.is_empty() {
        Content::Empty
    } else if rest.starts_with(':') {
        return Err(syntax("a line can't start with ':'"));
    } else if rest.starts_with(['"', '\'']) {
        // Keys are never quoted.
        Content::Value(strip_comment(rest))
    } else if let Some(split) = rest.find(": ") {
        let key = rest[..split].trim();
        let value = strip_comment(rest[split + 2..].trim());
        if value.is_empty() {
            Content::Key(key)
        } else {
            Content::Pair(key, value)
        }
    } else if let Some(key) = rest.strip_suffix(':') {
        Content::Key(key.trim())
    } else {
        let value = strip_comment(rest);
        if value.is_empty() {
            Content::Empty
        } else {
            Content::Value(value)
        }
    };

    Ok(Line::Content {
        indent,
        item,
        content,
    })
}

/// Removes a trailing comment from a value.
///
/// A `#` only starts a comment at the start of the value or after whitespace.
/// In a quoted value, the comment must follow the closing quote.
fn strip_comment(value: &str) -> &str {
    if value.starts_with(['"', '\'']) {
        return match closing_quote(value) {
            Some(end) => {
                let tail = &value[end..];
                if tail.starts_with(char::is_whitespace) && tail.trim_start().starts_with('#') {
                    &value[..end]
                } else {
                    value
                }
            }
            None => value,
        };
    }
    let bytes = value.as_bytes();
    let cut = (0..bytes.len()).find(|&i| bytes[i] == b'#' && (i == 0 || bytes[i - 1].is_ascii_whitespace()));
    match cut {
        Some(i) => value[..i].trim_end(),
        None => value,
    }
}

/// Byte offset just past the quote closing the quoted run that starts `value`.
///
/// Backslash escapes are skipped in double-quoted values.
fn closing_quote(value: &str) -> Option<usize> {
    let quote = value.chars().next().filter(|c| matches!(c, '"' | '\''))?;
    let mut escaped = false;
    for (i, c) in value.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' && quote == '"' {
            escaped = true;
        } else if c == quote {
            return Some(i + 1);
        }
    }
    None
}
