//! Restricted YAML engine used by the OCO config file.
//!
//! The dialect is line oriented:
//!
//! - parsing starts after the first `---` line and stops at a `...` line;
//! - blocks are `key: value` mappings or `- item` sequences, nested by
//!   indentation (spaces or tabs);
//! - sequence items are scalars or single-key mappings;
//! - scalars are booleans, integers, floats, dates (`YYYY-MM-DD HH:MM:SS`),
//!   plain strings, single-quoted strings, or JSON double-quoted strings.
//!
//! Anchors, flow collections, block scalars and multi-document streams are not
//! supported.

mod dump;
mod parse;
mod path;
mod scalar;
mod value;


pub use dump::{dump, dump_with_indent, DEFAULT_INDENT};
pub use parse::load;
pub use path::KeyPath;
pub use value::{Mapping, Scalar, Yaml, DATE_FORMAT};
