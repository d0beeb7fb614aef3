//! Path helpers for icons, the config file, and the library folder.
//!
//! Paths written into OCO and config files always use `/` separators.

use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

const ABSOLUTE_PATTERN: &str = r"^(?:[/\\]|[a-zA-Z]:)";

static ABSOLUTE_REGEX: OnceLock<Regex> = OnceLock::new();

fn absolute_regex() -> &'static Regex {
    ABSOLUTE_REGEX.get_or_init(|| Regex::new(ABSOLUTE_PATTERN).expect("invalid regex pattern"))
}

/// True for paths starting with a separator or a drive letter.
///
/// This is a textual check, so Windows paths are recognized on every platform.
pub fn is_path_absolute(path: &str) -> bool {
    absolute_regex().is_match(path)
}

/// Normalizes separators to `/`, drops empty segments, and expands a leading `~`.
///
/// A leading separator is kept.
///
/// # Example
/// ```
/// use oco_format::paths::sanitize_path;
///
/// assert_eq!(sanitize_path("a\\b//c/"), "a/b/c");
/// assert_eq!(sanitize_path("/srv//rigs"), "/srv/rigs");
/// ```
pub fn sanitize_path(path: &str) -> String {
    let rooted = path.starts_with(['/', '\\']);
    let joined = path
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if let Some(rest) = joined.strip_prefix('~') {
        if rest.is_empty() || rest.starts_with('/') {
            if let Some(home) = dirs::home_dir() {
                return to_slash(&home.join(rest.trim_start_matches('/')));
            }
        }
    }
    if rooted {
        format!("/{}", joined)
    } else {
        joined
    }
}

/// Resolves `path` against the folder containing `relative_to`.
///
/// Leading `../` segments climb from that folder; a leading `~` is the home
/// folder; absolute paths are returned as they are.
pub fn absolute_path(path: &str, relative_to: &Path) -> PathBuf {
    if let Some(rest) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest.trim_start_matches(['/', '\\']));
        }
    }
    if is_path_absolute(path) {
        return PathBuf::from(path);
    }
    let folder = relative_to.parent().unwrap_or_else(|| Path::new(""));
    normalize(&folder.join(path))
}

/// Path of `path` relative to the folder containing `destination_file`, with
/// `/` separators.
///
/// Both paths are made absolute against the current directory first.
///
/// # Example
/// ```
/// use std::path::Path;
/// use oco_format::paths::relative_path;
///
/// let rel = relative_path(Path::new("/rigs/icons/rex.png"), Path::new("/rigs/chars/rex.oco")).unwrap();
/// assert_eq!(rel, "../icons/rex.png");
/// ```
pub fn relative_path(path: &Path, destination_file: &Path) -> io::Result<String> {
    let source = make_absolute(path)?;
    let destination = make_absolute(destination_file)?;
    let folder = destination.parent().unwrap_or(&destination);

    let source_parts: Vec<Component<'_>> = source.components().collect();
    let folder_parts: Vec<Component<'_>> = folder.components().collect();
    let common = source_parts
        .iter()
        .zip(folder_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = vec!["..".to_owned(); folder_parts.len() - common];
    parts.extend(
        source_parts[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );
    Ok(parts.join("/"))
}

/// Absolute, lexically normalized version of `path`.
pub fn make_absolute(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(normalize(&std::env::current_dir()?.join(path)))
    }
}

/// Resolves `.` and `..` components without touching the file system.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Lossy string form with `/` separators.
pub fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
