//! Document icon encoding and extraction.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::OcoError;
use crate::paths::{self, make_absolute, relative_path};
use crate::rig::ImageEncoding;

/// Encodes a file as base64. A missing file encodes as an empty string.
pub fn encode_file(path: &Path) -> Result<String, OcoError> {
    match fs::read(path) {
        Ok(bytes) => Ok(STANDARD.encode(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "icon file not found, storing an empty icon");
            Ok(String::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Cheap check that a string looks like base64 rather than a file name.
pub fn looks_like_base64(data: &str) -> bool {
    !data.is_empty() && data.len() % 4 == 0 && !data.contains('.')
}

/// Decodes base64 data into `destination`.
///
/// Returns `None` when the data is empty, doesn't look like base64, or can't
/// be decoded.
pub fn decode_to_file(data: &str, destination: &Path) -> Result<Option<PathBuf>, OcoError> {
    if !looks_like_base64(data) {
        return Ok(None);
    }
    let bytes = match STANDARD.decode(data) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "invalid base64 icon");
            return Ok(None);
        }
    };
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(destination, bytes)?;
    Ok(Some(destination.to_path_buf()))
}

/// The value written to the `icon` key of a document saved to `destination`.
///
/// An empty icon stays empty. Relative paths need a destination; without one
/// the icon is written unchanged.
pub fn resolve_for_output(
    icon: &str,
    encoding: ImageEncoding,
    destination: Option<&Path>,
) -> Result<String, OcoError> {
    if icon.is_empty() {
        return Ok(String::new());
    }
    let icon_path = Path::new(icon);
    match encoding {
        ImageEncoding::PngBase64 => encode_file(icon_path),
        ImageEncoding::RelativePath => match destination {
            Some(destination) => Ok(relative_path(icon_path, destination)?),
            None => Ok(icon.to_owned()),
        },
        ImageEncoding::AbsolutePath => Ok(paths::to_slash(&make_absolute(icon_path)?)),
    }
}

/// Finds or writes the icon stored in the OCO file `file`.
///
/// Returns the icon path for path encodings, or the PNG decoded into
/// `destination` (by default `<file stem>.png` next to `file`) for base64
/// icons. Returns `None` when there is no usable icon.
pub(crate) fn extract(
    icon: &str,
    encoding: ImageEncoding,
    file: &Path,
    destination: Option<&Path>,
) -> Result<Option<PathBuf>, OcoError> {
    if icon.is_empty() {
        return Ok(None);
    }
    match encoding {
        ImageEncoding::AbsolutePath => Ok(Some(PathBuf::from(icon))),
        ImageEncoding::RelativePath => Ok(Some(paths::absolute_path(icon, file))),
        ImageEncoding::PngBase64 => {
            let destination = destination
                .map(Path::to_path_buf)
                .unwrap_or_else(|| file.with_extension("png"));
            decode_to_file(icon, &destination)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_round_trip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("icon.png");
        fs::write(&source, [0x89, b'P', b'N', b'G', 0, 1, 2, 3]).unwrap();

        let encoded = encode_file(&source).unwrap();
        assert!(looks_like_base64(&encoded));

        let out = dir.path().join("out/copy.png");
        let written = decode_to_file(&encoded, &out).unwrap();
        assert_eq!(written.as_deref(), Some(out.as_path()));
        assert_eq!(fs::read(&out).unwrap(), fs::read(&source).unwrap());
    }

    #[test]
    fn test_missing_icon_encodes_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(encode_file(&dir.path().join("nope.png")).unwrap(), "");
    }

    #[test]
    fn test_file_names_are_not_base64() {
        assert!(!looks_like_base64("icon.png"));
        assert!(!looks_like_base64("abc"));
        assert!(!looks_like_base64(""));
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(decode_to_file("abc.", &dir.path().join("x.png")).unwrap(), None);
    }

    #[test]
    fn test_resolve_relative_icon() {
        let icon = resolve_for_output(
            "/rigs/icons/rex.png",
            ImageEncoding::RelativePath,
            Some(Path::new("/rigs/rex.oco")),
        )
        .unwrap();
        assert_eq!(icon, "icons/rex.png");
        assert_eq!(resolve_for_output("", ImageEncoding::PngBase64, None).unwrap(), "");
    }
}
