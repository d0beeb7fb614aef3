//! The OCO config file: a small YAML key/value store shared by OCO tools.
//!
//! Keys are slash-separated paths into nested mappings (`library/path`).
//! Every [`Config::set`] rewrites the whole file, so the file always starts
//! with the `---` marker and the comment header. The config is an explicit
//! value: open it where it's needed and pass it along.

mod library;


use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime, Timelike};

pub use library::{Library, DEFAULT_LIBRARY_DIR, LIBRARY_PATH_KEY, LIBRARY_SETTINGS_FILE};

use crate::error::ConfigError;
use crate::paths::sanitize_path;
use crate::yaml::{self, KeyPath, Mapping, Yaml};

/// File name of the config inside its folder.
pub const CONFIG_FILE_NAME: &str = "OCO.config";
/// Folder holding the config inside the documents folder.
pub const CONFIG_DIR_NAME: &str = "OCO";
/// Written before the YAML content on every save.
pub const CONFIG_HEADER: &str =
    "---\n# This is an Open Cut-Out Config file.\n# It is rewritten in full whenever a value changes.\n";

const METADATA_CREATED: &str = "metadata/created";
const METADATA_CREATED_BY: &str = "metadata/created by";
const METADATA_MODIFIED: &str = "metadata/modified";
const METADATA_MODIFIED_BY: &str = "metadata/modified by";

/// Values stored under a key with this name are sanitized as paths.
const PATH_KEY: &str = "path";

/// Name recorded in the metadata when no host is given.
pub fn default_host() -> String {
    format!("oco-format {}", env!("CARGO_PKG_VERSION"))
}

/// A YAML-backed key/value store.
#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    host: String,
}

impl Config {
    /// Opens the config at `path`, creating its folder.
    ///
    /// A new file records when and by which `host` it was created.
    pub fn open(path: impl AsRef<Path>, host: impl Into<String>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let config = Self {
            path,
            host: host.into(),
        };
        if !config.path.exists() {
            tracing::debug!(path = %config.path.display(), "creating config file");
            config.set(METADATA_CREATED, now())?;
            config.set(METADATA_CREATED_BY, config.host.clone())?;
        }
        Ok(config)
    }

    /// `<documents>/OCO/OCO.config`, or the same under the temp folder when
    /// the documents folder is missing or read-only.
    pub fn default_path() -> PathBuf {
        let documents = dirs::document_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME))
            .filter(|dir| can_write(dir));
        match documents {
            Some(dir) => dir.join(CONFIG_FILE_NAME),
            None => {
                tracing::debug!("documents folder not writable, using the temp folder");
                std::env::temp_dir().join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name written to the `modified by` metadata.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Reads the whole file.
    ///
    /// A missing or unreadable file reads as an empty mapping, as does a file
    /// whose content isn't a mapping. Syntax errors are returned.
    pub fn load(&self) -> Result<Mapping, ConfigError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(path = %self.path.display(), error = %e, "can't read config file");
                }
                return Ok(Mapping::new());
            }
        };
        match yaml::load(&text)? {
            Yaml::Mapping(mapping) => Ok(mapping),
            other => {
                tracing::warn!(kind = other.kind(), "config file isn't a mapping, ignoring it");
                Ok(Mapping::new())
            }
        }
    }

    /// The value at `key`, if any.
    pub fn get(&self, key: &str) -> Result<Option<Yaml>, ConfigError> {
        let key = KeyPath::parse(key)?;
        Ok(self.load()?.get_path(&key).cloned())
    }

    /// The value at `key`, or `default`.
    pub fn get_or(&self, key: &str, default: impl Into<Yaml>) -> Result<Yaml, ConfigError> {
        Ok(self.get(key)?.unwrap_or_else(|| default.into()))
    }

    /// Stores `value` at `key` and rewrites the file.
    ///
    /// String values under a `path` key are sanitized first. Returns `false`
    /// without touching the file when the stored value is already equal.
    ///
    /// # Example
    /// ```
    /// use oco_format::config::Config;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let config = Config::open(dir.path().join("OCO.config"), "doc test").unwrap();
    /// assert!(config.set("library/path", "rigs\\\\characters").unwrap());
    /// assert!(!config.set("library/path", "rigs/characters").unwrap());
    /// assert_eq!(config.get("library/path").unwrap().unwrap().as_str(), Some("rigs/characters"));
    /// ```
    pub fn set(&self, key: &str, value: impl Into<Yaml>) -> Result<bool, ConfigError> {
        let key = KeyPath::parse(key)?;
        let mut value = value.into();
        if key.leaf() == PATH_KEY {
            if let Some(path) = value.as_str() {
                value = Yaml::from(sanitize_path(path));
            }
        }

        let mut root = self.load()?;
        if root.get_path(&key) == Some(&value) {
            return Ok(false);
        }
        root.set_path(&key, value);
        root.set_path(&KeyPath::parse(METADATA_MODIFIED)?, now());
        root.set_path(&KeyPath::parse(METADATA_MODIFIED_BY)?, self.host.clone());

        let content = format!("{}{}\n", CONFIG_HEADER, yaml::dump(&Yaml::Mapping(root))?);
        fs::write(&self.path, content)?;
        tracing::debug!(key = %key, path = %self.path.display(), "config updated");
        Ok(true)
    }
}

/// Local time, to the second.
fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Whether files can be created in `dir`, creating it if needed.
fn can_write(dir: &Path) -> bool {
    if fs::create_dir_all(dir).is_err() {
        return false;
    }
    let probe = dir.join(".oco_write_test");
    match fs::write(&probe, b"") {
        Ok(()) => {
            let _ = fs::remove_file(&probe);
            true
        }
        Err(_) => false,
    }
}
