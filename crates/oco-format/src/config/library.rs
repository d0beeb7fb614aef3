//! The rig library folder, located through the config.

use std::fs;
use std::path::PathBuf;

use super::Config;
use crate::error::ConfigError;
use crate::paths::absolute_path;
use crate::yaml::Yaml;

/// Config key holding the library folder.
pub const LIBRARY_PATH_KEY: &str = "library/path";
/// Library folder used when the config doesn't set one, next to the config.
pub const DEFAULT_LIBRARY_DIR: &str = "OCO Library";
/// Settings file inside the library folder.
pub const LIBRARY_SETTINGS_FILE: &str = "OCO_library.json";

/// A folder of meta-rigs.
///
/// Its location is stored in the config; relative locations are resolved
/// against the config file's folder.
#[derive(Debug, Clone, Copy)]
pub struct Library<'c> {
    config: &'c Config,
}

impl<'c> Library<'c> {
    /// The library currently set in `config`.
    pub fn new(config: &'c Config) -> Self {
        Self { config }
    }

    /// Moves the library of `config` to `path` and creates the folder.
    pub fn with_path(config: &'c Config, path: &str) -> Result<Self, ConfigError> {
        let library = Self::new(config);
        library.set_path(path)?;
        Ok(library)
    }

    pub fn config(&self) -> &'c Config {
        self.config
    }

    /// Absolute path of the library folder.
    pub fn path(&self) -> Result<PathBuf, ConfigError> {
        let stored = self.config.get_or(LIBRARY_PATH_KEY, DEFAULT_LIBRARY_DIR)?;
        let stored = match stored.as_str() {
            Some(path) => path.to_owned(),
            None => {
                tracing::warn!(value = ?stored, "library path isn't a string, using the default");
                DEFAULT_LIBRARY_DIR.to_owned()
            }
        };
        Ok(absolute_path(&stored, self.config.path()))
    }

    /// Stores `path` in the config and creates the folder.
    pub fn set_path(&self, path: &str) -> Result<(), ConfigError> {
        self.config.set(LIBRARY_PATH_KEY, Yaml::from(path))?;
        let folder = self.path()?;
        fs::create_dir_all(&folder)?;
        tracing::debug!(folder = %folder.display(), "library folder set");
        Ok(())
    }

    /// Path of the library settings file.
    pub fn settings_path(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.path()?.join(LIBRARY_SETTINGS_FILE))
    }
}
