//! Config command implementation
//!
//! Reads and writes values of the OCO config file.

use anyhow::{Context, Result};
use colored::Colorize;
use oco_format::config::default_host;
use oco_format::{dump, load, Config, Yaml};
use std::path::PathBuf;
use std::process::ExitCode;

/// Opens the config at `path`, or at the default location.
pub fn open(path: Option<&str>) -> Result<Config> {
    let path = path.map(PathBuf::from).unwrap_or_else(Config::default_path);
    Config::open(&path, default_host())
        .with_context(|| format!("Failed to open config file: {}", path.display()))
}

/// Types a value given on the command line the way the config file would.
///
/// Numbers, booleans and dates become typed scalars; anything else, including
/// text that would load as a mapping, is kept as a string.
pub fn parse_value(text: &str) -> Yaml {
    match load(text) {
        Ok(Yaml::Scalar(scalar)) => Yaml::Scalar(scalar),
        _ => Yaml::from(text),
    }
}

/// Run `config get`
///
/// # Returns
/// Exit code: 0 when the key is set, 1 otherwise
pub fn get(key: &str, config_path: Option<&str>) -> Result<ExitCode> {
    let config = open(config_path)?;
    let value = config
        .get(key)
        .with_context(|| format!("Failed to read config key: {}", key))?;

    match value {
        Some(Yaml::Scalar(scalar)) => {
            println!("{}", scalar);
            Ok(ExitCode::SUCCESS)
        }
        Some(value) => {
            println!("{}", dump(&value)?);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("{} {} is not set in {}", "!".yellow(), key, config.path().display());
            Ok(ExitCode::from(1))
        }
    }
}

/// Run `config set`
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn set(key: &str, value: &str, config_path: Option<&str>) -> Result<ExitCode> {
    let config = open(config_path)?;
    let changed = config
        .set(key, parse_value(value))
        .with_context(|| format!("Failed to set config key: {}", key))?;

    if changed {
        println!("{} {} = {}", "SUCCESS".green().bold(), key, value);
    } else {
        println!("{} {} already set", "Unchanged:".dimmed(), key);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oco_format::Scalar;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_value_types_scalars() {
        assert_eq!(parse_value("12"), Yaml::from(12));
        assert_eq!(parse_value("0.5"), Yaml::from(0.5));
        assert_eq!(parse_value("true"), Yaml::from(true));
        assert_eq!(parse_value("OCO Library"), Yaml::from("OCO Library"));
        assert_eq!(parse_value("a: b"), Yaml::from("a: b"));
        assert_eq!(parse_value(""), Yaml::from(""));
        assert!(matches!(parse_value("2024-01-02 03:04:05"), Yaml::Scalar(Scalar::Date(_))));
    }

    #[test]
    fn test_set_then_get() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("OCO.config");
        let path = path.to_str();

        assert_eq!(set("library/path", "~/rigs", path).unwrap(), ExitCode::SUCCESS);
        assert_eq!(set("tools/size", "3", path).unwrap(), ExitCode::SUCCESS);
        assert_eq!(get("tools/size", path).unwrap(), ExitCode::SUCCESS);
        assert_eq!(get("tools", path).unwrap(), ExitCode::SUCCESS);
        assert_eq!(get("tools/missing", path).unwrap(), ExitCode::from(1));

        let config = open(path).unwrap();
        assert_eq!(config.get("tools/size").unwrap(), Some(Yaml::from(3)));
    }

    #[test]
    fn test_invalid_key_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("OCO.config");
        assert!(set("a//b", "1", path.to_str()).is_err());
        assert!(get("", path.to_str()).is_err());
    }
}
