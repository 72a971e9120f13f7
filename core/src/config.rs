//! Loading and saving the helper configuration file.
//!
//! A missing file is not an error: the helper runs with defaults until the
//! user saves a config.

use std::fs;
use std::path::{Path, PathBuf};

use amascut_types::HelperConfig;

/// Errors that can occur while reading or writing the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error for {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Serialize error for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        source: toml::ser::Error,
    },
}

/// Load the config at `path`, falling back to defaults if it does not exist.
pub fn load_config(path: &Path) -> Result<HelperConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(?path, "No helper config found, using defaults");
        return Ok(HelperConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save a config, creating the parent directory if needed.
pub fn save_config(path: &Path, config: &HelperConfig) -> Result<(), ConfigError> {
    let contents = toml::to_string_pretty(config).map_err(|e| ConfigError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| ConfigError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(path, contents).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Default location of the helper config file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("amascut").join("helper.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("amascut-config-tests")
            .join(format!("{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = scratch_dir("missing");
        let config = load_config(&dir.join("helper.toml")).unwrap();
        assert_eq!(config, HelperConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = scratch_dir("save");
        let path = dir.join("nested").join("helper.toml");
        let config = HelperConfig {
            apmeken_issue_helper: false,
        };

        save_config(&path, &config).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let dir = scratch_dir("invalid");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("helper.toml");
        fs::write(&path, "apmeken_issue_helper = \"yes\"").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("helper.toml"));

        let _ = fs::remove_dir_all(&dir);
    }
}
