use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::RestyleError;

/// Application-wide settings stored at `~/.config/restyle/config.toml`.
///
/// Remembers the last stylesheet paths so repeat runs can omit them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub last_css_input: Option<PathBuf>,
    pub last_css_output: Option<PathBuf>,
    pub last_theme_file: Option<PathBuf>,
}

/// Returns the directory where the config lives (`~/.config/restyle/`).
fn config_dir() -> Result<PathBuf, RestyleError> {
    let base = dirs_next::config_dir().ok_or(RestyleError::NoConfigDir)?;
    Ok(base.join("restyle"))
}

fn config_path() -> Result<PathBuf, RestyleError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads the config, returning defaults if the file doesn't exist.
pub fn load_config() -> Result<AppConfig, RestyleError> {
    let path = config_path()?;
    load_config_from(&path)
}

fn load_config_from(path: &Path) -> Result<AppConfig, RestyleError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Persists the config, creating parent directories as needed.
pub fn save_config(config: &AppConfig) -> Result<(), RestyleError> {
    let path = config_path()?;
    save_config_to(config, &path)
}

fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), RestyleError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn config_round_trip() {
        let config = AppConfig {
            last_css_input: Some(PathBuf::from("/tmp/site.css")),
            last_css_output: Some(PathBuf::from("/tmp/site_themed.css")),
            last_theme_file: None,
        };
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn missing_file_returns_default() {
        let temp = TempDir::new().unwrap();
        let config = load_config_from(&temp.path().join("nope.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn save_then_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/config.toml");
        let config = AppConfig {
            last_css_input: Some(PathBuf::from("in.css")),
            ..AppConfig::default()
        };
        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), config);
    }
}
