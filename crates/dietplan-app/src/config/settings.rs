//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use dietplan_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "diet-planner";

/// Default settings file: `<config_dir>/diet-planner/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from the default location when `None`
///
/// A missing file yields defaults. An unreadable or invalid file is logged
/// and also yields defaults.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => {
                debug!("No config directory on this platform, using defaults");
                return Settings::default();
            }
        },
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match read_settings(&config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("{}", e);
            Settings::default()
        }
    }
}

/// Read and parse a settings file, reporting failures
pub fn read_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read {:?}: {}", path, e)))?;
    toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {:?}: {}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(Some(&temp.path().join("config.toml")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_loads_custom_settings() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[api]
base_url = "http://127.0.0.1:8000"
timeout_secs = 0
connect_timeout_secs = 3

[ui]
animations = false
press_hold_ms = 300
"#,
        )
        .unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.api.base_url, "http://127.0.0.1:8000");
        assert_eq!(settings.api.timeout_secs, 0);
        assert_eq!(settings.api.connect_timeout_secs, 3);
        assert!(!settings.ui.animations);
        assert_eq!(settings.ui.press_hold_ms, 300);
    }

    #[test]
    fn test_invalid_toml_falls_back_to_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[api\nbase_url = ").unwrap();

        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_wrong_type_is_config_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[ui]\nanimations = \"yes\"\n").unwrap();

        let err = read_settings(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let temp = tempdir().unwrap();
        let err = read_settings(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_default_path_ends_with_app_dir() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("diet-planner/config.toml"));
        }
    }
}
