use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Persistent user settings that are saved between sessions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Directory of the last image that was processed, used to seed the file dialog
    pub last_image_dir: Option<PathBuf>,

    /// Last window width
    pub window_width: f32,

    /// Last window height
    pub window_height: f32,

    /// Color count used for the last successfully processed image
    #[serde(default)]
    pub last_num_colors: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            last_image_dir: None,
            window_width: 1200.0,
            window_height: 700.0,
            last_num_colors: None,
        }
    }
}

impl Settings {
    /// Get the path to the settings file in the platform config directory
    pub fn get_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ColorCatcher")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from disk, or return defaults if file doesn't exist or is corrupted
    pub fn load() -> Self {
        match Self::get_config_path() {
            Some(config_path) => Self::load_from(&config_path),
            None => {
                warn!("Could not determine config directory. Using defaults.");
                Self::default()
            }
        }
    }

    pub fn load_from(config_path: &Path) -> Self {
        info!("Loading settings from: {:?}", config_path);

        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str::<Settings>(&contents) {
                Ok(settings) => {
                    info!("Successfully loaded settings");
                    return settings;
                }
                Err(e) => {
                    warn!("Failed to parse settings file: {}. Using defaults.", e);
                }
            },
            Err(e) => {
                // It's normal for the file not to exist on first run
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read settings file: {}. Using defaults.", e);
                } else {
                    info!("No settings file found. Using defaults.");
                }
            }
        }

        Self::default()
    }

    /// Save settings to disk
    pub fn save(&self) {
        match Self::get_config_path() {
            Some(config_path) => self.save_to(&config_path),
            None => warn!("Could not determine config directory. Settings not saved."),
        }
    }

    pub fn save_to(&self, config_path: &Path) {
        if let Some(parent) = config_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("Failed to create config directory: {}", e);
                return;
            }
        }

        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(config_path, json) {
                    warn!("Failed to write settings file: {}", e);
                } else {
                    info!("Settings saved to: {:?}", config_path);
                }
            }
            Err(e) => {
                warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Remember the folder containing `image_path` and the color count used for it
    pub fn remember_image(&mut self, image_path: &Path, num_colors: usize) {
        self.last_image_dir = image_path.parent().map(Path::to_path_buf);
        self.last_num_colors = Some(num_colors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.window_width, 1200.0);
        assert_eq!(settings.window_height, 700.0);
        assert!(settings.last_image_dir.is_none());
        assert!(settings.last_num_colors.is_none());
    }

    #[test]
    fn test_settings_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings {
            window_width: 1280.0,
            window_height: 720.0,
            ..Settings::default()
        };
        settings.remember_image(Path::new("photos/holiday/beach.jpg"), 11);
        settings.save_to(&path);

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded, settings);
        assert_eq!(loaded.last_image_dir, Some(PathBuf::from("photos/holiday")));
        assert_eq!(loaded.last_num_colors, Some(11));
    }

    #[test]
    fn test_settings_without_color_count_still_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"last_image_dir": null, "window_width": 800.0, "window_height": 600.0}"#,
        )
        .unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.window_width, 800.0);
        assert!(loaded.last_num_colors.is_none());
    }

    #[test]
    fn test_corrupt_settings_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
        assert_eq!(
            Settings::load_from(&dir.path().join("missing.json")),
            Settings::default()
        );
    }
}
