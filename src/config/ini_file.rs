use ini::Ini;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::app_config::FALLBACK_NUM_COLORS;
use crate::core::error::ConfigError;

pub const CONFIG_FILE_NAME: &str = "config.ini";

pub const DEFAULT_SECTION: &str = "DEFAULT";
pub const NUM_COLORS_KEY: &str = "num_colors";

/// `config.ini` in the same directory as the executable
pub fn config_path() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe_path| exe_path.parent().map(|dir| dir.join(CONFIG_FILE_NAME)))
}

/// Read `[DEFAULT] num_colors` from `path`; `Ok(None)` when the key is absent
pub fn read_num_colors(path: &Path) -> Result<Option<usize>, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::Missing(path.to_path_buf())
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_num_colors(path, &contents)
}

/// Find `num_colors` in the `[DEFAULT]` section of INI `contents`
///
/// Section names are matched exactly, keys ignore case.
fn parse_num_colors(path: &Path, contents: &str) -> Result<Option<usize>, ConfigError> {
    let ini = Ini::load_from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let Some(value) = ini.section(Some(DEFAULT_SECTION)).and_then(|section| {
        section
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(NUM_COLORS_KEY))
            .map(|(_, value)| value)
    }) else {
        return Ok(None);
    };

    value
        .trim()
        .parse::<usize>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidValue {
            path: path.to_path_buf(),
            key: NUM_COLORS_KEY.to_string(),
            value: value.to_string(),
        })
}

/// Default cluster count for the input form, never failing
pub fn default_num_colors(path: Option<&Path>) -> usize {
    let result = match path {
        Some(path) => read_num_colors(path),
        None => Err(ConfigError::NoLocation),
    };

    match result {
        Ok(Some(n)) => {
            info!("Default number of colors from config: {}", n);
            n
        }
        Ok(None) => {
            info!(
                "No num_colors in [DEFAULT] section. Using {}.",
                FALLBACK_NUM_COLORS
            );
            FALLBACK_NUM_COLORS
        }
        Err(e) => {
            warn!("{}. Using default values.", e);
            FALLBACK_NUM_COLORS
        }
    }
}
