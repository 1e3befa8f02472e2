use crate::config::LifeConfig;
use crate::error::{LifeError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub life: LifeSettings,
}

/// `[life]` table; anything left out keeps the built-in default
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LifeSettings {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub history_depth: Option<usize>,
    pub density: Option<f64>,
    pub time_step: Option<f32>,
    pub draw_char: Option<char>,
}

impl Settings {
    /// Read the user's settings file. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| LifeError::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("toruslife")
            .join("config.toml")
    }

    /// Overlay the file's values onto `config`
    pub fn apply(&self, config: &mut LifeConfig) {
        let life = &self.life;
        if let Some(width) = life.width {
            config.width = width;
        }
        if let Some(height) = life.height {
            config.height = height;
        }
        if let Some(depth) = life.history_depth {
            config.history_depth = depth;
        }
        if let Some(density) = life.density {
            config.density = density;
        }
        if let Some(time_step) = life.time_step {
            config.time_step = time_step;
        }
        if let Some(ch) = life.draw_char {
            config.draw_char = ch;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_table_overrides_only_given_fields() {
        let settings: Settings = toml::from_str("[life]\nwidth = 48\ntime_step = 0.05\n").unwrap();
        let mut config = LifeConfig::default();
        settings.apply(&mut config);
        assert_eq!(config.width, 48);
        assert_eq!(config.height, 32);
        assert!((config.time_step - 0.05).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_file_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        let mut config = LifeConfig::default();
        settings.apply(&mut config);
        assert_eq!(config, LifeConfig::default());
    }

    #[test]
    fn missing_file_is_default() {
        let settings = Settings::load_from(Path::new("/nonexistent/toruslife/config.toml")).unwrap();
        assert!(settings.life.width.is_none());
    }

    #[test]
    fn malformed_file_reports_path() {
        let path = std::env::temp_dir().join(format!("toruslife-settings-{}.toml", std::process::id()));
        fs::write(&path, "[life]\nwidth = \"wide\"\n").unwrap();
        let result = Settings::load_from(&path);
        fs::remove_file(&path).ok();
        match result {
            Err(LifeError::Settings { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected settings error, got {:?}", other),
        }
    }
}
