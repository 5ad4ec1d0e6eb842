use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::color;
use crate::menu::MenuColors;

/// Seed colors used when a menu has none yet.
pub const DEFAULT_PRIMARY: &str = "#FF9000";
pub const DEFAULT_SECONDARY: &str = "#FFFFFF";

/// Delay between the last picker change and the wheel redraw.
pub const DEFAULT_REDRAW_DEBOUNCE_MS: u64 = 16;

/// Logical side length of the picker canvas.
pub const CANVAS_SIZE: f64 = 280.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_primary: String,
    pub default_secondary: String,
    pub redraw_debounce_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_primary: DEFAULT_PRIMARY.to_string(),
            default_secondary: DEFAULT_SECONDARY.to_string(),
            redraw_debounce_ms: DEFAULT_REDRAW_DEBOUNCE_MS,
        }
    }
}

impl AppConfig {
    pub fn default_colors(&self) -> MenuColors {
        MenuColors::new(&self.default_primary, &self.default_secondary).with_fallback(
            &MenuColors::new(DEFAULT_PRIMARY, DEFAULT_SECONDARY),
        )
    }

    pub fn redraw_debounce(&self) -> Duration {
        Duration::from_millis(self.redraw_debounce_ms)
    }

    /// Set a config value from its command-line key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-primary" => self.default_primary = color::format_hex(value),
            "default-secondary" => self.default_secondary = color::format_hex(value),
            "redraw-debounce-ms" => {
                self.redraw_debounce_ms = value
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid number '{}'", value))?;
            }
            _ => bail!(
                "Unknown key '{}' (expected {})",
                key,
                "default-primary, default-secondary or redraw-debounce-ms"
            ),
        }
        Ok(())
    }
}

/// Base directory: ~/.config/menu-colors/
pub fn base_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("menu-colors")
}

pub fn config_path() -> PathBuf {
    base_dir().join("config.json")
}

pub fn draft_path() -> PathBuf {
    base_dir().join("menu.json")
}

pub fn log_path() -> PathBuf {
    base_dir().join("menu-colors.log")
}

pub fn load_config() -> AppConfig {
    load_config_from(&config_path())
}

/// Load config, falling back to defaults when the file is missing or broken.
pub fn load_config_from(path: &Path) -> AppConfig {
    if !path.exists() {
        return AppConfig::default();
    }
    match fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|s| serde_json::from_str(&s).map_err(anyhow::Error::from))
    {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            AppConfig::default()
        }
    }
}

pub fn save_config(config: &AppConfig) -> Result<()> {
    save_config_to(config, &config_path())
}

pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "saved config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("menu-colors-config-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.default_colors(), MenuColors::new("#FF9000", "#FFFFFF"));
        assert_eq!(config.redraw_debounce(), Duration::from_millis(16));
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r##"{"default_primary":"#d4d4d4"}"##).unwrap();
        assert_eq!(config.default_primary, "#d4d4d4");
        assert_eq!(config.default_secondary, DEFAULT_SECONDARY);
        assert_eq!(config.redraw_debounce_ms, DEFAULT_REDRAW_DEBOUNCE_MS);
    }

    #[test]
    fn invalid_default_color_falls_back() {
        let config = AppConfig {
            default_primary: "oops".into(),
            ..AppConfig::default()
        };
        assert_eq!(config.default_colors().primary, DEFAULT_PRIMARY);
    }

    #[test]
    fn set_keys() {
        let mut config = AppConfig::default();
        config.set("default-primary", "ff6b35").unwrap();
        assert_eq!(config.default_primary, "#ff6b35");
        config.set("redraw-debounce-ms", "40").unwrap();
        assert_eq!(config.redraw_debounce_ms, 40);
        assert!(config.set("redraw-debounce-ms", "soon").is_err());
        assert!(config.set("font", "serif").is_err());
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let path = temp_path("corrupt.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config_from(&path), AppConfig::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn save_and_load() {
        let path = temp_path("config.json");
        let mut config = AppConfig::default();
        config.redraw_debounce_ms = 25;
        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path), config);
        let _ = fs::remove_file(&path);
    }
}
