use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
///
/// Loaded from a TOML file under the user's config dir. Missing file means
/// defaults; favorites and the runtime theme toggle are deliberately not
/// persisted here - they are session state.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load config from the default location, or fall back to defaults.
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)
                .map_err(|e| crate::Error::ConfigError(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to disk
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, contents)?;
        Ok(())
    }

    /// Config file path: XDG on Linux/macOS, AppData on Windows.
    fn config_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find config directory".into()))?
            .join("apidex");

        Ok(config_dir.join("config.toml"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Startup theme name ("dark" or "light"); the in-app toggle wins after
    /// that, for the session only.
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Enable mouse support in TUI
    #[serde(default = "default_mouse")]
    pub mouse_enabled: bool,
}

fn default_theme() -> String {
    "dark".to_string() // because who uses light theme in a terminal?
}

fn default_mouse() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            mouse_enabled: default_mouse(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Optional JSON file replacing the built-in catalog.
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ui.theme, "dark");
        assert!(config.ui.mouse_enabled);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("theme"));
        assert!(toml.contains("mouse_enabled"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[ui]\ntheme = \"light\"\n").unwrap();
        assert_eq!(config.ui.theme, "light");
        assert!(config.ui.mouse_enabled);
    }
}
