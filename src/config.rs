use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::priority::TopSymbols;
use crate::error::{PickerError, PickerResult};
use crate::platform;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub resources: ResourcesConfig,
    pub picker: PickerConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcesConfig {
    /// Directory holding the resource JSON files; `~` is expanded
    pub directory: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Replaces the built-in top symbols when set
    pub top_symbols: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub max_results: u32,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            directory: platform::default_resource_dir().display().to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { max_results: 50 }
    }
}

impl ResourcesConfig {
    /// Resource directory with a leading `~` expanded.
    pub fn directory_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.directory).into_owned())
    }
}

impl PickerConfig {
    /// Top symbols to use: the configured list, or the built-in defaults.
    pub fn top_symbols(&self) -> TopSymbols {
        match &self.top_symbols {
            Some(names) => names.iter().map(String::as_str).collect(),
            None => TopSymbols::defaults().clone(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                // Fallback: ~ is not expanded by PathBuf, so use dirs::home_dir
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("symbol-picker")
            .join("config.toml")
    }

    /// Load config from the default location, or return defaults if missing or broken
    pub fn load() -> Self {
        let path = Self::config_path();

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate config from a specific file
    pub fn load_from(path: &Path) -> PickerResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> PickerResult<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.validate();
        Ok(config)
    }

    /// Validate and clamp config values to acceptable ranges
    fn validate(&mut self) {
        // Clamp max_results to reasonable range (1 - 500)
        self.display.max_results = self.display.max_results.clamp(1, 500);

        if self.resources.directory.trim().is_empty() {
            self.resources = ResourcesConfig::default();
        }
    }

    /// Save config to a file, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> PickerResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| PickerError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.picker.top_symbols().contains("trash.fill"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [picker]
            top_symbols = ["star.fill", "heart"]
            "#,
        )
        .unwrap();

        let top = config.picker.top_symbols();
        assert_eq!(top.len(), 2);
        assert!(top.contains("heart"));
        assert!(!top.contains("trash.fill"));
        assert_eq!(config.display.max_results, 50);
    }

    #[test]
    fn test_max_results_is_clamped() {
        let config = Config::from_toml_str("[display]\nmax_results = 0").unwrap();
        assert_eq!(config.display.max_results, 1);

        let config = Config::from_toml_str("[display]\nmax_results = 100000").unwrap();
        assert_eq!(config.display.max_results, 500);
    }

    #[test]
    fn test_blank_directory_falls_back() {
        let config = Config::from_toml_str("[resources]\ndirectory = \"  \"").unwrap();
        assert_eq!(config.resources, ResourcesConfig::default());
    }

    #[test]
    fn test_tilde_is_expanded() {
        let resources = ResourcesConfig {
            directory: "~/glyphs".to_string(),
        };
        let path = resources.directory_path();

        assert!(!path.starts_with("~"));
        assert!(path.ends_with("glyphs"));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let err = Config::from_toml_str("[display\nmax_results = 3").unwrap_err();
        assert!(matches!(err, PickerError::TomlParse(_)));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.resources.directory = "/opt/glyphs".to_string();
        config.picker.top_symbols = Some(vec!["star".to_string()]);
        config.display.max_results = 12;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }
}
