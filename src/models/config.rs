use crate::error::{ConfigError, ConvertError};
use crate::models::OutputFormat;
use color_model::Model;
use serde::Deserialize;
use std::path::Path;

/// Environment variable consulted when no `--config` flag is given
pub const CONFIG_ENV: &str = "TINCTURE_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Render format used when a command does not pass `--format`
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Models rendered by `inspect`, in output order
    #[serde(default = "default_targets")]
    pub targets: Vec<String>,

    /// Tracing filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_targets() -> Vec<String> {
    Model::ALL.iter().map(|model| model.name().to_string()).collect()
}

fn default_log_filter() -> String {
    "tincture=warn,color_model=warn".to_string()
}

impl AppConfig {
    /// Read and parse a config file, failing on any error
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Read a config file if one is given, otherwise the defaults
    pub fn try_load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }

    /// Settle a load attempt, logging the outcome and falling back to
    /// defaults on failure
    pub fn from_loaded(loaded: Result<Self, ConfigError>) -> Self {
        match loaded {
            Ok(config) => {
                tracing::info!(
                    default_format = %config.default_format,
                    targets = config.targets.len(),
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration, using defaults when the file is missing or invalid
    pub fn load(path: Option<&Path>) -> Self {
        Self::from_loaded(Self::try_load(path))
    }

    /// Resolve the configured target names into models
    pub fn target_models(&self) -> Result<Vec<Model>, ConvertError> {
        self.targets
            .iter()
            .map(|name| {
                name.parse::<Model>()
                    .map_err(|_| ConvertError::UnknownModel(name.clone()))
            })
            .collect()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::default(),
            targets: default_targets(),
            log_filter: default_log_filter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.default_format, OutputFormat::Plain);
        assert_eq!(config.targets, vec!["rgb", "hsl", "hex", "cmyk", "grayscale"]);
        assert_eq!(config.log_filter, "tincture=warn,color_model=warn");
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
default_format: css
targets:
  - hex
  - gray
log_filter: tincture=debug
"#;

        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.default_format, OutputFormat::Css);
        assert_eq!(config.targets, vec!["hex", "gray"]);
        assert_eq!(config.log_filter, "tincture=debug");
    }

    #[test]
    fn test_deserialize_partial_config_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("default_format: percent").unwrap();

        assert_eq!(config.default_format, OutputFormat::Percent);
        assert_eq!(config.targets.len(), 5);
        assert_eq!(config.log_filter, default_log_filter());
    }

    #[test]
    fn test_target_models() {
        let config = AppConfig {
            targets: vec!["HEX".to_string(), "gray".to_string()],
            ..Default::default()
        };

        assert_eq!(
            config.target_models().unwrap(),
            vec![Model::Hex, Model::Grayscale]
        );
    }

    #[test]
    fn test_target_models_unknown() {
        let config = AppConfig {
            targets: vec!["rgb".to_string(), "lab".to_string()],
            ..Default::default()
        };

        match config.target_models() {
            Err(ConvertError::UnknownModel(name)) => assert_eq!(name, "lab"),
            other => panic!("Expected UnknownModel, got {:?}", other),
        }
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = AppConfig::from_path(Path::new("/nonexistent/tincture.yaml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_from_path_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_format: [").unwrap();

        let result = AppConfig::from_path(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/tincture.yaml")));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(AppConfig::load(None), AppConfig::default());
    }
}
