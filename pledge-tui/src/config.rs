//! Configuration loading for the PLEDGE TUI.
//!
//! All fields are required. No defaults.

use pledge_core::ScoreScale;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Only theme shipped with the dashboard.
pub const SUPPORTED_THEME: &str = "ledger";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    pub source: SourceConfig,
    pub request_timeout_ms: u64,
    pub tick_rate_ms: u64,
    pub log_path: PathBuf,
    pub score: ScoreConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub kind: SourceKind,
    /// File path or URL, depending on `kind`.
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    File,
    Http,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreConfig {
    pub scale: ScoreScale,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or PLEDGE_TUI_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let path = path.ok_or(ConfigError::MissingConfigPath)?;
        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let location = self.source.location.trim();
        if location.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "source.location",
                reason: "must not be empty".to_string(),
            });
        }
        if self.source.kind == SourceKind::Http
            && !(location.starts_with("http://") || location.starts_with("https://"))
        {
            return Err(ConfigError::InvalidValue {
                field: "source.location",
                reason: "http sources need an http:// or https:// URL".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_rate_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.theme.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "must not be empty".to_string(),
            });
        }
        if self.theme.name.to_ascii_lowercase() != SUPPORTED_THEME {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: format!("only '{}' is supported", SUPPORTED_THEME),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("PLEDGE_TUI_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
request_timeout_ms = 5000
tick_rate_ms = 250
log_path = "logs/pledge-tui.log"

[source]
kind = "file"
location = "data/promises.json"

[score]
scale = "percent"

[theme]
name = "ledger"
"#;

    #[test]
    fn test_parses_sample() {
        let config = TuiConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.source.kind, SourceKind::File);
        assert_eq!(config.score.scale, ScoreScale::Percent);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let contents = format!("{}\nretry = 3\n", SAMPLE.replace("[source]", "extra = 1\n[source]"));
        assert!(matches!(
            TuiConfig::from_toml(&contents),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_field_rejected() {
        let contents = SAMPLE.replace("tick_rate_ms = 250\n", "");
        assert!(TuiConfig::from_toml(&contents).is_err());
    }

    #[test]
    fn test_http_source_needs_url() {
        let mut config = TuiConfig::from_toml(SAMPLE).unwrap();
        config.source.kind = SourceKind::Http;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "source.location", .. })
        ));
        config.source.location = "https://example.org/data.json".to_string();
        assert!(config.validate().is_ok());
    }
}
