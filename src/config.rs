use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Largest tower that still fits on a typical terminal.
pub const MAX_PLAYABLE_DEGREE: u32 = 12;

/// Longest pause allowed between animated solver moves.
pub const MAX_STEP_DELAY_MS: u64 = 10_000;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub auto_solve: AutoSolveConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of disks
    pub degree: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { degree: 3 }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AutoSolveConfig {
    /// Pause between animated moves, in milliseconds
    pub step_delay_ms: u64,
}

impl AutoSolveConfig {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

impl Default for AutoSolveConfig {
    fn default() -> Self {
        AutoSolveConfig { step_delay_ms: 500 }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file. The terminal belongs to the game, so there is
    /// no console output while it runs.
    pub enabled: bool,
    /// Default filter level; `RUST_LOG` takes precedence
    pub level: String,
    pub directory: PathBuf,
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            enabled: false,
            level: "info".to_string(),
            directory: PathBuf::from("."),
            file_name: "hanoi.log".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.degree == 0 {
            return Err(ConfigError::Validation("game.degree must be >= 1".into()));
        }
        if self.game.degree > MAX_PLAYABLE_DEGREE {
            return Err(ConfigError::Validation(format!(
                "game.degree must be <= {MAX_PLAYABLE_DEGREE}"
            )));
        }
        if self.auto_solve.step_delay_ms > MAX_STEP_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "auto_solve.step_delay_ms must be <= {MAX_STEP_DELAY_MS}"
            )));
        }
        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of trace, debug, info, warn, error",
                self.logging.level
            )));
        }
        if self.logging.file_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.file_name must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
degree = 5
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.degree, 5);
        assert_eq!(config.auto_solve.step_delay_ms, 500);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.game.degree, 3);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_validation_rejects_zero_degree() {
        let mut config = AppConfig::default();
        config.game.degree = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_degree() {
        let mut config = AppConfig::default();
        config.game.degree = MAX_PLAYABLE_DEGREE + 1;
        assert!(config.validate().is_err());
        config.game.degree = MAX_PLAYABLE_DEGREE;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_long_delay() {
        let mut config = AppConfig::default();
        config.auto_solve.step_delay_ms = MAX_STEP_DELAY_MS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_level() {
        let mut config = AppConfig::default();
        config.logging.level = "loud".into();
        assert!(config.validate().is_err());
        config.logging.level = "DEBUG".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_log_file_name() {
        let mut config = AppConfig::default();
        config.logging.file_name = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_step_delay() {
        let config = AutoSolveConfig { step_delay_ms: 250 };
        assert_eq!(config.step_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_hanoi.toml")).unwrap();
        assert_eq!(config.game.degree, 3);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hanoi.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[auto_solve]
step_delay_ms = 100

[logging]
enabled = true
level = "debug"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.auto_solve.step_delay_ms, 100);
        assert!(config.logging.enabled);
        assert_eq!(config.game.degree, 3);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hanoi.toml");
        std::fs::write(&path, "[game]\ndegree = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hanoi.toml");
        std::fs::write(&path, "[game\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
