//! Trainer configuration loaded from an optional TOML file.
//!
//! Missing file or missing fields fall back to the first-launch defaults.
//! Command-line flags are applied on top by `main`.

use crate::error::{Result, TrainerError};
use crate::numbers::generator::DEFAULT_MAX_ATTEMPTS;
use crate::numbers::range::MAX_SUPPORTED;
use crate::numbers::{Connector, Operator, ValueRange};
use crate::session::Settings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "ru-trainer.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TrainerConfig {
    /// Operators enabled at start
    pub operators: Vec<Operator>,
    pub min: u32,
    pub max: u32,
    pub connector: Connector,
    /// Sampling attempts before the generator falls back
    pub max_attempts: u32,
    pub speech: SpeechConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SpeechConfig {
    pub enabled: bool,
    /// Synthesizer argv; `{lang}` is replaced by the voice, the text is appended
    pub command: Vec<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        SpeechConfig {
            enabled: true,
            command: ["espeak-ng", "-v", "{lang}", "-s", "130"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            operators: vec![Operator::Add],
            min: 1,
            max: 20,
            connector: Connector::Equals,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            speech: SpeechConfig::default(),
        }
    }
}

impl TrainerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(TrainerError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.max > MAX_SUPPORTED {
            return Err(TrainerError::ConfigInvalid(format!(
                "max must be at most {}",
                MAX_SUPPORTED
            )));
        }
        if self.max_attempts == 0 {
            return Err(TrainerError::ConfigInvalid(
                "max_attempts must be > 0".to_string(),
            ));
        }
        if self.speech.enabled
            && self
                .speech
                .command
                .first()
                .map_or(true, |program| program.trim().is_empty())
        {
            return Err(TrainerError::ConfigInvalid(
                "speech.command must be a non-empty array".to_string(),
            ));
        }
        Ok(())
    }

    /// Initial drill settings described by this config
    pub fn settings(&self) -> Result<Settings> {
        let range = ValueRange::new(self.min, self.max)?;
        Ok(Settings::new(
            self.operators.iter().copied().collect(),
            range,
            self.connector,
        ))
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `TrainerConfig::default()`.
pub fn load_config(path: &Path) -> Result<TrainerConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(TrainerConfig::default());
    }
    let contents = fs::read_to_string(path).map_err(|source| TrainerError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: TrainerConfig =
        toml::from_str(&contents).map_err(|source| TrainerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
    cfg.validate()?;
    debug!(path = %path.display(), ?cfg, "loaded config");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, TrainerConfig::default());
        assert_eq!(cfg.settings().expect("settings"), Settings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("ru-trainer.toml");
        fs::write(
            &path,
            "operators = [\"*\", \"/\"]\nmax = 100\nconnector = \"will_be\"\n\n[speech]\nenabled = false\n",
        )
        .expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.operators, vec![Operator::Multiply, Operator::Divide]);
        assert_eq!((cfg.min, cfg.max), (1, 100));
        assert_eq!(cfg.connector, Connector::WillBe);
        assert!(!cfg.speech.enabled);
        assert_eq!(cfg.speech.command, SpeechConfig::default().command);
        assert_eq!(cfg.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("bad.toml");
        fs::write(&path, "min = 50\nmax = 10\n").expect("write");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, TrainerError::InvalidRange { min: 50, max: 10 }));
    }

    #[test]
    fn unknown_operator_is_a_parse_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("bad.toml");
        fs::write(&path, "operators = [\"%\"]\n").expect("write");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, TrainerError::ConfigParse { .. }));
    }

    #[test]
    fn validate_limits() {
        let cfg = TrainerConfig {
            max: 20_000,
            ..TrainerConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(TrainerError::ConfigInvalid(_))));

        let cfg = TrainerConfig {
            max_attempts: 0,
            ..TrainerConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = TrainerConfig {
            speech: SpeechConfig {
                enabled: true,
                command: Vec::new(),
            },
            ..TrainerConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = TrainerConfig {
            speech: SpeechConfig {
                enabled: false,
                command: Vec::new(),
            },
            ..TrainerConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }
}
