use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use studio_engine::RunnerSettings;
use thiserror::Error;

use super::logging::LogDestination;

pub(crate) const CONFIG_FILENAME: &str = "scrape_studio.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid setting: {0}")]
    Invalid(String),
}

/// Settings read from `scrape_studio.ron`; every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub min_latency_ms: u64,
    pub max_latency_ms: u64,
    pub success_probability: f64,
    pub seed: Option<u64>,
    pub progress_interval_ms: u64,
    pub export_dir: PathBuf,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let runner = RunnerSettings::default();
        Self {
            min_latency_ms: runner.min_latency.as_millis() as u64,
            max_latency_ms: runner.max_latency.as_millis() as u64,
            success_probability: runner.success_probability,
            seed: runner.seed,
            progress_interval_ms: runner.progress_interval.as_millis() as u64,
            export_dir: PathBuf::from("exports"),
            log_destination: LogDestination::default(),
        }
    }
}

impl AppConfig {
    pub fn runner_settings(&self) -> RunnerSettings {
        RunnerSettings {
            min_latency: Duration::from_millis(self.min_latency_ms),
            max_latency: Duration::from_millis(self.max_latency_ms),
            success_probability: self.success_probability,
            seed: self.seed,
            progress_interval: Duration::from_millis(self.progress_interval_ms),
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&self.success_probability) {
            return Err(ConfigError::Invalid(format!(
                "success_probability {} is outside 0.0..=1.0",
                self.success_probability
            )));
        }
        if self.min_latency_ms > self.max_latency_ms {
            return Err(ConfigError::Invalid(format!(
                "min_latency_ms {} exceeds max_latency_ms {}",
                self.min_latency_ms, self.max_latency_ms
            )));
        }
        Ok(self)
    }
}

/// Reads `scrape_studio.ron` from `dir`. `Ok(None)` when the file does not exist.
pub(crate) fn load_from(dir: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    let config: AppConfig =
        ron::from_str(&content).map_err(|source| ConfigError::Parse { path, source })?;
    config.validate().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_means_defaults() {
        let temp = TempDir::new().unwrap();
        assert!(load_from(temp.path()).unwrap().is_none());
    }

    #[test]
    fn defaults_match_runner_defaults() {
        assert_eq!(
            AppConfig::default().runner_settings(),
            RunnerSettings::default()
        );
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            "(min_latency_ms: 10, max_latency_ms: 20, seed: Some(7), log_destination: Both)",
        )
        .unwrap();

        let config = load_from(temp.path()).unwrap().unwrap();
        assert_eq!(
            config,
            AppConfig {
                min_latency_ms: 10,
                max_latency_ms: 20,
                seed: Some(7),
                log_destination: LogDestination::Both,
                ..AppConfig::default()
            }
        );
        assert_eq!(config.runner_settings().max_latency, Duration::from_millis(20));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "(min_latency_ms: \"soon\")").unwrap();

        let err = load_from(temp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn out_of_range_probability_is_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            "(success_probability: 1.5)",
        )
        .unwrap();

        let err = load_from(temp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn inverted_latency_range_is_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            "(min_latency_ms: 500, max_latency_ms: 100)",
        )
        .unwrap();

        assert!(matches!(
            load_from(temp.path()),
            Err(ConfigError::Invalid(_))
        ));
    }
}
