//! Configuration loader and validator for the folders service.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

use crate::store::sample;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Root configuration struct mirroring the YAML schema exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub service: Service,
    pub sample: Sample,
}

/// Service-level settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Service {
    pub default_per_page: i64,
}

/// Sample dataset settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sample {
    pub dataset_size: usize,
    pub default_org_id: Uuid,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: Service {
                default_per_page: 20,
            },
            sample: Sample {
                dataset_size: sample::DATASET_SIZE,
                default_org_id: sample::DEFAULT_ORG_ID,
            },
        }
    }
}

/// Load configuration from a YAML file and validate it.
/// - If `path` is None, uses `config.yaml` in the current working directory,
///   falling back to the built-in defaults when that file does not exist.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match path {
        Some(path) => path,
        None => {
            let fallback = Path::new("config.yaml");
            if !fallback.exists() {
                return Ok(Config::default());
            }
            fallback
        }
    };
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    validate(&cfg)?;
    Ok(cfg)
}

/// Validate a configuration instance.
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.service.default_per_page <= 0 {
        return Err(ConfigError::Invalid("service.default_per_page must be > 0"));
    }
    if cfg.sample.dataset_size == 0 {
        return Err(ConfigError::Invalid("sample.dataset_size must be > 0"));
    }
    // sample.default_org_id may be any UUID, nil included; a nil org is a
    // valid query that yields an empty result set.
    Ok(())
}

/// Returns the example YAML content.
pub fn example() -> &'static str {
    r#"service:
  default_per_page: 20

sample:
  dataset_size: 1000
  default_org_id: "c1556e17-b7c0-45a3-a6ae-9546248fb17a"
"#
}
