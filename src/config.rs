use darksky_client::{Lang, Units};
use serde::Deserialize;
use thiserror::Error;

use std::fs;

/// Settings for the `darksky` binary, read from a JSON file. Command-line flags win over these.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub time: Option<i64>,
    pub lang: Option<Lang>,
    pub units: Option<Units>,
    pub base_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Unable to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("No {0} given on the command line or in the config file")]
    Missing(&'static str),
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let conf_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(path, &conf_str)
    }

    fn from_json(path: &str, conf_str: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(conf_str).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn require<T: Clone>(value: &Option<T>, name: &'static str) -> Result<T, ConfigError> {
        value.clone().ok_or(ConfigError::Missing(name))
    }
}
