//! Configuration loading from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use thiserror::Error;

use crate::config::env::{EnvSource, ProcessEnv, PROXY_SECRET_VAR};
use crate::config::format::{ConfigFormat, ConfigParameters};
use crate::config::schema::{Config, FileConfig};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unsupported config format: '{0}'")]
    UnsupportedFormat(String),

    #[error("Config file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read config file {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to decode config file {}: {source}", path.display())]
    DecodeFailure {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Missing required environment variable: {0}")]
    MissingEnvValue(&'static str),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Loads configuration files, enriching them from an [`EnvSource`].
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader<E = ProcessEnv> {
    env: E,
}

impl<E: EnvSource> ConfigLoader<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Load, enrich and validate the configuration described by `params`.
    pub fn load(&self, params: &ConfigParameters) -> Result<Config, ConfigError> {
        let content = read_file(params.filename())?;
        let file = decode(params.format, params.filename(), &content)?;
        let secret = self.required_var(PROXY_SECRET_VAR)?;

        let config = Config::from_parts(file, secret);
        validate_config(&config).map_err(ConfigError::Validation)?;

        Ok(config)
    }

    fn required_var(&self, key: &'static str) -> Result<SecretString, ConfigError> {
        match self.env.var(key) {
            Some(value) if !value.is_empty() => Ok(SecretString::new(value.into())),
            _ => Err(ConfigError::MissingEnvValue(key)),
        }
    }
}

/// Load configuration using the process environment.
pub fn new_config(params: ConfigParameters) -> Result<Config, ConfigError> {
    ConfigLoader::new(ProcessEnv).load(&params)
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ReadFailure {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn decode(format: ConfigFormat, path: &Path, content: &str) -> Result<FileConfig, ConfigError> {
    match format {
        ConfigFormat::Yml => {
            serde_yaml::from_str(content).map_err(|source| ConfigError::DecodeFailure {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
