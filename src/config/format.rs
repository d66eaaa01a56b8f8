//! Configuration file formats and load parameters.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::loader::ConfigError;

/// Supported configuration file formats.
///
/// Adding a format means adding a variant here; the decoder in `loader.rs`
/// matches exhaustively, so the compiler points at every place to extend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// YAML document.
    Yml,
}

impl ConfigFormat {
    /// Canonical tag for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Yml => "yml",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigFormat {
    type Err = ConfigError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "YML" | "yml" => Ok(ConfigFormat::Yml),
            _ => Err(ConfigError::UnsupportedFormat(tag.to_string())),
        }
    }
}

/// What to load: a file and the format it is written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigParameters {
    pub filename: PathBuf,
    pub format: ConfigFormat,
}

impl ConfigParameters {
    pub fn new(filename: impl Into<PathBuf>, format: ConfigFormat) -> Self {
        Self {
            filename: filename.into(),
            format,
        }
    }

    /// Build parameters from a textual format tag.
    ///
    /// Fails with [`ConfigError::UnsupportedFormat`] for unknown tags. The file
    /// is not looked at.
    pub fn from_tag(filename: impl Into<PathBuf>, tag: &str) -> Result<Self, ConfigError> {
        let format = tag.parse()?;
        Ok(Self::new(filename, format))
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }
}
