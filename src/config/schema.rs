//! Configuration schema definitions.
//!
//! [`FileConfig`] is what a config file decodes into. [`Config`] is the
//! validated result handed to callers: the file sections plus the secret
//! taken from the environment.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Decoded contents of a config file, before environment enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Server identity and listener settings.
    pub server: ServerConfig,

    /// Upstream fetch settings.
    #[serde(default)]
    pub proxy: ProxyConfig,
}

/// Server identity and listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Service name used in logs.
    pub name: String,

    /// Service version string.
    pub version: String,

    /// Bind address (e.g., "0.0.0.0:9000" or ":9000").
    pub address: String,

    /// Verbose logging.
    #[serde(default)]
    pub debug: bool,

    /// Grace period for in-flight requests on shutdown, in seconds.
    #[serde(default = "default_shutdown_timeout_secs")]
    pub shutdown_timeout_secs: u64,
}

fn default_shutdown_timeout_secs() -> u64 {
    5
}

/// Settings for fetching documents from upstream storage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProxyConfig {
    /// Upstream request timeout in seconds.
    pub upstream_timeout_secs: u64,

    /// Maximum proxied body size in bytes.
    pub max_body_size: u64,

    /// Hosts the proxy may fetch from. Empty means no restriction.
    pub allowed_hosts: Vec<String>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            upstream_timeout_secs: 10,
            max_body_size: 10 * 1024 * 1024, // 10MB
            allowed_hosts: Vec::new(),
        }
    }
}

/// Fully loaded and validated configuration.
///
/// Only the loader constructs this, and only once every field has passed
/// validation.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub proxy: ProxyConfig,
    secret: SecretString,
}

impl Config {
    pub(crate) fn from_parts(file: FileConfig, secret: SecretString) -> Self {
        Self {
            server: file.server,
            proxy: file.proxy,
            secret,
        }
    }

    /// Shared secret from `PROXY_SECRET`.
    pub fn secret(&self) -> &SecretString {
        &self.secret
    }

    /// JSON rendering with the secret redacted.
    pub fn to_redacted_json(&self) -> serde_json::Value {
        serde_json::json!({
            "server": self.server,
            "proxy": self.proxy,
            "secret": "[REDACTED]",
        })
    }
}

impl PartialEq for Config {
    fn eq(&self, other: &Self) -> bool {
        self.server == other.server
            && self.proxy == other.proxy
            && self.secret.expose_secret() == other.secret.expose_secret()
    }
}

impl Eq for Config {}
