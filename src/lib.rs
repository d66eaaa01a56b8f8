//! Document Proxy Configuration Library

pub mod config;
pub mod observability;

pub use config::{new_config, Config, ConfigError, ConfigFormat, ConfigLoader, ConfigParameters};
