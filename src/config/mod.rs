//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! ConfigParameters (filename + format tag)
//!     → format.rs (tag → ConfigFormat, rejected before any file access)
//!     → loader.rs (read & decode per format)
//!     → env.rs (PROXY_SECRET injected from an EnvSource)
//!     → validation.rs (semantic checks)
//!     → Config (validated, immutable, owned by the caller)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - Section fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - The secret never comes from the file, only from the environment

pub mod env;
pub mod format;
pub mod loader;
pub mod schema;
pub mod validation;

pub use env::{EnvSource, ProcessEnv, PROXY_SECRET_VAR};
pub use format::{ConfigFormat, ConfigParameters};
pub use loader::{new_config, ConfigError, ConfigLoader};
pub use schema::{Config, ProxyConfig, ServerConfig};
pub use validation::ValidationError;
