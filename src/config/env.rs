//! Environment lookup used to enrich a decoded configuration.

use std::collections::HashMap;

/// Environment variable holding the proxy's shared secret.
pub const PROXY_SECRET_VAR: &str = "PROXY_SECRET";

/// Source of environment values.
///
/// The loader never touches `std::env` directly; callers hand it one of these,
/// so tests can use a plain map instead of mutating process state.
pub trait EnvSource: Send + Sync {
    /// Look up `key`. Unset and non-unicode values are both `None`.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
