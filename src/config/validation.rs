//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, ports valid)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: Config → Result<(), Vec<ValidationError>>
//! - Runs before config is handed to the caller

use thiserror::Error;

use crate::config::schema::Config;

/// A single semantic problem with a decoded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g. "server.address").
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let server = &config.server;
    if server.name.trim().is_empty() {
        errors.push(ValidationError::new("server.name", "must not be empty"));
    }
    if server.version.trim().is_empty() {
        errors.push(ValidationError::new("server.version", "must not be empty"));
    }
    if let Err(message) = check_address(&server.address) {
        errors.push(ValidationError::new("server.address", message));
    }
    if server.shutdown_timeout_secs == 0 {
        errors.push(ValidationError::new("server.shutdown_timeout_secs", "must be greater than 0"));
    }

    let proxy = &config.proxy;
    if proxy.upstream_timeout_secs == 0 {
        errors.push(ValidationError::new("proxy.upstream_timeout_secs", "must be greater than 0"));
    }
    if proxy.max_body_size == 0 {
        errors.push(ValidationError::new("proxy.max_body_size", "must be greater than 0"));
    }
    for host in &proxy.allowed_hosts {
        if host.trim().is_empty() {
            errors.push(ValidationError::new("proxy.allowed_hosts", "entries must not be empty"));
        } else if host.contains("://") {
            errors.push(ValidationError::new(
                "proxy.allowed_hosts",
                format!("'{}' must be a bare host, not a URL", host),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Accepts `host:port` with an optional (possibly empty) host.
fn check_address(address: &str) -> Result<(), String> {
    let Some((_, port)) = address.trim().rsplit_once(':') else {
        return Err(format!("'{}' is not in host:port form", address));
    };

    match port.parse::<u16>() {
        Ok(0) => Err("port must not be 0".to_string()),
        Ok(_) => Ok(()),
        Err(_) => Err(format!("invalid port '{}'", port)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{FileConfig, ProxyConfig, ServerConfig};
    use secrecy::SecretString;

    fn config_with(server: ServerConfig, proxy: ProxyConfig, secret: &str) -> Config {
        Config::from_parts(
            FileConfig { server, proxy },
            SecretString::new(secret.to_string().into()),
        )
    }

    fn server() -> ServerConfig {
        ServerConfig {
            name: "proxy".to_string(),
            version: "1.0.0".to_string(),
            address: "0.0.0.0:9000".to_string(),
            debug: false,
            shutdown_timeout_secs: 5,
        }
    }

    const SECRET: &str = "mockmockmockmockmockmockmockmock";

    #[test]
    fn test_valid_config() {
        let config = config_with(server(), ProxyConfig::default(), SECRET);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_address_forms() {
        assert!(check_address(":9000").is_ok());
        assert!(check_address("localhost:80").is_ok());
        assert!(check_address("[::1]:8443").is_ok());

        assert!(check_address("localhost").is_err());
        assert!(check_address("localhost:0").is_err());
        assert!(check_address("localhost:http").is_err());
        assert!(check_address("localhost:70000").is_err());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut srv = server();
        srv.name = "  ".to_string();
        srv.address = "nowhere".to_string();
        srv.shutdown_timeout_secs = 0;

        let proxy = ProxyConfig {
            upstream_timeout_secs: 0,
            max_body_size: 0,
            allowed_hosts: vec!["".to_string(), "https://files.example.com".to_string()],
        };

        let errors = validate_config(&config_with(srv, proxy, "short")).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();

        assert_eq!(
            fields,
            vec![
                "server.name",
                "server.address",
                "server.shutdown_timeout_secs",
                "proxy.upstream_timeout_secs",
                "proxy.max_body_size",
                "proxy.allowed_hosts",
                "proxy.allowed_hosts",
            ]
        );
    }

    #[test]
    fn test_secret_contents_not_constrained() {
        // Presence is checked by the loader; any non-empty value is accepted.
        for secret in ["s3cr3t", SECRET, "a-much-longer-secret-than-thirty-two-bytes-in-total"] {
            let config = config_with(server(), ProxyConfig::default(), secret);
            assert!(validate_config(&config).is_ok(), "rejected secret {secret:?}");
        }
    }
}
