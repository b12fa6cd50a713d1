//! Configuration validation.
//!
//! Semantic checks on top of serde's syntactic ones. Pure function:
//! `FunctionConfig → Result<(), Vec<ValidationError>>`, returning all
//! errors rather than just the first.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::FunctionConfig;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("invalid metrics address '{0}'")]
    InvalidMetricsAddress(String),

    #[error("route_prefix must start with '/' and not end with '/': '{0}'")]
    InvalidRoutePrefix(String),

    #[error("service_name must not be empty")]
    EmptyServiceName,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("http.max_body_bytes must be greater than zero")]
    ZeroBodyLimit,

    #[error("listener.max_connections must be greater than zero")]
    ZeroConnectionLimit,
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &FunctionConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    let prefix = &config.function.route_prefix;
    if !prefix.is_empty() && (!prefix.starts_with('/') || prefix.ends_with('/')) {
        errors.push(ValidationError::InvalidRoutePrefix(prefix.clone()));
    }

    if config.function.service_name.trim().is_empty() {
        errors.push(ValidationError::EmptyServiceName);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.http.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if config.listener.max_connections == 0 {
        errors.push(ValidationError::ZeroConnectionLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_default_config_is_valid() {
        assert!(validate_config(&FunctionConfig::default()).is_ok());
    }

    #[test]
    fn all_violations_are_collected() {
        let mut config = FunctionConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.function.route_prefix = "demo/".to_string();
        config.function.service_name = "  ".to_string();
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).expect_err("config must not validate");
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn metrics_address_is_checked_only_when_enabled() {
        let mut config = FunctionConfig::default();
        config.observability.metrics_address = "nope".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).expect_err("bad metrics address");
        assert!(matches!(
            errors[0],
            ValidationError::InvalidMetricsAddress(_)
        ));
    }

    #[test]
    fn prefix_must_be_rooted_and_unterminated() {
        for prefix in ["demo", "/demo/"] {
            let mut config = FunctionConfig::default();
            config.function.route_prefix = prefix.to_string();
            assert!(validate_config(&config).is_err(), "prefix {prefix:?}");
        }

        let mut config = FunctionConfig::default();
        config.function.route_prefix = "/demo".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
