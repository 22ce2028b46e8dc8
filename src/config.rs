//! Client configuration
//!
//! The secret key is deliberately not part of [`ClientConfig`]: it is passed on every
//! call so callers stay in charge of credential rotation.

use std::env;
use std::time::Duration;

use crate::error::{MonerooError, MonerooResult};
use crate::payments::methods::{PaymentMethod, DEFAULT_PAYMENT_METHOD};

pub const DEFAULT_BASE_URL: &str = "https://api.moneroo.io/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API base URL, without trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Method sent when a payment names no method at all
    pub default_payment_method: PaymentMethod,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_payment_method: DEFAULT_PAYMENT_METHOD,
            user_agent: format!("moneroo-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables, falling back to defaults
    pub fn from_env() -> MonerooResult<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = env::var("MONEROO_API_URL") {
            config.base_url = base_url;
        }

        if let Ok(timeout) = env::var("MONEROO_TIMEOUT_SECS") {
            config.timeout_secs = timeout.trim().parse().map_err(|_| {
                MonerooError::configuration(format!(
                    "MONEROO_TIMEOUT_SECS must be a valid number, got {}",
                    timeout
                ))
            })?;
        }

        if let Ok(method) = env::var("MONEROO_DEFAULT_METHOD") {
            config.default_payment_method = method.trim().parse().map_err(|_| {
                MonerooError::configuration(format!(
                    "MONEROO_DEFAULT_METHOD is not a known payment method: {}",
                    method
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_default_payment_method(mut self, method: PaymentMethod) -> Self {
        self.default_payment_method = method;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn validate(&self) -> MonerooResult<()> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(MonerooError::configuration("Base URL cannot be empty"));
        }

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(MonerooError::configuration(format!(
                "Base URL must start with http:// or https://, got {}",
                base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(MonerooError::configuration(
                "Timeout must be greater than 0 seconds",
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.moneroo.io/v1");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.default_payment_method, PaymentMethod::MtnBj);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ClientConfig::default().with_base_url("");
        assert!(matches!(
            config.validate(),
            Err(MonerooError::Configuration { .. })
        ));

        let config = ClientConfig::default().with_base_url("ftp://api.moneroo.io");
        assert!(config.validate().is_err());

        let config = ClientConfig::default().with_timeout_secs(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::default()
            .with_base_url("http://localhost:8080/v1")
            .with_default_payment_method(PaymentMethod::WaveSn)
            .with_timeout_secs(5);
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.default_payment_method, PaymentMethod::WaveSn);
        assert!(config.validate().is_ok());
    }
}
