//! Error types for Moneroo API calls
//!
//! Every operation returns [`MonerooResult`]. Errors are raised to the caller as-is;
//! nothing in this crate retries or swallows a failure.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub type MonerooResult<T> = Result<T, MonerooError>;

#[derive(Debug, Error)]
pub enum MonerooError {
    /// Missing credential or unusable client configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Caller input rejected before any request was sent
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Non-2xx response from the provider
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        errors: Option<ApiErrorBody>,
    },

    /// 2xx response whose body lacks a field the client relies on
    #[error("Unexpected response: {message}")]
    ResponseShape { message: String },

    /// Network-level failure (DNS, refused connection, timeout)
    #[error("Transport error: {message}")]
    Transport { message: String },
}

impl MonerooError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn api(status: u16, message: impl Into<String>, errors: Option<ApiErrorBody>) -> Self {
        Self::Api {
            status,
            message: message.into(),
            errors,
        }
    }

    pub fn response_shape(message: impl Into<String>) -> Self {
        Self::ResponseShape {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Fallback for failures that carry no structured information.
    pub fn unknown() -> Self {
        Self::transport("Unknown error occurred")
    }

    /// True when the error was caused by caller input rather than the provider or network.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::Validation { .. })
    }

    /// HTTP status of an [`MonerooError::Api`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Provider error payload.
///
/// Moneroo returns an open mapping under `errors`; `message` and `code` are the only
/// keys with a stable meaning, everything else lands in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl From<reqwest::Error> for MonerooError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MonerooError::transport(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            MonerooError::transport(format!("Connection failed: {}", err))
        } else {
            MonerooError::transport(format!("Request error: {}", err))
        }
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for MonerooError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        match err.downcast::<MonerooError>() {
            Ok(err) => *err,
            Err(_) => MonerooError::unknown(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_provider_message() {
        let err = MonerooError::api(422, "The amount field is required.", None);
        assert_eq!(err.to_string(), "The amount field is required.");
        assert_eq!(err.status(), Some(422));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_client_errors() {
        assert!(MonerooError::configuration("missing key").is_client_error());
        assert!(MonerooError::validation("bad method").is_client_error());
        assert!(!MonerooError::transport("down").is_client_error());
        assert_eq!(MonerooError::validation("x").status(), None);
    }

    #[test]
    fn test_error_body_keeps_unknown_keys() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"message":"Invalid data","code":"E42","amount":["must be positive"]}"#,
        )
        .unwrap();

        assert_eq!(body.message.as_deref(), Some("Invalid data"));
        assert_eq!(body.code.as_deref(), Some("E42"));
        assert_eq!(
            body.extra.get("amount"),
            Some(&serde_json::json!(["must be positive"]))
        );
    }

    #[test]
    fn test_boxed_error_conversion() {
        let structured: Box<dyn std::error::Error + Send + Sync> =
            Box::new(MonerooError::validation("Payout ID is required"));
        assert!(matches!(
            MonerooError::from(structured),
            MonerooError::Validation { .. }
        ));

        let opaque: Box<dyn std::error::Error + Send + Sync> = "boom".into();
        let err = MonerooError::from(opaque);
        assert_eq!(err.to_string(), "Transport error: Unknown error occurred");
    }
}
