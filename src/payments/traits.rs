//! HTTP transport abstraction
//!
//! The client never talks to the network directly; it hands fully built requests to an
//! [`HttpTransport`]. Production code uses [`crate::payments::http::ReqwestTransport`].

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::error::MonerooResult;

/// A single outbound request, ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    /// JSON body, serialized by the transport
    pub body: Option<serde_json::Value>,
}

impl TransportRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response as received from the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Performs one HTTP round trip.
///
/// Implementations must not retry: a failed call surfaces as
/// [`crate::error::MonerooError::Transport`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> MonerooResult<TransportResponse>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for std::sync::Arc<T> {
    async fn send(&self, request: TransportRequest) -> MonerooResult<TransportResponse> {
        (**self).send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_success_range() {
        assert!(TransportResponse::new(200, "").is_success());
        assert!(TransportResponse::new(201, "").is_success());
        assert!(!TransportResponse::new(302, "").is_success());
        assert!(!TransportResponse::new(500, "").is_success());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = TransportRequest {
            method: Method::GET,
            url: "https://api.moneroo.io/v1/payments/py_1".to_string(),
            headers: vec![("Authorization", "Bearer sk_test".to_string())],
            body: None,
        };
        assert_eq!(request.header("authorization"), Some("Bearer sk_test"));
        assert_eq!(request.header("Accept"), None);
    }
}
