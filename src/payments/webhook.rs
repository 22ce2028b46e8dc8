//! Moneroo webhook handling
//!
//! Moneroo signs each webhook body with HMAC-SHA256 using the webhook secret from the
//! dashboard and sends the hex digest in [`SIGNATURE_HEADER`].

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::Sha256;
use tracing::warn;

use crate::error::{MonerooError, MonerooResult};

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_HEADER: &str = "X-Moneroo-Signature";

/// Check a webhook signature against the raw request body.
pub fn verify_signature(secret: &str, payload: &[u8], signature: &str) -> bool {
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(payload);
    let computed_signature = hex::encode(mac.finalize().into_bytes());

    let provided_signature = signature.trim().to_ascii_lowercase();
    if computed_signature.len() != provided_signature.len() {
        warn!("Moneroo webhook signature has unexpected length");
        return false;
    }

    // Constant-time comparison
    computed_signature
        .as_bytes()
        .iter()
        .zip(provided_signature.as_bytes().iter())
        .fold(0, |acc, (a, b)| acc | (a ^ b))
        == 0
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WebhookEventKind {
    PaymentSuccess,
    PaymentFailed,
    PaymentCancelled,
    PayoutSuccess,
    PayoutFailed,
    Other(String),
}

impl WebhookEventKind {
    pub fn as_str(&self) -> &str {
        match self {
            WebhookEventKind::PaymentSuccess => "payment.success",
            WebhookEventKind::PaymentFailed => "payment.failed",
            WebhookEventKind::PaymentCancelled => "payment.cancelled",
            WebhookEventKind::PayoutSuccess => "payout.success",
            WebhookEventKind::PayoutFailed => "payout.failed",
            WebhookEventKind::Other(kind) => kind,
        }
    }

    pub fn is_payout(&self) -> bool {
        matches!(
            self,
            WebhookEventKind::PayoutSuccess | WebhookEventKind::PayoutFailed
        )
    }
}

impl From<String> for WebhookEventKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "payment.success" => WebhookEventKind::PaymentSuccess,
            "payment.failed" => WebhookEventKind::PaymentFailed,
            "payment.cancelled" => WebhookEventKind::PaymentCancelled,
            "payout.success" => WebhookEventKind::PayoutSuccess,
            "payout.failed" => WebhookEventKind::PayoutFailed,
            _ => WebhookEventKind::Other(kind),
        }
    }
}

impl From<WebhookEventKind> for String {
    fn from(kind: WebhookEventKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for WebhookEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded webhook body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub event: WebhookEventKind,
    #[serde(default)]
    pub data: Value,
}

impl WebhookEvent {
    /// ID of the payment or payout the event refers to.
    pub fn resource_id(&self) -> Option<&str> {
        self.data.get("id").and_then(Value::as_str)
    }
}

/// Decode a webhook body. Verify the signature first.
pub fn parse_event(payload: &[u8]) -> MonerooResult<WebhookEvent> {
    serde_json::from_slice(payload)
        .map_err(|e| MonerooError::validation(format!("Invalid webhook payload: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test_secret";

    fn sign(payload: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(SECRET.as_bytes()).unwrap();
        mac.update(payload);
        hex::encode(mac.finalize().into_bytes())
    }

    #[test]
    fn test_valid_signature() {
        let payload = br#"{"event":"payment.success","data":{"id":"py_1"}}"#;
        let signature = sign(payload);
        assert!(verify_signature(SECRET, payload, &signature));
        assert!(verify_signature(SECRET, payload, &signature.to_uppercase()));
    }

    #[test]
    fn test_invalid_signature() {
        let payload = b"test payload";
        assert!(!verify_signature(SECRET, payload, "invalid_signature"));
        assert!(!verify_signature("other_secret", payload, &sign(payload)));
        assert!(!verify_signature(SECRET, b"tampered payload", &sign(payload)));
    }

    #[test]
    fn test_parse_event() {
        let event =
            parse_event(br#"{"event":"payout.failed","data":{"id":"po_9","status":"failed"}}"#)
                .unwrap();
        assert_eq!(event.event, WebhookEventKind::PayoutFailed);
        assert!(event.event.is_payout());
        assert_eq!(event.resource_id(), Some("po_9"));
    }

    #[test]
    fn test_parse_event_keeps_unknown_kind() {
        let event = parse_event(br#"{"event":"payment.initiated","data":{}}"#).unwrap();
        assert_eq!(
            event.event,
            WebhookEventKind::Other("payment.initiated".to_string())
        );
        assert_eq!(event.resource_id(), None);
    }

    #[test]
    fn test_parse_event_rejects_garbage() {
        assert!(matches!(
            parse_event(b"not json"),
            Err(MonerooError::Validation { .. })
        ));
    }
}
