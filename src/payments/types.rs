//! Moneroo request and response types
//!
//! Request parameters as supplied by callers, the JSON payloads sent on the wire, and
//! the typed shapes responses are normalized into.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::ApiErrorBody;
use crate::payments::methods::PaymentMethod;
use crate::payments::payout_methods::PayoutField;

/// Customer identity sent with payments and payouts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl Customer {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Parameters for initiating a payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentInitParams {
    /// Amount in minor units (e.g. 1000 = 10.00 XOF)
    pub amount: u64,
    /// ISO 4217 currency code
    pub currency: String,
    pub description: String,
    pub customer: Customer,
    /// Where the customer lands after checkout
    pub return_url: String,
    /// Single explicit method; checked against the payment registry
    #[serde(default)]
    pub method: Option<String>,
    /// Legacy list of accepted methods, sent as-is when no explicit method is given
    #[serde(default)]
    pub methods: Option<Vec<String>>,
}

impl PaymentInitParams {
    pub fn new(
        amount: u64,
        currency: impl Into<String>,
        description: impl Into<String>,
        customer: Customer,
        return_url: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            currency: currency.into(),
            description: description.into(),
            customer,
            return_url: return_url.into(),
            method: None,
            methods: None,
        }
    }

    pub fn with_method(mut self, method: PaymentMethod) -> Self {
        self.method = Some(method.as_str().to_string());
        self
    }

    /// Explicit method by raw provider code.
    pub fn with_method_code(mut self, code: impl Into<String>) -> Self {
        self.method = Some(code.into());
        self
    }

    pub fn with_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }
}

/// Body of `POST /payments/initialize`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentPayload {
    pub amount: u64,
    pub currency: String,
    pub description: String,
    pub customer: Customer,
    pub return_url: String,
    pub methods: Vec<String>,
}

/// Parameters for initiating a payout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutInitParams {
    pub amount: u64,
    pub currency: String,
    pub description: String,
    pub customer: Customer,
    /// Payout method code; checked against the payout registry
    pub method: String,
    #[serde(default)]
    pub msisdn: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

impl PayoutInitParams {
    pub fn new(
        amount: u64,
        currency: impl Into<String>,
        description: impl Into<String>,
        customer: Customer,
        method: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            currency: currency.into(),
            description: description.into(),
            customer,
            method: method.into(),
            msisdn: None,
            phone: None,
            account_number: None,
            metadata: None,
        }
    }

    pub fn with_msisdn(mut self, msisdn: impl Into<String>) -> Self {
        self.msisdn = Some(msisdn.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_account_number(mut self, account_number: impl Into<String>) -> Self {
        self.account_number = Some(account_number.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Value of a recipient field, treating blank strings as absent.
    pub fn field(&self, field: PayoutField) -> Option<&str> {
        let value = match field {
            PayoutField::Msisdn => self.msisdn.as_deref(),
            PayoutField::Phone => self.phone.as_deref(),
            PayoutField::AccountNumber => self.account_number.as_deref(),
        };
        value.filter(|v| !v.trim().is_empty())
    }
}

/// Body of `POST /payouts/initialize`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoutPayload {
    pub amount: u64,
    pub currency: String,
    pub description: String,
    pub customer: Customer,
    pub method: String,
    pub metadata: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msisdn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
}

/// Response envelope shared by every endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    pub data: T,
    #[serde(
        default,
        deserialize_with = "lenient_errors",
        skip_serializing_if = "Option::is_none"
    )]
    pub errors: Option<ApiErrorBody>,
}

pub type PaymentResponse = ApiResponse<PaymentData>;
pub type TransactionStatus = ApiResponse<TransactionData>;
pub type PayoutResponse = ApiResponse<PayoutData>;
pub type PayoutStatus = ApiResponse<PayoutStatusData>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentData {
    /// Transaction ID
    #[serde(default)]
    pub id: String,
    /// Provider-hosted page the customer is redirected to
    pub checkout_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutData {
    pub id: String,
    #[serde(default)]
    pub status: Option<ProviderStatus>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Lifecycle state reported by Moneroo for payments and payouts.
///
/// Unrecognized states are kept verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProviderStatus {
    Initiated,
    Pending,
    Processing,
    Success,
    Completed,
    Failed,
    Cancelled,
    Expired,
    Refunded,
    Other(String),
}

impl ProviderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ProviderStatus::Initiated => "initiated",
            ProviderStatus::Pending => "pending",
            ProviderStatus::Processing => "processing",
            ProviderStatus::Success => "success",
            ProviderStatus::Completed => "completed",
            ProviderStatus::Failed => "failed",
            ProviderStatus::Cancelled => "cancelled",
            ProviderStatus::Expired => "expired",
            ProviderStatus::Refunded => "refunded",
            ProviderStatus::Other(status) => status,
        }
    }

    /// No further transitions are expected.
    pub fn is_final(&self) -> bool {
        !matches!(
            self,
            ProviderStatus::Initiated | ProviderStatus::Pending | ProviderStatus::Processing
        )
    }

    pub fn is_successful(&self) -> bool {
        matches!(self, ProviderStatus::Success | ProviderStatus::Completed)
    }
}

impl From<String> for ProviderStatus {
    fn from(status: String) -> Self {
        match status.to_ascii_lowercase().as_str() {
            "initiated" => ProviderStatus::Initiated,
            "pending" => ProviderStatus::Pending,
            "processing" => ProviderStatus::Processing,
            "success" => ProviderStatus::Success,
            "completed" => ProviderStatus::Completed,
            "failed" => ProviderStatus::Failed,
            "cancelled" | "canceled" => ProviderStatus::Cancelled,
            "expired" => ProviderStatus::Expired,
            "refunded" => ProviderStatus::Refunded,
            _ => ProviderStatus::Other(status),
        }
    }
}

impl From<ProviderStatus> for String {
    fn from(status: ProviderStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for ProviderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Currency as returned by Moneroo: either a bare code or a descriptive object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CurrencyInfo {
    Code(String),
    Detailed {
        code: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        symbol: Option<String>,
        #[serde(default)]
        icon_url: Option<String>,
    },
}

impl CurrencyInfo {
    pub fn code(&self) -> &str {
        match self {
            CurrencyInfo::Code(code) => code,
            CurrencyInfo::Detailed { code, .. } => code,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            CurrencyInfo::Code(_) => None,
            CurrencyInfo::Detailed { name, .. } => name.as_deref(),
        }
    }
}

/// Payment method code attached to a transaction.
///
/// Codes the registry does not know are accepted and kept as `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MethodCode {
    Known(PaymentMethod),
    Unrecognized(String),
}

impl MethodCode {
    pub fn from_code(code: &str) -> Self {
        match code.parse::<PaymentMethod>() {
            Ok(method) => MethodCode::Known(method),
            Err(_) => MethodCode::Unrecognized(code.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MethodCode::Known(method) => method.as_str(),
            MethodCode::Unrecognized(code) => code,
        }
    }

    pub fn known(&self) -> Option<PaymentMethod> {
        match self {
            MethodCode::Known(method) => Some(*method),
            MethodCode::Unrecognized(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionData {
    pub id: String,
    pub status: ProviderStatus,
    /// Amount in minor units, as sent by the provider
    #[serde(default, deserialize_with = "string_or_number")]
    pub amount: Option<String>,
    #[serde(default)]
    pub amount_formatted: Option<String>,
    #[serde(default)]
    pub currency: Option<CurrencyInfo>,
    #[serde(default)]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub return_url: Option<String>,
    #[serde(default)]
    pub checkout_url: Option<String>,
    #[serde(default, deserialize_with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp")]
    pub processed_at: Option<DateTime<Utc>>,
    /// Raw method code reported by the provider
    #[serde(default, alias = "paymentMethod", deserialize_with = "method_code")]
    pub payment_method: Option<String>,
    /// Typed view of `payment_method`, filled in after parsing
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub method: Option<MethodCode>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Payout method as embedded in payout details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PayoutMethodRef {
    Code(String),
    Detailed {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        code: Option<String>,
    },
}

impl PayoutMethodRef {
    pub fn code(&self) -> Option<&str> {
        match self {
            PayoutMethodRef::Code(code) => Some(code),
            PayoutMethodRef::Detailed { code, .. } => code.as_deref(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            PayoutMethodRef::Code(_) => None,
            PayoutMethodRef::Detailed { name, .. } => name.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutStatusData {
    pub id: String,
    pub status: ProviderStatus,
    #[serde(default)]
    pub is_processed: Option<bool>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub amount: Option<String>,
    #[serde(default)]
    pub amount_formatted: Option<String>,
    #[serde(default)]
    pub currency: Option<CurrencyInfo>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub method: Option<PayoutMethodRef>,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default, deserialize_with = "timestamp")]
    pub initiated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp")]
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Pagination and filters for list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Extra query filters (e.g. `status`, `customer_id`), sent as-is
    pub filters: BTreeMap<String, String>,
}

impl ListParams {
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Query pairs in a stable order: `page`, `limit`, then filters by key.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs.extend(
            self.filters
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        pairs
    }
}

/// Body of `POST /customers` and `PATCH /customers/{id}`; unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl CustomerParams {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: Some(email.into()),
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..Self::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Customer record as stored by Moneroo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerData {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

pub type PaymentList = ApiResponse<Vec<TransactionData>>;
pub type TransactionList = ApiResponse<Vec<TransactionData>>;
pub type CustomerResponse = ApiResponse<CustomerData>;
pub type CustomerList = ApiResponse<Vec<CustomerData>>;
/// Envelope whose `data` is not interpreted (cancellation, deletion)
pub type Acknowledgement = ApiResponse<Value>;

/// Parse a provider timestamp: RFC 3339, or `YYYY-MM-DD HH:MM:SS` taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) if value.is_empty() => Ok(None),
        Some(value) => parse_timestamp(&value)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", value))),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or number amount, got {}",
            other
        ))),
    }
}

// Accepts "mtn_bj" as well as {"code": "mtn_bj", ...}
fn method_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(code)) if !code.is_empty() => Some(code),
        Some(Value::Object(map)) => map
            .get("code")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    })
}

// Moneroo sends `errors: null` or `[]` on success; only objects carry information.
fn lenient_errors<'de, D>(deserializer: D) -> Result<Option<ApiErrorBody>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transaction_status_with_detailed_currency() {
        let status: TransactionStatus = serde_json::from_value(json!({
            "message": "Payment transaction fetched successfully",
            "data": {
                "id": "py_123",
                "status": "success",
                "amount": 1000,
                "amount_formatted": "1,000 FCFA",
                "currency": {"code": "XOF", "name": "West African CFA Franc", "symbol": "FCFA", "icon_url": ""},
                "customer": {"email": "test@example.com", "first_name": "John", "last_name": "Doe", "phone": null},
                "created_at": "2024-03-01T10:00:00.000000Z",
                "paymentMethod": "mtn_bj",
                "app": {"id": "app_1"}
            },
            "errors": null
        }))
        .unwrap();

        let data = status.data;
        assert_eq!(data.status, ProviderStatus::Success);
        assert_eq!(data.amount.as_deref(), Some("1000"));
        assert_eq!(data.currency.as_ref().map(CurrencyInfo::code), Some("XOF"));
        assert_eq!(data.payment_method.as_deref(), Some("mtn_bj"));
        assert!(data.method.is_none());
        assert!(data.extra.contains_key("app"));
        assert!(status.errors.is_none());
        assert_eq!(
            data.created_at.map(|dt| dt.to_rfc3339()),
            Some("2024-03-01T10:00:00+00:00".to_string())
        );
    }

    #[test]
    fn test_transaction_status_with_plain_currency_and_method_object() {
        let data: TransactionData = serde_json::from_value(json!({
            "id": "tx_1",
            "status": "pending",
            "amount": "500",
            "currency": "XOF",
            "payment_method": {"code": "wave_sn", "name": "Wave Senegal"}
        }))
        .unwrap();

        assert_eq!(data.currency, Some(CurrencyInfo::Code("XOF".to_string())));
        assert_eq!(data.payment_method.as_deref(), Some("wave_sn"));
        assert!(!data.status.is_final());
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let status = ProviderStatus::from("on_hold".to_string());
        assert_eq!(status, ProviderStatus::Other("on_hold".to_string()));
        assert_eq!(serde_json::to_value(&status).unwrap(), json!("on_hold"));
        assert!(ProviderStatus::from("Completed".to_string()).is_successful());
    }

    #[test]
    fn test_method_code() {
        assert_eq!(
            MethodCode::from_code("orange_ci").known(),
            Some(PaymentMethod::OrangeCi)
        );
        let unknown = MethodCode::from_code("paypal_fr");
        assert_eq!(unknown, MethodCode::Unrecognized("paypal_fr".to_string()));
        assert_eq!(unknown.as_str(), "paypal_fr");
        assert_eq!(serde_json::to_value(&unknown).unwrap(), json!("paypal_fr"));
    }

    #[test]
    fn test_payout_status_method_shapes() {
        let data: PayoutStatusData = serde_json::from_value(json!({
            "id": "po_1",
            "status": "success",
            "is_processed": true,
            "method": {"name": "MTN Mobile Money Benin", "code": "mtn_bj"},
            "initiated_at": "2024-03-01T10:00:00Z"
        }))
        .unwrap();
        let method = data.method.unwrap();
        assert_eq!(method.code(), Some("mtn_bj"));
        assert_eq!(method.name(), Some("MTN Mobile Money Benin"));
        assert_eq!(data.is_processed, Some(true));

        let data: PayoutStatusData =
            serde_json::from_value(json!({"id": "po_2", "status": "pending", "method": "wave_sn"}))
                .unwrap();
        assert_eq!(data.method.unwrap().code(), Some("wave_sn"));
    }

    #[test]
    fn test_errors_field_is_lenient() {
        let response: PayoutResponse = serde_json::from_value(json!({
            "message": "ok",
            "data": {"id": "po_1"},
            "errors": []
        }))
        .unwrap();
        assert!(response.errors.is_none());
        assert!(response.data.status.is_none());
    }

    #[test]
    fn test_payout_params_field_treats_blank_as_missing() {
        let params = PayoutInitParams::new(
            1000,
            "XOF",
            "Refund",
            Customer::new("a@b.c", "A", "B"),
            "mtn_bj",
        )
        .with_msisdn("  ")
        .with_account_number("ACC-1");

        assert_eq!(params.field(PayoutField::Msisdn), None);
        assert_eq!(params.field(PayoutField::AccountNumber), Some("ACC-1"));
        assert_eq!(params.field(PayoutField::Phone), None);
    }

    #[test]
    fn test_null_message_and_timestamp_formats() {
        let response: PayoutStatus = serde_json::from_value(json!({
            "message": null,
            "data": {
                "id": "po_1",
                "status": "pending",
                "initiated_at": "2024-03-01 10:00:00",
                "processed_at": null
            }
        }))
        .unwrap();
        assert_eq!(response.message, "");
        assert_eq!(
            response.data.initiated_at,
            parse_timestamp("2024-03-01T10:00:00Z")
        );
        assert!(response.data.processed_at.is_none());

        let bad = serde_json::from_value::<PayoutStatusData>(json!({
            "id": "po_1",
            "status": "pending",
            "initiated_at": "yesterday"
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_list_params_query_pairs() {
        let params = ListParams::default()
            .filter("status", "success")
            .limit(20)
            .page(2)
            .filter("currency", "XOF");
        let pairs: Vec<(String, String)> = params.query_pairs();
        let pairs: Vec<(&str, &str)> = pairs
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("page", "2"),
                ("limit", "20"),
                ("currency", "XOF"),
                ("status", "success")
            ]
        );
        assert!(ListParams::default().query_pairs().is_empty());
    }

    #[test]
    fn test_customer_params_omit_unset_fields() {
        let create = CustomerParams::new("jane@example.com", "Jane", "Doe").with_phone("22990000000");
        assert_eq!(
            serde_json::to_value(&create).unwrap(),
            json!({"email": "jane@example.com", "first_name": "Jane", "last_name": "Doe", "phone": "22990000000"})
        );

        let update = CustomerParams {
            city: Some("Cotonou".to_string()),
            ..CustomerParams::default()
        };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({"city": "Cotonou"}));
        assert!(CustomerParams::default().is_empty());
        assert!(!update.is_empty());
    }

    #[test]
    fn test_customer_full_name() {
        assert_eq!(Customer::new("e", "John", "Doe").full_name(), "John Doe");
        assert_eq!(Customer::new("e", "", "Doe").full_name(), "Doe");
    }
}
