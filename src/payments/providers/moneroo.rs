//! Moneroo API client
//!
//! Builds and validates payment and payout requests against the method registries,
//! sends them through an [`HttpTransport`], and normalizes the responses. Every
//! operation performs exactly one HTTP round trip; nothing is retried.

use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::config::ClientConfig;
use crate::error::{ApiErrorBody, MonerooError, MonerooResult};
use crate::payments::http::ReqwestTransport;
use crate::payments::methods::PaymentMethod;
use crate::payments::payout_methods::PayoutMethod;
use crate::payments::traits::{HttpTransport, TransportRequest, TransportResponse};
use crate::payments::types::{
    Acknowledgement, ApiResponse, CustomerList, CustomerParams, CustomerResponse, ListParams,
    MethodCode, PaymentData, PaymentInitParams, PaymentList, PaymentPayload, PaymentResponse,
    PayoutData, PayoutInitParams, PayoutPayload, PayoutResponse, PayoutStatus, PayoutStatusData,
    TransactionData, TransactionList, TransactionStatus,
};

/// Moneroo client, generic over its transport
pub struct MonerooClient<T: HttpTransport = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl MonerooClient<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> MonerooResult<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self { config, transport })
    }

    /// Create client from environment variables
    pub fn from_env() -> MonerooResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<T: HttpTransport> MonerooClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Initialize a payment and return its checkout URL.
    ///
    /// `base_url` overrides the configured API base for this call only.
    pub async fn initiate_payment(
        &self,
        params: &PaymentInitParams,
        secret_key: &str,
        base_url: Option<&str>,
    ) -> MonerooResult<PaymentResponse> {
        require_credential(secret_key)?;
        let payload = build_payment_payload(params, self.config.default_payment_method)?;

        info!(
            "Initiating Moneroo payment: {} {} methods={:?}",
            payload.amount, payload.currency, payload.methods
        );

        let body = serde_json::to_value(&payload)
            .map_err(|e| MonerooError::validation(format!("Invalid payment payload: {}", e)))?;
        let url = self.endpoint(base_url, &["payments", "initialize"], &[])?;
        let response = self
            .execute(Method::POST, url, secret_key, Some(body))
            .await?;

        let envelope: RawEnvelope = parse_body(&response)?;
        let errors = envelope.error_body();
        let data = envelope.data.unwrap_or(Value::Null);
        let checkout_url = data
            .get("checkout_url")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty());

        let Some(checkout_url) = checkout_url else {
            error!("Moneroo payment response has no checkout_url");
            return Err(MonerooError::response_shape("checkout_url is missing!"));
        };

        let data = PaymentData {
            id: data
                .get("id")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            checkout_url: checkout_url.to_string(),
        };

        info!("Moneroo payment initiated successfully: id={}", data.id);

        Ok(ApiResponse {
            message: envelope.message.unwrap_or_default(),
            data,
            errors,
        })
    }

    /// Fetch the current state of a payment transaction.
    pub async fn check_transaction_status(
        &self,
        transaction_id: &str,
        secret_key: &str,
        base_url: Option<&str>,
    ) -> MonerooResult<TransactionStatus> {
        require_credential(secret_key)?;
        require_id(transaction_id, "Transaction ID is required")?;

        info!("Checking Moneroo transaction status: id={}", transaction_id);

        let url = self.endpoint(base_url, &["payments", transaction_id], &[])?;
        let response = self.execute(Method::GET, url, secret_key, None).await?;

        let mut status: TransactionStatus = parse_envelope::<TransactionData>(&response)?;
        enrich_method(&mut status.data);

        info!(
            "Moneroo transaction status: id={}, status={}",
            status.data.id, status.data.status
        );
        Ok(status)
    }

    /// Send money to a recipient through a payout method.
    pub async fn initiate_payout(
        &self,
        params: &PayoutInitParams,
        secret_key: &str,
        base_url: Option<&str>,
    ) -> MonerooResult<PayoutResponse> {
        require_credential(secret_key)?;
        let payload = build_payout_payload(params)?;

        info!(
            "Initiating Moneroo payout: {} {} method={}",
            payload.amount, payload.currency, payload.method
        );

        let body = serde_json::to_value(&payload)
            .map_err(|e| MonerooError::validation(format!("Invalid payout payload: {}", e)))?;
        let url = self.endpoint(base_url, &["payouts", "initialize"], &[])?;
        let response = self
            .execute(Method::POST, url, secret_key, Some(body))
            .await?;

        let envelope: RawEnvelope = parse_body(&response)?;
        let errors = envelope.error_body();
        let has_id = envelope
            .data
            .as_ref()
            .and_then(|data| data.get("id"))
            .and_then(Value::as_str)
            .is_some_and(|id| !id.is_empty());
        if !has_id {
            error!("Moneroo payout response has no transaction id");
            return Err(MonerooError::response_shape(
                "Transaction ID missing in response!",
            ));
        }

        let data: PayoutData = decode_data(envelope.data.unwrap_or(Value::Null))?;
        info!("Moneroo payout initiated successfully: id={}", data.id);

        Ok(ApiResponse {
            message: envelope.message.unwrap_or_default(),
            data,
            errors,
        })
    }

    /// Ask Moneroo to verify a payout with the operator (`GET /payouts/{id}/verify`).
    pub async fn verify_payout(
        &self,
        payout_id: &str,
        secret_key: &str,
        base_url: Option<&str>,
    ) -> MonerooResult<PayoutStatus> {
        require_credential(secret_key)?;
        require_id(payout_id, "Payout ID is required")?;

        info!("Verifying Moneroo payout: id={}", payout_id);

        let url = self.endpoint(base_url, &["payouts", payout_id, "verify"], &[])?;
        let response = self.execute(Method::GET, url, secret_key, None).await?;
        let status: PayoutStatus = parse_envelope::<PayoutStatusData>(&response)?;

        info!(
            "Moneroo payout verified: id={}, status={}",
            status.data.id, status.data.status
        );
        Ok(status)
    }

    /// Retrieve the full details of a payout (`GET /payouts/{id}`).
    pub async fn get_payout(
        &self,
        payout_id: &str,
        secret_key: &str,
        base_url: Option<&str>,
    ) -> MonerooResult<PayoutStatus> {
        require_credential(secret_key)?;
        require_id(payout_id, "Payout ID is required")?;

        info!("Fetching Moneroo payout: id={}", payout_id);

        let url = self.endpoint(base_url, &["payouts", payout_id], &[])?;
        let response = self.execute(Method::GET, url, secret_key, None).await?;
        parse_envelope::<PayoutStatusData>(&response)
    }

    /// List payments (`GET /payments`).
    pub async fn list_payments(
        &self,
        params: &ListParams,
        secret_key: &str,
        base_url: Option<&str>,
    ) -> MonerooResult<PaymentList> {
        require_credential(secret_key)?;
        info!("Listing Moneroo payments: {:?}", params);

        let url = self.endpoint(base_url, &["payments"], &params.query_pairs())?;
        let response = self.execute(Method::GET, url, secret_key, None).await?;

        let mut list: PaymentList = parse_envelope(&response)?;
        list.data.iter_mut().for_each(enrich_method);
        Ok(list)
    }

    /// Cancel a pending payment (`POST /payments/{id}/cancel`).
    pub async fn cancel_payment(
        &self,
        payment_id: &str,
        secret_key: &str,
        base_url: Option<&str>,
    ) -> MonerooResult<Acknowledgement> {
        require_credential(secret_key)?;
        require_id(payment_id, "Payment ID is required")?;

        info!("Cancelling Moneroo payment: id={}", payment_id);

        let url = self.endpoint(base_url, &["payments", payment_id, "cancel"], &[])?;
        let response = self.execute(Method::POST, url, secret_key, None).await?;
        let ack = parse_acknowledgement(&response)?;

        info!("Moneroo payment cancelled: id={}", payment_id);
        Ok(ack)
    }

    /// Fetch a transaction (`GET /transactions/{id}`).
    pub async fn get_transaction(
        &self,
        transaction_id: &str,
        secret_key: &str,
        base_url: Option<&str>,
    ) -> MonerooResult<TransactionStatus> {
        require_credential(secret_key)?;
        require_id(transaction_id, "Transaction ID is required")?;

        info!("Fetching Moneroo transaction: id={}", transaction_id);

        let url = self.endpoint(base_url, &["transactions", transaction_id], &[])?;
        let response = self.execute(Method::GET, url, secret_key, None).await?;

        let mut transaction: TransactionStatus = parse_envelope(&response)?;
        enrich_method(&mut transaction.data);
        Ok(transaction)
    }

    /// List transactions (`GET /transactions`).
    pub async fn list_transactions(
        &self,
        params: &ListParams,
        secret_key: &str,
        base_url: Option<&str>,
    ) -> MonerooResult<TransactionList> {
        require_credential(secret_key)?;
        info!("Listing Moneroo transactions: {:?}", params);

        let url = self.endpoint(base_url, &["transactions"], &params.query_pairs())?;
        let response = self.execute(Method::GET, url, secret_key, None).await?;

        let mut list: TransactionList = parse_envelope(&response)?;
        list.data.iter_mut().for_each(enrich_method);
        Ok(list)
    }

    /// Create a customer (`POST /customers`). Email, first and last name are required.
    pub async fn create_customer(
        &self,
        params: &CustomerParams,
        secret_key: &str,
        base_url: Option<&str>,
    ) -> MonerooResult<CustomerResponse> {
        require_credential(secret_key)?;
        for (name, value) in [
            ("email", &params.email),
            ("first_name", &params.first_name),
            ("last_name", &params.last_name),
        ] {
            if value.as_deref().map_or(true, |v| v.trim().is_empty()) {
                return Err(MonerooError::validation(format!(
                    "Field '{}' is required to create a customer",
                    name
                )));
            }
        }

        info!("Creating Moneroo customer");

        let body = serde_json::to_value(params)
            .map_err(|e| MonerooError::validation(format!("Invalid customer payload: {}", e)))?;
        let url = self.endpoint(base_url, &["customers"], &[])?;
        let response = self
            .execute(Method::POST, url, secret_key, Some(body))
            .await?;

        let customer: CustomerResponse = parse_envelope(&response)?;
        info!("Moneroo customer created: id={}", customer.data.id);
        Ok(customer)
    }

    /// Fetch a customer (`GET /customers/{id}`).
    pub async fn get_customer(
        &self,
        customer_id: &str,
        secret_key: &str,
        base_url: Option<&str>,
    ) -> MonerooResult<CustomerResponse> {
        require_credential(secret_key)?;
        require_id(customer_id, "Customer ID is required")?;

        let url = self.endpoint(base_url, &["customers", customer_id], &[])?;
        let response = self.execute(Method::GET, url, secret_key, None).await?;
        parse_envelope(&response)
    }

    /// List customers (`GET /customers`).
    pub async fn list_customers(
        &self,
        params: &ListParams,
        secret_key: &str,
        base_url: Option<&str>,
    ) -> MonerooResult<CustomerList> {
        require_credential(secret_key)?;

        let url = self.endpoint(base_url, &["customers"], &params.query_pairs())?;
        let response = self.execute(Method::GET, url, secret_key, None).await?;
        parse_envelope(&response)
    }

    /// Update a customer (`PATCH /customers/{id}`); only the fields set in `params` are sent.
    pub async fn update_customer(
        &self,
        customer_id: &str,
        params: &CustomerParams,
        secret_key: &str,
        base_url: Option<&str>,
    ) -> MonerooResult<CustomerResponse> {
        require_credential(secret_key)?;
        require_id(customer_id, "Customer ID is required")?;
        if params.is_empty() {
            return Err(MonerooError::validation(
                "At least one customer field must be set for an update",
            ));
        }

        info!("Updating Moneroo customer: id={}", customer_id);

        let body = serde_json::to_value(params)
            .map_err(|e| MonerooError::validation(format!("Invalid customer payload: {}", e)))?;
        let url = self.endpoint(base_url, &["customers", customer_id], &[])?;
        let response = self
            .execute(Method::PATCH, url, secret_key, Some(body))
            .await?;
        parse_envelope(&response)
    }

    /// Delete a customer (`DELETE /customers/{id}`).
    pub async fn delete_customer(
        &self,
        customer_id: &str,
        secret_key: &str,
        base_url: Option<&str>,
    ) -> MonerooResult<Acknowledgement> {
        require_credential(secret_key)?;
        require_id(customer_id, "Customer ID is required")?;

        info!("Deleting Moneroo customer: id={}", customer_id);

        let url = self.endpoint(base_url, &["customers", customer_id], &[])?;
        let response = self.execute(Method::DELETE, url, secret_key, None).await?;
        parse_acknowledgement(&response)
    }

    /// Join path segments onto the base URL. Each segment is percent-encoded, so ids
    /// can never add path components or a query string.
    fn endpoint(
        &self,
        base_url: Option<&str>,
        segments: &[&str],
        query: &[(String, String)],
    ) -> MonerooResult<String> {
        let base = base_url.unwrap_or(&self.config.base_url);
        let mut url = Url::parse(base.trim_end_matches('/')).map_err(|e| {
            MonerooError::configuration(format!("Invalid base URL {}: {}", base, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                MonerooError::configuration(format!("Base URL cannot have a path: {}", base))
            })?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url.into())
    }

    /// Make an authenticated request and map non-2xx responses to [`MonerooError::Api`]
    async fn execute(
        &self,
        method: Method,
        url: String,
        secret_key: &str,
        body: Option<Value>,
    ) -> MonerooResult<TransportResponse> {
        let mut headers = vec![
            ("Authorization", format!("Bearer {}", secret_key)),
            ("Accept", "application/json".to_string()),
        ];
        if body.is_some() {
            headers.push(("Content-Type", "application/json".to_string()));
        }

        let request = TransportRequest {
            method,
            url,
            headers,
            body,
        };

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            let err = error_from_response(&response);
            error!("Moneroo API error: HTTP {}: {}", response.status, err);
            return Err(err);
        }

        Ok(response)
    }
}

/// Build the wire payload for a payment.
///
/// An explicit `method` wins over the legacy `methods` list; when neither is given the
/// `fallback` method is used. Only the explicit method is checked against the registry.
pub fn build_payment_payload(
    params: &PaymentInitParams,
    fallback: PaymentMethod,
) -> MonerooResult<PaymentPayload> {
    let explicit = match params.method.as_deref() {
        Some(code) => Some(code.parse::<PaymentMethod>()?),
        None => None,
    };

    if params.amount == 0 {
        return Err(MonerooError::validation("Amount must be a positive integer"));
    }

    let methods = match (explicit, &params.methods) {
        (Some(method), _) => vec![method.as_str().to_string()],
        (None, Some(legacy)) if !legacy.is_empty() => legacy.clone(),
        _ => vec![fallback.as_str().to_string()],
    };

    Ok(PaymentPayload {
        amount: params.amount,
        currency: params.currency.clone(),
        description: params.description.clone(),
        customer: params.customer.clone(),
        return_url: params.return_url.clone(),
        methods,
    })
}

/// Build the wire payload for a payout, checking the method's required fields in
/// registry order and stopping at the first missing one.
pub fn build_payout_payload(params: &PayoutInitParams) -> MonerooResult<PayoutPayload> {
    let method: PayoutMethod = params.method.parse()?;

    for field in method.required_fields() {
        if params.field(*field).is_none() {
            return Err(MonerooError::validation(format!(
                "Field '{}' is required for payout method '{}'",
                field, method
            )));
        }
    }

    if params.amount == 0 {
        return Err(MonerooError::validation("Amount must be a positive integer"));
    }

    let present = |value: &Option<String>| value.clone().filter(|v| !v.trim().is_empty());

    Ok(PayoutPayload {
        amount: params.amount,
        currency: params.currency.clone(),
        description: params.description.clone(),
        customer: params.customer.clone(),
        method: method.as_str().to_string(),
        metadata: params.metadata.clone().unwrap_or_default(),
        msisdn: present(&params.msisdn),
        phone: present(&params.phone),
        account_number: present(&params.account_number),
    })
}

fn require_credential(secret_key: &str) -> MonerooResult<()> {
    if secret_key.trim().is_empty() {
        return Err(MonerooError::configuration(
            "A Moneroo API key is required",
        ));
    }
    Ok(())
}

fn require_id(id: &str, message: &str) -> MonerooResult<()> {
    if id.trim().is_empty() {
        return Err(MonerooError::validation(message));
    }
    Ok(())
}

// Envelope with an untyped `data`, used where fields are checked before decoding
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Value>,
}

impl RawEnvelope {
    fn error_body(&self) -> Option<ApiErrorBody> {
        match &self.errors {
            Some(value @ Value::Object(_)) => serde_json::from_value(value.clone()).ok(),
            _ => None,
        }
    }
}

fn parse_body<B: DeserializeOwned>(response: &TransportResponse) -> MonerooResult<B> {
    response.json().map_err(|e| {
        error!("Failed to parse Moneroo response: {}", e);
        MonerooError::response_shape(format!("Invalid response format: {}", e))
    })
}

fn parse_envelope<D: DeserializeOwned>(
    response: &TransportResponse,
) -> MonerooResult<ApiResponse<D>> {
    let envelope: RawEnvelope = parse_body(response)?;
    let errors = envelope.error_body();
    let data = match envelope.data {
        Some(data) if !data.is_null() => decode_data(data)?,
        _ => return Err(MonerooError::response_shape("data is missing in response!")),
    };

    Ok(ApiResponse {
        message: envelope.message.unwrap_or_default(),
        data,
        errors,
    })
}

// Cancellation and deletion may answer with `data: null`
fn parse_acknowledgement(response: &TransportResponse) -> MonerooResult<Acknowledgement> {
    let envelope: RawEnvelope = parse_body(response)?;
    let errors = envelope.error_body();

    Ok(ApiResponse {
        message: envelope.message.unwrap_or_default(),
        data: envelope.data.unwrap_or(Value::Null),
        errors,
    })
}

fn decode_data<D: DeserializeOwned>(data: Value) -> MonerooResult<D> {
    serde_json::from_value(data).map_err(|e| {
        error!("Unexpected Moneroo response data: {}", e);
        MonerooError::response_shape(format!("Invalid response format: {}", e))
    })
}

/// Copy the raw method code into its typed form. Unknown codes are kept, not rejected.
fn enrich_method(data: &mut TransactionData) {
    data.method = data.payment_method.as_deref().map(|code| {
        let method = MethodCode::from_code(code);
        if let MethodCode::Unrecognized(code) = &method {
            warn!(
                "Transaction {} uses a payment method missing from the registry: {}",
                data.id, code
            );
        }
        method
    });
}

/// Map a non-2xx response to an API error, preferring the provider's message.
fn error_from_response(response: &TransportResponse) -> MonerooError {
    let fallback = format!("HTTP Error: {}", response.status);

    match response.json::<RawEnvelope>() {
        Ok(envelope) => {
            let errors = envelope.error_body();
            let message = envelope
                .message
                .filter(|m| !m.is_empty())
                .or_else(|| errors.as_ref().and_then(|e| e.message.clone()))
                .unwrap_or(fallback);
            MonerooError::api(response.status, message, errors)
        }
        Err(_) => MonerooError::api(response.status, fallback, None),
    }
}
