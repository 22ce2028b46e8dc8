//! Client for the Moneroo payment API
//!
//! Moneroo aggregates mobile money, card and bank channels across Africa behind one
//! API. This crate validates payment and payout requests against the known method
//! registries, sends them with bearer authentication and normalizes the responses.
//!
//! ```no_run
//! use moneroo::{ClientConfig, Customer, MonerooClient, PaymentInitParams, PaymentMethod};
//!
//! # async fn run() -> moneroo::MonerooResult<()> {
//! let client = MonerooClient::new(ClientConfig::default())?;
//! let params = PaymentInitParams::new(
//!     1000,
//!     "XOF",
//!     "Order #42",
//!     Customer::new("jane@example.com", "Jane", "Doe"),
//!     "https://shop.example.com/return",
//! )
//! .with_method(PaymentMethod::MtnBj);
//!
//! let payment = client.initiate_payment(&params, "sk_test_key", None).await?;
//! println!("redirect to {}", payment.data.checkout_url);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod payments;

pub use config::ClientConfig;
pub use error::{ApiErrorBody, MonerooError, MonerooResult};
pub use payments::http::ReqwestTransport;
pub use payments::methods::{PaymentMethod, PaymentMethodDetails, DEFAULT_PAYMENT_METHOD};
pub use payments::payout_methods::{PayoutField, PayoutMethod, PayoutMethodDetails};
pub use payments::providers::MonerooClient;
pub use payments::traits::{HttpTransport, TransportRequest, TransportResponse};
pub use payments::types::{
    Acknowledgement, Customer, CustomerParams, ListParams, PaymentInitParams, PaymentResponse,
    PayoutInitParams, PayoutResponse, PayoutStatus, ProviderStatus, TransactionStatus,
};
pub use payments::webhook::{parse_event, verify_signature, WebhookEvent, WebhookEventKind};
