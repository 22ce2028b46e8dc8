//! Moneroo payment integration module
//!
//! Method registries, request/response types, the HTTP transport seam and the
//! [`providers::MonerooClient`] that ties them together for mobile money collections
//! and payouts in West and Central African markets.

pub mod http;
pub mod methods;
pub mod payout_methods;
pub mod providers;
pub mod traits;
pub mod types;
pub mod webhook;
