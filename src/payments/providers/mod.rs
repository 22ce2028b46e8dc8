//! Payment provider implementations

pub mod moneroo;

pub use moneroo::{build_payment_payload, build_payout_payload, MonerooClient};
