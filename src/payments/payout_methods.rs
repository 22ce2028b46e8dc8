//! Payout method registry
//!
//! Channels Moneroo can send money to, together with the recipient fields each one
//! requires in the payout submission.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MonerooError;

/// Payout channel, serialized as its provider code (`"wave_sn"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutMethod {
    MtnBj,
    MoovBj,
    OrangeSn,
    OrangeCi,
    OrangeMl,
    EMoneySn,
    WaveSn,
    WaveCi,
    FreemoneySn,
    MtnCi,
    MoovCi,
    /// T-Money Togo
    Togocel,
    DjamoCi,
    DjamoSn,
    MonerooPayoutDemo,
}

/// Recipient identifier a payout method may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutField {
    /// Mobile money number in international format, without `+`
    Msisdn,
    Phone,
    AccountNumber,
}

impl PayoutField {
    /// Wire name of the field in the payout payload.
    pub fn as_str(self) -> &'static str {
        match self {
            PayoutField::Msisdn => "msisdn",
            PayoutField::Phone => "phone",
            PayoutField::AccountNumber => "account_number",
        }
    }
}

impl fmt::Display for PayoutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayoutMethodDetails {
    pub name: &'static str,
    pub code: PayoutMethod,
    pub currency: &'static str,
    pub countries: &'static [&'static str],
    /// Fields that must be present in the submission, in validation order
    pub required_fields: &'static [PayoutField],
}

impl PayoutMethod {
    pub const ALL: [PayoutMethod; 15] = [
        PayoutMethod::MtnBj,
        PayoutMethod::MoovBj,
        PayoutMethod::OrangeSn,
        PayoutMethod::OrangeCi,
        PayoutMethod::OrangeMl,
        PayoutMethod::EMoneySn,
        PayoutMethod::WaveSn,
        PayoutMethod::WaveCi,
        PayoutMethod::FreemoneySn,
        PayoutMethod::MtnCi,
        PayoutMethod::MoovCi,
        PayoutMethod::Togocel,
        PayoutMethod::DjamoCi,
        PayoutMethod::DjamoSn,
        PayoutMethod::MonerooPayoutDemo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PayoutMethod::MtnBj => "mtn_bj",
            PayoutMethod::MoovBj => "moov_bj",
            PayoutMethod::OrangeSn => "orange_sn",
            PayoutMethod::OrangeCi => "orange_ci",
            PayoutMethod::OrangeMl => "orange_ml",
            PayoutMethod::EMoneySn => "e_money_sn",
            PayoutMethod::WaveSn => "wave_sn",
            PayoutMethod::WaveCi => "wave_ci",
            PayoutMethod::FreemoneySn => "freemoney_sn",
            PayoutMethod::MtnCi => "mtn_ci",
            PayoutMethod::MoovCi => "moov_ci",
            PayoutMethod::Togocel => "togocel",
            PayoutMethod::DjamoCi => "djamo_ci",
            PayoutMethod::DjamoSn => "djamo_sn",
            PayoutMethod::MonerooPayoutDemo => "moneroo_payout_demo",
        }
    }

    pub fn details(self) -> &'static PayoutMethodDetails {
        &PAYOUT_METHODS[self as usize]
    }

    pub fn required_fields(self) -> &'static [PayoutField] {
        self.details().required_fields
    }
}

impl fmt::Display for PayoutMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoutMethod {
    type Err = MonerooError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        PayoutMethod::ALL
            .iter()
            .copied()
            .find(|method| method.as_str() == code)
            .ok_or_else(|| MonerooError::validation(format!("Invalid payout method: {}", code)))
    }
}

const MSISDN: &[PayoutField] = &[PayoutField::Msisdn];

static PAYOUT_METHODS: [PayoutMethodDetails; 15] = [
    PayoutMethodDetails {
        name: "MTN Mobile Money Benin",
        code: PayoutMethod::MtnBj,
        currency: "XOF",
        countries: &["BJ"],
        required_fields: MSISDN,
    },
    PayoutMethodDetails {
        name: "Moov Money Benin",
        code: PayoutMethod::MoovBj,
        currency: "XOF",
        countries: &["BJ"],
        required_fields: MSISDN,
    },
    PayoutMethodDetails {
        name: "Orange Money Senegal",
        code: PayoutMethod::OrangeSn,
        currency: "XOF",
        countries: &["SN"],
        required_fields: MSISDN,
    },
    PayoutMethodDetails {
        name: "Orange Money Ivory Coast",
        code: PayoutMethod::OrangeCi,
        currency: "XOF",
        countries: &["CI"],
        required_fields: MSISDN,
    },
    PayoutMethodDetails {
        name: "Orange Money Mali",
        code: PayoutMethod::OrangeMl,
        currency: "XOF",
        countries: &["ML"],
        required_fields: MSISDN,
    },
    PayoutMethodDetails {
        name: "E-money Senegal",
        code: PayoutMethod::EMoneySn,
        currency: "XOF",
        countries: &["SN"],
        required_fields: MSISDN,
    },
    PayoutMethodDetails {
        name: "Wave Senegal",
        code: PayoutMethod::WaveSn,
        currency: "XOF",
        countries: &["SN"],
        required_fields: MSISDN,
    },
    PayoutMethodDetails {
        name: "Wave Ivory Coast",
        code: PayoutMethod::WaveCi,
        currency: "XOF",
        countries: &["CI"],
        required_fields: MSISDN,
    },
    PayoutMethodDetails {
        name: "Free Money Senegal",
        code: PayoutMethod::FreemoneySn,
        currency: "XOF",
        countries: &["SN"],
        required_fields: MSISDN,
    },
    PayoutMethodDetails {
        name: "MTN MoMo Ivory Coast",
        code: PayoutMethod::MtnCi,
        currency: "XOF",
        countries: &["CI"],
        required_fields: MSISDN,
    },
    PayoutMethodDetails {
        name: "Moov Money Ivory Coast",
        code: PayoutMethod::MoovCi,
        currency: "XOF",
        countries: &["CI"],
        required_fields: MSISDN,
    },
    PayoutMethodDetails {
        name: "T-Money",
        code: PayoutMethod::Togocel,
        currency: "XOF",
        countries: &["TG"],
        required_fields: MSISDN,
    },
    PayoutMethodDetails {
        name: "Djamo Ivory Coast",
        code: PayoutMethod::DjamoCi,
        currency: "XOF",
        countries: &["CI"],
        required_fields: MSISDN,
    },
    PayoutMethodDetails {
        name: "Djamo Senegal",
        code: PayoutMethod::DjamoSn,
        currency: "XOF",
        countries: &["SN"],
        required_fields: MSISDN,
    },
    PayoutMethodDetails {
        name: "Moneroo Demo Transfer",
        code: PayoutMethod::MonerooPayoutDemo,
        currency: "XOF",
        countries: &["US"],
        required_fields: &[PayoutField::AccountNumber],
    },
];

pub fn get_details(code: &str) -> Option<&'static PayoutMethodDetails> {
    code.parse::<PayoutMethod>().ok().map(PayoutMethod::details)
}

pub fn all() -> &'static [PayoutMethodDetails] {
    &PAYOUT_METHODS
}

pub fn by_country(country_code: &str) -> Vec<&'static PayoutMethodDetails> {
    let country_code = country_code.trim();
    PAYOUT_METHODS
        .iter()
        .filter(|details| {
            details
                .countries
                .iter()
                .any(|country| country.eq_ignore_ascii_case(country_code))
        })
        .collect()
}

pub fn by_currency(currency: &str) -> Vec<&'static PayoutMethodDetails> {
    let currency = currency.trim();
    PAYOUT_METHODS
        .iter()
        .filter(|details| details.currency.eq_ignore_ascii_case(currency))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_total() {
        assert_eq!(all().len(), PayoutMethod::ALL.len());
        for method in PayoutMethod::ALL {
            assert_eq!(method.details().code, method);
            assert_eq!(method.as_str().parse::<PayoutMethod>().unwrap(), method);
            assert_eq!(
                serde_json::to_value(method).unwrap(),
                serde_json::json!(method.as_str())
            );
            assert!(!method.required_fields().is_empty());
        }
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(PayoutMethod::MtnBj.required_fields(), &[PayoutField::Msisdn]);
        assert_eq!(
            PayoutMethod::MonerooPayoutDemo.required_fields(),
            &[PayoutField::AccountNumber]
        );
        assert_eq!(PayoutField::AccountNumber.to_string(), "account_number");
    }

    #[test]
    fn test_lookups() {
        let senegal = by_country("sn");
        assert_eq!(senegal.len(), 5);
        assert!(senegal.iter().all(|d| d.countries.contains(&"SN")));

        assert_eq!(by_currency("xof").len(), PayoutMethod::ALL.len());
        assert!(by_currency("NGN").is_empty());
        assert!(by_country("NG").is_empty());

        assert_eq!(get_details("togocel").unwrap().name, "T-Money");
        assert!(get_details("airtel_ng").is_none());
    }

    #[test]
    fn test_invalid_payout_method() {
        let err = "card_xof".parse::<PayoutMethod>().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Invalid payout method: card_xof");
    }
}
