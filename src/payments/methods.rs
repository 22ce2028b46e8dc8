//! Payment method registry
//!
//! Static capability table for every payment channel Moneroo accepts, with lookups by
//! code, country and currency. The table is immutable and indexed by [`PaymentMethod`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MonerooError;

/// Method used when a payment request names neither an explicit method nor a methods list.
pub const DEFAULT_PAYMENT_METHOD: PaymentMethod = PaymentMethod::MtnBj;

/// Payment channel accepted by Moneroo, serialized as its provider code (`"mtn_bj"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    AirtelCd,
    AirtelMw,
    AirtelNe,
    AirtelNg,
    AirtelRw,
    AirtelTz,
    AirtelUg,
    AirtelZm,
    BankTransferNg,
    Barter,
    CardGhs,
    CardKes,
    CardNgn,
    CardTzs,
    CardUgx,
    CardUsd,
    CardXaf,
    CardXof,
    CardZar,
    CryptoEur,
    CryptoGhs,
    CryptoNgn,
    CryptoUsd,
    CryptoXaf,
    CryptoXof,
    EMoneySn,
    EuMobileCm,
    FreemoneySn,
    HalopesaTz,
    MobiCashMl,
    MonerooPaymentDemo,
    MoovBf,
    MoovBj,
    MoovCi,
    MoovMl,
    MoovTg,
    MpesaKe,
    MpesaTz,
    MtnBj,
    MtnCi,
    MtnCm,
    MtnGh,
    MtnGn,
    MtnNg,
    MtnRw,
    MtnUg,
    MtnZm,
    OrangeBf,
    OrangeCd,
    OrangeCi,
    OrangeCm,
    OrangeGn,
    OrangeMl,
    OrangeSn,
    QrNgn,
    TigoGh,
    TigoTz,
    TnmMw,
    Togocel,
    UssdNgn,
    VodacomCd,
    VodafoneGh,
    WaveCi,
    WaveSn,
    WizallSn,
    ZamtelZm,
}

/// Display and coverage metadata for a payment method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentMethodDetails {
    /// Display name
    pub name: &'static str,
    pub code: PaymentMethod,
    /// ISO 4217 currency code
    pub currency: &'static str,
    /// ISO 3166-1 alpha-2 country codes where the method is available
    pub countries: &'static [&'static str],
}

impl PaymentMethod {
    /// Every payment method, in registry order.
    pub const ALL: [PaymentMethod; 66] = [
        PaymentMethod::AirtelCd,
        PaymentMethod::AirtelMw,
        PaymentMethod::AirtelNe,
        PaymentMethod::AirtelNg,
        PaymentMethod::AirtelRw,
        PaymentMethod::AirtelTz,
        PaymentMethod::AirtelUg,
        PaymentMethod::AirtelZm,
        PaymentMethod::BankTransferNg,
        PaymentMethod::Barter,
        PaymentMethod::CardGhs,
        PaymentMethod::CardKes,
        PaymentMethod::CardNgn,
        PaymentMethod::CardTzs,
        PaymentMethod::CardUgx,
        PaymentMethod::CardUsd,
        PaymentMethod::CardXaf,
        PaymentMethod::CardXof,
        PaymentMethod::CardZar,
        PaymentMethod::CryptoEur,
        PaymentMethod::CryptoGhs,
        PaymentMethod::CryptoNgn,
        PaymentMethod::CryptoUsd,
        PaymentMethod::CryptoXaf,
        PaymentMethod::CryptoXof,
        PaymentMethod::EMoneySn,
        PaymentMethod::EuMobileCm,
        PaymentMethod::FreemoneySn,
        PaymentMethod::HalopesaTz,
        PaymentMethod::MobiCashMl,
        PaymentMethod::MonerooPaymentDemo,
        PaymentMethod::MoovBf,
        PaymentMethod::MoovBj,
        PaymentMethod::MoovCi,
        PaymentMethod::MoovMl,
        PaymentMethod::MoovTg,
        PaymentMethod::MpesaKe,
        PaymentMethod::MpesaTz,
        PaymentMethod::MtnBj,
        PaymentMethod::MtnCi,
        PaymentMethod::MtnCm,
        PaymentMethod::MtnGh,
        PaymentMethod::MtnGn,
        PaymentMethod::MtnNg,
        PaymentMethod::MtnRw,
        PaymentMethod::MtnUg,
        PaymentMethod::MtnZm,
        PaymentMethod::OrangeBf,
        PaymentMethod::OrangeCd,
        PaymentMethod::OrangeCi,
        PaymentMethod::OrangeCm,
        PaymentMethod::OrangeGn,
        PaymentMethod::OrangeMl,
        PaymentMethod::OrangeSn,
        PaymentMethod::QrNgn,
        PaymentMethod::TigoGh,
        PaymentMethod::TigoTz,
        PaymentMethod::TnmMw,
        PaymentMethod::Togocel,
        PaymentMethod::UssdNgn,
        PaymentMethod::VodacomCd,
        PaymentMethod::VodafoneGh,
        PaymentMethod::WaveCi,
        PaymentMethod::WaveSn,
        PaymentMethod::WizallSn,
        PaymentMethod::ZamtelZm,
    ];

    /// Provider code for this method.
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::AirtelCd => "airtel_cd",
            PaymentMethod::AirtelMw => "airtel_mw",
            PaymentMethod::AirtelNe => "airtel_ne",
            PaymentMethod::AirtelNg => "airtel_ng",
            PaymentMethod::AirtelRw => "airtel_rw",
            PaymentMethod::AirtelTz => "airtel_tz",
            PaymentMethod::AirtelUg => "airtel_ug",
            PaymentMethod::AirtelZm => "airtel_zm",
            PaymentMethod::BankTransferNg => "bank_transfer_ng",
            PaymentMethod::Barter => "barter",
            PaymentMethod::CardGhs => "card_ghs",
            PaymentMethod::CardKes => "card_kes",
            PaymentMethod::CardNgn => "card_ngn",
            PaymentMethod::CardTzs => "card_tzs",
            PaymentMethod::CardUgx => "card_ugx",
            PaymentMethod::CardUsd => "card_usd",
            PaymentMethod::CardXaf => "card_xaf",
            PaymentMethod::CardXof => "card_xof",
            PaymentMethod::CardZar => "card_zar",
            PaymentMethod::CryptoEur => "crypto_eur",
            PaymentMethod::CryptoGhs => "crypto_ghs",
            PaymentMethod::CryptoNgn => "crypto_ngn",
            PaymentMethod::CryptoUsd => "crypto_usd",
            PaymentMethod::CryptoXaf => "crypto_xaf",
            PaymentMethod::CryptoXof => "crypto_xof",
            PaymentMethod::EMoneySn => "e_money_sn",
            PaymentMethod::EuMobileCm => "eu_mobile_cm",
            PaymentMethod::FreemoneySn => "freemoney_sn",
            PaymentMethod::HalopesaTz => "halopesa_tz",
            PaymentMethod::MobiCashMl => "mobi_cash_ml",
            PaymentMethod::MonerooPaymentDemo => "moneroo_payment_demo",
            PaymentMethod::MoovBf => "moov_bf",
            PaymentMethod::MoovBj => "moov_bj",
            PaymentMethod::MoovCi => "moov_ci",
            PaymentMethod::MoovMl => "moov_ml",
            PaymentMethod::MoovTg => "moov_tg",
            PaymentMethod::MpesaKe => "mpesa_ke",
            PaymentMethod::MpesaTz => "mpesa_tz",
            PaymentMethod::MtnBj => "mtn_bj",
            PaymentMethod::MtnCi => "mtn_ci",
            PaymentMethod::MtnCm => "mtn_cm",
            PaymentMethod::MtnGh => "mtn_gh",
            PaymentMethod::MtnGn => "mtn_gn",
            PaymentMethod::MtnNg => "mtn_ng",
            PaymentMethod::MtnRw => "mtn_rw",
            PaymentMethod::MtnUg => "mtn_ug",
            PaymentMethod::MtnZm => "mtn_zm",
            PaymentMethod::OrangeBf => "orange_bf",
            PaymentMethod::OrangeCd => "orange_cd",
            PaymentMethod::OrangeCi => "orange_ci",
            PaymentMethod::OrangeCm => "orange_cm",
            PaymentMethod::OrangeGn => "orange_gn",
            PaymentMethod::OrangeMl => "orange_ml",
            PaymentMethod::OrangeSn => "orange_sn",
            PaymentMethod::QrNgn => "qr_ngn",
            PaymentMethod::TigoGh => "tigo_gh",
            PaymentMethod::TigoTz => "tigo_tz",
            PaymentMethod::TnmMw => "tnm_mw",
            PaymentMethod::Togocel => "togocel",
            PaymentMethod::UssdNgn => "ussd_ngn",
            PaymentMethod::VodacomCd => "vodacom_cd",
            PaymentMethod::VodafoneGh => "vodafone_gh",
            PaymentMethod::WaveCi => "wave_ci",
            PaymentMethod::WaveSn => "wave_sn",
            PaymentMethod::WizallSn => "wizall_sn",
            PaymentMethod::ZamtelZm => "zamtel_zm",
        }
    }

    pub fn details(self) -> &'static PaymentMethodDetails {
        // Table rows are declared in variant order.
        &PAYMENT_METHODS[self as usize]
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = MonerooError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .iter()
            .copied()
            .find(|method| method.as_str() == code)
            .ok_or_else(|| MonerooError::validation(format!("Invalid payment method: {}", code)))
    }
}

impl PaymentMethodDetails {
    pub fn is_available_in(&self, country_code: &str) -> bool {
        self.countries
            .iter()
            .any(|country| country.eq_ignore_ascii_case(country_code.trim()))
    }
}

static PAYMENT_METHODS: [PaymentMethodDetails; 66] = [
    PaymentMethodDetails {
        name: "Airtel Congo",
        code: PaymentMethod::AirtelCd,
        currency: "CDF",
        countries: &["CD"],
    },
    PaymentMethodDetails {
        name: "Airtel Money Malawi",
        code: PaymentMethod::AirtelMw,
        currency: "MWK",
        countries: &["MW"],
    },
    PaymentMethodDetails {
        name: "Airtel Niger",
        code: PaymentMethod::AirtelNe,
        currency: "XOF",
        countries: &["NE"],
    },
    PaymentMethodDetails {
        name: "Airtel Nigeria",
        code: PaymentMethod::AirtelNg,
        currency: "NGN",
        countries: &["NG"],
    },
    PaymentMethodDetails {
        name: "Airtel Rwanda",
        code: PaymentMethod::AirtelRw,
        currency: "RWF",
        countries: &["RW"],
    },
    PaymentMethodDetails {
        name: "Airtel Tanzania",
        code: PaymentMethod::AirtelTz,
        currency: "TZS",
        countries: &["TZ"],
    },
    PaymentMethodDetails {
        name: "Airtel Uganda",
        code: PaymentMethod::AirtelUg,
        currency: "UGX",
        countries: &["UG"],
    },
    PaymentMethodDetails {
        name: "Airtel Zambia",
        code: PaymentMethod::AirtelZm,
        currency: "ZMW",
        countries: &["ZM"],
    },
    PaymentMethodDetails {
        name: "Bank Transfer Nigeria",
        code: PaymentMethod::BankTransferNg,
        currency: "NGN",
        countries: &["NG"],
    },
    PaymentMethodDetails {
        name: "Barter",
        code: PaymentMethod::Barter,
        currency: "NGN",
        countries: &["NG"],
    },
    PaymentMethodDetails {
        name: "Card Ghana",
        code: PaymentMethod::CardGhs,
        currency: "GHS",
        countries: &["GH"],
    },
    PaymentMethodDetails {
        name: "Card Kenya",
        code: PaymentMethod::CardKes,
        currency: "KES",
        countries: &["KE"],
    },
    PaymentMethodDetails {
        name: "Card Nigeria",
        code: PaymentMethod::CardNgn,
        currency: "NGN",
        countries: &["NG"],
    },
    PaymentMethodDetails {
        name: "Card Tanzania",
        code: PaymentMethod::CardTzs,
        currency: "TZS",
        countries: &["TZ"],
    },
    PaymentMethodDetails {
        name: "Card Uganda",
        code: PaymentMethod::CardUgx,
        currency: "UGX",
        countries: &["UG"],
    },
    PaymentMethodDetails {
        name: "Card USD",
        code: PaymentMethod::CardUsd,
        currency: "USD",
        countries: &["US"],
    },
    PaymentMethodDetails {
        name: "Card XAF",
        code: PaymentMethod::CardXaf,
        currency: "XAF",
        countries: &["CM", "CF", "CG", "GA", "GQ", "TD"],
    },
    PaymentMethodDetails {
        name: "Card XOF",
        code: PaymentMethod::CardXof,
        currency: "XOF",
        countries: &["CI", "BF", "TG", "BJ", "ML"],
    },
    PaymentMethodDetails {
        name: "Card South Africa",
        code: PaymentMethod::CardZar,
        currency: "ZAR",
        countries: &["ZA"],
    },
    PaymentMethodDetails {
        name: "Crypto EUR",
        code: PaymentMethod::CryptoEur,
        currency: "EUR",
        countries: &[
            "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "ES", "FI", "FR", "GR", "HR", "HU",
            "IE", "IT", "LT", "LU", "LV", "MT", "NL", "PL", "PT", "RO", "SE", "SI", "SK",
        ],
    },
    PaymentMethodDetails {
        name: "Crypto Ghana",
        code: PaymentMethod::CryptoGhs,
        currency: "GHS",
        countries: &["GH"],
    },
    PaymentMethodDetails {
        name: "Crypto Nigeria",
        code: PaymentMethod::CryptoNgn,
        currency: "NGN",
        countries: &["NG"],
    },
    PaymentMethodDetails {
        name: "Crypto USD",
        code: PaymentMethod::CryptoUsd,
        currency: "USD",
        countries: &["US"],
    },
    PaymentMethodDetails {
        name: "Crypto XAF",
        code: PaymentMethod::CryptoXaf,
        currency: "XAF",
        countries: &["CM", "CF", "CG", "GA", "GQ", "TD"],
    },
    PaymentMethodDetails {
        name: "Crypto XOF",
        code: PaymentMethod::CryptoXof,
        currency: "XOF",
        countries: &["BJ", "BF", "CI", "GW", "ML", "NE", "SN", "TG"],
    },
    PaymentMethodDetails {
        name: "E-Money Senegal",
        code: PaymentMethod::EMoneySn,
        currency: "XOF",
        countries: &["SN"],
    },
    PaymentMethodDetails {
        name: "EU Mobile Cameroon",
        code: PaymentMethod::EuMobileCm,
        currency: "XAF",
        countries: &["CM"],
    },
    PaymentMethodDetails {
        name: "Free Money Senegal",
        code: PaymentMethod::FreemoneySn,
        currency: "XOF",
        countries: &["SN"],
    },
    PaymentMethodDetails {
        name: "Halopesa Tanzania",
        code: PaymentMethod::HalopesaTz,
        currency: "TZS",
        countries: &["TZ"],
    },
    PaymentMethodDetails {
        name: "Mobi Cash Mali",
        code: PaymentMethod::MobiCashMl,
        currency: "XOF",
        countries: &["ML"],
    },
    PaymentMethodDetails {
        name: "Moneroo Demo",
        code: PaymentMethod::MonerooPaymentDemo,
        currency: "USD",
        countries: &["US"],
    },
    PaymentMethodDetails {
        name: "Moov Burkina Faso",
        code: PaymentMethod::MoovBf,
        currency: "XOF",
        countries: &["BF"],
    },
    PaymentMethodDetails {
        name: "Moov Benin",
        code: PaymentMethod::MoovBj,
        currency: "XOF",
        countries: &["BJ"],
    },
    PaymentMethodDetails {
        name: "Moov Cote d'Ivoire",
        code: PaymentMethod::MoovCi,
        currency: "XOF",
        countries: &["CI"],
    },
    PaymentMethodDetails {
        name: "Moov Mali",
        code: PaymentMethod::MoovMl,
        currency: "XOF",
        countries: &["ML"],
    },
    PaymentMethodDetails {
        name: "Moov Togo",
        code: PaymentMethod::MoovTg,
        currency: "XOF",
        countries: &["TG"],
    },
    PaymentMethodDetails {
        name: "M-Pesa Kenya",
        code: PaymentMethod::MpesaKe,
        currency: "KES",
        countries: &["KE"],
    },
    PaymentMethodDetails {
        name: "M-Pesa Tanzania",
        code: PaymentMethod::MpesaTz,
        currency: "TZS",
        countries: &["TZ"],
    },
    PaymentMethodDetails {
        name: "MTN MoMo Benin",
        code: PaymentMethod::MtnBj,
        currency: "XOF",
        countries: &["BJ"],
    },
    PaymentMethodDetails {
        name: "MTN MoMo Cote d'Ivoire",
        code: PaymentMethod::MtnCi,
        currency: "XOF",
        countries: &["CI"],
    },
    PaymentMethodDetails {
        name: "MTN Mobile Money Cameroon",
        code: PaymentMethod::MtnCm,
        currency: "XAF",
        countries: &["CM"],
    },
    PaymentMethodDetails {
        name: "MTN Mobile Money Ghana",
        code: PaymentMethod::MtnGh,
        currency: "GHS",
        countries: &["GH"],
    },
    PaymentMethodDetails {
        name: "MTN Mobile Money Guinea",
        code: PaymentMethod::MtnGn,
        currency: "GNF",
        countries: &["GN"],
    },
    PaymentMethodDetails {
        name: "MTN Mobile Money Nigeria",
        code: PaymentMethod::MtnNg,
        currency: "NGN",
        countries: &["NG"],
    },
    PaymentMethodDetails {
        name: "MTN Mobile Money Rwanda",
        code: PaymentMethod::MtnRw,
        currency: "RWF",
        countries: &["RW"],
    },
    PaymentMethodDetails {
        name: "MTN Mobile Money Uganda",
        code: PaymentMethod::MtnUg,
        currency: "UGX",
        countries: &["UG"],
    },
    PaymentMethodDetails {
        name: "MTN Mobile Money Zambia",
        code: PaymentMethod::MtnZm,
        currency: "ZMW",
        countries: &["ZM"],
    },
    PaymentMethodDetails {
        name: "Orange Burkina Faso",
        code: PaymentMethod::OrangeBf,
        currency: "XOF",
        countries: &["BF"],
    },
    PaymentMethodDetails {
        name: "Orange Congo",
        code: PaymentMethod::OrangeCd,
        currency: "CDF",
        countries: &["CD"],
    },
    PaymentMethodDetails {
        name: "Orange Cote d'Ivoire",
        code: PaymentMethod::OrangeCi,
        currency: "XOF",
        countries: &["CI"],
    },
    PaymentMethodDetails {
        name: "Orange Cameroon",
        code: PaymentMethod::OrangeCm,
        currency: "XAF",
        countries: &["CM"],
    },
    PaymentMethodDetails {
        name: "Orange Guinea",
        code: PaymentMethod::OrangeGn,
        currency: "GNF",
        countries: &["GN"],
    },
    PaymentMethodDetails {
        name: "Orange Mali",
        code: PaymentMethod::OrangeMl,
        currency: "XOF",
        countries: &["ML"],
    },
    PaymentMethodDetails {
        name: "Orange Senegal",
        code: PaymentMethod::OrangeSn,
        currency: "XOF",
        countries: &["SN"],
    },
    PaymentMethodDetails {
        name: "QR Code Nigeria",
        code: PaymentMethod::QrNgn,
        currency: "NGN",
        countries: &["NG"],
    },
    PaymentMethodDetails {
        name: "Tigo Ghana",
        code: PaymentMethod::TigoGh,
        currency: "GHS",
        countries: &["GH"],
    },
    PaymentMethodDetails {
        name: "Tigo Tanzania",
        code: PaymentMethod::TigoTz,
        currency: "TZS",
        countries: &["TZ"],
    },
    PaymentMethodDetails {
        name: "TNM Mpamba Malawi",
        code: PaymentMethod::TnmMw,
        currency: "MWK",
        countries: &["MW"],
    },
    PaymentMethodDetails {
        name: "Togocel",
        code: PaymentMethod::Togocel,
        currency: "XOF",
        countries: &["TG"],
    },
    PaymentMethodDetails {
        name: "USSD Nigeria",
        code: PaymentMethod::UssdNgn,
        currency: "NGN",
        countries: &["NG"],
    },
    PaymentMethodDetails {
        name: "Vodacom Congo",
        code: PaymentMethod::VodacomCd,
        currency: "CDF",
        countries: &["CD"],
    },
    PaymentMethodDetails {
        name: "Vodafone Ghana",
        code: PaymentMethod::VodafoneGh,
        currency: "GHS",
        countries: &["GH"],
    },
    PaymentMethodDetails {
        name: "Wave Cote d'Ivoire",
        code: PaymentMethod::WaveCi,
        currency: "XOF",
        countries: &["CI"],
    },
    PaymentMethodDetails {
        name: "Wave Senegal",
        code: PaymentMethod::WaveSn,
        currency: "XOF",
        countries: &["SN"],
    },
    PaymentMethodDetails {
        name: "Wizall Senegal",
        code: PaymentMethod::WizallSn,
        currency: "XOF",
        countries: &["SN"],
    },
    PaymentMethodDetails {
        name: "Zamtel Zambia",
        code: PaymentMethod::ZamtelZm,
        currency: "ZMW",
        countries: &["ZM"],
    },
];

/// Details for a raw provider code, or `None` if the code is not registered.
pub fn get_details(code: &str) -> Option<&'static PaymentMethodDetails> {
    code.parse::<PaymentMethod>().ok().map(PaymentMethod::details)
}

pub fn all() -> &'static [PaymentMethodDetails] {
    &PAYMENT_METHODS
}

/// Methods available in a country (case-insensitive). Unknown countries yield an empty list.
pub fn by_country(country_code: &str) -> Vec<&'static PaymentMethodDetails> {
    PAYMENT_METHODS
        .iter()
        .filter(|details| details.is_available_in(country_code))
        .collect()
}

/// Methods settled in a currency (case-insensitive exact match).
pub fn by_currency(currency: &str) -> Vec<&'static PaymentMethodDetails> {
    let currency = currency.trim();
    PAYMENT_METHODS
        .iter()
        .filter(|details| details.currency.eq_ignore_ascii_case(currency))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_total_and_self_consistent() {
        assert_eq!(all().len(), PaymentMethod::ALL.len());
        for method in PaymentMethod::ALL {
            assert_eq!(method.details().code, method, "row out of order for {}", method);
        }
    }

    #[test]
    fn test_codes_round_trip_through_serde() {
        for method in PaymentMethod::ALL {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.as_str()));
            assert_eq!(method.as_str().parse::<PaymentMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_get_details() {
        let mtn = get_details("mtn_bj").unwrap();
        assert_eq!(mtn.name, "MTN MoMo Benin");
        assert_eq!(mtn.currency, "XOF");
        assert_eq!(mtn.countries, &["BJ"]);

        assert_eq!(get_details("freemoney_sn").unwrap().code, PaymentMethod::FreemoneySn);
        assert!(get_details("not_a_method").is_none());
        assert!(get_details("MTN_BJ").is_none());
    }

    #[test]
    fn test_invalid_code_is_a_validation_error() {
        let err = "not_a_method".parse::<PaymentMethod>().unwrap_err();
        assert!(matches!(err, MonerooError::Validation { .. }));
        assert!(err.to_string().contains("not_a_method"));
    }

    #[test]
    fn test_by_country_is_case_insensitive() {
        let upper = by_country("BJ");
        assert!(!upper.is_empty());
        assert!(upper.iter().all(|details| details.countries.contains(&"BJ")));
        assert_eq!(upper, by_country("bj"));

        let codes: Vec<_> = upper.iter().map(|details| details.code).collect();
        assert!(codes.contains(&PaymentMethod::MtnBj));
        assert!(codes.contains(&PaymentMethod::MoovBj));
        assert!(codes.contains(&PaymentMethod::CardXof));
        assert!(codes.contains(&PaymentMethod::CryptoXof));
    }

    #[test]
    fn test_by_currency() {
        let xof = by_currency("XOF");
        assert!(xof.iter().all(|details| details.currency == "XOF"));
        assert_eq!(xof, by_currency("xof"));
        assert!(by_currency("EUR").iter().any(|d| d.code == PaymentMethod::CryptoEur));
    }

    #[test]
    fn test_unknown_lookups_are_empty() {
        assert!(by_country("ZZ").is_empty());
        assert!(by_country("").is_empty());
        assert!(by_currency("BTC").is_empty());
    }

    #[test]
    fn test_all_is_stable() {
        assert_eq!(all(), all());
        assert_eq!(all().first().unwrap().code, PaymentMethod::AirtelCd);
        assert_eq!(all().last().unwrap().code, PaymentMethod::ZamtelZm);
    }
}
