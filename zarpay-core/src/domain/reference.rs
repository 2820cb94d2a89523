//! Static reference data: supported currencies and transfer corridors
//!
//! These mirror the lists the mobile app renders; they never change at
//! runtime.

use serde::Serialize;

/// Display metadata for a supported currency
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

/// A destination country for cross-border transfers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub currency: &'static str,
    pub delivery_time: &'static str,
}

/// Currencies the wallet can hold or convert to
pub const CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo { code: "PKR", name: "Pakistani Rupee", symbol: "₨" },
    CurrencyInfo { code: "USDT", name: "Tether USD", symbol: "USDT" },
    CurrencyInfo { code: "BTC", name: "Bitcoin", symbol: "₿" },
    CurrencyInfo { code: "USD", name: "US Dollar", symbol: "$" },
    CurrencyInfo { code: "GBP", name: "British Pound", symbol: "£" },
    CurrencyInfo { code: "AED", name: "UAE Dirham", symbol: "د.إ" },
];

/// Supported transfer corridors from Pakistan
pub const COUNTRIES: &[CountryInfo] = &[
    CountryInfo { code: "US", name: "United States", currency: "USD", delivery_time: "1-2 hours" },
    CountryInfo { code: "GB", name: "United Kingdom", currency: "GBP", delivery_time: "2-4 hours" },
    CountryInfo { code: "AE", name: "United Arab Emirates", currency: "AED", delivery_time: "30 mins" },
    CountryInfo { code: "CA", name: "Canada", currency: "CAD", delivery_time: "1-3 hours" },
    CountryInfo { code: "AU", name: "Australia", currency: "AUD", delivery_time: "2-4 hours" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corridor_currencies_are_unique() {
        let mut codes: Vec<_> = COUNTRIES.iter().map(|c| c.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), COUNTRIES.len());
    }

    #[test]
    fn test_wallet_currencies_include_defaults() {
        for code in ["PKR", "USDT", "BTC"] {
            assert!(CURRENCIES.iter().any(|c| c.code == code), "missing {code}");
        }
    }
}
