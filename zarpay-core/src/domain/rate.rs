//! Exchange rate domain model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A directional currency pair rate (1 unit of `from_currency` buys
/// `rate` units of `to_currency`)
///
/// Rates are hardcoded demo values; there is no market feed behind them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub id: Uuid,
    pub from_currency: String,
    pub to_currency: String,
    pub rate: Decimal,
    pub updated_at: DateTime<Utc>,
}

impl ExchangeRate {
    /// Create a rate for a pair
    pub fn new(from: impl Into<String>, to: impl Into<String>, rate: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            from_currency: from.into(),
            to_currency: to.into(),
            rate,
            updated_at: Utc::now(),
        }
    }

    /// The fixed rate table seeded at startup
    pub fn seed_set() -> Vec<ExchangeRate> {
        vec![
            ExchangeRate::new("PKR", "USD", dec!(0.0035)),
            ExchangeRate::new("USD", "PKR", dec!(284.50)),
            ExchangeRate::new("PKR", "USDT", dec!(0.0035)),
            ExchangeRate::new("USDT", "PKR", dec!(284.10)),
            ExchangeRate::new("PKR", "BTC", dec!(0.0000001)),
            ExchangeRate::new("BTC", "PKR", dec!(12500000)),
            ExchangeRate::new("PKR", "GBP", dec!(0.0028)),
            ExchangeRate::new("GBP", "PKR", dec!(356.20)),
            ExchangeRate::new("PKR", "AED", dec!(0.0129)),
            ExchangeRate::new("AED", "PKR", dec!(77.45)),
        ]
    }
}
