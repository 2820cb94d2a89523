//! Balance domain model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A per-currency balance held by a user
///
/// Note: currency is a freeform code ("PKR", "USDT", "BTC", ...); any string
/// is accepted. Amounts serialize as decimal strings on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub id: Uuid,
    pub user_id: Uuid,
    pub currency: String,
    pub amount: Decimal,
    pub updated_at: DateTime<Utc>,
}

impl Balance {
    /// Create a new balance row
    pub fn new(user_id: Uuid, currency: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            currency: currency.into(),
            amount,
            updated_at: Utc::now(),
        }
    }

    /// Default balances seeded for a fresh signup
    ///
    /// New users start with PKR 25,000 of demo money and empty crypto wallets.
    pub fn default_set(user_id: Uuid) -> Vec<Balance> {
        vec![
            Balance::new(user_id, "PKR", dec!(25000)),
            Balance::new(user_id, "USDT", Decimal::ZERO),
            Balance::new(user_id, "BTC", Decimal::ZERO),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set() {
        let user_id = Uuid::new_v4();
        let balances = Balance::default_set(user_id);

        assert_eq!(balances.len(), 3);
        let pkr = balances.iter().find(|b| b.currency == "PKR").unwrap();
        assert_eq!(pkr.amount, dec!(25000));
        let btc = balances.iter().find(|b| b.currency == "BTC").unwrap();
        assert_eq!(btc.amount, Decimal::ZERO);
        assert!(balances.iter().all(|b| b.user_id == user_id));
    }

    #[test]
    fn test_amount_serializes_as_string() {
        let balance = Balance::new(Uuid::new_v4(), "PKR", dec!(1234.56));
        let json = serde_json::to_value(&balance).unwrap();
        assert_eq!(json["amount"], serde_json::json!("1234.56"));
        assert_eq!(json["currency"], "PKR");
    }
}
