//! Rate service - exchange rate lookup

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::result::{Error, Result};
use crate::domain::ExchangeRate;
use crate::ports::Store;

/// Rate service over the seeded rate table
pub struct RateService {
    store: Arc<dyn Store>,
}

impl RateService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Rate for a directional pair; errors if the pair is unknown
    pub async fn get(&self, from: &str, to: &str) -> Result<ExchangeRate> {
        self.store
            .get_exchange_rate(from, to)
            .await?
            .ok_or_else(|| Error::not_found(format!("exchange rate {from}->{to}")))
    }

    /// Set the rate for a directional pair
    pub async fn set(&self, from: &str, to: &str, rate: Decimal) -> Result<ExchangeRate> {
        self.store.update_exchange_rate(from, to, rate).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_get_seeded_rate() {
        let service = RateService::new(Arc::new(MemoryStore::new()));
        let rate = service.get("PKR", "BTC").await.unwrap();
        assert_eq!(rate.rate, dec!(0.0000001));
    }

    #[tokio::test]
    async fn test_get_unknown_pair() {
        let service = RateService::new(Arc::new(MemoryStore::new()));
        assert!(matches!(
            service.get("PKR", "JPY").await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_set_overrides_seed() {
        let service = RateService::new(Arc::new(MemoryStore::new()));
        service.set("PKR", "USD", dec!(0.0034)).await.unwrap();
        assert_eq!(service.get("PKR", "USD").await.unwrap().rate, dec!(0.0034));
    }
}
