//! Quote service - fee and rate calculation
//!
//! The numbers the app shows before a user confirms an exchange or a
//! cross-border transfer. Inputs are the stored rate table and the fixed
//! fee schedule; quotes are pure arithmetic and nothing is reserved or
//! locked server-side. `rate_lock_secs` is presentation only.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::fees;
use crate::domain::result::{Error, Result};
use crate::ports::Store;

/// Quote amounts come straight off the wire; oversized values fail the
/// checked arithmetic instead of panicking the request task.
fn overflow() -> Error {
    Error::validation("Amount too large")
}

/// Quote service for the exchange and send-money screens
pub struct QuoteService {
    store: Arc<dyn Store>,
}

/// Cost breakdown for a PKR -> crypto exchange
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeQuote {
    pub from_currency: String,
    pub to_currency: String,
    pub amount: Decimal,
    pub rate: Decimal,
    /// 0.5% of the sent amount
    pub platform_fee: Decimal,
    /// Flat PKR fee depending on the target chain
    pub network_fee: Decimal,
    /// amount + platform_fee + network_fee
    pub total_cost: Decimal,
    /// amount * rate
    pub to_amount: Decimal,
    pub requires_strong_auth: bool,
    pub rate_lock_secs: u32,
}

/// Cost breakdown for a cross-border transfer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferQuote {
    pub from_currency: String,
    pub to_currency: String,
    pub amount: Decimal,
    pub rate: Decimal,
    /// Flat PKR fee, fixed regardless of amount
    pub transfer_fee: Decimal,
    /// 0.5% of the sent amount
    pub exchange_fee: Decimal,
    /// amount + transfer_fee + exchange_fee
    pub total_pay: Decimal,
    /// amount * rate
    pub recipient_receives: Decimal,
    pub requires_strong_auth: bool,
    pub rate_lock_secs: u32,
}

impl QuoteService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Stored rate for the pair, or the fixed fallback when missing
    async fn rate_or_fallback(&self, from: &str, to: &str) -> Result<Decimal> {
        Ok(self
            .store
            .get_exchange_rate(from, to)
            .await?
            .map(|r| r.rate)
            .unwrap_or(fees::FALLBACK_RATE))
    }

    /// Quote a currency exchange (PKR -> USDT/BTC)
    pub async fn exchange(&self, from: &str, to: &str, amount: Decimal) -> Result<ExchangeQuote> {
        if amount <= Decimal::ZERO {
            return Err(Error::validation("Amount must be positive"));
        }

        let rate = self.rate_or_fallback(from, to).await?;
        let platform_fee = fees::checked_exchange_fee(amount).ok_or_else(overflow)?;
        let network_fee = fees::network_fee(to);
        let total_cost = amount
            .checked_add(platform_fee)
            .and_then(|v| v.checked_add(network_fee))
            .ok_or_else(overflow)?;
        let to_amount = amount.checked_mul(rate).ok_or_else(overflow)?;

        Ok(ExchangeQuote {
            from_currency: from.to_string(),
            to_currency: to.to_string(),
            amount,
            rate,
            platform_fee,
            network_fee,
            total_cost,
            to_amount,
            requires_strong_auth: amount > fees::STRONG_AUTH_THRESHOLD,
            rate_lock_secs: fees::RATE_LOCK_SECS,
        })
    }

    /// Quote a cross-border transfer (PKR -> destination currency)
    pub async fn transfer(&self, from: &str, to: &str, amount: Decimal) -> Result<TransferQuote> {
        if amount <= Decimal::ZERO {
            return Err(Error::validation("Amount must be positive"));
        }

        let rate = self.rate_or_fallback(from, to).await?;
        let exchange_fee = fees::checked_exchange_fee(amount).ok_or_else(overflow)?;
        let total_pay = amount
            .checked_add(fees::TRANSFER_FEE)
            .and_then(|v| v.checked_add(exchange_fee))
            .ok_or_else(overflow)?;
        let recipient_receives = amount.checked_mul(rate).ok_or_else(overflow)?;

        Ok(TransferQuote {
            from_currency: from.to_string(),
            to_currency: to.to_string(),
            amount,
            rate,
            transfer_fee: fees::TRANSFER_FEE,
            exchange_fee,
            total_pay,
            recipient_receives,
            requires_strong_auth: amount > fees::STRONG_AUTH_THRESHOLD,
            rate_lock_secs: fees::RATE_LOCK_SECS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use rust_decimal_macros::dec;

    fn service() -> QuoteService {
        QuoteService::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_exchange_quote_to_usdt() {
        let quote = service().exchange("PKR", "USDT", dec!(10000)).await.unwrap();

        assert_eq!(quote.rate, dec!(0.0035));
        assert_eq!(quote.platform_fee, dec!(50)); // 0.5% of 10,000
        assert_eq!(quote.network_fee, dec!(85));
        assert_eq!(quote.total_cost, dec!(10135));
        assert_eq!(quote.to_amount, dec!(35.0000));
        assert!(!quote.requires_strong_auth);
    }

    #[tokio::test]
    async fn test_exchange_quote_to_btc_uses_btc_network_fee() {
        let quote = service().exchange("PKR", "BTC", dec!(50000)).await.unwrap();

        assert_eq!(quote.network_fee, dec!(150));
        assert_eq!(quote.platform_fee, dec!(250));
        assert_eq!(quote.total_cost, dec!(50400));
        assert_eq!(quote.to_amount, dec!(0.0050000));
        // Above the 25,000 threshold
        assert!(quote.requires_strong_auth);
    }

    #[tokio::test]
    async fn test_transfer_quote_to_gbp() {
        let quote = service().transfer("PKR", "GBP", dec!(10000)).await.unwrap();

        assert_eq!(quote.rate, dec!(0.0028));
        assert_eq!(quote.transfer_fee, dec!(125));
        assert_eq!(quote.exchange_fee, dec!(50));
        assert_eq!(quote.total_pay, dec!(10175));
        assert_eq!(quote.recipient_receives, dec!(28.0000));
        assert_eq!(quote.rate_lock_secs, 300);
    }

    #[tokio::test]
    async fn test_unknown_pair_falls_back() {
        let quote = service().transfer("PKR", "CAD", dec!(1000)).await.unwrap();
        assert_eq!(quote.rate, dec!(0.0035));

        // Even a normally-seeded pair falls back when the table is empty
        let unseeded = QuoteService::new(Arc::new(MemoryStore::empty()));
        let quote = unseeded.exchange("PKR", "USDT", dec!(1000)).await.unwrap();
        assert_eq!(quote.rate, dec!(0.0035));
    }

    #[tokio::test]
    async fn test_huge_amounts_error_instead_of_panicking() {
        let svc = service();

        // Decimal::MAX times the 284.50 USD->PKR rate cannot be represented;
        // the quote must come back as a validation error, not a panic
        let err = svc.exchange("USD", "PKR", Decimal::MAX).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let err = svc.transfer("USD", "PKR", Decimal::MAX).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_non_positive_amounts_rejected() {
        let svc = service();
        assert!(svc.exchange("PKR", "USDT", Decimal::ZERO).await.is_err());
        assert!(svc.transfer("PKR", "GBP", dec!(-5)).await.is_err());
    }
}
