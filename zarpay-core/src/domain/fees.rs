//! Fee schedule
//!
//! All fees are flat demo values denominated in PKR, except the exchange
//! fee which is a percentage of the sent amount.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Flat fee on cross-border transfers, in PKR
pub const TRANSFER_FEE: Decimal = dec!(125);

/// Percentage fee on currency conversion (applies to transfers and exchanges)
pub const EXCHANGE_FEE_PERCENT: Decimal = dec!(0.5);

/// Blockchain network fee when buying USDT, in PKR
pub const NETWORK_FEE_USDT: Decimal = dec!(85);

/// Blockchain network fee when buying BTC (and any non-USDT crypto), in PKR
pub const NETWORK_FEE_BTC: Decimal = dec!(150);

/// Rate used when a currency pair is missing from the store
pub const FALLBACK_RATE: Decimal = dec!(0.0035);

/// Amounts above this require a second authentication factor, in PKR
pub const STRONG_AUTH_THRESHOLD: Decimal = dec!(25000);

/// How long a quoted rate is presented as locked, in seconds
pub const RATE_LOCK_SECS: u32 = 300;

/// Suggested amounts shown in the app, in PKR
pub const QUICK_AMOUNTS: [i64; 4] = [1000, 2500, 5000, 10000];

/// Percentage fee applied to an amount
pub fn exchange_fee(amount: Decimal) -> Decimal {
    amount * EXCHANGE_FEE_PERCENT / dec!(100)
}

/// Percentage fee applied to an amount, `None` when the math overflows
///
/// Quote inputs come straight off the wire, so near-`Decimal::MAX` amounts
/// must not panic mid-request.
pub fn checked_exchange_fee(amount: Decimal) -> Option<Decimal> {
    amount
        .checked_mul(EXCHANGE_FEE_PERCENT)?
        .checked_div(dec!(100))
}

/// Wire snapshot of the fee schedule, served as reference data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSchedule {
    pub transfer_fee: Decimal,
    pub exchange_fee_percent: Decimal,
    pub network_fee_usdt: Decimal,
    pub network_fee_btc: Decimal,
    pub strong_auth_threshold: Decimal,
    pub rate_lock_secs: u32,
    pub quick_amounts: [i64; 4],
}

/// The full schedule as one serializable value
pub fn schedule() -> FeeSchedule {
    FeeSchedule {
        transfer_fee: TRANSFER_FEE,
        exchange_fee_percent: EXCHANGE_FEE_PERCENT,
        network_fee_usdt: NETWORK_FEE_USDT,
        network_fee_btc: NETWORK_FEE_BTC,
        strong_auth_threshold: STRONG_AUTH_THRESHOLD,
        rate_lock_secs: RATE_LOCK_SECS,
        quick_amounts: QUICK_AMOUNTS,
    }
}

/// Network fee for the target currency of an exchange
pub fn network_fee(to_currency: &str) -> Decimal {
    if to_currency == "USDT" {
        NETWORK_FEE_USDT
    } else {
        NETWORK_FEE_BTC
    }
}
