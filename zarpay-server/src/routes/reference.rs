//! Reference data routes - currencies, transfer corridors, fee schedule

use axum::Json;

use zarpay_core::domain::fees::{self, FeeSchedule};
use zarpay_core::domain::reference::{CountryInfo, CurrencyInfo, COUNTRIES, CURRENCIES};

/// GET /api/currencies
pub async fn list_currencies() -> Json<&'static [CurrencyInfo]> {
    Json(CURRENCIES)
}

/// GET /api/countries
pub async fn list_countries() -> Json<&'static [CountryInfo]> {
    Json(COUNTRIES)
}

/// GET /api/fees
///
/// The fixed fee schedule and quick-amount chips the app renders.
pub async fn fee_schedule() -> Json<FeeSchedule> {
    Json(fees::schedule())
}
