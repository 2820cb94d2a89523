//! Quote routes - fee breakdowns for exchange and transfer

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;

use zarpay_core::services::{ExchangeQuote, TransferQuote};
use zarpay_core::{Error, WalletContext};

use crate::error::ApiResult;

#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
}

impl QuoteQuery {
    fn parts(self) -> Result<(String, String, Decimal), Error> {
        match (self.from, self.to, self.amount) {
            (Some(from), Some(to), Some(amount)) => Ok((from, to, amount)),
            _ => Err(Error::validation(
                "From, to and amount are required",
            )),
        }
    }
}

/// GET /api/quotes/exchange?from=&to=&amount=
pub async fn exchange_quote(
    State(ctx): State<Arc<WalletContext>>,
    Query(query): Query<QuoteQuery>,
) -> ApiResult<Json<ExchangeQuote>> {
    let (from, to, amount) = query.parts()?;
    Ok(Json(ctx.quote_service.exchange(&from, &to, amount).await?))
}

/// GET /api/quotes/transfer?from=&to=&amount=
pub async fn transfer_quote(
    State(ctx): State<Arc<WalletContext>>,
    Query(query): Query<QuoteQuery>,
) -> ApiResult<Json<TransferQuote>> {
    let (from, to, amount) = query.parts()?;
    Ok(Json(ctx.quote_service.transfer(&from, &to, amount).await?))
}
