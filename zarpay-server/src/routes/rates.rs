//! Exchange rate routes

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use zarpay_core::{Error, ExchangeRate, WalletContext};

use crate::error::ApiResult;

#[derive(Debug, Deserialize)]
pub struct RateQuery {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

/// GET /api/exchange-rates?from=&to=
pub async fn get_rate(
    State(ctx): State<Arc<WalletContext>>,
    Query(query): Query<RateQuery>,
) -> ApiResult<Json<ExchangeRate>> {
    let (from, to) = match (query.from, query.to) {
        (Some(from), Some(to)) => (from, to),
        _ => {
            return Err(
                Error::validation("From and to currencies are required").into()
            )
        }
    };

    Ok(Json(ctx.rate_service.get(&from, &to).await?))
}
