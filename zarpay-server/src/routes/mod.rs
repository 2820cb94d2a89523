//! Route handlers and router assembly

mod auth;
mod quotes;
mod rates;
mod reference;
mod users;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use zarpay_core::WalletContext;

/// Build the full API router over a wallet context
pub fn router(ctx: Arc<WalletContext>) -> Router {
    Router::new()
        .route("/api/auth/send-otp", axum::routing::post(auth::send_otp))
        .route("/api/auth/verify-otp", axum::routing::post(auth::verify_otp))
        .route(
            "/api/users/:id",
            get(users::get_user).patch(users::update_user),
        )
        .route("/api/users/:id/balances", get(users::list_balances))
        .route(
            "/api/users/:id/transactions",
            get(users::list_transactions).post(users::create_transaction),
        )
        .route(
            "/api/users/:id/recipients",
            get(users::list_recipients).post(users::create_recipient),
        )
        .route("/api/exchange-rates", get(rates::get_rate))
        .route("/api/quotes/exchange", get(quotes::exchange_quote))
        .route("/api/quotes/transfer", get(quotes::transfer_quote))
        .route("/api/currencies", get(reference::list_currencies))
        .route("/api/countries", get(reference::list_countries))
        .route("/api/fees", get(reference::fee_schedule))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
