//! User routes - profile, balances, transactions, recipients
//!
//! Everything here is keyed by the user's UUID path segment; there is no
//! authentication in front of it.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use zarpay_core::{
    Balance, NewRecipient, NewTransaction, Recipient, Transaction, User, UserUpdate,
    WalletContext,
};

use crate::error::ApiResult;

/// GET /api/users/:id
pub async fn get_user(
    State(ctx): State<Arc<WalletContext>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<User>> {
    Ok(Json(ctx.user_service.get(id).await?))
}

/// PATCH /api/users/:id
pub async fn update_user(
    State(ctx): State<Arc<WalletContext>>,
    Path(id): Path<Uuid>,
    Json(update): Json<UserUpdate>,
) -> ApiResult<Json<User>> {
    Ok(Json(ctx.user_service.update(id, update).await?))
}

/// GET /api/users/:id/balances
pub async fn list_balances(
    State(ctx): State<Arc<WalletContext>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Vec<Balance>>> {
    Ok(Json(ctx.balance_service.list(id).await?))
}

/// GET /api/users/:id/transactions
pub async fn list_transactions(
    State(ctx): State<Arc<WalletContext>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Vec<Transaction>>> {
    Ok(Json(ctx.transaction_service.list(id).await?))
}

/// POST /api/users/:id/transactions
pub async fn create_transaction(
    State(ctx): State<Arc<WalletContext>>,
    Path(id): Path<Uuid>,
    Json(new): Json<NewTransaction>,
) -> ApiResult<Json<Transaction>> {
    Ok(Json(ctx.transaction_service.create(id, new).await?))
}

/// GET /api/users/:id/recipients
pub async fn list_recipients(
    State(ctx): State<Arc<WalletContext>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Vec<Recipient>>> {
    Ok(Json(ctx.recipient_service.list(id).await?))
}

/// POST /api/users/:id/recipients
pub async fn create_recipient(
    State(ctx): State<Arc<WalletContext>>,
    Path(id): Path<Uuid>,
    Json(new): Json<NewRecipient>,
) -> ApiResult<Json<Recipient>> {
    Ok(Json(ctx.recipient_service.create(id, new).await?))
}
