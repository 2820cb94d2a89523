//! Auth routes - OTP send and verify

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use zarpay_core::services::{OtpSent, Verified};
use zarpay_core::WalletContext;

use crate::error::ApiResult;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpRequest {
    #[serde(default)]
    pub phone_number: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub otp: Option<String>,
}

/// POST /api/auth/send-otp
pub async fn send_otp(
    State(ctx): State<Arc<WalletContext>>,
    Json(req): Json<SendOtpRequest>,
) -> ApiResult<Json<OtpSent>> {
    let phone = req.phone_number.unwrap_or_default();
    let sent = ctx.auth_service.send_otp(&phone).await?;
    Ok(Json(sent))
}

/// POST /api/auth/verify-otp
pub async fn verify_otp(
    State(ctx): State<Arc<WalletContext>>,
    Json(req): Json<VerifyOtpRequest>,
) -> ApiResult<Json<Verified>> {
    let phone = req.phone_number.unwrap_or_default();
    let otp = req.otp.unwrap_or_default();
    let verified = ctx.auth_service.verify_otp(&phone, &otp).await?;
    Ok(Json(verified))
}
