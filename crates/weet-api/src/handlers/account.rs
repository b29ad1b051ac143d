//! Account handlers
//!
//! Endpoints for registration and login.

use axum::{extract::State, Json};
use weet_service::{AccountService, LogInRequest, SignUpRequest, TokenResponse};

use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new account
///
/// POST /account/sign-up
pub async fn sign_up(
    State(state): State<AppState>,
    Json(request): Json<SignUpRequest>,
) -> ApiResult<Created<Json<TokenResponse>>> {
    let service = AccountService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Log in with handle and password
///
/// POST /account/log-in
pub async fn log_in(
    State(state): State<AppState>,
    Json(request): Json<LogInRequest>,
) -> ApiResult<Created<Json<TokenResponse>>> {
    let service = AccountService::new(state.service_context());
    let response = service.authenticate(request).await?;
    Ok(Created(Json(response)))
}
