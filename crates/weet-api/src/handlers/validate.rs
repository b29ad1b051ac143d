//! Validation handlers
//!
//! Per-field validity reports for registration and profile-update forms.

use axum::{
    extract::{Path, State},
    Json,
};
use weet_service::{
    ResultResponse, SessionService, SignUpReport, UpdateProfileReport, ValidateSignUpRequest,
    ValidateUpdateProfileRequest, ValidationService,
};

use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Validate a registration form
///
/// POST /validate/sign-up
pub async fn sign_up(
    State(state): State<AppState>,
    Json(request): Json<ValidateSignUpRequest>,
) -> ApiResult<Created<Json<ResultResponse<SignUpReport>>>> {
    let service = ValidationService::new(state.service_context());
    let report = service.sign_up(&request).await?;
    Ok(Created(Json(ResultResponse::new(report))))
}

/// Validate a profile-update form; only the profile owner may ask
///
/// POST /validate/update-profile/:handle
pub async fn update_profile(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Json(request): Json<ValidateUpdateProfileRequest>,
) -> ApiResult<Created<Json<ResultResponse<UpdateProfileReport>>>> {
    let ctx = state.service_context();
    SessionService::new(ctx)
        .require_owner(request.token.as_str(), &handle)
        .await?;

    let report = ValidationService::new(ctx)
        .update_profile(&handle, &request)
        .await?;
    Ok(Created(Json(ResultResponse::new(report))))
}
