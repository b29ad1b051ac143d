//! Profile handlers
//!
//! Profile fetch, edit, deletion, and the per-profile listings (weets,
//! reactions, following, followers). The client token arrives in the JSON
//! body, so every route here is a POST/PUT/DELETE with a body.

use axum::{
    extract::{Path, State},
    Json,
};
use weet_core::ReactionKind;
use weet_service::{
    AccountService, MessageResponse, ProfileResponse, ProfileService, ResultListResponse,
    SessionService, TimelineService, TokenRequest, TokenResponse, UpdateProfileRequest,
    UserEnvelope, WeetResponse,
};

use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Fetch a profile with viewer-relative follow status
///
/// POST /profile/:handle
pub async fn get_profile(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Json(request): Json<TokenRequest>,
) -> ApiResult<Created<Json<UserEnvelope>>> {
    let ctx = state.service_context();
    let claims = SessionService::new(ctx)
        .require_signed_in(request.token.as_str())
        .await?;

    let profile = ProfileService::new(ctx)
        .get(&handle, Some(&claims.handle))
        .await?;
    Ok(Created(Json(UserEnvelope::new(profile))))
}

/// Edit a profile; requires ownership and old-password re-authentication
///
/// PUT /profile/:handle/edit
pub async fn update_profile(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Json(request): Json<UpdateProfileRequest>,
) -> ApiResult<Created<Json<TokenResponse>>> {
    let ctx = state.service_context();
    SessionService::new(ctx)
        .require_owner(request.token.as_str(), &handle)
        .await?;

    let response = AccountService::new(ctx).update(&handle, request).await?;
    Ok(Created(Json(response)))
}

/// Delete an account; requires ownership
///
/// DELETE /profile/:handle/edit
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Json(request): Json<TokenRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let ctx = state.service_context();
    SessionService::new(ctx)
        .require_owner(request.token.as_str(), &handle)
        .await?;

    AccountService::new(ctx).delete(&handle).await?;
    Ok(Created(Json(MessageResponse::new("Account deleted."))))
}

/// Weets authored by a profile
///
/// POST /profile/:handle/weets
pub async fn weets(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Json(request): Json<TokenRequest>,
) -> ApiResult<Created<Json<ResultListResponse<WeetResponse>>>> {
    let ctx = state.service_context();
    let claims = SessionService::new(ctx)
        .require_signed_in(request.token.as_str())
        .await?;

    let result = TimelineService::new(ctx)
        .weets_of(&handle, &claims.handle)
        .await?;
    Ok(Created(Json(ResultListResponse::new(result))))
}

/// Weets a profile has reweeted
///
/// POST /profile/:handle/reweets
pub async fn reweets(
    state: State<AppState>,
    handle: Path<String>,
    request: Json<TokenRequest>,
) -> ApiResult<Created<Json<ResultListResponse<WeetResponse>>>> {
    reacted(state, handle, request, ReactionKind::Reweet).await
}

/// Weets a profile has favorited
///
/// POST /profile/:handle/favorites
pub async fn favorites(
    state: State<AppState>,
    handle: Path<String>,
    request: Json<TokenRequest>,
) -> ApiResult<Created<Json<ResultListResponse<WeetResponse>>>> {
    reacted(state, handle, request, ReactionKind::Favorite).await
}

/// Weets a profile has tabbed
///
/// POST /profile/:handle/tabs
pub async fn tabs(
    state: State<AppState>,
    handle: Path<String>,
    request: Json<TokenRequest>,
) -> ApiResult<Created<Json<ResultListResponse<WeetResponse>>>> {
    reacted(state, handle, request, ReactionKind::Tab).await
}

async fn reacted(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Json(request): Json<TokenRequest>,
    kind: ReactionKind,
) -> ApiResult<Created<Json<ResultListResponse<WeetResponse>>>> {
    let ctx = state.service_context();
    let claims = SessionService::new(ctx)
        .require_signed_in(request.token.as_str())
        .await?;

    let result = TimelineService::new(ctx)
        .reacted_of(kind, &handle, &claims.handle)
        .await?;
    Ok(Created(Json(ResultListResponse::new(result))))
}

/// Accounts a profile follows
///
/// POST /profile/:handle/following
pub async fn following(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Json(request): Json<TokenRequest>,
) -> ApiResult<Created<Json<ResultListResponse<ProfileResponse>>>> {
    let ctx = state.service_context();
    let claims = SessionService::new(ctx)
        .require_signed_in(request.token.as_str())
        .await?;

    let result = ProfileService::new(ctx)
        .following(&handle, &claims.handle)
        .await?;
    Ok(Created(Json(ResultListResponse::new(result))))
}

/// Accounts following a profile
///
/// POST /profile/:handle/followers
pub async fn followers(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Json(request): Json<TokenRequest>,
) -> ApiResult<Created<Json<ResultListResponse<ProfileResponse>>>> {
    let ctx = state.service_context();
    let claims = SessionService::new(ctx)
        .require_signed_in(request.token.as_str())
        .await?;

    let result = ProfileService::new(ctx)
        .followers(&handle, &claims.handle)
        .await?;
    Ok(Created(Json(ResultListResponse::new(result))))
}
