//! User handlers
//!
//! Username search and follow/unfollow actions.

use axum::{
    extract::{Path, State},
    Json,
};
use weet_service::{
    FollowService, MessageResponse, ProfileResponse, ProfileService, ResultListResponse,
    SessionService, TokenRequest,
};

use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Case-insensitive substring search on usernames
///
/// POST /users/:search
pub async fn search(
    State(state): State<AppState>,
    Path(query): Path<String>,
    Json(request): Json<TokenRequest>,
) -> ApiResult<Created<Json<ResultListResponse<ProfileResponse>>>> {
    let ctx = state.service_context();
    let claims = SessionService::new(ctx)
        .require_signed_in(request.token.as_str())
        .await?;

    let result = ProfileService::new(ctx)
        .search(&query, &claims.handle)
        .await?;
    Ok(Created(Json(ResultListResponse::new(result))))
}

/// Follow an account
///
/// POST /users/:handle/follow
pub async fn follow(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Json(request): Json<TokenRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let ctx = state.service_context();
    let claims = SessionService::new(ctx)
        .require_signed_in(request.token.as_str())
        .await?;

    FollowService::new(ctx).follow(&claims.handle, &handle).await?;
    Ok(Created(Json(MessageResponse::new(format!(
        "You are now following {handle}."
    )))))
}

/// Stop following an account
///
/// POST /users/:handle/unfollow
pub async fn unfollow(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Json(request): Json<TokenRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let ctx = state.service_context();
    let claims = SessionService::new(ctx)
        .require_signed_in(request.token.as_str())
        .await?;

    FollowService::new(ctx)
        .unfollow(&claims.handle, &handle)
        .await?;
    Ok(Created(Json(MessageResponse::new(format!(
        "You are no longer following {handle}."
    )))))
}
