//! Weet handlers
//!
//! Posting, fetching, editing, deleting weets, the home feed, and the six
//! reaction toggles.

use axum::{
    extract::{Path, State},
    Json,
};
use weet_core::ReactionKind;
use weet_service::{
    CreateWeetRequest, EditWeetRequest, MessageResponse, ReactionService, ResultListResponse,
    ResultResponse, SessionService, TimelineService, TokenRequest, WeetResponse, WeetService,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

fn parse_weet_id(id: &str) -> ApiResult<i64> {
    id.parse()
        .map_err(|_| ApiError::invalid_path("Invalid weet id format"))
}

/// Post a new weet
///
/// POST /weets
pub async fn create_weet(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateWeetRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let ctx = state.service_context();
    let claims = SessionService::new(ctx)
        .require_signed_in(request.token.as_str())
        .await?;

    WeetService::new(ctx)
        .create(&request.weet, &claims.handle)
        .await?;
    Ok(Created(Json(MessageResponse::new(
        "Weet successfully created.",
    ))))
}

/// Home feed: own weets plus weets from every followed account
///
/// POST /weets/feed
pub async fn feed(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> ApiResult<Created<Json<ResultListResponse<WeetResponse>>>> {
    let ctx = state.service_context();
    let claims = SessionService::new(ctx)
        .require_signed_in(request.token.as_str())
        .await?;

    let result = TimelineService::new(ctx).feed(&claims.handle).await?;
    Ok(Created(Json(ResultListResponse::new(result))))
}

/// Fetch one enriched weet
///
/// POST /weets/:id
pub async fn get_weet(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<TokenRequest>,
) -> ApiResult<Created<Json<ResultResponse<WeetResponse>>>> {
    let id = parse_weet_id(&id)?;
    let ctx = state.service_context();
    let claims = SessionService::new(ctx)
        .require_signed_in(request.token.as_str())
        .await?;

    let result = WeetService::new(ctx).get(id, &claims.handle).await?;
    Ok(Created(Json(ResultResponse::new(result))))
}

/// Edit the text of an authored weet
///
/// PUT /weets/:id
pub async fn edit_weet(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<EditWeetRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let id = parse_weet_id(&id)?;
    let ctx = state.service_context();
    let (claims, _weet) = SessionService::new(ctx)
        .require_author(request.token.as_str(), id)
        .await?;

    WeetService::new(ctx)
        .edit(id, &request.weet, &claims.handle)
        .await?;
    Ok(Created(Json(MessageResponse::new(
        "Weet successfully edited.",
    ))))
}

/// Delete an authored weet
///
/// DELETE /weets/:id
pub async fn delete_weet(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<TokenRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let id = parse_weet_id(&id)?;
    let ctx = state.service_context();
    SessionService::new(ctx)
        .require_author(request.token.as_str(), id)
        .await?;

    WeetService::new(ctx).delete(id).await?;
    Ok(Created(Json(MessageResponse::new(
        "Weet successfully deleted.",
    ))))
}

// ============================================================================
// Reaction toggles
// ============================================================================

/// POST /weets/:id/reweet
pub async fn reweet(
    state: State<AppState>,
    id: Path<String>,
    request: Json<TokenRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    react(state, id, request, ReactionKind::Reweet).await
}

/// POST /weets/:id/unreweet
pub async fn unreweet(
    state: State<AppState>,
    id: Path<String>,
    request: Json<TokenRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    unreact(state, id, request, ReactionKind::Reweet).await
}

/// POST /weets/:id/favorite
pub async fn favorite(
    state: State<AppState>,
    id: Path<String>,
    request: Json<TokenRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    react(state, id, request, ReactionKind::Favorite).await
}

/// POST /weets/:id/unfavorite
pub async fn unfavorite(
    state: State<AppState>,
    id: Path<String>,
    request: Json<TokenRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    unreact(state, id, request, ReactionKind::Favorite).await
}

/// POST /weets/:id/tab
pub async fn tab(
    state: State<AppState>,
    id: Path<String>,
    request: Json<TokenRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    react(state, id, request, ReactionKind::Tab).await
}

/// POST /weets/:id/untab
pub async fn untab(
    state: State<AppState>,
    id: Path<String>,
    request: Json<TokenRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    unreact(state, id, request, ReactionKind::Tab).await
}

async fn react(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<TokenRequest>,
    kind: ReactionKind,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let id = parse_weet_id(&id)?;
    let ctx = state.service_context();
    let claims = SessionService::new(ctx)
        .require_signed_in(request.token.as_str())
        .await?;

    ReactionService::new(ctx).add(kind, &claims.handle, id).await?;
    Ok(Created(Json(MessageResponse::new(format!(
        "Weet has been {}.",
        kind.acted()
    )))))
}

async fn unreact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<TokenRequest>,
    kind: ReactionKind,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let id = parse_weet_id(&id)?;
    let ctx = state.service_context();
    let claims = SessionService::new(ctx)
        .require_signed_in(request.token.as_str())
        .await?;

    ReactionService::new(ctx)
        .remove(kind, &claims.handle, id)
        .await?;
    Ok(Created(Json(MessageResponse::new(format!(
        "Weet is no longer {}.",
        kind.acted()
    )))))
}
