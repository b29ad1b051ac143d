//! Route definitions
//!
//! All API routes organized by domain. Apart from the health probes, every
//! route takes the client token in the JSON body, which is why listings and
//! fetches are POSTs.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{account, health, profile, users, validate, weets};
use crate::response::ApiError;
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(account_routes())
        .merge(profile_routes())
        .merge(user_routes())
        .merge(weet_routes())
        .merge(validate_routes())
        .fallback(route_not_found)
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Account routes
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/account/sign-up", post(account::sign_up))
        .route("/account/log-in", post(account::log_in))
}

/// Profile routes
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile/:handle", post(profile::get_profile))
        .route("/profile/:handle/edit", put(profile::update_profile))
        .route("/profile/:handle/edit", delete(profile::delete_profile))
        .route("/profile/:handle/weets", post(profile::weets))
        .route("/profile/:handle/reweets", post(profile::reweets))
        .route("/profile/:handle/favorites", post(profile::favorites))
        .route("/profile/:handle/tabs", post(profile::tabs))
        .route("/profile/:handle/following", post(profile::following))
        .route("/profile/:handle/followers", post(profile::followers))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:search", post(users::search))
        .route("/users/:handle/follow", post(users::follow))
        .route("/users/:handle/unfollow", post(users::unfollow))
}

/// Weet routes
fn weet_routes() -> Router<AppState> {
    Router::new()
        .route("/weets", post(weets::create_weet))
        .route("/weets/feed", post(weets::feed))
        .route("/weets/:id", post(weets::get_weet))
        .route("/weets/:id", put(weets::edit_weet))
        .route("/weets/:id", delete(weets::delete_weet))
        .route("/weets/:id/reweet", post(weets::reweet))
        .route("/weets/:id/unreweet", post(weets::unreweet))
        .route("/weets/:id/favorite", post(weets::favorite))
        .route("/weets/:id/unfavorite", post(weets::unfavorite))
        .route("/weets/:id/tab", post(weets::tab))
        .route("/weets/:id/untab", post(weets::untab))
}

/// Validation routes
fn validate_routes() -> Router<AppState> {
    Router::new()
        .route("/validate/sign-up", post(validate::sign_up))
        .route(
            "/validate/update-profile/:handle",
            post(validate::update_profile),
        )
}

/// Generic JSON 404 for unmatched routes
async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
