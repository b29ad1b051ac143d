//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the schema applied
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use weet_common::JwtService;

/// Register a unique account and return its fixture plus token
async fn register(server: &TestServer) -> (SignUpRequest, String) {
    let request = SignUpRequest::unique();
    let response = server.post("/account/sign-up", &request).await.unwrap();
    let auth: TokenResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth.token)
}

/// Post a weet and return its id from the author's own weet list
async fn post_weet(server: &TestServer, reg: &SignUpRequest, token: &str, text: &str) -> i64 {
    let response = server
        .post("/weets", &WeetBody::new(token, text))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post(
            &format!("/profile/{}/weets", reg.handle),
            &TokenBody::new(token),
        )
        .await
        .unwrap();
    let list: ResultList<WeetResponse> =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    list.result.first().expect("weet just posted").id
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Account Tests
// ============================================================================

#[tokio::test]
async fn test_sign_up() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register(&server).await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_sign_up_duplicate_handle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (first, _) = register(&server).await;

    let mut second = SignUpRequest::unique();
    second.handle = first.handle.clone();
    let response = server.post("/account/sign-up", &second).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_sign_up_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (first, _) = register(&server).await;

    let mut second = SignUpRequest::unique();
    second.email = first.email.clone();
    let response = server.post("/account/sign-up", &second).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_log_in() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg, _) = register(&server).await;

    let response = server
        .post("/account/log-in", &LogInRequest::from_sign_up(&reg))
        .await
        .unwrap();
    let auth: TokenResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_log_in_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg, _) = register(&server).await;

    let response = server
        .post(
            "/account/log-in",
            &LogInRequest {
                handle: reg.handle,
                password: "WrongPass123!".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_get_profile_with_follow_status() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_reg_a, token_a) = register(&server).await;
    let (reg_b, _) = register(&server).await;

    // A follows B, then views B's profile
    let response = server
        .post(
            &format!("/users/{}/follow", reg_b.handle),
            &TokenBody::new(&token_a),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post(&format!("/profile/{}", reg_b.handle), &TokenBody::new(&token_a))
        .await
        .unwrap();
    let envelope: UserEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(envelope.user.handle, reg_b.handle);
    let status = envelope.user.follow_status.expect("viewer-annotated");
    assert!(status.is_follower);
    assert!(!status.is_followee);
}

#[tokio::test]
async fn test_get_profile_unknown_handle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register(&server).await;

    let response = server
        .post("/profile/nosuchhandle", &TokenBody::new(&token))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_get_profile_bad_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg, _) = register(&server).await;

    let response = server
        .post(
            &format!("/profile/{}", reg.handle),
            &TokenBody::new("not.a.token"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_update_profile_not_owner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg_a, _) = register(&server).await;
    let (reg_b, token_b) = register(&server).await;

    // B tries to edit A's profile
    let body = UpdateProfileBody::keep_current(&token_b, &reg_b);
    let response = server
        .put(&format!("/profile/{}/edit", reg_a.handle), &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_update_profile_rotates_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg, token) = register(&server).await;

    let mut body = UpdateProfileBody::keep_current(&token, &reg);
    body.user_description = Some("A fresh description.".to_string());
    let response = server
        .put(&format!("/profile/{}/edit", reg.handle), &body)
        .await
        .unwrap();
    let auth: TokenResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_update_profile_wrong_old_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg, token) = register(&server).await;

    let mut body = UpdateProfileBody::keep_current(&token, &reg);
    body.old_password = "WrongPass123!".to_string();
    let response = server
        .put(&format!("/profile/{}/edit", reg.handle), &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_delete_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg, token) = register(&server).await;

    let response = server
        .delete(&format!("/profile/{}/edit", reg.handle), &TokenBody::new(&token))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // The deleted account can no longer log in
    let response = server
        .post("/account/log-in", &LogInRequest::from_sign_up(&reg))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Follow Tests
// ============================================================================

#[tokio::test]
async fn test_follow_twice_fails() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token_a) = register(&server).await;
    let (reg_b, _) = register(&server).await;

    let path = format!("/users/{}/follow", reg_b.handle);
    let response = server.post(&path, &TokenBody::new(&token_a)).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post(&path, &TokenBody::new(&token_a)).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_unfollow_without_follow_fails() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token_a) = register(&server).await;
    let (reg_b, _) = register(&server).await;

    let response = server
        .post(
            &format!("/users/{}/unfollow", reg_b.handle),
            &TokenBody::new(&token_a),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_follow_self_fails() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg, token) = register(&server).await;

    let response = server
        .post(
            &format!("/users/{}/follow", reg.handle),
            &TokenBody::new(&token),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_follow_unknown_handle_fails() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register(&server).await;

    let response = server
        .post("/users/nosuchhandle/follow", &TokenBody::new(&token))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_followers_listing() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg_a, token_a) = register(&server).await;
    let (reg_b, token_b) = register(&server).await;

    server
        .post(
            &format!("/users/{}/follow", reg_b.handle),
            &TokenBody::new(&token_a),
        )
        .await
        .unwrap();

    let response = server
        .post(
            &format!("/profile/{}/followers", reg_b.handle),
            &TokenBody::new(&token_b),
        )
        .await
        .unwrap();
    let list: ResultList<Profile> = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(list.result.len(), 1);
    assert_eq!(list.result[0].handle, reg_a.handle);
    // Relative to B, A follows them back only if B followed A - they did not
    let status = list.result[0].follow_status.as_ref().unwrap();
    assert!(!status.is_follower);
    assert!(status.is_followee);
}

// ============================================================================
// Weet Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_weet() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg, token) = register(&server).await;

    let id = post_weet(&server, &reg, &token, "my very first weet").await;

    let response = server
        .post(&format!("/weets/{id}"), &TokenBody::new(&token))
        .await
        .unwrap();
    let item: ResultItem<WeetResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(item.result.weet, "my very first weet");
    assert_eq!(item.result.author, reg.handle);
    assert_eq!(item.result.user_info.username, reg.username);
    assert!(!item.result.date.is_empty());
    assert!(!item.result.time.is_empty());
}

#[tokio::test]
async fn test_edit_weet_requires_authorship() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg_a, token_a) = register(&server).await;
    let (_, token_b) = register(&server).await;

    let id = post_weet(&server, &reg_a, &token_a, "original text").await;

    // A stranger cannot edit it
    let response = server
        .put(&format!("/weets/{id}"), &WeetBody::new(&token_b, "hijacked"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // The author can
    let response = server
        .put(&format!("/weets/{id}"), &WeetBody::new(&token_a, "edited text"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post(&format!("/weets/{id}"), &TokenBody::new(&token_a))
        .await
        .unwrap();
    let item: ResultItem<WeetResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(item.result.weet, "edited text");
}

#[tokio::test]
async fn test_delete_weet_unknown_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register(&server).await;

    let response = server
        .delete("/weets/999999999", &TokenBody::new(&token))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_reaction_round_trip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg_a, token_a) = register(&server).await;
    let (_, token_b) = register(&server).await;

    let id = post_weet(&server, &reg_a, &token_a, "react to me").await;

    // reweet -> second reweet conflicts
    let path = format!("/weets/{id}/reweet");
    let response = server.post(&path, &TokenBody::new(&token_b)).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
    let response = server.post(&path, &TokenBody::new(&token_b)).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // unreweet restores absence -> second unreweet conflicts
    let path = format!("/weets/{id}/unreweet");
    let response = server.post(&path, &TokenBody::new(&token_b)).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
    let response = server.post(&path, &TokenBody::new(&token_b)).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_stats_count_reaction_edges() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg_a, token_a) = register(&server).await;
    let (_, token_b) = register(&server).await;
    let (_, token_c) = register(&server).await;

    let id = post_weet(&server, &reg_a, &token_a, "count my favorites").await;

    for token in [&token_b, &token_c] {
        let response = server
            .post(&format!("/weets/{id}/favorite"), &TokenBody::new(token))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }
    let response = server
        .post(&format!("/weets/{id}/tab"), &TokenBody::new(&token_b))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post(&format!("/weets/{id}"), &TokenBody::new(&token_b))
        .await
        .unwrap();
    let item: ResultItem<WeetResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(item.result.stats.favorites, 2);
    assert_eq!(item.result.stats.tabs, 1);
    assert_eq!(item.result.stats.reweets, 0);
    // Viewer-relative flags for B
    assert!(item.result.checks.favorited);
    assert!(item.result.checks.tabbed);
    assert!(!item.result.checks.reweeted);
}

#[tokio::test]
async fn test_favorites_listing_newest_first() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg_a, token_a) = register(&server).await;
    let (reg_b, token_b) = register(&server).await;

    let first = post_weet(&server, &reg_a, &token_a, "first weet").await;
    let second = post_weet(&server, &reg_a, &token_a, "second weet").await;

    for id in [first, second] {
        server
            .post(&format!("/weets/{id}/favorite"), &TokenBody::new(&token_b))
            .await
            .unwrap();
    }

    let response = server
        .post(
            &format!("/profile/{}/favorites", reg_b.handle),
            &TokenBody::new(&token_b),
        )
        .await
        .unwrap();
    let list: ResultList<WeetResponse> =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let ids: Vec<i64> = list.result.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![second, first]);
}

// ============================================================================
// Feed Tests
// ============================================================================

#[tokio::test]
async fn test_feed_composition_and_order() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg1, token1) = register(&server).await;
    let (reg2, token2) = register(&server).await;
    let (reg3, token3) = register(&server).await;

    let weet1 = post_weet(&server, &reg1, &token1, "weet by handle1").await;
    let weet2 = post_weet(&server, &reg2, &token2, "weet by handle2").await;
    let _weet3 = post_weet(&server, &reg3, &token3, "weet by handle3").await;

    // handle1 follows handle2 only
    server
        .post(
            &format!("/users/{}/follow", reg2.handle),
            &TokenBody::new(&token1),
        )
        .await
        .unwrap();

    let response = server
        .post("/weets/feed", &TokenBody::new(&token1))
        .await
        .unwrap();
    let list: ResultList<WeetResponse> =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    // Own weet plus handle2's weet, newest first; handle3 excluded
    let ids: Vec<i64> = list.result.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![weet2, weet1]);
}

#[tokio::test]
async fn test_feed_without_follows_equals_own_weets() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg, token) = register(&server).await;

    let id = post_weet(&server, &reg, &token, "only my own weet").await;

    let response = server.post("/weets/feed", &TokenBody::new(&token)).await.unwrap();
    let feed: ResultList<WeetResponse> =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let ids: Vec<i64> = feed.result.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![id]);
}

// ============================================================================
// Search Tests
// ============================================================================

#[tokio::test]
async fn test_search_by_username_substring() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg_a, token_a) = register(&server).await;

    // Usernames are "test username {suffix}"; search for the unique suffix
    let needle = reg_a.username.split(' ').next_back().unwrap().to_string();
    let response = server
        .post(&format!("/users/{needle}"), &TokenBody::new(&token_a))
        .await
        .unwrap();
    let list: ResultList<Profile> = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(list.result.iter().any(|p| p.handle == reg_a.handle));
}

// ============================================================================
// Token Origin Tests
// ============================================================================

#[tokio::test]
async fn test_foreign_signed_token_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg, _) = register(&server).await;

    // Sign a structurally valid token for a real handle, but with a secret
    // the server does not hold
    let foreign = JwtService::new("a-secret-the-server-never-saw");
    let forged = foreign.sign(&reg.handle).unwrap();

    let response = server
        .post(&format!("/profile/{}", reg.handle), &TokenBody::new(&forged))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_missing_token_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg, _) = register(&server).await;

    let response = server
        .post(
            &format!("/profile/{}", reg.handle),
            &serde_json::json!({}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Validation Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_validate_sign_up_reports() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg, _) = register(&server).await;

    // Reuse the taken handle; break every other field
    let response = server
        .post(
            "/validate/sign-up",
            &serde_json::json!({
                "handle": reg.handle,
                "username": "short",
                "password": "weak",
                "email": "not-an-email"
            }),
        )
        .await
        .unwrap();
    let report: ResultItem<SignUpReport> =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(!report.result.handle.is_valid);
    assert!(report
        .result
        .handle
        .messages
        .contains(&"Handle is already in use.".to_string()));
    assert!(!report.result.username.is_valid);
    assert!(!report.result.password.is_valid);
    assert!(!report.result.email.is_valid);
}

#[tokio::test]
async fn test_validate_update_profile_same_new_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg, token) = register(&server).await;

    let response = server
        .post(
            &format!("/validate/update-profile/{}", reg.handle),
            &serde_json::json!({
                "_token": token,
                "username": reg.username,
                "oldPassword": reg.password,
                "newPassword": reg.password,
                "email": reg.email
            }),
        )
        .await
        .unwrap();
    let report: ResultItem<UpdateProfileReport> =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let new_password = report.result.new_password.expect("reported when supplied");
    assert!(!new_password.is_valid);
    assert!(new_password
        .messages
        .contains(&"New password cannot be the same as the old password.".to_string()));

    // The owner's current email must pass the uniqueness rule
    assert!(report.result.email.is_valid);
}

#[tokio::test]
async fn test_validate_update_profile_not_owner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (reg_a, _) = register(&server).await;
    let (reg_b, token_b) = register(&server).await;

    let response = server
        .post(
            &format!("/validate/update-profile/{}", reg_a.handle),
            &serde_json::json!({
                "_token": token_b,
                "username": reg_b.username,
                "email": reg_b.email
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Fallback Tests
// ============================================================================

#[tokio::test]
async fn test_unmatched_route_is_json_404() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/no/such/route").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.status, 404);
}
