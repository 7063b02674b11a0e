// SPDX-License-Identifier: MIT

//! Role gate tests.
//!
//! The gate looks the user up on every request, so these also check that a
//! role change takes effect immediately without a new token.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use gymwave::models::Role;
use tower::ServiceExt;

mod common;

fn admin_request(cookie: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/subscribers")
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

fn trainer_request(cookie: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/classes")
        .header(header::COOKIE, cookie)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({"name": "Spin"}).to_string(),
        ))
        .unwrap()
}

#[tokio::test]
async fn test_admin_gate_denies_unknown_user() {
    let (app, state) = common::create_test_app();
    let cookie = common::auth_cookie("ghost@x.com", &state.config.jwt_signing_key);

    let response = app.oneshot(admin_request(&cookie)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_gate_denies_member() {
    let (app, state) = common::create_test_app();
    common::seed_user(&state, "m@x.com", Role::Member).await;
    let cookie = common::auth_cookie("m@x.com", &state.config.jwt_signing_key);

    let response = app.oneshot(admin_request(&cookie)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_gate_denies_trainer() {
    let (app, state) = common::create_test_app();
    common::seed_user(&state, "t@x.com", Role::Trainer).await;
    let cookie = common::auth_cookie("t@x.com", &state.config.jwt_signing_key);

    let response = app.oneshot(admin_request(&cookie)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_gate_allows_admin() {
    let (app, state) = common::create_test_app();
    common::seed_user(&state, "boss@x.com", Role::Admin).await;
    let cookie = common::auth_cookie("boss@x.com", &state.config.jwt_signing_key);

    let response = app.oneshot(admin_request(&cookie)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_trainer_gate_denies_member_and_allows_trainer() {
    let (app, state) = common::create_test_app();
    common::seed_user(&state, "m@x.com", Role::Member).await;
    common::seed_user(&state, "t@x.com", Role::Trainer).await;

    let member_cookie = common::auth_cookie("m@x.com", &state.config.jwt_signing_key);
    let trainer_cookie = common::auth_cookie("t@x.com", &state.config.jwt_signing_key);

    let denied = app
        .clone()
        .oneshot(trainer_request(&member_cookie))
        .await
        .unwrap();
    assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);

    let allowed = app.oneshot(trainer_request(&trainer_cookie)).await.unwrap();
    assert_eq!(allowed.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_role_change_applies_on_next_request() {
    let (app, state) = common::create_test_app();
    common::seed_user(&state, "a@x.com", Role::Member).await;
    let cookie = common::auth_cookie("a@x.com", &state.config.jwt_signing_key);

    let denied = app.clone().oneshot(admin_request(&cookie)).await.unwrap();
    assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);

    // Grant the role directly in the store; the same token must now pass.
    common::seed_user(&state, "a@x.com", Role::Admin).await;

    let allowed = app.oneshot(admin_request(&cookie)).await.unwrap();
    assert_eq!(allowed.status(), StatusCode::OK);
}
