// SPDX-License-Identifier: MIT

//! Resource handler tests: user upsert semantics, subscriber conflicts,
//! and the public catalog routes.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use gymwave::models::Role;
use tower::ServiceExt;

mod common;

fn put_user(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_first_sign_in_creates_member() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(put_user(serde_json::json!({
            "email": "new@x.com",
            "name": "Newcomer",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["email"], "new@x.com");
    assert_eq!(body["role"], "member");

    let stored = state.db.get_user("new@x.com").await.unwrap().unwrap();
    assert!(stored.created_at > 0);
}

#[tokio::test]
async fn test_repeat_sign_in_returns_existing_untouched() {
    let (app, state) = common::create_test_app();
    common::seed_user(&state, "a@x.com", Role::Admin).await;

    // Re-sign-in with a different display name must not overwrite anything
    let response = app
        .oneshot(put_user(serde_json::json!({
            "email": "a@x.com",
            "name": "Different Name",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["name"], "Test User");
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
async fn test_requested_status_updates_existing_user() {
    let (app, state) = common::create_test_app();
    common::seed_user(&state, "a@x.com", Role::Member).await;

    let response = app
        .oneshot(put_user(serde_json::json!({
            "email": "a@x.com",
            "name": "Test User",
            "status": "Requested",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let stored = state.db.get_user("a@x.com").await.unwrap().unwrap();
    assert_eq!(
        stored.status,
        Some(gymwave::models::UserStatus::Requested)
    );
    // Only the status changed
    assert_eq!(stored.role, Role::Member);
}

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/users/nobody@x.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_subscriber_conflicts() {
    let (app, state) = common::create_test_app();

    let subscribe = |email: &str| {
        Request::builder()
            .method("POST")
            .uri("/subscribers")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::json!({"name": "Sub", "email": email}).to_string(),
            ))
            .unwrap()
    };

    let first = app.clone().oneshot(subscribe("s@x.com")).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.oneshot(subscribe("s@x.com")).await.unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);

    // No duplicate document was created
    let subscribers = state.db.list_subscribers().await.unwrap();
    assert_eq!(subscribers.len(), 1);
}

#[tokio::test]
async fn test_class_catalog_round_trip() {
    let (app, state) = common::create_test_app();
    common::seed_user(&state, "t@x.com", Role::Trainer).await;
    let cookie = common::auth_cookie("t@x.com", &state.config.jwt_signing_key);

    let create = Request::builder()
        .method("POST")
        .uri("/classes")
        .header(header::COOKIE, cookie)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({"name": "Spin", "duration_minutes": 45}).to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(create).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let ack = common::body_json(response).await;
    let id = ack["inserted_id"].as_str().unwrap().to_string();

    // Public fetch by id; the creating trainer is recorded on the class
    let fetch = Request::builder()
        .method("GET")
        .uri(format!("/classes/{}", id))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(fetch).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let class = common::body_json(response).await;
    assert_eq!(class["name"], "Spin");
    assert_eq!(class["trainer_email"], "t@x.com");

    // Public listing sees it too
    let list = Request::builder()
        .method("GET")
        .uri("/classes")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(list).await.unwrap();
    let classes = common::body_json(response).await;
    assert_eq!(classes.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_reviews_and_articles_are_public() {
    let (app, _) = common::create_test_app();

    let post_review = Request::builder()
        .method("POST")
        .uri("/reviews")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({"name": "Ada", "rating": 5, "comment": "great"}).to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(post_review).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let list = Request::builder()
        .method("GET")
        .uri("/reviews")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(list).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let reviews = common::body_json(response).await;
    assert_eq!(reviews.as_array().unwrap().len(), 1);
    assert_eq!(reviews[0]["rating"], 5);
}
