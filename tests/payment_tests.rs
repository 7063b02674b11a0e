// SPDX-License-Identifier: MIT

//! Payment intent, payment record, and booking tests (mock provider).

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_payment_intent_requires_session() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/create-payment-intent")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::json!({"price": 50}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_payment_intent_returns_client_secret() {
    let (app, state) = common::create_test_app();
    let cookie = common::auth_cookie("buyer@x.com", &state.config.jwt_signing_key);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/create-payment-intent")
                .header(header::COOKIE, cookie)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::json!({"price": 50}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert!(body["client_secret"].as_str().unwrap().contains("secret"));
}

#[tokio::test]
async fn test_payment_intent_rejects_overflowing_price() {
    let (app, state) = common::create_test_app();
    let cookie = common::auth_cookie("buyer@x.com", &state.config.jwt_signing_key);

    // u64::MAX is a valid value for the price field but cannot be converted
    // to minor units without overflowing.
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/create-payment-intent")
                .header(header::COOKIE, cookie)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({"price": u64::MAX}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_payment_record_round_trip() {
    let (app, state) = common::create_test_app();
    let cookie = common::auth_cookie("buyer@x.com", &state.config.jwt_signing_key);

    let record = Request::builder()
        .method("POST")
        .uri("/payments")
        .header(header::COOKIE, cookie.clone())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({"amount": 5000, "transaction_id": "tx_1"}).to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(record).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let list = Request::builder()
        .method("GET")
        .uri("/payments?email=buyer@x.com")
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(list).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let payments = common::body_json(response).await;
    assert_eq!(payments.as_array().unwrap().len(), 1);
    assert_eq!(payments[0]["email"], "buyer@x.com");
    assert_eq!(payments[0]["amount"], 5000);
}

#[tokio::test]
async fn test_payments_listing_defaults_to_caller() {
    let (app, state) = common::create_test_app();
    let buyer_cookie = common::auth_cookie("buyer@x.com", &state.config.jwt_signing_key);
    let other_cookie = common::auth_cookie("other@x.com", &state.config.jwt_signing_key);

    let record = Request::builder()
        .method("POST")
        .uri("/payments")
        .header(header::COOKIE, buyer_cookie.clone())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({"amount": 5000, "transaction_id": "tx_1"}).to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(record).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Without an email filter the buyer sees their own payment
    let mine = Request::builder()
        .method("GET")
        .uri("/payments")
        .header(header::COOKIE, buyer_cookie)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(mine).await.unwrap();
    let payments = common::body_json(response).await;
    assert_eq!(payments.as_array().unwrap().len(), 1);

    // A different caller's default listing is empty, not the whole store
    let theirs = Request::builder()
        .method("GET")
        .uri("/payments")
        .header(header::COOKIE, other_cookie)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(theirs).await.unwrap();
    let payments = common::body_json(response).await;
    assert!(payments.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_bookings_scoped_to_caller() {
    let (app, state) = common::create_test_app();
    let buyer_cookie = common::auth_cookie("buyer@x.com", &state.config.jwt_signing_key);
    let other_cookie = common::auth_cookie("other@x.com", &state.config.jwt_signing_key);

    let book = Request::builder()
        .method("POST")
        .uri("/bookings")
        .header(header::COOKIE, buyer_cookie.clone())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({
                "trainer_email": "t@x.com",
                "slot": "mon-9am",
                "price": 2500,
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(book).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The buyer sees their booking
    let mine = Request::builder()
        .method("GET")
        .uri("/bookings")
        .header(header::COOKIE, buyer_cookie)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(mine).await.unwrap();
    let bookings = common::body_json(response).await;
    assert_eq!(bookings.as_array().unwrap().len(), 1);
    assert_eq!(bookings[0]["trainer_email"], "t@x.com");

    // A different caller's default listing is empty
    let theirs = Request::builder()
        .method("GET")
        .uri("/bookings")
        .header(header::COOKIE, other_cookie)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(theirs).await.unwrap();
    let bookings = common::body_json(response).await;
    assert!(bookings.as_array().unwrap().is_empty());
}
