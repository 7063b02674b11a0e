// SPDX-License-Identifier: MIT

//! HTTP route handlers.

pub mod auth;
pub mod classes;
pub mod community;
pub mod payments;
pub mod trainers;
pub mod users;

use crate::middleware::{require_auth, require_role};
use crate::models::Role;
use crate::AppState;
use axum::http::{header, Method};
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Acknowledgment for successful writes with a generated document ID.
#[derive(Serialize)]
pub struct InsertAck {
    pub inserted_id: String,
}

/// Generic success acknowledgment.
#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Health check response
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS layer - allow requests from frontend URL and localhost (for dev)
    let frontend_url = state.config.frontend_url.clone();
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::AllowOrigin::predicate(
            move |origin: &axum::http::HeaderValue, _request_parts: &axum::http::request::Parts| {
                let origin_str = origin.to_str().unwrap_or("");
                origin_str == frontend_url
                    || origin_str.starts_with("http://localhost")
                    || origin_str.starts_with("http://127.0.0.1")
            },
        ))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .merge(auth::routes())
        .merge(users::routes())
        .merge(classes::routes())
        .merge(trainers::routes())
        .merge(community::routes());

    // Routes requiring a valid session
    let authed_routes = Router::new()
        .merge(trainers::application_routes())
        .merge(payments::routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // Role-gated routes: require_auth runs first (outermost route_layer),
    // then the role gate.
    let trainer_routes = classes::trainer_routes()
        .route_layer(middleware::from_fn_with_state(
            (state.clone(), Role::Trainer),
            require_role,
        ))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let admin_routes = Router::new()
        .merge(community::admin_routes())
        .merge(trainers::admin_routes())
        .route_layer(middleware::from_fn_with_state(
            (state.clone(), Role::Admin),
            require_role,
        ))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(public_routes)
        .merge(authed_routes)
        .merge(trainer_routes)
        .merge(admin_routes)
        .layer(middleware::from_fn(
            crate::middleware::security::add_security_headers,
        ))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
