// SPDX-License-Identifier: MIT

use gymwave::config::Config;
use gymwave::db::GymDb;
use gymwave::models::{Role, User};
use gymwave::routes::create_router;
use gymwave::services::PaymentClient;
use gymwave::AppState;
use std::sync::Arc;

/// Create a test app backed by the in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = GymDb::new_memory();
    let payments = PaymentClient::new_mock();

    let state = Arc::new(AppState {
        config,
        db,
        payments,
    });

    (create_router(state.clone()), state)
}

/// Build a session `Cookie` header value for the given email.
#[allow(dead_code)]
pub fn auth_cookie(email: &str, signing_key: &[u8]) -> String {
    let token = gymwave::middleware::auth::create_jwt(email, None, signing_key)
        .expect("Failed to create test JWT");
    format!("token={}", token)
}

/// Store a user document with the given role.
#[allow(dead_code)]
pub async fn seed_user(state: &Arc<AppState>, email: &str, role: Role) {
    let mut user = User::new(email.to_string(), "Test User".to_string(), None, 0);
    user.role = role;
    state.db.upsert_user(&user).await.expect("Failed to seed user");
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(
    response: axum::http::Response<axum::body::Body>,
) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body was not JSON")
}
