// SPDX-License-Identifier: MIT

//! User profile routes.

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{User, UserStatus};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", put(upsert_user).get(list_users))
        .route("/users/{email}", get(get_user))
}

/// Payload for the first-sign-in upsert.
#[derive(Deserialize)]
pub struct UpsertUserPayload {
    email: String,
    name: String,
    #[serde(default)]
    photo_url: Option<String>,
    #[serde(default)]
    status: Option<UserStatus>,
}

/// Save a user on first sign-in, or update an existing one.
///
/// An existing user is returned untouched unless the payload carries
/// `status = Requested`, in which case only the status field is updated.
/// Role and profile fields never come from this endpoint.
async fn upsert_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpsertUserPayload>,
) -> Result<Json<User>> {
    if let Some(mut existing) = state.db.get_user(&payload.email).await? {
        if payload.status == Some(UserStatus::Requested) {
            existing.status = Some(UserStatus::Requested);
            state.db.upsert_user(&existing).await?;
        }
        return Ok(Json(existing));
    }

    let user = User::new(
        payload.email,
        payload.name,
        payload.photo_url,
        chrono::Utc::now().timestamp_millis(),
    );
    state.db.upsert_user(&user).await?;

    tracing::info!(email = %user.email, "Created user on first sign-in");

    Ok(Json(user))
}

/// Get a user by email.
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> Result<Json<User>> {
    let user = state
        .db
        .get_user(&email)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", email)))?;

    Ok(Json(user))
}

/// List all users.
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>> {
    Ok(Json(state.db.list_users().await?))
}
