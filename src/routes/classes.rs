// SPDX-License-Identifier: MIT

//! Class catalog routes. Creation is trainer-gated.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::GymClass;
use crate::routes::InsertAck;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/classes", get(list_classes))
        .route("/classes/{id}", get(get_class))
}

/// Routes gated behind the trainer role (wired up in routes/mod.rs).
pub fn trainer_routes() -> Router<Arc<AppState>> {
    Router::new().route("/classes", post(create_class))
}

#[derive(Deserialize)]
pub struct CreateClassPayload {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    duration_minutes: Option<u32>,
    #[serde(default)]
    image_url: Option<String>,
}

/// List all classes.
async fn list_classes(State(state): State<Arc<AppState>>) -> Result<Json<Vec<GymClass>>> {
    Ok(Json(state.db.list_classes().await?))
}

/// Get a class by id.
async fn get_class(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<GymClass>> {
    let class = state
        .db
        .get_class(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Class {} not found", id)))?;

    Ok(Json(class))
}

/// Create a class. The owning trainer is the authenticated caller.
async fn create_class(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateClassPayload>,
) -> Result<Json<InsertAck>> {
    let class = GymClass {
        id: uuid::Uuid::new_v4().to_string(),
        name: payload.name,
        description: payload.description,
        trainer_email: Some(user.email),
        duration_minutes: payload.duration_minutes,
        image_url: payload.image_url,
        created_at: chrono::Utc::now().timestamp_millis(),
    };

    state.db.insert_class(&class).await?;

    Ok(Json(InsertAck {
        inserted_id: class.id,
    }))
}
