// SPDX-License-Identifier: MIT

//! Trainer profiles, trainer applications, and the promotion endpoint.

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{TrainerApplication, TrainerProfile};
use crate::routes::{InsertAck, SuccessResponse};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/trainers", get(list_trainers).post(create_trainer))
        .route("/trainers/{id}", get(get_trainer))
}

/// Application submission (requires a session; wired up in routes/mod.rs).
pub fn application_routes() -> Router<Arc<AppState>> {
    Router::new().route("/applied-trainers", post(apply_as_trainer))
}

/// Admin-only application management (wired up in routes/mod.rs).
pub fn admin_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/applied-trainers", get(list_applications))
        .route("/applied-trainers/{id}", get(get_application))
        .route("/applied-trainers/{id}/approve", put(approve_application))
}

// ─── Trainer Profiles ────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateTrainerPayload {
    name: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
    #[serde(default)]
    specialties: Option<Vec<String>>,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default)]
    years_of_experience: Option<u32>,
}

async fn list_trainers(State(state): State<Arc<AppState>>) -> Result<Json<Vec<TrainerProfile>>> {
    Ok(Json(state.db.list_trainers().await?))
}

async fn get_trainer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TrainerProfile>> {
    let trainer = state
        .db
        .get_trainer(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Trainer {} not found", id)))?;

    Ok(Json(trainer))
}

async fn create_trainer(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTrainerPayload>,
) -> Result<Json<InsertAck>> {
    let trainer = TrainerProfile {
        id: uuid::Uuid::new_v4().to_string(),
        name: payload.name,
        email: payload.email,
        photo_url: payload.photo_url,
        specialties: payload.specialties,
        bio: payload.bio,
        years_of_experience: payload.years_of_experience,
    };

    state.db.insert_trainer(&trainer).await?;

    Ok(Json(InsertAck {
        inserted_id: trainer.id,
    }))
}

// ─── Trainer Applications ────────────────────────────────────

#[derive(Deserialize)]
pub struct ApplyTrainerPayload {
    name: String,
    #[serde(default)]
    age: Option<u32>,
    #[serde(default)]
    skills: Option<Vec<String>>,
    #[serde(default)]
    available_time: Option<String>,
    #[serde(default)]
    experience: Option<String>,
}

/// Submit a trainer application for the authenticated user.
///
/// The applicant email comes from the verified session, not the payload.
async fn apply_as_trainer(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<ApplyTrainerPayload>,
) -> Result<Json<InsertAck>> {
    let application = TrainerApplication {
        id: uuid::Uuid::new_v4().to_string(),
        email: user.email,
        name: payload.name,
        age: payload.age,
        skills: payload.skills,
        available_time: payload.available_time,
        experience: payload.experience,
        applied_at: chrono::Utc::now().timestamp_millis(),
    };

    state.db.insert_application(&application).await?;

    tracing::info!(email = %application.email, "Trainer application submitted");

    Ok(Json(InsertAck {
        inserted_id: application.id,
    }))
}

async fn list_applications(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TrainerApplication>>> {
    Ok(Json(state.db.list_applications().await?))
}

async fn get_application(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TrainerApplication>> {
    let application = state
        .db
        .get_application(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {} not found", id)))?;

    Ok(Json(application))
}

/// Approve a pending application, promoting the referenced user.
///
/// The store performs the user update and the application delete as one
/// transaction; a second approval of the same id finds no application and
/// returns 404 instead of re-running the promotion.
async fn approve_application(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>> {
    let promoted = state.db.promote_applicant(&id).await?;
    if !promoted {
        return Err(AppError::NotFound(format!("Application {} not found", id)));
    }

    Ok(Json(SuccessResponse { success: true }))
}
