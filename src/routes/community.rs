// SPDX-License-Identifier: MIT

//! Reviews, articles, and newsletter subscribers.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{Article, Review, Subscriber};
use crate::routes::InsertAck;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/reviews", get(list_reviews).post(create_review))
        .route("/articles", get(list_articles).post(create_article))
        .route("/subscribers", post(subscribe))
}

/// Admin-only subscriber listing (wired up in routes/mod.rs).
pub fn admin_routes() -> Router<Arc<AppState>> {
    Router::new().route("/subscribers", get(list_subscribers))
}

// ─── Reviews ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateReviewPayload {
    name: String,
    rating: u8,
    #[serde(default)]
    comment: Option<String>,
}

async fn list_reviews(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Review>>> {
    Ok(Json(state.db.list_reviews().await?))
}

async fn create_review(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateReviewPayload>,
) -> Result<Json<InsertAck>> {
    let review = Review {
        id: uuid::Uuid::new_v4().to_string(),
        name: payload.name,
        rating: payload.rating,
        comment: payload.comment,
    };

    state.db.insert_review(&review).await?;

    Ok(Json(InsertAck {
        inserted_id: review.id,
    }))
}

// ─── Articles ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateArticlePayload {
    title: String,
    content: String,
    #[serde(default)]
    author: Option<String>,
}

async fn list_articles(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Article>>> {
    Ok(Json(state.db.list_articles().await?))
}

async fn create_article(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateArticlePayload>,
) -> Result<Json<InsertAck>> {
    let article = Article {
        id: uuid::Uuid::new_v4().to_string(),
        title: payload.title,
        content: payload.content,
        author: payload.author,
        published_at: chrono::Utc::now().timestamp_millis(),
    };

    state.db.insert_article(&article).await?;

    Ok(Json(InsertAck {
        inserted_id: article.id,
    }))
}

// ─── Subscribers ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SubscribePayload {
    name: String,
    email: String,
}

/// Subscribe to the newsletter. A second subscription with the same email
/// is rejected without creating a duplicate document.
async fn subscribe(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubscribePayload>,
) -> Result<Json<InsertAck>> {
    if state.db.get_subscriber(&payload.email).await?.is_some() {
        return Err(AppError::Conflict(format!(
            "{} is already subscribed",
            payload.email
        )));
    }

    let subscriber = Subscriber {
        name: payload.name,
        email: payload.email,
    };
    state.db.insert_subscriber(&subscriber).await?;

    Ok(Json(InsertAck {
        inserted_id: subscriber.email,
    }))
}

async fn list_subscribers(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Subscriber>>> {
    Ok(Json(state.db.list_subscribers().await?))
}
