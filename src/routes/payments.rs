// SPDX-License-Identifier: MIT

//! Payment intents, payment records, and bookings.
//!
//! All routes here require a session; the caller's identity scopes reads
//! unless an explicit email filter is supplied.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{Booking, Payment};
use crate::routes::InsertAck;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create-payment-intent", post(create_payment_intent))
        .route("/payments", get(list_payments).post(record_payment))
        .route("/bookings", get(list_bookings).post(create_booking))
}

// ─── Payment Intents ─────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateIntentPayload {
    /// Price in major units (dollars)
    price: u64,
}

#[derive(Serialize)]
pub struct IntentResponse {
    pub client_secret: String,
}

/// Create a payment intent with the provider and hand back the client
/// secret for the frontend to confirm.
async fn create_payment_intent(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateIntentPayload>,
) -> Result<Json<IntentResponse>> {
    // Provider wants minor units
    let amount = payload
        .price
        .checked_mul(100)
        .ok_or_else(|| AppError::BadRequest("price too large".to_string()))?;
    let client_secret = state.payments.create_intent(amount, "usd").await?;

    Ok(Json(IntentResponse { client_secret }))
}

// ─── Payments ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RecordPaymentPayload {
    /// Amount in minor units
    amount: u64,
    #[serde(default = "default_currency")]
    currency: String,
    #[serde(default)]
    transaction_id: Option<String>,
}

fn default_currency() -> String {
    "usd".to_string()
}

#[derive(Deserialize)]
pub struct EmailFilter {
    #[serde(default)]
    email: Option<String>,
}

/// Record a completed payment for the authenticated user.
async fn record_payment(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<RecordPaymentPayload>,
) -> Result<Json<InsertAck>> {
    let payment = Payment {
        id: uuid::Uuid::new_v4().to_string(),
        email: user.email,
        amount: payload.amount,
        currency: payload.currency,
        transaction_id: payload.transaction_id,
        created_at: chrono::Utc::now().timestamp_millis(),
    };

    state.db.insert_payment(&payment).await?;

    Ok(Json(InsertAck {
        inserted_id: payment.id,
    }))
}

/// List the caller's payments (or another email's when `email` is given).
async fn list_payments(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(filter): Query<EmailFilter>,
) -> Result<Json<Vec<Payment>>> {
    let email = filter.email.unwrap_or(user.email);
    Ok(Json(state.db.payments_for_email(&email).await?))
}

// ─── Bookings ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateBookingPayload {
    trainer_email: String,
    #[serde(default)]
    class_id: Option<String>,
    #[serde(default)]
    slot: Option<String>,
    /// Price in minor units
    price: u64,
}

/// Book a training slot for the authenticated user.
async fn create_booking(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateBookingPayload>,
) -> Result<Json<InsertAck>> {
    let booking = Booking {
        id: uuid::Uuid::new_v4().to_string(),
        buyer_email: user.email,
        trainer_email: payload.trainer_email,
        class_id: payload.class_id,
        slot: payload.slot,
        price: payload.price,
        created_at: chrono::Utc::now().timestamp_millis(),
    };

    state.db.insert_booking(&booking).await?;

    Ok(Json(InsertAck {
        inserted_id: booking.id,
    }))
}

/// List the caller's bookings (or another buyer's when `email` is given).
async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(filter): Query<EmailFilter>,
) -> Result<Json<Vec<Booking>>> {
    let email = filter.email.unwrap_or(user.email);
    Ok(Json(state.db.bookings_for_email(&email).await?))
}
