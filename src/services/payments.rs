// SPDX-License-Identifier: MIT

//! Payment provider client (Stripe payment intents).
//!
//! The provider is treated as an opaque collaborator: one call that turns
//! an amount into a client secret. A mock mode returns deterministic
//! secrets so handler tests run offline.

use crate::error::AppError;
use serde::Deserialize;

/// Payment provider client.
#[derive(Clone)]
pub struct PaymentClient {
    http: reqwest::Client,
    base_url: String,
    /// None means mock mode: no network calls are made.
    secret_key: Option<String>,
}

/// Relevant subset of the provider's intent response.
#[derive(Debug, Deserialize)]
struct IntentResponse {
    client_secret: String,
}

impl PaymentClient {
    /// Create a client with a live provider secret key.
    pub fn new(secret_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: "https://api.stripe.com/v1".to_string(),
            secret_key: Some(secret_key),
        }
    }

    /// Create a mock client for testing (offline mode).
    pub fn new_mock() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: "https://api.stripe.com/v1".to_string(),
            secret_key: None,
        }
    }

    /// Create a payment intent and return its client secret.
    ///
    /// `amount` is in minor units (cents).
    pub async fn create_intent(&self, amount: u64, currency: &str) -> Result<String, AppError> {
        let Some(secret_key) = &self.secret_key else {
            // Mock mode: shape matches the real provider's secrets
            return Ok(format!("pi_mock_{}_secret_{}", amount, currency));
        };

        let url = format!("{}/payment_intents", self.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(secret_key)
            .form(&[
                ("amount", amount.to_string()),
                ("currency", currency.to_string()),
                ("payment_method_types[]", "card".to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Payment(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Payment(format!(
                "Intent creation failed ({}): {}",
                status, body
            )));
        }

        let intent: IntentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Payment(e.to_string()))?;

        Ok(intent.client_secret)
    }
}
