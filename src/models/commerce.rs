//! Booking and payment models.

use serde::{Deserialize, Serialize};

/// A booked training slot, referencing buyer and trainer by email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Document ID (uuid)
    pub id: String,
    pub buyer_email: String,
    pub trainer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<String>,
    /// Price in minor units
    pub price: u64,
    /// When the booking was made (Unix ms)
    pub created_at: i64,
}

/// A completed payment record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Document ID (uuid)
    pub id: String,
    pub email: String,
    /// Amount in minor units
    pub amount: u64,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// When the payment was recorded (Unix ms)
    pub created_at: i64,
}
