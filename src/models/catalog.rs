//! Class and trainer-profile models.

use serde::{Deserialize, Serialize};

/// A gym class offered on the schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GymClass {
    /// Document ID (uuid)
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Email of the trainer running the class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// When the class was created (Unix ms)
    pub created_at: i64,
}

/// Public trainer profile shown on the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerProfile {
    /// Document ID (uuid)
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialties: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u32>,
}
