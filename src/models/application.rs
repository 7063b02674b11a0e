//! Trainer application model.

use serde::{Deserialize, Serialize};

/// A pending request to be promoted to the trainer role.
///
/// Created on submission, read and deleted as part of the promotion
/// workflow, never updated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerApplication {
    /// Document ID (uuid)
    pub id: String,
    /// Email of the applying user
    pub email: String,
    /// Applicant display name
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    /// When the application was submitted (Unix ms)
    pub applied_at: i64,
}
