//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// Coarse permission tier attached to a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Trainer,
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::Member
    }
}

/// Account status, driven by the trainer-application flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    /// User has applied to become a trainer
    Requested,
    /// Application was approved
    Verified,
}

/// User profile stored in the document store (keyed by email).
///
/// Keying the document by email is what enforces the at-most-one-user-per-
/// email invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Email address (also used as document ID)
    pub email: String,
    /// Display name
    pub name: String,
    /// Profile picture URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Permission tier; absent in stored documents means `member`
    #[serde(default)]
    pub role: Role,
    /// Trainer-application status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    /// When the user first signed in (Unix ms)
    pub created_at: i64,

    // Trainer profile fields, merged in at promotion time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
}

impl User {
    /// Create a fresh member account for a first sign-in.
    pub fn new(email: String, name: String, photo_url: Option<String>, created_at: i64) -> Self {
        Self {
            email,
            name,
            photo_url,
            role: Role::default(),
            status: None,
            created_at,
            age: None,
            skills: None,
            available_time: None,
            experience: None,
        }
    }

    /// Apply an approved trainer application: set the trainer role and merge
    /// the application's profile fields onto this record. Fields the
    /// application leaves empty are kept as-is.
    pub fn apply_promotion(&mut self, app: &crate::models::TrainerApplication) {
        self.role = Role::Trainer;
        self.status = Some(UserStatus::Verified);
        if app.age.is_some() {
            self.age = app.age;
        }
        if let Some(skills) = &app.skills {
            self.skills = Some(skills.clone());
        }
        if let Some(available_time) = &app.available_time {
            self.available_time = Some(available_time.clone());
        }
        if let Some(experience) = &app.experience {
            self.experience = Some(experience.clone());
        }
    }
}
