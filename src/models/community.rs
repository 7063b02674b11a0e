//! Review, article and subscriber models.

use serde::{Deserialize, Serialize};

/// A member review shown on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Document ID (uuid)
    pub id: String,
    pub name: String,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A blog article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Document ID (uuid)
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// When the article was posted (Unix ms)
    pub published_at: i64,
}

/// Newsletter subscriber (keyed by email).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    pub name: String,
    pub email: String,
}
