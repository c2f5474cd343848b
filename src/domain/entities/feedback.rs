use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Feedback {
    pub id: Uuid,
    pub user_id: Uuid,
    pub source: String,
    pub company: Option<String>,
    pub role: Option<String>,
    pub message: String,
    pub sentiment: String,
    pub interview_type: Option<String>,
    pub stage: Option<String>,
    pub analysis: Option<String>,
    pub action_items: serde_json::Value,
    pub analyzed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewFeedbackRequest {
    #[validate(length(min = 1, message = "Source cannot be empty"))]
    pub source: String,
    #[validate(length(min = 5, message = "Message must be at least 5 characters"))]
    pub message: String,
    pub company: Option<String>,
    pub role: Option<String>,
    pub sentiment: Option<String>,
    pub interview_type: Option<String>,
    pub stage: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFeedbackRequest {
    pub analysis: Option<String>,
    pub sentiment: Option<String>,
    pub action_items: Option<serde_json::Value>,
}

impl UpdateFeedbackRequest {
    pub fn is_empty(&self) -> bool {
        self.analysis.is_none() && self.sentiment.is_none() && self.action_items.is_none()
    }
}

#[derive(Debug, Serialize)]
pub struct FeedbackCreatedResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct FeedbackStats {
    pub total: i64,
    pub rejections: i64,
    pub interviews: i64,
    pub positive: i64,
    pub negative: i64,
}
