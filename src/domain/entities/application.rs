use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Application {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company: String,
    pub role: String,
    pub job_url: Option<String>,
    pub match_percentage: i32,
    pub status: String,
    pub deadline: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewApplicationRequest {
    #[validate(length(min = 1, message = "Company cannot be empty"))]
    pub company: String,
    #[validate(length(min = 1, message = "Role cannot be empty"))]
    pub role: String,
    pub job_url: Option<String>,
    pub match_percentage: Option<i32>,
    pub status: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateApplicationRequest {
    pub status: Option<String>,
    pub match_percentage: Option<i32>,
    pub deadline: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl UpdateApplicationRequest {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.match_percentage.is_none()
            && self.deadline.is_none()
            && self.notes.is_none()
    }
}

#[derive(Debug, Serialize)]
pub struct ApplicationCreatedResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ApplicationStats {
    pub total: i64,
    pub applied: i64,
    pub interviewing: i64,
    pub offers: i64,
    pub rejected: i64,
}
