use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "goal_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Achieved,
    Paused,
    Abandoned,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "goal_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Goal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub target_role: String,
    pub target_company: Option<String>,
    pub timeline: String,
    pub priority: GoalPriority,
    pub status: GoalStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewGoalRequest {
    #[validate(length(min = 2, message = "Target role must be at least 2 characters"))]
    pub target_role: String,
    pub target_company: Option<String>,
    pub timeline: Option<String>,
    pub priority: Option<GoalPriority>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateGoalRequest {
    #[validate(length(min = 2, message = "Target role must be at least 2 characters"))]
    pub target_role: Option<String>,
    pub target_company: Option<String>,
    pub timeline: Option<String>,
    pub priority: Option<GoalPriority>,
    pub status: Option<GoalStatus>,
    pub notes: Option<String>,
}

impl UpdateGoalRequest {
    pub fn is_empty(&self) -> bool {
        self.target_role.is_none()
            && self.target_company.is_none()
            && self.timeline.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.notes.is_none()
    }
}

#[derive(Debug, Serialize)]
pub struct GoalCreatedResponse {
    pub id: Uuid,
}
