use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planned,
    InProgress,
    Completed,
    Paused,
}

impl FromStr for ProjectStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(ProjectStatus::Planned),
            "in_progress" => Ok(ProjectStatus::InProgress),
            "completed" => Ok(ProjectStatus::Completed),
            "paused" => Ok(ProjectStatus::Paused),
            _ => Err(()),
        }
    }
}

/// Portfolio project. The four jsonb fields are free-form arrays authored by
/// the user or the agent; we store and return them without interpreting.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub user_id: Uuid,
    pub project_title: String,
    pub difficulty: String,
    pub description: String,
    pub skills_used: serde_json::Value,
    pub features: serde_json::Value,
    pub tech_stack: serde_json::Value,
    pub learning_outcomes: serde_json::Value,
    pub resume_value: Option<String>,
    pub status: ProjectStatus,
    pub progress_percentage: i32,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub ai_generated: bool,
    pub original_idea: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewProjectRequest {
    #[validate(length(min = 1, message = "Project title cannot be empty"))]
    pub project_title: String,
    pub difficulty: Option<String>,
    pub description: Option<String>,
    pub skills_used: Option<serde_json::Value>,
    pub features: Option<serde_json::Value>,
    pub tech_stack: Option<serde_json::Value>,
    pub learning_outcomes: Option<serde_json::Value>,
    pub resume_value: Option<String>,
    pub status: Option<ProjectStatus>,
    pub progress_percentage: Option<i32>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    #[serde(default)]
    pub ai_generated: bool,
    pub original_idea: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, message = "Project title cannot be empty"))]
    pub project_title: Option<String>,
    pub difficulty: Option<String>,
    pub description: Option<String>,
    pub skills_used: Option<serde_json::Value>,
    pub features: Option<serde_json::Value>,
    pub tech_stack: Option<serde_json::Value>,
    pub learning_outcomes: Option<serde_json::Value>,
    pub resume_value: Option<String>,
    pub status: Option<ProjectStatus>,
    pub progress_percentage: Option<i32>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl UpdateProjectRequest {
    pub fn is_empty(&self) -> bool {
        self.project_title.is_none()
            && self.difficulty.is_none()
            && self.description.is_none()
            && self.skills_used.is_none()
            && self.features.is_none()
            && self.tech_stack.is_none()
            && self.learning_outcomes.is_none()
            && self.resume_value.is_none()
            && self.status.is_none()
            && self.progress_percentage.is_none()
            && self.github_url.is_none()
            && self.demo_url.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectCreatedResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ProjectStats {
    pub total: i64,
    pub planned: i64,
    pub in_progress: i64,
    pub completed: i64,
    pub paused: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_from_wire_names() {
        assert_eq!("planned".parse(), Ok(ProjectStatus::Planned));
        assert_eq!("in_progress".parse(), Ok(ProjectStatus::InProgress));
        assert!("shipped".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn empty_update_is_detected() {
        let update: UpdateProjectRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(update.is_empty());

        let update: UpdateProjectRequest =
            serde_json::from_value(serde_json::json!({"status": "completed"})).unwrap();
        assert!(!update.is_empty());
    }
}
