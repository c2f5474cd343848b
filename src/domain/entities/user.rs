use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use validator::Validate;
use uuid::Uuid;

use crate::entities::skill::Skill;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub education_level: Option<String>,
    pub target_role: Option<String>,
    pub career_goal: Option<String>,
    pub readiness_score: i32,
    pub onboarding_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full profile payload: the user row plus their skills.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub user: User,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    pub education_level: Option<String>,
    pub target_role: Option<String>,
    pub career_goal: Option<String>,
}

impl UpdateProfileRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.education_level.is_none()
            && self.target_role.is_none()
            && self.career_goal.is_none()
    }

    /// True when the update touches a field that feeds the readiness score.
    pub fn touches_readiness_inputs(&self) -> bool {
        self.education_level.is_some()
            || self.target_role.is_some()
            || self.career_goal.is_some()
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileUpdatedResponse {
    pub status: String,
    pub message: String,
    pub agent_triggered: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct OnboardingRequest {
    pub career_goal: Option<String>,
    pub education_level: Option<String>,
    #[validate(length(min = 2, message = "Target role must be at least 2 characters"))]
    pub target_role: Option<String>,
    pub timeline: Option<String>,
    #[serde(default)]
    pub skills: Vec<crate::entities::skill::NewSkillRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_is_detected() {
        let req = UpdateProfileRequest {
            name: None,
            education_level: None,
            target_role: None,
            career_goal: None,
        };
        assert!(req.is_empty());
        assert!(!req.touches_readiness_inputs());
    }

    #[test]
    fn name_only_update_does_not_touch_readiness_inputs() {
        let req = UpdateProfileRequest {
            name: Some("Ada".into()),
            education_level: None,
            target_role: None,
            career_goal: None,
        };
        assert!(!req.is_empty());
        assert!(!req.touches_readiness_inputs());
    }

    #[test]
    fn education_update_touches_readiness_inputs() {
        let req = UpdateProfileRequest {
            name: None,
            education_level: Some("PhD".into()),
            target_role: None,
            career_goal: None,
        };
        assert!(req.touches_readiness_inputs());
    }
}
