use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "skill_level", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    None,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Default for SkillLevel {
    fn default() -> Self {
        SkillLevel::Beginner
    }
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Skill {
    pub id: Uuid,
    pub user_id: Uuid,
    pub skill_name: String,
    pub level: SkillLevel,
    pub category: String,
    pub years_experience: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewSkillRequest {
    #[validate(length(min = 1, message = "Skill name cannot be empty"))]
    pub skill_name: String,
    pub level: Option<SkillLevel>,
    pub category: Option<String>,
    pub years_experience: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSkillRequest {
    #[validate(length(min = 1, message = "Skill name cannot be empty"))]
    pub skill_name: Option<String>,
    pub level: Option<SkillLevel>,
    pub category: Option<String>,
    pub years_experience: Option<i32>,
}

impl UpdateSkillRequest {
    pub fn is_empty(&self) -> bool {
        self.skill_name.is_none()
            && self.level.is_none()
            && self.category.is_none()
            && self.years_experience.is_none()
    }
}

#[derive(Debug, Deserialize)]
pub struct BulkSkillsRequest {
    pub skills: Vec<NewSkillRequest>,
}

#[derive(Debug, Serialize)]
pub struct SkillCreatedResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct BulkSkillsResponse {
    pub added: usize,
}
