use async_trait::async_trait;
use std::borrow::Cow;
use uuid::Uuid;

use crate::{
    entities::skill::{NewSkillRequest, Skill, SkillLevel, UpdateSkillRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxSkillRepo,
};

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list_skills(&self, user_id: &Uuid) -> Result<Vec<Skill>, AppError>;
    async fn add_skill(&self, user_id: &Uuid, skill: &NewSkillRequest) -> Result<Uuid, AppError>;
    async fn upsert_skills(&self, user_id: &Uuid, skills: &[NewSkillRequest]) -> Result<usize, AppError>;
    async fn update_skill(&self, user_id: &Uuid, id: &Uuid, update: &UpdateSkillRequest) -> Result<(), AppError>;
    async fn delete_skill(&self, user_id: &Uuid, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxSkillRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxSkillRepo { pool }
    }
}

#[async_trait]
impl SkillRepository for SqlxSkillRepo {
    async fn list_skills(&self, user_id: &Uuid) -> Result<Vec<Skill>, AppError> {
        sqlx::query_as::<_, Skill>(
            "SELECT * FROM skills WHERE user_id = $1 ORDER BY level DESC, skill_name",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn add_skill(&self, user_id: &Uuid, skill: &NewSkillRequest) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO skills (user_id, skill_name, level, category, years_experience)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(&skill.skill_name)
        .bind(skill.level.unwrap_or_default())
        .bind(skill.category.as_deref().unwrap_or("general"))
        .bind(skill.years_experience.unwrap_or(0))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.code() == Some(Cow::Borrowed("23505")) => {
                AppError::Conflict("Skill already exists for this user".to_string())
            }
            _ => AppError::from(e),
        })?;

        Ok(id)
    }

    async fn upsert_skills(&self, user_id: &Uuid, skills: &[NewSkillRequest]) -> Result<usize, AppError> {
        let mut added = 0;
        for skill in skills {
            sqlx::query(
                r#"
                INSERT INTO skills (user_id, skill_name, level, category, years_experience)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (user_id, skill_name)
                DO UPDATE SET level = EXCLUDED.level, category = EXCLUDED.category
                "#,
            )
            .bind(user_id)
            .bind(&skill.skill_name)
            .bind(skill.level.unwrap_or(SkillLevel::Beginner))
            .bind(skill.category.as_deref().unwrap_or("general"))
            .bind(skill.years_experience.unwrap_or(0))
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

            added += 1;
        }

        Ok(added)
    }

    async fn update_skill(&self, user_id: &Uuid, id: &Uuid, update: &UpdateSkillRequest) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE skills SET
                skill_name = COALESCE($3, skill_name),
                level = COALESCE($4, level),
                category = COALESCE($5, category),
                years_experience = COALESCE($6, years_experience)
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&update.skill_name)
        .bind(update.level)
        .bind(&update.category)
        .bind(update.years_experience)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Skill not found".to_string()));
        }

        Ok(())
    }

    async fn delete_skill(&self, user_id: &Uuid, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Skill not found".to_string()));
        }

        Ok(())
    }
}
