use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::user::{OnboardingRequest, UpdateProfileRequest, User},
    errors::AppError,
    repositories::sqlx_repo::SqlxProfileRepo,
};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
    async fn get_user(&self, id: &Uuid) -> Result<User, AppError>;
    async fn update_profile(&self, id: &Uuid, update: &UpdateProfileRequest) -> Result<(), AppError>;
    async fn complete_onboarding(&self, id: &Uuid, data: &OnboardingRequest) -> Result<(), AppError>;
}

impl SqlxProfileRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProfileRepo { pool }
    }
}

#[async_trait]
impl ProfileRepository for SqlxProfileRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn get_user(&self, id: &Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    async fn update_profile(&self, id: &Uuid, update: &UpdateProfileRequest) -> Result<(), AppError> {
        // COALESCE preserves existing values when Option::None is provided
        let result = sqlx::query(
            r#"
            UPDATE users SET
                name = COALESCE($2, name),
                education_level = COALESCE($3, education_level),
                target_role = COALESCE($4, target_role),
                career_goal = COALESCE($5, career_goal),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.education_level)
        .bind(&update.target_role)
        .bind(&update.career_goal)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }

    async fn complete_onboarding(&self, id: &Uuid, data: &OnboardingRequest) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                career_goal = COALESCE($2, career_goal),
                education_level = COALESCE($3, education_level),
                target_role = COALESCE($4, target_role),
                onboarding_completed = TRUE,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&data.career_goal)
        .bind(&data.education_level)
        .bind(&data.target_role)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}
