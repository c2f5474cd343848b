use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    domain::readiness::{ReadinessBreakdown, ReadinessInputs},
    entities::readiness::ReadinessSnapshot,
    errors::AppError,
    repositories::sqlx_repo::SqlxReadinessRepo,
    use_cases::readiness::ReadinessStore,
};

impl SqlxReadinessRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxReadinessRepo { pool }
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

#[async_trait]
impl ReadinessStore for SqlxReadinessRepo {
    async fn load_inputs(&self, user_id: &Uuid) -> Result<ReadinessInputs, AppError> {
        let user: Option<(Option<String>, Option<String>, Option<String>)> = sqlx::query_as(
            "SELECT education_level, target_role, career_goal FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        let (education_level, target_role, career_goal) =
            user.ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let skill_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM skills WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;

        let active_goal_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM goals WHERE user_id = $1 AND status = 'active'")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::from)?;

        let (total_plans, completed_plans): (i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*), COUNT(*) FILTER (WHERE status = 'completed')
            FROM plans WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        let application_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM applications WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::from)?;

        Ok(ReadinessInputs {
            skill_count: skill_count as u32,
            education_level,
            active_goal_count: active_goal_count as u32,
            target_role_set: is_set(&target_role),
            career_goal_set: is_set(&career_goal),
            total_plans: total_plans as u32,
            completed_plans: completed_plans as u32,
            application_count: application_count as u32,
        })
    }

    /// Snapshot insert and cached-score update commit together; a failure in
    /// either statement rolls back both.
    async fn persist(
        &self,
        user_id: &Uuid,
        breakdown: &ReadinessBreakdown,
    ) -> Result<ReadinessSnapshot, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::from)?;

        let snapshot = sqlx::query_as::<_, ReadinessSnapshot>(
            r#"
            INSERT INTO career_readiness
                (user_id, score, skills_score, education_score, goals_score,
                 progress_score, applications_score)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(breakdown.overall)
        .bind(breakdown.skills)
        .bind(breakdown.education)
        .bind(breakdown.goals)
        .bind(breakdown.progress)
        .bind(breakdown.applications)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::from)?;

        let result = sqlx::query(
            "UPDATE users SET readiness_score = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(user_id)
        .bind(breakdown.overall)
        .execute(&mut *tx)
        .await
        .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tx.commit().await.map_err(AppError::from)?;

        Ok(snapshot)
    }

    async fn history(&self, user_id: &Uuid, limit: i64) -> Result<Vec<ReadinessSnapshot>, AppError> {
        sqlx::query_as::<_, ReadinessSnapshot>(
            r#"
            SELECT * FROM career_readiness
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }
}
