use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::goal::{Goal, GoalPriority, NewGoalRequest, UpdateGoalRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxGoalRepo,
};

#[async_trait]
pub trait GoalRepository: Send + Sync {
    async fn list_goals(&self, user_id: &Uuid) -> Result<Vec<Goal>, AppError>;
    async fn get_primary_goal(&self, user_id: &Uuid) -> Result<Option<Goal>, AppError>;
    async fn create_goal(&self, user_id: &Uuid, goal: &NewGoalRequest) -> Result<Uuid, AppError>;
    async fn update_goal(&self, user_id: &Uuid, id: &Uuid, update: &UpdateGoalRequest) -> Result<(), AppError>;
    async fn delete_goal(&self, user_id: &Uuid, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxGoalRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxGoalRepo { pool }
    }
}

#[async_trait]
impl GoalRepository for SqlxGoalRepo {
    async fn list_goals(&self, user_id: &Uuid) -> Result<Vec<Goal>, AppError> {
        sqlx::query_as::<_, Goal>(
            "SELECT * FROM goals WHERE user_id = $1 ORDER BY priority, created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_primary_goal(&self, user_id: &Uuid) -> Result<Option<Goal>, AppError> {
        sqlx::query_as::<_, Goal>(
            r#"
            SELECT * FROM goals
            WHERE user_id = $1 AND status = 'active'
            ORDER BY priority
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn create_goal(&self, user_id: &Uuid, goal: &NewGoalRequest) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO goals (user_id, target_role, target_company, timeline, priority, status, notes)
            VALUES ($1, $2, $3, $4, $5, 'active', $6)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(&goal.target_role)
        .bind(&goal.target_company)
        .bind(goal.timeline.as_deref().unwrap_or("6 months"))
        .bind(goal.priority.unwrap_or(GoalPriority::High))
        .bind(&goal.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(id)
    }

    async fn update_goal(&self, user_id: &Uuid, id: &Uuid, update: &UpdateGoalRequest) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE goals SET
                target_role = COALESCE($3, target_role),
                target_company = COALESCE($4, target_company),
                timeline = COALESCE($5, timeline),
                priority = COALESCE($6, priority),
                status = COALESCE($7, status),
                notes = COALESCE($8, notes)
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&update.target_role)
        .bind(&update.target_company)
        .bind(&update.timeline)
        .bind(update.priority)
        .bind(update.status)
        .bind(&update.notes)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Goal not found".to_string()));
        }

        Ok(())
    }

    async fn delete_goal(&self, user_id: &Uuid, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Goal not found".to_string()));
        }

        Ok(())
    }
}
