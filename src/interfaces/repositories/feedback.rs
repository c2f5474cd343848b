use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::feedback::{Feedback, FeedbackStats, NewFeedbackRequest, UpdateFeedbackRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxFeedbackRepo,
};

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn list_feedback(&self, user_id: &Uuid, source: Option<&str>, limit: i64) -> Result<Vec<Feedback>, AppError>;
    async fn get_feedback(&self, user_id: &Uuid, id: &Uuid) -> Result<Feedback, AppError>;
    async fn create_feedback(&self, user_id: &Uuid, feedback: &NewFeedbackRequest) -> Result<Uuid, AppError>;
    async fn update_feedback(&self, user_id: &Uuid, id: &Uuid, update: &UpdateFeedbackRequest) -> Result<(), AppError>;
    async fn delete_feedback(&self, user_id: &Uuid, id: &Uuid) -> Result<(), AppError>;
    async fn feedback_stats(&self, user_id: &Uuid) -> Result<FeedbackStats, AppError>;
}

impl SqlxFeedbackRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxFeedbackRepo { pool }
    }
}

#[async_trait]
impl FeedbackRepository for SqlxFeedbackRepo {
    async fn list_feedback(&self, user_id: &Uuid, source: Option<&str>, limit: i64) -> Result<Vec<Feedback>, AppError> {
        sqlx::query_as::<_, Feedback>(
            r#"
            SELECT * FROM feedback
            WHERE user_id = $1 AND ($2::text IS NULL OR source = $2)
            ORDER BY created_at DESC
            LIMIT $3
            "#,
        )
        .bind(user_id)
        .bind(source)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_feedback(&self, user_id: &Uuid, id: &Uuid) -> Result<Feedback, AppError> {
        sqlx::query_as::<_, Feedback>("SELECT * FROM feedback WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::NotFound("Feedback not found".to_string()))
    }

    async fn create_feedback(&self, user_id: &Uuid, feedback: &NewFeedbackRequest) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO feedback
                (user_id, source, company, role, message, sentiment, interview_type, stage)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(&feedback.source)
        .bind(&feedback.company)
        .bind(&feedback.role)
        .bind(&feedback.message)
        .bind(feedback.sentiment.as_deref().unwrap_or("neutral"))
        .bind(&feedback.interview_type)
        .bind(&feedback.stage)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(id)
    }

    async fn update_feedback(&self, user_id: &Uuid, id: &Uuid, update: &UpdateFeedbackRequest) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE feedback SET
                analysis = COALESCE($3, analysis),
                sentiment = COALESCE($4, sentiment),
                action_items = COALESCE($5, action_items),
                analyzed = CASE WHEN $3 IS NOT NULL THEN TRUE ELSE analyzed END
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&update.analysis)
        .bind(&update.sentiment)
        .bind(&update.action_items)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Feedback not found".to_string()));
        }

        Ok(())
    }

    async fn delete_feedback(&self, user_id: &Uuid, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM feedback WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Feedback not found".to_string()));
        }

        Ok(())
    }

    async fn feedback_stats(&self, user_id: &Uuid) -> Result<FeedbackStats, AppError> {
        sqlx::query_as::<_, FeedbackStats>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE source = 'rejection') AS rejections,
                COUNT(*) FILTER (WHERE source = 'interview') AS interviews,
                COUNT(*) FILTER (WHERE sentiment = 'positive') AS positive,
                COUNT(*) FILTER (WHERE sentiment = 'negative') AS negative
            FROM feedback WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }
}
