use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::plan::{AgentWeeklyPlan, Plan, PlanStatus, RoadmapSummary, UpdatePlanRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxPlanRepo,
};

#[async_trait]
pub trait PlanRepository: Send + Sync {
    async fn list_plans(&self, user_id: &Uuid, goal_id: Option<Uuid>) -> Result<Vec<Plan>, AppError>;
    async fn get_plan(&self, user_id: &Uuid, id: &Uuid) -> Result<Plan, AppError>;
    async fn get_current_plan(&self, user_id: &Uuid) -> Result<Option<Plan>, AppError>;
    async fn update_plan(&self, user_id: &Uuid, id: &Uuid, update: &UpdatePlanRequest) -> Result<(), AppError>;
    async fn set_tasks(
        &self,
        user_id: &Uuid,
        id: &Uuid,
        tasks: &serde_json::Value,
        progress: i32,
        status: PlanStatus,
    ) -> Result<(), AppError>;
    async fn roadmap_summary(&self, user_id: &Uuid) -> Result<RoadmapSummary, AppError>;
    async fn replace_goal_plans(
        &self,
        user_id: &Uuid,
        goal_id: Option<Uuid>,
        plans: &[AgentWeeklyPlan],
    ) -> Result<usize, AppError>;
}

impl SqlxPlanRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxPlanRepo { pool }
    }
}

#[async_trait]
impl PlanRepository for SqlxPlanRepo {
    async fn list_plans(&self, user_id: &Uuid, goal_id: Option<Uuid>) -> Result<Vec<Plan>, AppError> {
        sqlx::query_as::<_, Plan>(
            r#"
            SELECT * FROM plans
            WHERE user_id = $1 AND ($2::uuid IS NULL OR goal_id = $2)
            ORDER BY week_number
            "#,
        )
        .bind(user_id)
        .bind(goal_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_plan(&self, user_id: &Uuid, id: &Uuid) -> Result<Plan, AppError> {
        sqlx::query_as::<_, Plan>("SELECT * FROM plans WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::NotFound("Plan not found".to_string()))
    }

    async fn get_current_plan(&self, user_id: &Uuid) -> Result<Option<Plan>, AppError> {
        sqlx::query_as::<_, Plan>(
            r#"
            SELECT * FROM plans
            WHERE user_id = $1 AND status IN ('pending', 'in_progress')
            ORDER BY week_number
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn update_plan(&self, user_id: &Uuid, id: &Uuid, update: &UpdatePlanRequest) -> Result<(), AppError> {
        let tasks = update
            .tasks
            .as_ref()
            .map(serde_json::to_value)
            .transpose()?;

        let result = sqlx::query(
            r#"
            UPDATE plans SET
                status = COALESCE($3, status),
                progress_percentage = COALESCE($4, progress_percentage),
                tasks = COALESCE($5, tasks)
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(update.status)
        .bind(update.progress_percentage)
        .bind(tasks)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Plan not found".to_string()));
        }

        Ok(())
    }

    async fn set_tasks(
        &self,
        user_id: &Uuid,
        id: &Uuid,
        tasks: &serde_json::Value,
        progress: i32,
        status: PlanStatus,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE plans SET tasks = $3, progress_percentage = $4, status = $5
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(tasks)
        .bind(progress)
        .bind(status)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Plan not found".to_string()));
        }

        Ok(())
    }

    async fn roadmap_summary(&self, user_id: &Uuid) -> Result<RoadmapSummary, AppError> {
        let (total_weeks, completed_weeks, current_weeks, avg_progress): (i64, i64, i64, f64) =
            sqlx::query_as(
                r#"
                SELECT
                    COUNT(*) AS total_weeks,
                    COUNT(*) FILTER (WHERE status = 'completed') AS completed_weeks,
                    COUNT(*) FILTER (WHERE status = 'in_progress') AS current_weeks,
                    COALESCE(AVG(progress_percentage), 0)::float8 AS avg_progress
                FROM plans WHERE user_id = $1
                "#,
            )
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;

        let task_lists: Vec<(serde_json::Value,)> =
            sqlx::query_as("SELECT tasks FROM plans WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::from)?;

        let mut total_tasks = 0;
        let mut completed_tasks = 0;
        for (tasks,) in &task_lists {
            if let Some(items) = tasks.as_array() {
                total_tasks += items.len();
                completed_tasks += items
                    .iter()
                    .filter(|t| t.get("completed").and_then(|c| c.as_bool()).unwrap_or(false))
                    .count();
            }
        }

        let task_completion_rate = if total_tasks > 0 {
            (completed_tasks as f64 / total_tasks as f64 * 100.0).round() as i64
        } else {
            0
        };

        Ok(RoadmapSummary {
            total_weeks,
            completed_weeks,
            current_weeks,
            avg_progress: avg_progress.round() as i64,
            total_tasks,
            completed_tasks,
            task_completion_rate,
        })
    }

    async fn replace_goal_plans(
        &self,
        user_id: &Uuid,
        goal_id: Option<Uuid>,
        plans: &[AgentWeeklyPlan],
    ) -> Result<usize, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::from)?;

        if let Some(goal_id) = goal_id {
            sqlx::query("DELETE FROM plans WHERE user_id = $1 AND goal_id = $2")
                .bind(user_id)
                .bind(goal_id)
                .execute(&mut *tx)
                .await
                .map_err(AppError::from)?;
        }

        for plan in plans {
            sqlx::query(
                r#"
                INSERT INTO plans
                    (user_id, goal_id, week_number, title, description, tasks, milestones, ai_notes, status)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'pending')
                "#,
            )
            .bind(user_id)
            .bind(goal_id)
            .bind(plan.week_number)
            .bind(&plan.title)
            .bind(&plan.description)
            .bind(&plan.tasks)
            .bind(&plan.milestones)
            .bind(&plan.ai_notes)
            .execute(&mut *tx)
            .await
            .map_err(AppError::from)?;
        }

        tx.commit().await.map_err(AppError::from)?;

        Ok(plans.len())
    }
}
