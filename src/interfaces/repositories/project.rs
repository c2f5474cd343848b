use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::project::{
        NewProjectRequest, Project, ProjectStats, ProjectStatus, UpdateProjectRequest,
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_projects(&self, user_id: &Uuid, status: Option<ProjectStatus>) -> Result<Vec<Project>, AppError>;
    async fn get_project(&self, user_id: &Uuid, id: &Uuid) -> Result<Project, AppError>;
    async fn create_project(&self, user_id: &Uuid, project: &NewProjectRequest) -> Result<Uuid, AppError>;
    async fn update_project(&self, user_id: &Uuid, id: &Uuid, update: &UpdateProjectRequest) -> Result<(), AppError>;
    async fn delete_project(&self, user_id: &Uuid, id: &Uuid) -> Result<(), AppError>;
    async fn project_stats(&self, user_id: &Uuid) -> Result<ProjectStats, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

fn empty_array() -> serde_json::Value {
    serde_json::Value::Array(Vec::new())
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self, user_id: &Uuid, status: Option<ProjectStatus>) -> Result<Vec<Project>, AppError> {
        sqlx::query_as::<_, Project>(
            r#"
            SELECT * FROM projects
            WHERE user_id = $1 AND ($2::project_status IS NULL OR status = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_project(&self, user_id: &Uuid, id: &Uuid) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    async fn create_project(&self, user_id: &Uuid, project: &NewProjectRequest) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO projects
                (user_id, project_title, difficulty, description, skills_used, features,
                 tech_stack, learning_outcomes, resume_value, status, progress_percentage,
                 github_url, demo_url, ai_generated, original_idea)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(&project.project_title)
        .bind(project.difficulty.as_deref().unwrap_or("Intermediate"))
        .bind(project.description.as_deref().unwrap_or(""))
        .bind(project.skills_used.clone().unwrap_or_else(empty_array))
        .bind(project.features.clone().unwrap_or_else(empty_array))
        .bind(project.tech_stack.clone().unwrap_or_else(empty_array))
        .bind(project.learning_outcomes.clone().unwrap_or_else(empty_array))
        .bind(&project.resume_value)
        .bind(project.status.unwrap_or(ProjectStatus::Planned))
        .bind(project.progress_percentage.unwrap_or(0))
        .bind(&project.github_url)
        .bind(&project.demo_url)
        .bind(project.ai_generated)
        .bind(&project.original_idea)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(id)
    }

    async fn update_project(&self, user_id: &Uuid, id: &Uuid, update: &UpdateProjectRequest) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE projects SET
                project_title = COALESCE($3, project_title),
                difficulty = COALESCE($4, difficulty),
                description = COALESCE($5, description),
                skills_used = COALESCE($6, skills_used),
                features = COALESCE($7, features),
                tech_stack = COALESCE($8, tech_stack),
                learning_outcomes = COALESCE($9, learning_outcomes),
                resume_value = COALESCE($10, resume_value),
                status = COALESCE($11, status),
                progress_percentage = COALESCE($12, progress_percentage),
                github_url = COALESCE($13, github_url),
                demo_url = COALESCE($14, demo_url),
                start_date = COALESCE($15, start_date),
                end_date = COALESCE($16, end_date)
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&update.project_title)
        .bind(&update.difficulty)
        .bind(&update.description)
        .bind(&update.skills_used)
        .bind(&update.features)
        .bind(&update.tech_stack)
        .bind(&update.learning_outcomes)
        .bind(&update.resume_value)
        .bind(update.status)
        .bind(update.progress_percentage)
        .bind(&update.github_url)
        .bind(&update.demo_url)
        .bind(update.start_date)
        .bind(update.end_date)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        Ok(())
    }

    async fn delete_project(&self, user_id: &Uuid, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        Ok(())
    }

    async fn project_stats(&self, user_id: &Uuid) -> Result<ProjectStats, AppError> {
        sqlx::query_as::<_, ProjectStats>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'planned') AS planned,
                COUNT(*) FILTER (WHERE status = 'in_progress') AS in_progress,
                COUNT(*) FILTER (WHERE status = 'completed') AS completed,
                COUNT(*) FILTER (WHERE status = 'paused') AS paused
            FROM projects WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }
}
