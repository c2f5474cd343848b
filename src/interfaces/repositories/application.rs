use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::application::{
        Application, ApplicationStats, NewApplicationRequest, UpdateApplicationRequest,
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxApplicationRepo,
};

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    async fn list_applications(&self, user_id: &Uuid, status: Option<&str>) -> Result<Vec<Application>, AppError>;
    async fn get_application(&self, user_id: &Uuid, id: &Uuid) -> Result<Application, AppError>;
    async fn create_application(&self, user_id: &Uuid, app: &NewApplicationRequest) -> Result<Uuid, AppError>;
    async fn update_application(&self, user_id: &Uuid, id: &Uuid, update: &UpdateApplicationRequest) -> Result<(), AppError>;
    async fn delete_application(&self, user_id: &Uuid, id: &Uuid) -> Result<(), AppError>;
    async fn application_stats(&self, user_id: &Uuid) -> Result<ApplicationStats, AppError>;
}

impl SqlxApplicationRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxApplicationRepo { pool }
    }
}

#[async_trait]
impl ApplicationRepository for SqlxApplicationRepo {
    async fn list_applications(&self, user_id: &Uuid, status: Option<&str>) -> Result<Vec<Application>, AppError> {
        sqlx::query_as::<_, Application>(
            r#"
            SELECT * FROM applications
            WHERE user_id = $1 AND ($2::text IS NULL OR status = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_application(&self, user_id: &Uuid, id: &Uuid) -> Result<Application, AppError> {
        sqlx::query_as::<_, Application>("SELECT * FROM applications WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))
    }

    async fn create_application(&self, user_id: &Uuid, app: &NewApplicationRequest) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO applications
                (user_id, company, role, job_url, match_percentage, status, deadline, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(&app.company)
        .bind(&app.role)
        .bind(&app.job_url)
        .bind(app.match_percentage.unwrap_or(0))
        .bind(app.status.as_deref().unwrap_or("saved"))
        .bind(app.deadline)
        .bind(&app.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(id)
    }

    async fn update_application(&self, user_id: &Uuid, id: &Uuid, update: &UpdateApplicationRequest) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE applications SET
                status = COALESCE($3, status),
                match_percentage = COALESCE($4, match_percentage),
                deadline = COALESCE($5, deadline),
                notes = COALESCE($6, notes)
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&update.status)
        .bind(update.match_percentage)
        .bind(update.deadline)
        .bind(&update.notes)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Application not found".to_string()));
        }

        Ok(())
    }

    async fn delete_application(&self, user_id: &Uuid, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Application not found".to_string()));
        }

        Ok(())
    }

    async fn application_stats(&self, user_id: &Uuid) -> Result<ApplicationStats, AppError> {
        sqlx::query_as::<_, ApplicationStats>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'applied') AS applied,
                COUNT(*) FILTER (WHERE status = 'interviewing') AS interviewing,
                COUNT(*) FILTER (WHERE status = 'offer') AS offers,
                COUNT(*) FILTER (WHERE status = 'rejected') AS rejected
            FROM applications WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }
}
