use std::collections::HashMap;

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::project::{
        NewProjectRequest, ProjectCreatedResponse, ProjectStatus, UpdateProjectRequest,
    },
    errors::AppError,
    repositories::project::ProjectRepository,
    use_cases::extractors::AuthUser,
    AppState,
};

const DEFAULT_SUGGESTION_COUNT: u32 = 5;

#[instrument(skip(state))]
#[get("/projects")]
pub async fn list_projects(
    state: web::Data<AppState>,
    user: AuthUser,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let status = match query.get("status") {
        Some(raw) => Some(
            raw.parse::<ProjectStatus>()
                .map_err(|_| AppError::BadRequest("Invalid status".to_string()))?,
        ),
        None => None,
    };

    let projects = state.project_repo.list_projects(&user.0, status).await?;

    Ok(HttpResponse::Ok().json(json!({
        "count": projects.len(),
        "projects": projects,
    })))
}

#[instrument(skip(state))]
#[get("/projects/stats")]
pub async fn project_stats(
    state: web::Data<AppState>,
    user: AuthUser,
) -> Result<impl Responder, AppError> {
    let stats = state.project_repo.project_stats(&user.0).await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// Project suggestions are pure agent work; an unreachable agent is a 503.
#[instrument(skip(state))]
#[post("/projects/suggest")]
pub async fn suggest_projects(
    state: web::Data<AppState>,
    user: AuthUser,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let count = query
        .get("count")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(DEFAULT_SUGGESTION_COUNT);

    let result = state.agent.suggest_projects(&user.0, count).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[instrument(skip(state))]
#[get("/projects/{id}")]
pub async fn get_project(
    state: web::Data<AppState>,
    user: AuthUser,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let project = state.project_repo.get_project(&user.0, &id).await?;
    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(state, data))]
#[post("/projects")]
pub async fn create_project(
    state: web::Data<AppState>,
    user: AuthUser,
    data: web::Json<NewProjectRequest>,
) -> Result<impl Responder, AppError> {
    let data = data.into_inner();
    data.validate()?;

    let id = state.project_repo.create_project(&user.0, &data).await?;

    Ok(HttpResponse::Created().json(ProjectCreatedResponse { id }))
}

#[instrument(skip(state, data))]
#[put("/projects/{id}")]
pub async fn update_project(
    state: web::Data<AppState>,
    user: AuthUser,
    id: web::Path<Uuid>,
    data: web::Json<UpdateProjectRequest>,
) -> Result<impl Responder, AppError> {
    let data = data.into_inner();
    data.validate()?;

    if data.is_empty() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }

    state.project_repo.update_project(&user.0, &id, &data).await?;

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Project updated"
    })))
}

#[instrument(skip(state))]
#[delete("/projects/{id}")]
pub async fn delete_project(
    state: web::Data<AppState>,
    user: AuthUser,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    state.project_repo.delete_project(&user.0, &id).await?;

    Ok(HttpResponse::NoContent().finish())
}
