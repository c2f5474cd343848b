use std::collections::HashMap;

use actix_web::{get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entities::plan::{
        status_for_progress, task_progress, toggle_task, PlanTask, TaskUpdatedResponse,
        UpdatePlanRequest, UpdateTaskRequest,
    },
    errors::AppError,
    repositories::plan::PlanRepository,
    use_cases::extractors::AuthUser,
    AppState,
};

#[instrument(skip(state))]
#[get("/plans")]
pub async fn list_plans(
    state: web::Data<AppState>,
    user: AuthUser,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let goal_id = match query.get("goal_id") {
        Some(raw) => Some(
            Uuid::parse_str(raw)
                .map_err(|_| AppError::BadRequest("Invalid goal_id".to_string()))?,
        ),
        None => None,
    };

    let plans = state.plan_repo.list_plans(&user.0, goal_id).await?;
    Ok(HttpResponse::Ok().json(plans))
}

#[instrument(skip(state))]
#[get("/plans/current")]
pub async fn current_plan(
    state: web::Data<AppState>,
    user: AuthUser,
) -> Result<impl Responder, AppError> {
    let plan = state.plan_repo.get_current_plan(&user.0).await?;
    Ok(HttpResponse::Ok().json(plan))
}

#[instrument(skip(state))]
#[get("/plans/{id}")]
pub async fn get_plan(
    state: web::Data<AppState>,
    user: AuthUser,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let plan = state.plan_repo.get_plan(&user.0, &id).await?;
    Ok(HttpResponse::Ok().json(plan))
}

#[instrument(skip(state, data))]
#[put("/plans/{id}")]
pub async fn update_plan(
    state: web::Data<AppState>,
    user: AuthUser,
    id: web::Path<Uuid>,
    data: web::Json<UpdatePlanRequest>,
) -> Result<impl Responder, AppError> {
    let data = data.into_inner();
    if data.is_empty() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }

    state.plan_repo.update_plan(&user.0, &id, &data).await?;
    state.readiness.refresh_silently(&user.0).await;

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Plan updated"
    })))
}

/// Toggles a single task, then recomputes the plan's progress and derives
/// the new status from it. Tasks are addressed by array index or by the id
/// the agent supplied; the index takes precedence when both are present.
#[instrument(skip(state, data))]
#[post("/plans/{id}/task")]
pub async fn update_task(
    state: web::Data<AppState>,
    user: AuthUser,
    id: web::Path<Uuid>,
    data: web::Json<UpdateTaskRequest>,
) -> Result<impl Responder, AppError> {
    let data = data.into_inner();
    if data.task_id.is_none() && data.task_index.is_none() {
        return Err(AppError::BadRequest(
            "task_id or task_index is required".to_string(),
        ));
    }

    let plan = state.plan_repo.get_plan(&user.0, &id).await?;
    let mut tasks: Vec<PlanTask> =
        serde_json::from_value(plan.tasks.clone()).unwrap_or_default();

    if !toggle_task(&mut tasks, data.task_id, data.task_index, data.completed) {
        return Err(AppError::NotFound("Task not found".to_string()));
    }

    let progress = task_progress(&tasks);
    let status = status_for_progress(progress);
    let serialized = serde_json::to_value(&tasks)?;

    state
        .plan_repo
        .set_tasks(&user.0, &id, &serialized, progress, status)
        .await?;
    state.readiness.refresh_silently(&user.0).await;

    Ok(HttpResponse::Ok().json(TaskUpdatedResponse {
        progress,
        status,
        tasks,
    }))
}

#[instrument(skip(state))]
#[get("/plans/summary")]
pub async fn roadmap_summary(
    state: web::Data<AppState>,
    user: AuthUser,
) -> Result<impl Responder, AppError> {
    let summary = state.plan_repo.roadmap_summary(&user.0).await?;
    Ok(HttpResponse::Ok().json(summary))
}
