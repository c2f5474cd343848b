use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::goal::{GoalCreatedResponse, NewGoalRequest, UpdateGoalRequest},
    errors::AppError,
    repositories::goal::GoalRepository,
    use_cases::extractors::AuthUser,
    AppState,
};

#[instrument(skip(state))]
#[get("/goals")]
pub async fn list_goals(
    state: web::Data<AppState>,
    user: AuthUser,
) -> Result<impl Responder, AppError> {
    let goals = state.goal_repo.list_goals(&user.0).await?;
    Ok(HttpResponse::Ok().json(goals))
}

/// The primary goal is the highest-priority active goal, or `null` when the
/// user has none.
#[instrument(skip(state))]
#[get("/goals/primary")]
pub async fn get_primary_goal(
    state: web::Data<AppState>,
    user: AuthUser,
) -> Result<impl Responder, AppError> {
    let goal = state.goal_repo.get_primary_goal(&user.0).await?;
    Ok(HttpResponse::Ok().json(goal))
}

#[instrument(skip(state, data))]
#[post("/goals")]
pub async fn create_goal(
    state: web::Data<AppState>,
    user: AuthUser,
    data: web::Json<NewGoalRequest>,
) -> Result<impl Responder, AppError> {
    let data = data.into_inner();
    data.validate()?;

    let id = state.goal_repo.create_goal(&user.0, &data).await?;
    state.readiness.refresh_silently(&user.0).await;

    Ok(HttpResponse::Created().json(GoalCreatedResponse { id }))
}

#[instrument(skip(state, data))]
#[put("/goals/{id}")]
pub async fn update_goal(
    state: web::Data<AppState>,
    user: AuthUser,
    id: web::Path<Uuid>,
    data: web::Json<UpdateGoalRequest>,
) -> Result<impl Responder, AppError> {
    let data = data.into_inner();
    data.validate()?;

    if data.is_empty() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }

    state.goal_repo.update_goal(&user.0, &id, &data).await?;
    state.readiness.refresh_silently(&user.0).await;

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Goal updated"
    })))
}

#[instrument(skip(state))]
#[delete("/goals/{id}")]
pub async fn delete_goal(
    state: web::Data<AppState>,
    user: AuthUser,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    state.goal_repo.delete_goal(&user.0, &id).await?;
    state.readiness.refresh_silently(&user.0).await;

    Ok(HttpResponse::NoContent().finish())
}
