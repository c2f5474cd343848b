use std::collections::HashMap;

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::application::{
        ApplicationCreatedResponse, NewApplicationRequest, UpdateApplicationRequest,
    },
    errors::AppError,
    repositories::application::ApplicationRepository,
    use_cases::extractors::AuthUser,
    AppState,
};

#[instrument(skip(state))]
#[get("/applications")]
pub async fn list_applications(
    state: web::Data<AppState>,
    user: AuthUser,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let status = query.get("status").map(String::as_str);
    let applications = state
        .application_repo
        .list_applications(&user.0, status)
        .await?;

    Ok(HttpResponse::Ok().json(applications))
}

#[instrument(skip(state))]
#[get("/applications/stats")]
pub async fn application_stats(
    state: web::Data<AppState>,
    user: AuthUser,
) -> Result<impl Responder, AppError> {
    let stats = state.application_repo.application_stats(&user.0).await?;
    Ok(HttpResponse::Ok().json(stats))
}

#[instrument(skip(state))]
#[get("/applications/{id}")]
pub async fn get_application(
    state: web::Data<AppState>,
    user: AuthUser,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let application = state.application_repo.get_application(&user.0, &id).await?;
    Ok(HttpResponse::Ok().json(application))
}

#[instrument(skip(state, data))]
#[post("/applications")]
pub async fn create_application(
    state: web::Data<AppState>,
    user: AuthUser,
    data: web::Json<NewApplicationRequest>,
) -> Result<impl Responder, AppError> {
    let data = data.into_inner();
    data.validate()?;

    let id = state.application_repo.create_application(&user.0, &data).await?;
    state.readiness.refresh_silently(&user.0).await;

    Ok(HttpResponse::Created().json(ApplicationCreatedResponse { id }))
}

#[instrument(skip(state, data))]
#[put("/applications/{id}")]
pub async fn update_application(
    state: web::Data<AppState>,
    user: AuthUser,
    id: web::Path<Uuid>,
    data: web::Json<UpdateApplicationRequest>,
) -> Result<impl Responder, AppError> {
    let data = data.into_inner();
    if data.is_empty() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }

    state
        .application_repo
        .update_application(&user.0, &id, &data)
        .await?;
    state.readiness.refresh_silently(&user.0).await;

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Application updated"
    })))
}

#[instrument(skip(state))]
#[delete("/applications/{id}")]
pub async fn delete_application(
    state: web::Data<AppState>,
    user: AuthUser,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    state
        .application_repo
        .delete_application(&user.0, &id)
        .await?;
    state.readiness.refresh_silently(&user.0).await;

    Ok(HttpResponse::NoContent().finish())
}
