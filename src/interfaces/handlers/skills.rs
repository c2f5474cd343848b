use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::skill::{
        BulkSkillsRequest, BulkSkillsResponse, NewSkillRequest, SkillCreatedResponse,
        UpdateSkillRequest,
    },
    errors::AppError,
    repositories::skill::SkillRepository,
    use_cases::extractors::AuthUser,
    AppState,
};

#[instrument(skip(state))]
#[get("/skills")]
pub async fn list_skills(
    state: web::Data<AppState>,
    user: AuthUser,
) -> Result<impl Responder, AppError> {
    let skills = state.skill_repo.list_skills(&user.0).await?;
    Ok(HttpResponse::Ok().json(skills))
}

#[instrument(skip(state, data))]
#[post("/skills")]
pub async fn add_skill(
    state: web::Data<AppState>,
    user: AuthUser,
    data: web::Json<NewSkillRequest>,
) -> Result<impl Responder, AppError> {
    let data = data.into_inner();
    data.validate()?;

    let id = state.skill_repo.add_skill(&user.0, &data).await?;
    state.readiness.refresh_silently(&user.0).await;

    Ok(HttpResponse::Created().json(SkillCreatedResponse { id }))
}

#[instrument(skip(state, data))]
#[post("/skills/bulk")]
pub async fn add_skills_bulk(
    state: web::Data<AppState>,
    user: AuthUser,
    data: web::Json<BulkSkillsRequest>,
) -> Result<impl Responder, AppError> {
    let data = data.into_inner();
    if data.skills.is_empty() {
        return Err(AppError::BadRequest("skills array is required".to_string()));
    }
    for skill in &data.skills {
        skill.validate()?;
    }

    let added = state.skill_repo.upsert_skills(&user.0, &data.skills).await?;
    state.readiness.refresh_silently(&user.0).await;

    Ok(HttpResponse::Created().json(BulkSkillsResponse { added }))
}

#[instrument(skip(state, data))]
#[put("/skills/{id}")]
pub async fn update_skill(
    state: web::Data<AppState>,
    user: AuthUser,
    id: web::Path<Uuid>,
    data: web::Json<UpdateSkillRequest>,
) -> Result<impl Responder, AppError> {
    let data = data.into_inner();
    data.validate()?;

    if data.is_empty() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }

    state.skill_repo.update_skill(&user.0, &id, &data).await?;
    state.readiness.refresh_silently(&user.0).await;

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Skill updated"
    })))
}

#[instrument(skip(state))]
#[delete("/skills/{id}")]
pub async fn delete_skill(
    state: web::Data<AppState>,
    user: AuthUser,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    state.skill_repo.delete_skill(&user.0, &id).await?;
    state.readiness.refresh_silently(&user.0).await;

    Ok(HttpResponse::NoContent().finish())
}
