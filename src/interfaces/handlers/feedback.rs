use std::collections::HashMap;

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::{
    agent::client::AgentEvent,
    entities::feedback::{FeedbackCreatedResponse, NewFeedbackRequest, UpdateFeedbackRequest},
    errors::AppError,
    repositories::feedback::FeedbackRepository,
    use_cases::extractors::AuthUser,
    AppState,
};

const DEFAULT_FEEDBACK_LIMIT: i64 = 20;
const MAX_FEEDBACK_LIMIT: i64 = 100;

#[instrument(skip(state))]
#[get("/feedback")]
pub async fn list_feedback(
    state: web::Data<AppState>,
    user: AuthUser,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let source = query.get("source").map(String::as_str);
    let limit = query
        .get("limit")
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(DEFAULT_FEEDBACK_LIMIT)
        .clamp(1, MAX_FEEDBACK_LIMIT);

    let entries = state.feedback_repo.list_feedback(&user.0, source, limit).await?;
    Ok(HttpResponse::Ok().json(entries))
}

#[instrument(skip(state))]
#[get("/feedback/stats")]
pub async fn feedback_stats(
    state: web::Data<AppState>,
    user: AuthUser,
) -> Result<impl Responder, AppError> {
    let stats = state.feedback_repo.feedback_stats(&user.0).await?;
    Ok(HttpResponse::Ok().json(stats))
}

#[instrument(skip(state))]
#[get("/feedback/{id}")]
pub async fn get_feedback(
    state: web::Data<AppState>,
    user: AuthUser,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let entry = state.feedback_repo.get_feedback(&user.0, &id).await?;
    Ok(HttpResponse::Ok().json(entry))
}

#[instrument(skip(state, data))]
#[post("/feedback")]
pub async fn create_feedback(
    state: web::Data<AppState>,
    user: AuthUser,
    data: web::Json<NewFeedbackRequest>,
) -> Result<impl Responder, AppError> {
    let data = data.into_inner();
    data.validate()?;

    let id = state.feedback_repo.create_feedback(&user.0, &data).await?;

    // Agent analysis is advisory; the entry stays unanalyzed when it fails.
    let payload = json!({
        "feedback_id": id,
        "source": data.source,
        "message": data.message,
    });
    match state.agent.run(&user.0, AgentEvent::Feedback, payload).await {
        Ok(result) => {
            let analysis = UpdateFeedbackRequest {
                analysis: result
                    .get("analysis")
                    .and_then(|v| v.as_str())
                    .map(String::from),
                sentiment: result
                    .get("sentiment")
                    .and_then(|v| v.as_str())
                    .map(String::from),
                action_items: result.get("action_items").cloned(),
            };
            if !analysis.is_empty() {
                if let Err(e) = state
                    .feedback_repo
                    .update_feedback(&user.0, &id, &analysis)
                    .await
                {
                    tracing::warn!("Failed to store feedback analysis: {}", e);
                }
            }
        }
        Err(e) => tracing::warn!("Feedback analysis unavailable: {}", e),
    }

    Ok(HttpResponse::Created().json(FeedbackCreatedResponse { id }))
}

#[instrument(skip(state, data))]
#[put("/feedback/{id}")]
pub async fn update_feedback(
    state: web::Data<AppState>,
    user: AuthUser,
    id: web::Path<Uuid>,
    data: web::Json<UpdateFeedbackRequest>,
) -> Result<impl Responder, AppError> {
    let data = data.into_inner();
    if data.is_empty() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }

    state.feedback_repo.update_feedback(&user.0, &id, &data).await?;

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Feedback updated"
    })))
}

#[instrument(skip(state))]
#[delete("/feedback/{id}")]
pub async fn delete_feedback(
    state: web::Data<AppState>,
    user: AuthUser,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    state.feedback_repo.delete_feedback(&user.0, &id).await?;

    Ok(HttpResponse::NoContent().finish())
}
