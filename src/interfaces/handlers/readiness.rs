use std::collections::HashMap;

use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;
use tracing::instrument;

use crate::{errors::AppError, use_cases::extractors::AuthUser, AppState};

const DEFAULT_HISTORY_LIMIT: i64 = 20;
const MAX_HISTORY_LIMIT: i64 = 100;

/// Explicit recalculation. Unlike the silent refresh performed after
/// mutations, failures here surface to the caller.
#[instrument(skip(state))]
#[post("/readiness/recalculate")]
pub async fn recalculate_readiness(
    state: web::Data<AppState>,
    user: AuthUser,
) -> Result<impl Responder, AppError> {
    let snapshot = state.readiness.recalculate(&user.0).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[instrument(skip(state))]
#[get("/readiness/history")]
pub async fn readiness_history(
    state: web::Data<AppState>,
    user: AuthUser,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let limit = query
        .get("limit")
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY_LIMIT);

    let history = state.readiness.history(&user.0, limit).await?;

    Ok(HttpResponse::Ok().json(json!({
        "count": history.len(),
        "history": history,
    })))
}
