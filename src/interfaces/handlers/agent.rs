use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;
use validator::Validate;

use crate::{
    entities::plan::AgentWeeklyPlan,
    errors::AppError,
    repositories::{
        goal::GoalRepository, plan::PlanRepository, skill::SkillRepository,
        user::ProfileRepository,
    },
    use_cases::extractors::AuthUser,
    AppState,
};

const FALLBACK_TARGET_ROLE: &str = "Software Developer";

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    pub target_role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    pub timeline: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

/// Aggregated dashboard. All persisted data comes from our own store; the
/// agent's contribution is advisory and degrades to `null` when the agent
/// is down rather than failing the whole view.
#[instrument(skip(state))]
#[get("/agent/dashboard")]
pub async fn dashboard(
    state: web::Data<AppState>,
    user: AuthUser,
) -> Result<impl Responder, AppError> {
    let profile = state.profile_repo.get_user(&user.0).await?;
    let goal = state.goal_repo.get_primary_goal(&user.0).await?;
    let current_plan = state.plan_repo.get_current_plan(&user.0).await?;
    let summary = state.plan_repo.roadmap_summary(&user.0).await?;

    let agent_data = state
        .agent
        .dashboard(&user.0)
        .await
        .map_err(|e| tracing::warn!("Agent dashboard unavailable: {}", e))
        .ok();

    Ok(HttpResponse::Ok().json(json!({
        "user": &profile,
        "readiness_score": profile.readiness_score,
        "goal": goal,
        "current_plan": current_plan,
        "roadmap": summary,
        "agent_data": agent_data,
    })))
}

/// Skill-gap analysis is pure agent work; an unreachable agent is a 503.
#[instrument(skip(state, data))]
#[post("/agent/skill-gaps")]
pub async fn analyze_skill_gaps(
    state: web::Data<AppState>,
    user: AuthUser,
    data: Option<web::Json<SkillGapRequest>>,
) -> Result<impl Responder, AppError> {
    let skills = state.skill_repo.list_skills(&user.0).await?;
    let goal = state.goal_repo.get_primary_goal(&user.0).await?;

    let target_role = data
        .and_then(|d| d.into_inner().target_role)
        .or_else(|| goal.map(|g| g.target_role))
        .unwrap_or_else(|| FALLBACK_TARGET_ROLE.to_string());

    let skills_payload = serde_json::to_value(&skills)?;
    let result = state
        .agent
        .analyze_skill_gaps(&skills_payload, &target_role)
        .await?;

    Ok(HttpResponse::Ok().json(result))
}

/// Asks the agent for a weekly roadmap and persists the returned plans,
/// replacing any previous roadmap for the primary goal.
#[instrument(skip(state, data))]
#[post("/agent/roadmap")]
pub async fn create_roadmap(
    state: web::Data<AppState>,
    user: AuthUser,
    data: Option<web::Json<RoadmapRequest>>,
) -> Result<impl Responder, AppError> {
    let goal = state.goal_repo.get_primary_goal(&user.0).await?;

    let target_role = goal
        .as_ref()
        .map(|g| g.target_role.clone())
        .unwrap_or_else(|| FALLBACK_TARGET_ROLE.to_string());
    let timeline = data
        .and_then(|d| d.into_inner().timeline)
        .or_else(|| goal.as_ref().map(|g| g.timeline.clone()))
        .unwrap_or_else(|| "6 months".to_string());

    let result = state.agent.create_roadmap(&target_role, &timeline).await?;

    if let Some(weekly) = result.pointer("/roadmap/weekly_plans") {
        let plans: Vec<AgentWeeklyPlan> =
            serde_json::from_value(weekly.clone()).unwrap_or_default();
        if !plans.is_empty() {
            let goal_id = goal.as_ref().map(|g| g.id);
            let saved = state
                .plan_repo
                .replace_goal_plans(&user.0, goal_id, &plans)
                .await?;
            tracing::info!(saved, "Persisted agent roadmap");
            state.readiness.refresh_silently(&user.0).await;
        }
    }

    Ok(HttpResponse::Ok().json(result))
}

#[instrument(skip(state, data))]
#[post("/agent/chat")]
pub async fn chat(
    state: web::Data<AppState>,
    user: AuthUser,
    data: web::Json<ChatRequest>,
) -> Result<impl Responder, AppError> {
    let data = data.into_inner();
    data.validate()?;

    let result = state.agent.chat(&user.0, &data.message).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Opportunity matching is pure agent work; an unreachable agent is a 503.
#[instrument(skip(state))]
#[get("/agent/opportunities")]
pub async fn opportunities(
    state: web::Data<AppState>,
    user: AuthUser,
) -> Result<impl Responder, AppError> {
    let result = state.agent.opportunities(&user.0).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[instrument(skip(state))]
#[get("/agent/chat/history")]
pub async fn chat_history(
    state: web::Data<AppState>,
    user: AuthUser,
) -> Result<impl Responder, AppError> {
    let result = state.agent.chat_history(&user.0).await?;
    Ok(HttpResponse::Ok().json(result))
}
