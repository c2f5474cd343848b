use actix_web::{get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use tracing::instrument;
use validator::Validate;

use crate::{
    agent::client::AgentEvent,
    entities::{
        goal::NewGoalRequest,
        user::{OnboardingRequest, ProfileResponse, ProfileUpdatedResponse, UpdateProfileRequest},
    },
    errors::AppError,
    repositories::{
        goal::GoalRepository, skill::SkillRepository, user::ProfileRepository,
    },
    use_cases::extractors::AuthUser,
    AppState,
};

#[instrument(skip(state))]
#[get("/profile")]
pub async fn get_profile(
    state: web::Data<AppState>,
    user: AuthUser,
) -> Result<impl Responder, AppError> {
    let profile = state.profile_repo.get_user(&user.0).await?;
    let skills = state.skill_repo.list_skills(&user.0).await?;

    Ok(HttpResponse::Ok().json(ProfileResponse { user: profile, skills }))
}

/// Partial profile update. Readiness recalculation and the agent
/// notification are side effects; the new score is not reflected in this
/// response (clients re-fetch `/profile` to see it).
#[instrument(skip(state, data))]
#[put("/profile")]
pub async fn update_profile(
    state: web::Data<AppState>,
    user: AuthUser,
    data: web::Json<UpdateProfileRequest>,
) -> Result<impl Responder, AppError> {
    let data = data.into_inner();
    data.validate()?;

    if data.is_empty() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }

    state.profile_repo.update_profile(&user.0, &data).await?;

    let mut agent_triggered = false;
    if data.touches_readiness_inputs() {
        state.readiness.refresh_silently(&user.0).await;

        let payload = json!({
            "education_level": data.education_level,
            "target_role": data.target_role,
            "career_goal": data.career_goal,
        });
        agent_triggered = state
            .agent
            .run(&user.0, AgentEvent::ProfileUpdated, payload)
            .await
            .map_err(|e| tracing::warn!("Agent notification failed: {}", e))
            .is_ok();
    }

    Ok(HttpResponse::Ok().json(ProfileUpdatedResponse {
        status: "success".to_string(),
        message: "Profile updated successfully".to_string(),
        agent_triggered,
    }))
}

#[instrument(skip(state, data))]
#[post("/profile/onboarding")]
pub async fn complete_onboarding(
    state: web::Data<AppState>,
    user: AuthUser,
    data: web::Json<OnboardingRequest>,
) -> Result<impl Responder, AppError> {
    let data = data.into_inner();
    data.validate()?;
    for skill in &data.skills {
        skill.validate()?;
    }

    state.profile_repo.complete_onboarding(&user.0, &data).await?;

    if !data.skills.is_empty() {
        state.skill_repo.upsert_skills(&user.0, &data.skills).await?;
    }

    if let Some(target_role) = &data.target_role {
        let goal = NewGoalRequest {
            target_role: target_role.clone(),
            target_company: None,
            timeline: data.timeline.clone(),
            priority: None,
            notes: None,
        };
        state.goal_repo.create_goal(&user.0, &goal).await?;
    }

    state.readiness.refresh_silently(&user.0).await;

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Onboarding completed"
    })))
}
