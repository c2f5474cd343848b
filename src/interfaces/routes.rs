use actix_web::web;

use crate::handlers::{
    agent, applications, feedback, goals, home::home, plans, profile, projects, readiness,
    skills, system::health_check,
};

mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1")
            .service(profile::get_profile)
            .service(profile::update_profile)
            .service(profile::complete_onboarding)
            .service(skills::list_skills)
            .service(skills::add_skills_bulk)
            .service(skills::add_skill)
            .service(skills::update_skill)
            .service(skills::delete_skill)
            .service(goals::list_goals)
            .service(goals::get_primary_goal)
            .service(goals::create_goal)
            .service(goals::update_goal)
            .service(goals::delete_goal)
            // literal routes must precede the `{id}` ones
            .service(plans::current_plan)
            .service(plans::roadmap_summary)
            .service(plans::list_plans)
            .service(plans::get_plan)
            .service(plans::update_plan)
            .service(plans::update_task)
            .service(applications::application_stats)
            .service(applications::list_applications)
            .service(applications::get_application)
            .service(applications::create_application)
            .service(applications::update_application)
            .service(applications::delete_application)
            .service(projects::project_stats)
            .service(projects::suggest_projects)
            .service(projects::list_projects)
            .service(projects::get_project)
            .service(projects::create_project)
            .service(projects::update_project)
            .service(projects::delete_project)
            .service(feedback::feedback_stats)
            .service(feedback::list_feedback)
            .service(feedback::get_feedback)
            .service(feedback::create_feedback)
            .service(feedback::update_feedback)
            .service(feedback::delete_feedback)
            .service(readiness::recalculate_readiness)
            .service(readiness::readiness_history)
            .service(agent::dashboard)
            .service(agent::analyze_skill_gaps)
            .service(agent::create_roadmap)
            .service(agent::opportunities)
            .service(agent::chat_history)
            .service(agent::chat),
    );

    cfg.configure(json_error::config_routes);
}
