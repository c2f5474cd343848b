mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, readiness, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{agent, db};

use agent::client::AgentClient;
use repositories::sqlx_repo::{
    SqlxApplicationRepo, SqlxFeedbackRepo, SqlxGoalRepo, SqlxPlanRepo, SqlxProfileRepo,
    SqlxProjectRepo, SqlxReadinessRepo, SqlxSkillRepo,
};
use use_cases::readiness::ReadinessHandler;

pub struct AppState {
    pub profile_repo: SqlxProfileRepo,
    pub skill_repo: SqlxSkillRepo,
    pub goal_repo: SqlxGoalRepo,
    pub plan_repo: SqlxPlanRepo,
    pub application_repo: SqlxApplicationRepo,
    pub feedback_repo: SqlxFeedbackRepo,
    pub project_repo: SqlxProjectRepo,
    pub readiness: AppReadinessHandler,
    pub agent: AgentClient,
}

pub type AppReadinessHandler = ReadinessHandler<SqlxReadinessRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let readiness = ReadinessHandler::new(SqlxReadinessRepo::new(pool.clone()));
        let agent = AgentClient::new(config);

        AppState {
            profile_repo: SqlxProfileRepo::new(pool.clone()),
            skill_repo: SqlxSkillRepo::new(pool.clone()),
            goal_repo: SqlxGoalRepo::new(pool.clone()),
            plan_repo: SqlxPlanRepo::new(pool.clone()),
            application_repo: SqlxApplicationRepo::new(pool.clone()),
            feedback_repo: SqlxFeedbackRepo::new(pool.clone()),
            project_repo: SqlxProjectRepo::new(pool),
            readiness,
            agent,
        }
    }
}
