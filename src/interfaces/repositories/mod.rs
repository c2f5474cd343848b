pub mod application;
pub mod feedback;
pub mod goal;
pub mod plan;
pub mod project;
pub mod readiness;
pub mod skill;
pub mod sqlx_repo;
pub mod user;
