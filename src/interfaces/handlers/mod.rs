pub mod agent;
pub mod applications;
pub mod feedback;
pub mod goals;
pub mod home;
pub mod plans;
pub mod profile;
pub mod projects;
pub mod readiness;
pub mod skills;
pub mod system;
