pub mod entities;
pub mod readiness;
pub mod use_cases;
