pub mod extractors;
pub mod readiness;
