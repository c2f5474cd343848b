use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One append-only row of the readiness history. Never mutated, never
/// deleted by the recalculation path.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ReadinessSnapshot {
    pub id: Uuid,
    pub user_id: Uuid,
    pub score: i32,
    pub skills_score: f64,
    pub education_score: f64,
    pub goals_score: f64,
    pub progress_score: f64,
    pub applications_score: f64,
    pub created_at: DateTime<Utc>,
}
