use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    domain::readiness::{score, ReadinessBreakdown, ReadinessInputs},
    entities::readiness::ReadinessSnapshot,
    errors::AppError,
};

/// Storage seam for the readiness engine. `persist` writes the snapshot row
/// and the cached `users.readiness_score` in one transaction, so the cached
/// value always equals the latest snapshot's score after a successful
/// recalculation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReadinessStore: Send + Sync {
    async fn load_inputs(&self, user_id: &Uuid) -> Result<ReadinessInputs, AppError>;
    async fn persist(
        &self,
        user_id: &Uuid,
        breakdown: &ReadinessBreakdown,
    ) -> Result<ReadinessSnapshot, AppError>;
    async fn history(&self, user_id: &Uuid, limit: i64) -> Result<Vec<ReadinessSnapshot>, AppError>;
}

pub struct ReadinessHandler<S>
where
    S: ReadinessStore,
{
    pub store: S,
}

impl<S> ReadinessHandler<S>
where
    S: ReadinessStore,
{
    pub fn new(store: S) -> Self {
        ReadinessHandler { store }
    }

    /// Reads fresh inputs, computes the breakdown and persists it.
    pub async fn recalculate(&self, user_id: &Uuid) -> Result<ReadinessSnapshot, AppError> {
        let inputs = self.store.load_inputs(user_id).await?;
        let breakdown = score(&inputs);
        self.store.persist(user_id, &breakdown).await
    }

    /// Best-effort recalculation for mutation handlers. A failure is logged
    /// and swallowed; the enclosing request must still succeed.
    pub async fn refresh_silently(&self, user_id: &Uuid) {
        if let Err(e) = self.recalculate(user_id).await {
            tracing::warn!(%user_id, "Readiness recalculation failed: {}", e);
        }
    }

    pub async fn history(
        &self,
        user_id: &Uuid,
        limit: i64,
    ) -> Result<Vec<ReadinessSnapshot>, AppError> {
        self.store.history(user_id, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn snapshot_from(user_id: Uuid, breakdown: &ReadinessBreakdown) -> ReadinessSnapshot {
        ReadinessSnapshot {
            id: Uuid::new_v4(),
            user_id,
            score: breakdown.overall,
            skills_score: breakdown.skills,
            education_score: breakdown.education,
            goals_score: breakdown.goals,
            progress_score: breakdown.progress,
            applications_score: breakdown.applications,
            created_at: Utc::now(),
        }
    }

    fn sample_inputs() -> ReadinessInputs {
        ReadinessInputs {
            skill_count: 3,
            education_level: None,
            active_goal_count: 1,
            target_role_set: true,
            career_goal_set: false,
            total_plans: 4,
            completed_plans: 2,
            application_count: 2,
        }
    }

    #[tokio::test]
    async fn recalculate_persists_computed_breakdown() {
        let user_id = Uuid::new_v4();
        let mut store = MockReadinessStore::new();

        store
            .expect_load_inputs()
            .with(eq(user_id))
            .times(1)
            .returning(|_| Ok(sample_inputs()));

        store
            .expect_persist()
            .withf(|_, breakdown| {
                breakdown.skills == 30.0
                    && breakdown.education == 0.0
                    && breakdown.goals == 75.0
                    && breakdown.progress == 50.0
                    && breakdown.applications == 40.0
                    && breakdown.overall == 40
            })
            .times(1)
            .returning(|user_id, breakdown| Ok(snapshot_from(*user_id, breakdown)));

        let handler = ReadinessHandler::new(store);
        let snapshot = handler.recalculate(&user_id).await.unwrap();

        assert_eq!(snapshot.score, 40);
        assert_eq!(snapshot.user_id, user_id);
    }

    #[tokio::test]
    async fn recalculate_aborts_when_input_load_fails() {
        let user_id = Uuid::new_v4();
        let mut store = MockReadinessStore::new();

        store
            .expect_load_inputs()
            .times(1)
            .returning(|_| Err(AppError::InternalError("connection reset".into())));
        store.expect_persist().times(0);

        let handler = ReadinessHandler::new(store);
        assert!(handler.recalculate(&user_id).await.is_err());
    }

    #[tokio::test]
    async fn refresh_silently_swallows_store_failures() {
        let user_id = Uuid::new_v4();
        let mut store = MockReadinessStore::new();

        store
            .expect_load_inputs()
            .times(1)
            .returning(|_| Err(AppError::InternalError("connection reset".into())));

        let handler = ReadinessHandler::new(store);
        // Must not panic or propagate.
        handler.refresh_silently(&user_id).await;
    }

    #[tokio::test]
    async fn recalculation_is_idempotent_for_unchanged_inputs() {
        let user_id = Uuid::new_v4();
        let mut store = MockReadinessStore::new();

        store
            .expect_load_inputs()
            .times(2)
            .returning(|_| Ok(sample_inputs()));
        store
            .expect_persist()
            .times(2)
            .returning(|user_id, breakdown| Ok(snapshot_from(*user_id, breakdown)));

        let handler = ReadinessHandler::new(store);
        let first = handler.recalculate(&user_id).await.unwrap();
        let second = handler.recalculate(&user_id).await.unwrap();

        assert_eq!(first.score, second.score);
        assert_eq!(first.skills_score, second.skills_score);
        assert_eq!(first.progress_score, second.progress_score);
    }
}
