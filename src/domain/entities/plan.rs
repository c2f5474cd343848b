use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "plan_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Pending,
    InProgress,
    Completed,
    Skipped,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Plan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub goal_id: Option<Uuid>,
    pub week_number: i32,
    pub title: String,
    pub description: String,
    pub tasks: serde_json::Value,
    pub milestones: serde_json::Value,
    pub ai_notes: Option<String>,
    pub status: PlanStatus,
    pub progress_percentage: i32,
    pub created_at: DateTime<Utc>,
}

/// One entry of a plan's `tasks` array. The agent attaches fields beyond
/// the ones we act on (descriptions, resources, estimates); `extra` carries
/// them through untouched so a toggle never strips them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(flatten, default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePlanRequest {
    pub status: Option<PlanStatus>,
    pub progress_percentage: Option<i32>,
    pub tasks: Option<Vec<PlanTask>>,
}

impl UpdatePlanRequest {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.progress_percentage.is_none() && self.tasks.is_none()
    }
}

/// Task toggles address the task either by its id or by array index.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub task_id: Option<i64>,
    pub task_index: Option<usize>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct TaskUpdatedResponse {
    pub progress: i32,
    pub status: PlanStatus,
    pub tasks: Vec<PlanTask>,
}

#[derive(Debug, Serialize)]
pub struct RoadmapSummary {
    pub total_weeks: i64,
    pub completed_weeks: i64,
    pub current_weeks: i64,
    pub avg_progress: i64,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub task_completion_rate: i64,
}

/// Weekly plan shape returned by the agent's roadmap generation.
#[derive(Debug, Deserialize)]
pub struct AgentWeeklyPlan {
    pub week_number: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "empty_array")]
    pub tasks: serde_json::Value,
    #[serde(default = "empty_array")]
    pub milestones: serde_json::Value,
    #[serde(default)]
    pub ai_notes: String,
}

fn empty_array() -> serde_json::Value {
    serde_json::Value::Array(Vec::new())
}

/// Marks one task complete or incomplete. The index wins when both
/// addressing modes are supplied. Returns false when no task matches.
pub fn toggle_task(
    tasks: &mut [PlanTask],
    task_id: Option<i64>,
    task_index: Option<usize>,
    completed: bool,
) -> bool {
    let target = if let Some(index) = task_index {
        tasks.get_mut(index)
    } else {
        task_id.and_then(|id| tasks.iter_mut().find(|t| t.id == Some(id)))
    };

    match target {
        Some(task) => {
            task.completed = completed;
            true
        }
        None => false,
    }
}

/// Percentage of completed tasks, rounded to the nearest integer.
pub fn task_progress(tasks: &[PlanTask]) -> i32 {
    if tasks.is_empty() {
        return 0;
    }
    let completed = tasks.iter().filter(|t| t.completed).count();
    ((completed as f64 / tasks.len() as f64) * 100.0).round() as i32
}

pub fn status_for_progress(progress: i32) -> PlanStatus {
    match progress {
        0 => PlanStatus::Pending,
        100 => PlanStatus::Completed,
        _ => PlanStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(completed: bool) -> PlanTask {
        PlanTask { title: "t".into(), completed, ..PlanTask::default() }
    }

    #[test]
    fn progress_of_empty_task_list_is_zero() {
        assert_eq!(task_progress(&[]), 0);
    }

    #[test]
    fn progress_rounds_to_nearest_integer() {
        let tasks = vec![task(true), task(false), task(false)];
        assert_eq!(task_progress(&tasks), 33);

        let tasks = vec![task(true), task(true), task(false)];
        assert_eq!(task_progress(&tasks), 67);
    }

    #[test]
    fn status_derivation_from_progress() {
        assert_eq!(status_for_progress(0), PlanStatus::Pending);
        assert_eq!(status_for_progress(50), PlanStatus::InProgress);
        assert_eq!(status_for_progress(100), PlanStatus::Completed);
    }

    #[test]
    fn tasks_roundtrip_through_json() {
        let tasks = vec![
            PlanTask { id: Some(1), title: "Read docs".into(), ..PlanTask::default() },
            PlanTask { title: "Build demo".into(), completed: true, ..PlanTask::default() },
        ];
        let value = serde_json::to_value(&tasks).unwrap();
        let parsed: Vec<PlanTask> = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].id, Some(1));
        assert!(parsed[1].completed);
    }

    #[test]
    fn toggle_preserves_fields_we_do_not_model() {
        let stored = serde_json::json!([
            {
                "id": 1,
                "title": "Read docs",
                "completed": false,
                "description": "ch. 1-3",
                "resources": ["https://doc.rust-lang.org"]
            }
        ]);

        let mut tasks: Vec<PlanTask> = serde_json::from_value(stored).unwrap();
        assert!(toggle_task(&mut tasks, Some(1), None, true));

        let rewritten = serde_json::to_value(&tasks).unwrap();
        assert_eq!(rewritten[0]["completed"], true);
        assert_eq!(rewritten[0]["description"], "ch. 1-3");
        assert_eq!(rewritten[0]["resources"][0], "https://doc.rust-lang.org");
    }

    #[test]
    fn toggle_prefers_index_when_both_are_given() {
        let mut tasks = vec![
            PlanTask { id: Some(10), title: "a".into(), ..PlanTask::default() },
            PlanTask { id: Some(20), title: "b".into(), ..PlanTask::default() },
        ];

        // id says task 10 (index 0), index says 1: the index wins.
        assert!(toggle_task(&mut tasks, Some(10), Some(1), true));
        assert!(!tasks[0].completed);
        assert!(tasks[1].completed);
    }

    #[test]
    fn toggle_reports_missing_targets() {
        let mut tasks = vec![task(false)];
        assert!(!toggle_task(&mut tasks, Some(99), None, true));
        assert!(!toggle_task(&mut tasks, None, Some(5), true));
        assert!(!toggle_task(&mut tasks, None, None, true));
    }
}
