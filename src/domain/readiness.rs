//! Career-readiness scoring.
//!
//! Combines five weighted sub-scores (skills, education, goals, progress,
//! applications) into a single 0–100 percentage. The formula is deterministic
//! and side-effect free; persistence lives in the readiness use case.

/// Weights applied to the five sub-scores. They sum to 1.0.
pub const SKILLS_WEIGHT: f64 = 0.30;
pub const EDUCATION_WEIGHT: f64 = 0.15;
pub const GOALS_WEIGHT: f64 = 0.20;
pub const PROGRESS_WEIGHT: f64 = 0.20;
pub const APPLICATIONS_WEIGHT: f64 = 0.15;

/// Sub-score assigned when `education_level` is unset or does not match any
/// entry of the lookup table. Operators who want to credit unknown education
/// levels change this one constant.
pub const UNMAPPED_EDUCATION_SCORE: f64 = 0.0;

/// Everything the formula needs, read fresh from the store at recalculation
/// time. Counts only; skill levels and plan contents do not influence the
/// score.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadinessInputs {
    pub skill_count: u32,
    pub education_level: Option<String>,
    pub active_goal_count: u32,
    pub target_role_set: bool,
    pub career_goal_set: bool,
    pub total_plans: u32,
    pub completed_plans: u32,
    pub application_count: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ReadinessBreakdown {
    pub skills: f64,
    pub education: f64,
    pub goals: f64,
    pub progress: f64,
    pub applications: f64,
    pub overall: i32,
}

fn clamp(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

/// Linear in the number of skills, saturating at 10.
fn skills_score(skill_count: u32) -> f64 {
    clamp(skill_count as f64 * 10.0)
}

/// Exact string match against the known education levels. No case folding.
fn education_score(education_level: Option<&str>) -> f64 {
    let score = match education_level {
        Some("High School") => 20.0,
        Some("Associate") => 40.0,
        Some("Bachelor's") => 60.0,
        Some("Master's") => 80.0,
        Some("PhD") => 100.0,
        Some("Bootcamp Graduate") => 50.0,
        Some("Self-taught") => 40.0,
        _ => UNMAPPED_EDUCATION_SCORE,
    };
    clamp(score)
}

/// Additive bonus structure: 50 for having any active goal, 25 each for a
/// target role and a career goal.
fn goals_score(active_goal_count: u32, target_role_set: bool, career_goal_set: bool) -> f64 {
    let mut score = 0.0;
    if active_goal_count >= 1 {
        score += 50.0;
    }
    if target_role_set {
        score += 25.0;
    }
    if career_goal_set {
        score += 25.0;
    }
    clamp(score)
}

/// Ratio of completed plans over all plans regardless of status.
fn progress_score(completed_plans: u32, total_plans: u32) -> f64 {
    if total_plans == 0 {
        return 0.0;
    }
    clamp(completed_plans as f64 / total_plans as f64 * 100.0)
}

/// Linear in the number of applications, saturating at 5.
fn applications_score(application_count: u32) -> f64 {
    clamp(application_count as f64 * 20.0)
}

/// Computes the full breakdown. The overall score is the weighted sum
/// truncated toward zero, not rounded.
pub fn score(inputs: &ReadinessInputs) -> ReadinessBreakdown {
    let skills = skills_score(inputs.skill_count);
    let education = education_score(inputs.education_level.as_deref());
    let goals = goals_score(
        inputs.active_goal_count,
        inputs.target_role_set,
        inputs.career_goal_set,
    );
    let progress = progress_score(inputs.completed_plans, inputs.total_plans);
    let applications = applications_score(inputs.application_count);

    let weighted = skills * SKILLS_WEIGHT
        + education * EDUCATION_WEIGHT
        + goals * GOALS_WEIGHT
        + progress * PROGRESS_WEIGHT
        + applications * APPLICATIONS_WEIGHT;

    ReadinessBreakdown {
        skills,
        education,
        goals,
        progress,
        applications,
        overall: weighted.trunc() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let total = SKILLS_WEIGHT
            + EDUCATION_WEIGHT
            + GOALS_WEIGHT
            + PROGRESS_WEIGHT
            + APPLICATIONS_WEIGHT;
        assert!((total - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn education_lookup_requires_exact_match() {
        assert_eq!(education_score(Some("PhD")), 100.0);
        assert_eq!(education_score(Some("Master's")), 80.0);
        assert_eq!(education_score(Some("Bootcamp Graduate")), 50.0);
        // No case folding, no trimming.
        assert_eq!(education_score(Some("phd")), UNMAPPED_EDUCATION_SCORE);
        assert_eq!(education_score(Some(" PhD")), UNMAPPED_EDUCATION_SCORE);
        assert_eq!(education_score(None), UNMAPPED_EDUCATION_SCORE);
    }

    #[test]
    fn goals_bonuses_are_additive() {
        assert_eq!(goals_score(0, false, false), 0.0);
        assert_eq!(goals_score(1, false, false), 50.0);
        assert_eq!(goals_score(1, true, false), 75.0);
        assert_eq!(goals_score(3, true, true), 100.0);
        assert_eq!(goals_score(0, true, true), 50.0);
    }

    #[test]
    fn sub_scores_are_clamped() {
        assert_eq!(skills_score(200), 100.0);
        assert_eq!(applications_score(50), 100.0);
        assert_eq!(progress_score(10, 5), 100.0);
    }
}
