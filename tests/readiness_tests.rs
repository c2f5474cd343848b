//! Black-box tests for the readiness scoring formula.

use career_agent_backend::readiness::{score, ReadinessInputs, UNMAPPED_EDUCATION_SCORE};

fn empty_inputs() -> ReadinessInputs {
    ReadinessInputs::default()
}

#[test]
fn empty_profile_scores_zero() {
    let breakdown = score(&empty_inputs());

    assert_eq!(breakdown.skills, 0.0);
    assert_eq!(breakdown.education, UNMAPPED_EDUCATION_SCORE);
    assert_eq!(breakdown.goals, 0.0);
    assert_eq!(breakdown.progress, 0.0);
    assert_eq!(breakdown.applications, 0.0);
    assert_eq!(breakdown.overall, 0);
}

#[test]
fn skills_scale_linearly_and_saturate_at_ten() {
    for n in 0..=10u32 {
        let breakdown = score(&ReadinessInputs {
            skill_count: n,
            ..empty_inputs()
        });
        assert_eq!(breakdown.skills, n as f64 * 10.0);
    }

    let saturated = score(&ReadinessInputs {
        skill_count: 11,
        ..empty_inputs()
    });
    assert_eq!(saturated.skills, 100.0);

    let way_over = score(&ReadinessInputs {
        skill_count: 500,
        ..empty_inputs()
    });
    assert_eq!(way_over.skills, 100.0);
}

#[test]
fn applications_scale_linearly_and_saturate_at_five() {
    for n in 0..=5u32 {
        let breakdown = score(&ReadinessInputs {
            application_count: n,
            ..empty_inputs()
        });
        assert_eq!(breakdown.applications, n as f64 * 20.0);
    }

    let saturated = score(&ReadinessInputs {
        application_count: 6,
        ..empty_inputs()
    });
    assert_eq!(saturated.applications, 100.0);
}

#[test]
fn progress_is_zero_without_plans() {
    let breakdown = score(&ReadinessInputs {
        completed_plans: 0,
        total_plans: 0,
        ..empty_inputs()
    });
    assert_eq!(breakdown.progress, 0.0);
}

#[test]
fn progress_counts_all_plans_in_denominator() {
    let breakdown = score(&ReadinessInputs {
        total_plans: 4,
        completed_plans: 1,
        ..empty_inputs()
    });
    assert_eq!(breakdown.progress, 25.0);
}

#[test]
fn overall_is_truncated_not_rounded() {
    // skills 30 * .30 + goals 75 * .20 + progress 50 * .20 + apps 40 * .15
    // = 9 + 15 + 10 + 6 = 40 exactly; education "Unknown" contributes 0.
    let breakdown = score(&ReadinessInputs {
        skill_count: 3,
        education_level: Some("Unknown".to_string()),
        active_goal_count: 1,
        target_role_set: true,
        career_goal_set: false,
        total_plans: 4,
        completed_plans: 2,
        application_count: 2,
    });

    assert_eq!(breakdown.skills, 30.0);
    assert_eq!(breakdown.education, 0.0);
    assert_eq!(breakdown.goals, 75.0);
    assert_eq!(breakdown.progress, 50.0);
    assert_eq!(breakdown.applications, 40.0);
    assert_eq!(breakdown.overall, 40);

    // 2/3 completed gives progress 66.66..; the weighted sum lands on a
    // fraction and must truncate toward zero.
    let fractional = score(&ReadinessInputs {
        skill_count: 3,
        total_plans: 3,
        completed_plans: 2,
        ..empty_inputs()
    });
    // 9.0 + 13.333.. = 22.333..
    assert_eq!(fractional.overall, 22);
}

#[test]
fn strong_profile_scores_eighty() {
    let breakdown = score(&ReadinessInputs {
        skill_count: 10,
        education_level: Some("Master's".to_string()),
        active_goal_count: 2,
        target_role_set: true,
        career_goal_set: true,
        total_plans: 10,
        completed_plans: 4,
        application_count: 4,
    });

    assert_eq!(breakdown.skills, 100.0);
    assert_eq!(breakdown.education, 80.0);
    assert_eq!(breakdown.goals, 100.0);
    assert_eq!(breakdown.progress, 40.0);
    assert_eq!(breakdown.applications, 80.0);
    // 30 + 12 + 20 + 8 + 12 = 82
    assert_eq!(breakdown.overall, 82);
}

#[test]
fn saturated_profile_with_no_plans_scores_eighty() {
    let breakdown = score(&ReadinessInputs {
        skill_count: 12,
        education_level: Some("PhD".to_string()),
        active_goal_count: 2,
        target_role_set: true,
        career_goal_set: true,
        total_plans: 0,
        completed_plans: 0,
        application_count: 6,
    });

    assert_eq!(breakdown.skills, 100.0);
    assert_eq!(breakdown.education, 100.0);
    assert_eq!(breakdown.goals, 100.0);
    assert_eq!(breakdown.progress, 0.0);
    assert_eq!(breakdown.applications, 100.0);
    // 30 + 15 + 20 + 0 + 15 = 80
    assert_eq!(breakdown.overall, 80);
}

#[test]
fn maxed_profile_scores_one_hundred() {
    let breakdown = score(&ReadinessInputs {
        skill_count: 10,
        education_level: Some("PhD".to_string()),
        active_goal_count: 1,
        target_role_set: true,
        career_goal_set: true,
        total_plans: 5,
        completed_plans: 5,
        application_count: 5,
    });
    assert_eq!(breakdown.overall, 100);
}

#[test]
fn overall_stays_within_bounds() {
    let extreme = score(&ReadinessInputs {
        skill_count: u32::MAX,
        education_level: Some("PhD".to_string()),
        active_goal_count: u32::MAX,
        target_role_set: true,
        career_goal_set: true,
        total_plans: 1,
        completed_plans: u32::MAX,
        application_count: u32::MAX,
    });
    assert!(extreme.overall <= 100);
    assert!(extreme.overall >= 0);
}
