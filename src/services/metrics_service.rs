use tracing::debug;

use crate::models::{AnalyticsRecord, ExperienceLevel, Goal, GoalPreset, UserProfile};

/// Calorie and recommendation constants per goal
pub fn goal_preset(goal: Goal) -> GoalPreset {
    match goal {
        Goal::Hypertrophy => GoalPreset {
            met: 6.0,
            duration_hours: 1.2,
            rep_range: "6-12",
            intensity: "70-80% 1RM",
        },
        Goal::FatLoss => GoalPreset {
            met: 5.5,
            duration_hours: 1.15,
            rep_range: "12-15",
            intensity: "Circuitos com pausa curta",
        },
        Goal::Strength => GoalPreset {
            met: 6.8,
            duration_hours: 1.25,
            rep_range: "3-6",
            intensity: "80-90% 1RM",
        },
        Goal::Conditioning => GoalPreset {
            met: 7.2,
            duration_hours: 1.05,
            rep_range: "10-15",
            intensity: "Intervalos moderados",
        },
    }
}

/// Weekly set volume suggested for each experience level
pub fn volume_for(level: ExperienceLevel) -> &'static str {
    match level {
        ExperienceLevel::Beginner => "14-18 séries por grupamento",
        ExperienceLevel::Intermediate => "18-22 séries por grupamento",
        ExperienceLevel::Advanced => "22-26 séries por grupamento",
    }
}

/// Derive the analytics record for a profile
pub fn calculate_metrics(profile: &UserProfile) -> AnalyticsRecord {
    calculate(
        profile.age(),
        profile.weight_kg(),
        profile.training_frequency(),
        profile.primary_goal(),
        profile.height_cm(),
        profile.experience_level(),
    )
}

/// Field-level form of [`calculate_metrics`].
///
/// Age is accepted but does not enter any formula. Weekly calories multiply
/// the already-rounded session value.
pub fn calculate(
    _age: u32,
    weight_kg: f64,
    training_frequency: u32,
    goal: Goal,
    height_cm: Option<f64>,
    experience_level: ExperienceLevel,
) -> AnalyticsRecord {
    let preset = goal_preset(goal);

    let bmi = height_cm.map(|height| {
        let height_m = height / 100.0;
        round_to(weight_kg / (height_m * height_m), 2)
    });

    let session_calories = round_to(weight_kg * preset.met * preset.duration_hours, 1);
    let weekly_calories = round_to(session_calories * f64::from(training_frequency), 1);

    debug!(
        "Metrics for {}: {} kcal/session, {} kcal/week, bmi {:?}",
        goal, session_calories, weekly_calories, bmi
    );

    AnalyticsRecord {
        goal,
        estimated_session_calories: session_calories,
        estimated_weekly_calories: weekly_calories,
        bmi,
        recommended_rep_range: preset.rep_range.to_string(),
        recommended_intensity: preset.intensity.to_string(),
        volume_per_session: volume_for(experience_level).to_string(),
        sessions_per_week: training_frequency,
        experience_level,
    }
}

/// Round to `decimals` places from the exact binary value, ties to even
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}
