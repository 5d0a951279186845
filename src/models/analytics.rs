use serde::{Deserialize, Serialize};

use super::user_profile::{ExperienceLevel, Goal};

/// Per-goal constants behind the calorie estimate and the recommendations
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalPreset {
    pub met: f64,
    pub duration_hours: f64,
    pub rep_range: &'static str,
    pub intensity: &'static str,
}

/// Derived training metrics for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRecord {
    pub goal: Goal,
    pub estimated_session_calories: f64,
    pub estimated_weekly_calories: f64,
    pub bmi: Option<f64>,
    pub recommended_rep_range: String,
    pub recommended_intensity: String,
    pub volume_per_session: String,
    pub sessions_per_week: u32,
    pub experience_level: ExperienceLevel,
}
