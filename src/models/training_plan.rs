use serde::{Deserialize, Serialize};

use super::user_profile::Goal;

/// Muscle groups indexed by the exercise catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Triceps,
    Back,
    Biceps,
    Legs,
    Shoulders,
    Glutes,
    Abs,
}

/// Session archetype cycled through by the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplitTemplate {
    pub name: &'static str,
    /// Empty for circuit sessions
    pub muscles: &'static [MuscleGroup],
    pub focus: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExercisePrescription {
    pub exercise: String,
    pub sets: u32,
    pub reps: String,
    pub rest: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Day slot within the week, starting at 1
    pub day: u32,
    pub name: String,
    pub focus: String,
    pub summary: Option<String>,
    pub exercises: Vec<ExercisePrescription>,
    pub conditioning: Option<String>,
    pub mobility: Option<String>,
    pub progression: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub week: u32,
    pub focus: String,
    pub sessions: Vec<Session>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOverview {
    pub primary_goal: Goal,
    pub focus_points: Vec<String>,
    pub macrocycle_length_weeks: u32,
}

/// Structured multi-week plan ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPlan {
    pub overview: PlanOverview,
    pub guidelines: Vec<String>,
    pub training_weeks: Vec<Week>,
    pub recovery: Vec<String>,
    pub nutrition_tips: Vec<String>,
    pub progression_strategy: Option<String>,
}

impl TrainingPlan {
    pub fn total_sessions(&self) -> usize {
        self.training_weeks.iter().map(|w| w.sessions.len()).sum()
    }

    /// Number of sessions in each week, in order
    pub fn session_distribution(&self) -> Vec<usize> {
        self.training_weeks.iter().map(|w| w.sessions.len()).collect()
    }

    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.training_weeks.iter().flat_map(|w| w.sessions.iter())
    }
}
