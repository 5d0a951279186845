// Core workout-plan pipeline: metrics, exercise catalog, scheduling and rendering.
// The CLI crate drives it; nothing in here performs I/O.

pub mod models;
pub mod services;

pub use models::{
    AnalyticsRecord, ExperienceLevel, Goal, GoalCategory, ProfileError, ProfileInput,
    TrainingPlan, UserProfile,
};
pub use services::coaching_pipeline::{build_report, CoachingReport};
