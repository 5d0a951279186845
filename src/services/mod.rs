// Plan generation services

pub mod coaching_pipeline;
pub mod exercise_catalog;
pub mod metrics_service;
pub mod plan_generation_service;
pub mod plan_renderer;
pub mod research_service;

pub use coaching_pipeline::{build_report, CoachingReport};
pub use metrics_service::calculate_metrics;
pub use plan_generation_service::{generate_plan, generate_plan_with_thread_rng, TOTAL_SESSIONS};
pub use plan_renderer::{render_analytics, render_plan, render_profile};
pub use research_service::{research_queries, summarize_research};
