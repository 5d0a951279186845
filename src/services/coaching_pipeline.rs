use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::models::{AnalyticsRecord, ResearchEntry, TrainingPlan, UserProfile};

use super::metrics_service::calculate_metrics;
use super::plan_generation_service::generate_plan;
use super::plan_renderer::{render_analytics, render_plan, render_profile};
use super::research_service::summarize_research;

/// Everything produced for one submitted profile
#[derive(Debug, Clone, Serialize)]
pub struct CoachingReport {
    pub profile: UserProfile,
    pub analytics: AnalyticsRecord,
    pub plan: TrainingPlan,
    pub rendered_plan: String,
    pub references: Vec<String>,
}

/// Run metrics, scheduling and rendering for a profile
pub fn build_report<R: Rng + ?Sized>(profile: UserProfile, rng: &mut R) -> CoachingReport {
    let analytics = calculate_metrics(&profile);
    let plan = generate_plan(&profile, rng);
    let rendered_plan = render_plan(&plan);

    info!(
        "Built report: {} sessions over {} weeks",
        plan.total_sessions(),
        plan.overview.macrocycle_length_weeks
    );

    CoachingReport {
        profile,
        analytics,
        plan,
        rendered_plan,
        references: Vec::new(),
    }
}

impl CoachingReport {
    /// Attach one-line references summarized from search results
    pub fn with_research(mut self, entries: &[ResearchEntry]) -> Self {
        self.references = summarize_research(entries);
        self
    }

    /// Full text report: profile, analytics, references and plan
    pub fn render(&self) -> String {
        let mut sections = vec![
            format!("# Perfil validado\n{}", render_profile(&self.profile)),
            format!("# Insights analíticos\n{}", render_analytics(&self.analytics)),
        ];

        if !self.references.is_empty() {
            let references: Vec<String> =
                self.references.iter().map(|r| format!("- {}", r)).collect();
            sections.push(format!(
                "# Referências encontradas na web\n{}",
                references.join("\n")
            ));
        }

        sections.push(format!("# Plano final\n{}", self.rendered_plan));
        sections.join("\n\n")
    }

    /// Pretty-printed JSON document of the whole report
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
