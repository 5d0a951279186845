use anyhow::Result;
use clap::Args;
use colored::Colorize;
use fitness_coach::models::ResearchEntry;
use fitness_coach::services::{build_report, research_queries};
use fitness_coach::UserProfile;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use super::{OutputFormat, ProfileArgs, RunContext};
use crate::api::SearchClient;

#[derive(Args)]
pub struct PlanCommand {
    #[command(flatten)]
    profile: ProfileArgs,

    /// Seed for reproducible exercise selection
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl PlanCommand {
    pub async fn execute(self, ctx: &RunContext) -> Result<()> {
        let profile = self
            .profile
            .resolve(&ctx.config.defaults)?
            .validate()?;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let research = if ctx.offline || !ctx.config.search.enabled {
            tracing::debug!("Skipping web research");
            Vec::new()
        } else {
            run_research(ctx, &profile).await
        };

        let report = build_report(profile, &mut rng).with_research(&research);

        match self.format {
            OutputFormat::Text => {
                println!("{}", report.render());
                println!();
                println!(
                    "{} {} sessões geradas",
                    "✓".green(),
                    report.plan.total_sessions()
                );
            }
            OutputFormat::Json => {
                println!("{}", report.to_json()?);
            }
        }

        Ok(())
    }
}

/// Search failures of any kind leave the plan without references
async fn run_research(ctx: &RunContext, profile: &UserProfile) -> Vec<ResearchEntry> {
    let client = match SearchClient::new(&ctx.config.search, ctx.config.retry.clone()) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("Web research unavailable: {:#}", e);
            return Vec::new();
        }
    };
    let queries = research_queries(profile);

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Pesquisando {} referências...", queries.len()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let entries = client
        .research(&queries, ctx.config.search.max_results)
        .await;

    spinner.finish_and_clear();
    entries
}
