use anyhow::Result;
use clap::Args;
use fitness_coach::services::{calculate_metrics, render_analytics};

use super::{OutputFormat, ProfileArgs, RunContext};

#[derive(Args)]
pub struct MetricsCommand {
    #[command(flatten)]
    profile: ProfileArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl MetricsCommand {
    pub fn execute(self, ctx: &RunContext) -> Result<()> {
        let profile = self
            .profile
            .resolve(&ctx.config.defaults)?
            .validate()?;

        let record = calculate_metrics(&profile);

        match self.format {
            OutputFormat::Text => println!("{}", render_analytics(&record)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        }

        Ok(())
    }
}
