use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;

use super::RunContext;
use crate::api::SearchClient;

#[derive(Args)]
pub struct SearchCommand {
    /// Free-text query
    query: String,

    /// Maximum number of results to show (defaults to the configured value)
    #[arg(short = 'n', long)]
    max_results: Option<usize>,
}

impl SearchCommand {
    pub async fn execute(self, ctx: &RunContext) -> Result<()> {
        if ctx.offline {
            bail!("Search is unavailable in offline mode");
        }

        let client = SearchClient::new(&ctx.config.search, ctx.config.retry.clone())?;
        let max_results = self.max_results.unwrap_or(ctx.config.search.max_results);
        let results = client.search(&self.query, max_results).await;

        if results.is_empty() {
            println!("Nenhum resultado encontrado");
            return Ok(());
        }

        for result in &results {
            if result.is_error() {
                println!("{} {}", "✗".red(), result.snippet);
            } else if result.url.is_empty() {
                println!("- {}", result.title);
            } else {
                println!("- {} ({})", result.title, result.url.dimmed());
            }
        }

        Ok(())
    }
}
