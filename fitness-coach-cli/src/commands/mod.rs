mod config_cmd;
mod metrics;
mod plan;
mod profile_args;
mod search;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::config::Config;

pub use metrics::MetricsCommand;
pub use plan::PlanCommand;
pub use profile_args::ProfileArgs;
pub use search::SearchCommand;

#[derive(Parser)]
#[command(name = "fitness-coach")]
#[command(about = "Generates 12-session strength and conditioning plans", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Force offline mode (skip web research)
    #[arg(long, global = true)]
    offline: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "FITNESS_COACH_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a complete training plan
    Plan(PlanCommand),

    /// Show calorie, BMI and volume estimates only
    Metrics(MetricsCommand),

    /// Query the web search collaborator directly
    Search(SearchCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Edit configuration file
    Edit,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format for generated reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Settings shared by every command for one invocation
pub struct RunContext {
    pub config: Config,
    pub offline: bool,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub async fn execute(self) -> Result<()> {
        let config_path = self.config.as_deref();
        let offline = self.offline;

        match self.command {
            Commands::Plan(cmd) => cmd.execute(&RunContext::load(config_path, offline)?).await,
            Commands::Metrics(cmd) => cmd.execute(&RunContext::load(config_path, offline)?),
            Commands::Search(cmd) => cmd.execute(&RunContext::load(config_path, offline)?).await,
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config(config_path),
                ConfigSubcommands::Edit => config_cmd::edit_config(config_path),
                ConfigSubcommands::Init { force } => config_cmd::init_config(config_path, force),
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

impl RunContext {
    fn load(config_path: Option<&Path>, offline: bool) -> Result<Self> {
        if offline {
            tracing::info!("Offline mode: web research disabled");
        }
        Ok(Self {
            config: Config::load_from(config_path)?,
            offline,
        })
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
