use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::Command;

use crate::config::Config;

pub fn show_config(path: Option<&Path>) -> Result<()> {
    let config_file = Config::resolve_path(path)?;
    let config = Config::load_from(path)?;
    let config_str = toml::to_string_pretty(&config)?;

    println!("Current Configuration ({})", config_file.display());
    println!("────────────────────────────────");
    println!();
    println!("{}", config_str);

    Ok(())
}

pub fn edit_config(path: Option<&Path>) -> Result<()> {
    let config_file = Config::resolve_path(path)?;

    if !config_file.exists() {
        Config::default().save_to(Some(config_file.as_path()))?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());

    let status = Command::new(&editor)
        .arg(&config_file)
        .status()
        .with_context(|| format!("Failed to launch editor {:?}", editor))?;

    if !status.success() {
        anyhow::bail!("Editor exited with {}", status);
    }

    // Reject edits that no longer parse
    Config::load_from(Some(config_file.as_path()))?;

    println!("{} Configuration saved!", "✓".green());

    Ok(())
}

pub fn init_config(path: Option<&Path>, force: bool) -> Result<()> {
    let config_file = Config::resolve_path(path)?;

    if config_file.exists() && !force {
        println!(
            "Configuration file already exists at: {}",
            config_file.display()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let written = Config::default().save_to(Some(config_file.as_path()))?;

    println!(
        "{} Configuration initialized at: {}",
        "✓".green(),
        written.display()
    );
    println!();
    println!("You can edit it with: fitness-coach config edit");

    Ok(())
}
