//! Pizza Console
//!
//! Desktop administrative console for a pizza-shop billing backend.
//!
//! This is the main entry point for the Dioxus Desktop application.

use anyhow::Context;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use console_core::ConsoleConfig;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "pizza-console", version, about = "Admin console for the pizza billing backend")]
struct Args {
    /// Base URL of the billing backend
    #[arg(long, env = "PIZZA_CONSOLE_API_URL")]
    api_url: Option<String>,

    /// Path to a console.toml config file
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .pretty()
        .init();

    let args = Args::parse();

    // Resolve configuration: file first, then flag/env override
    let mut config = match &args.config {
        Some(path) => ConsoleConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ConsoleConfig::load_or_default().context("loading console.toml")?,
    };
    if let Some(api_url) = args.api_url {
        config.override_base_url(api_url);
    }
    config.validate().context("invalid configuration")?;

    println!();
    println!("🍕 Pizza Console");
    println!("   backend: {}", config.base_url());
    println!();

    // Launch the Dioxus desktop application
    console_ui::launch(config);

    Ok(())
}
