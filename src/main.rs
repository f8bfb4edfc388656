use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_categories::app::CategoryModule;
use trivia_categories::config::Config;
use trivia_categories::logging::init_tracing;
use trivia_categories::ui::render::render;

#[derive(Parser, Debug)]
#[command(name = "trivia-categories")]
#[command(about = "Fetch and display the trivia category list")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the trivia service base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Default log level when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::read_from(&config_path).context("Failed to load configuration")?;

    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.validate().context("Invalid configuration")?;

    init_tracing(&config.logging.level);

    let module = CategoryModule::from_config(&config).context("Failed to build HTTP client")?;
    let store = module.create_store();
    tracing::info!(url = %config.api.categories_url(), "Session started");

    let mut updates = store.subscribe();
    let mut last = updates.borrow_and_update().clone();
    print!("{}", render(&last));

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    while last.phase.is_loading() {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                last = updates.borrow_and_update().clone();
                print!("{}", render(&last));
            }
            _ = &mut ctrl_c => {
                tracing::info!("Session interrupted");
                break;
            }
        }
    }

    store.close();
    tracing::info!(categories = last.categories.len(), "Session ended");

    if last.phase.is_failed() {
        std::process::exit(1);
    }
    Ok(())
}
