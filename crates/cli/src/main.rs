//! Visual Product Matcher CLI — run a similarity search from the terminal.
//!
//! Drives the same upload control and orchestrator as the desktop app.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use matcher_core::error::GENERIC_SEARCH_ERROR;
use matcher_core::present::render_cards;
use matcher_core::{
    load_matcher_config, ApiConfig, HttpSearchApi, SearchOrchestrator, SearchState, UploadControl,
};

/// Find products that look like an image.
#[derive(Parser)]
#[command(name = "matcher", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload an image and list visually similar products
    Find {
        /// PNG or JPEG image
        image: PathBuf,

        /// Similarity API endpoint (overrides .matcher.toml)
        #[arg(long)]
        endpoint: Option<String>,

        /// Directory holding .matcher.toml (default: current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Show the resolved API configuration
    Config {
        /// Directory holding .matcher.toml (default: current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn resolve_config(dir: Option<PathBuf>, endpoint: Option<String>) -> ApiConfig {
    let dir = dir.or_else(|| std::env::current_dir().ok());
    let mut config = dir.map(|d| load_matcher_config(&d)).unwrap_or_default();
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
    }
    config
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("matcher=warn".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Find { image, endpoint, dir } => {
            let config = resolve_config(dir, endpoint);

            let mut upload = UploadControl::new();
            if let Err(e) = upload.select_path(&image) {
                eprintln!("{}", e.user_message());
                std::process::exit(1);
            }
            let mut pending = None;
            if let Err(e) = upload.submit(|file| pending = Some(file)) {
                eprintln!("{}", e.user_message());
                std::process::exit(1);
            }
            let Some(file) = pending else {
                std::process::exit(1);
            };

            let api = HttpSearchApi::new(&config).unwrap_or_else(|e| {
                tracing::error!(error = %e, "Could not create HTTP client");
                std::process::exit(1);
            });
            let mut orchestrator = SearchOrchestrator::new();

            match orchestrator.search(&api, file).await {
                SearchState::Success(matches) => {
                    let cards = render_cards(matches);
                    if cli.json {
                        println!("{}", serde_json::to_string_pretty(&cards).unwrap());
                    } else {
                        if cards.is_empty() {
                            eprintln!("No similar products for '{}'", image.display());
                            std::process::exit(1);
                        }
                        for c in &cards {
                            println!(
                                "{:<40} {:<24} {:>4}  {}",
                                c.name, c.category, c.similarity, c.image_url
                            );
                        }
                        eprintln!("\n{} matches", cards.len());
                    }
                }
                state => {
                    eprintln!("{}", state.error_message().unwrap_or(GENERIC_SEARCH_ERROR));
                    std::process::exit(1);
                }
            }
        }
        Commands::Config { dir } => {
            let config = resolve_config(dir, None);
            let timeout = config.timeout.map(|t| t.as_secs());

            if cli.json {
                let output = serde_json::json!({
                    "endpoint": config.endpoint,
                    "timeout_secs": timeout,
                });
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            } else {
                println!("Endpoint:   {}", config.endpoint);
                match timeout {
                    Some(secs) => println!("Timeout:    {secs}s"),
                    None => println!("Timeout:    none"),
                }
            }
        }
    }
}
