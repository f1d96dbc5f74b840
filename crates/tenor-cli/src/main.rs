//! Tenor CLI - Annotate chat messages from the terminal
//!
//! Thin client for the Tenor API.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;

use api::TenorClient;
use config::Config;
use tenor::{Annotation, HistoryEntry, Sentiment};

#[derive(Parser)]
#[command(name = "tenor")]
#[command(about = "Tenor CLI - Sentiment, intent and context for chat messages", long_about = None)]
#[command(version)]
struct Cli {
    /// API base URL (overrides config file)
    #[arg(long, global = true, env = "TENOR_URL")]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Annotate a message
    Analyze {
        /// Message content (or use -f for file)
        content: Option<String>,
        /// Read content from file
        #[arg(short, long)]
        file: Option<String>,
        /// JSON file with prior turns: [{"role": "...", "content": "..."}]
        #[arg(long)]
        history: Option<String>,
        /// Print raw JSON
        #[arg(long)]
        json: bool,
        /// Print a neutral annotation instead of failing when the API is unreachable
        #[arg(long)]
        fallback: bool,
    },

    /// Check that the API is up
    Health,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Persist the API base URL
    SetUrl {
        /// e.g. http://localhost:8000
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let url = cli.url.as_deref();

    match cli.command {
        Commands::Analyze {
            content,
            file,
            history,
            json,
            fallback,
        } => cmd_analyze(url, content, file, history, json, fallback).await,
        Commands::Health => cmd_health(url).await,
        Commands::Config { action } => cmd_config(url, action),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_analyze(
    url: Option<&str>,
    content: Option<String>,
    file: Option<String>,
    history: Option<String>,
    json: bool,
    fallback: bool,
) -> Result<()> {
    let config = Config::load()?;
    let client = TenorClient::new(&config.resolve_base_url(url));

    let content = match (content, file) {
        (Some(c), None) => c,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path))?,
        (Some(_), Some(_)) => bail!("Pass either CONTENT or --file, not both"),
        (None, None) => bail!("Nothing to analyze. Pass CONTENT or --file."),
    };

    let chat_history = match history {
        Some(path) => load_history(&path)?,
        None => Vec::new(),
    };

    let annotation = if fallback {
        let (annotation, error) = client.analyze_or_fallback(&content, &chat_history).await;
        if let Some(e) = error {
            eprintln!("{} {:#}", "Using fallback annotation:".yellow(), e);
        }
        annotation
    } else {
        client.analyze(&content, &chat_history).await?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&annotation)?);
    } else {
        print_annotation(&annotation);
    }

    Ok(())
}

async fn cmd_health(url: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let base_url = config.resolve_base_url(url);
    let client = TenorClient::new(&base_url);

    print!("Checking {}... ", base_url);

    match client.health().await {
        Ok(health) => {
            println!("{}", health.status.green());
            println!("  {} {}", "version:".dimmed(), health.version);
            println!("  {} {}", "sentiment model:".dimmed(), health.sentiment_model);
            println!("  {} {}", "intent model:".dimmed(), health.intent_model);
            Ok(())
        }
        Err(e) => {
            println!("{}", "Failed".red());
            Err(e)
        }
    }
}

fn cmd_config(url: Option<&str>, action: Option<ConfigAction>) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        Some(ConfigAction::SetUrl { url }) => {
            config.set_base_url(&url);
            config.save()?;
            println!("{} Base URL set to {}", "✓".green(), config.base_url);
        }
        None => {
            println!("{}", "Configuration:".bold());
            println!("  {} {:?}", "file:".dimmed(), Config::config_path()?);
            println!("  {} {}", "base_url:".dimmed(), config.base_url);
            if let Some(active) = url {
                println!("  {} {}", "override:".dimmed(), active.cyan());
            }
        }
    }

    Ok(())
}

// ============================================
// Helpers
// ============================================

fn load_history(path: &str) -> Result<Vec<HistoryEntry>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read history {}", path))?;
    parse_history(&content).with_context(|| format!("Invalid history file {}", path))
}

fn parse_history(content: &str) -> Result<Vec<HistoryEntry>> {
    Ok(serde_json::from_str(content)?)
}

fn print_annotation(annotation: &Annotation) {
    let sentiment = match annotation.sentiment {
        Sentiment::Positive => annotation.sentiment.to_string().green(),
        Sentiment::Negative => annotation.sentiment.to_string().red(),
        Sentiment::Neutral => annotation.sentiment.to_string().normal(),
    };
    let fmt_opt = |v: Option<f64>| v.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string());

    println!("{}", annotation.enhanced_response.bold());
    println!(
        "  {} {} (score {}, subjectivity {})",
        "sentiment:".dimmed(),
        sentiment,
        fmt_opt(annotation.score),
        fmt_opt(annotation.subjectivity)
    );
    println!("  {} {}", "intent:".dimmed(), annotation.intent.to_string().cyan());
    println!("  {} {:.2}", "context:".dimmed(), annotation.context_score);
}
