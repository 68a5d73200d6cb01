//! CLI administration tool for dpi-dashboard.
//!
//! Prints dashboard figures and checks the database without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Headline totals and race breakdown
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show server version
//! cargo run --bin admin -- db info
//! ```
//!
//! # Environment Variables
//!
//! Same `MYSQL_*` variables as the server; see [`dpi_dashboard::config`].

use dpi_dashboard::application::services::DashboardService;
use dpi_dashboard::config::DatabaseConfig;
use dpi_dashboard::domain::views::LandingView;
use dpi_dashboard::infrastructure::database::ConnectionProvider;
use dpi_dashboard::infrastructure::persistence::MySqlVoterRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for inspecting the dashboard database.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show headline totals and the race breakdown
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = DatabaseConfig::from_env().context("Failed to load database configuration")?;
    let provider = Arc::new(ConnectionProvider::new(config));

    match cli.command {
        Commands::Stats => handle_stats(provider).await?,
        Commands::Db { action } => handle_db_action(action, provider).await?,
    }

    Ok(())
}

/// Prints the landing-page figures.
async fn handle_stats(provider: Arc<ConnectionProvider>) -> Result<()> {
    let service = DashboardService::new(Arc::new(MySqlVoterRepository::new(provider)));

    let view = service
        .landing()
        .await
        .context("Failed to load dashboard data")?;

    print_landing(&view);

    Ok(())
}

fn print_landing(view: &LandingView) {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();
    println!(
        "  Records:          {}",
        view.stats.total.to_string().bright_green().bold()
    );
    println!(
        "  Voters (PRU15):   {}",
        view.stats.voters_pru15.to_string().bright_green().bold()
    );
    println!(
        "  Voters (PRN15):   {}",
        view.stats.voters_prn15.to_string().bright_green().bold()
    );
    println!();

    if view.race_breakdown.is_empty() {
        println!("{}", "  No records found".yellow());
        println!();
        return;
    }

    println!("{}", "  By race".bright_blue().bold());
    println!(
        "  {:<12} {:>10} {:>10} {:>10}",
        "Label".bold(),
        "Total".bold(),
        "PRU15".bold(),
        "PRN15".bold()
    );
    for bucket in &view.race_breakdown {
        println!(
            "  {:<12} {:>10} {:>10} {:>10}",
            bucket.label, bucket.total, bucket.pru15, bucket.prn15
        );
    }
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, provider: Arc<ConnectionProvider>) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            provider
                .server_version()
                .await
                .context("Database connection failed")?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version = provider.server_version().await?;

            println!("  MySQL:    {}", version.bright_white());
            println!("  Endpoint: {}", provider.config().masked_url().bright_white());
            println!();
        }
    }

    Ok(())
}
