//! CLI administration tool for shorturl.
//!
//! Registers and inspects url mappings directly against the database,
//! through the same validator and registry the HTTP service uses.
//!
//! # Usage
//!
//! ```bash
//! # Register a URL
//! cargo run --bin admin -- register https://example.com/a
//!
//! # Look up a short code
//! cargo run --bin admin -- resolve 1
//!
//! # List mappings
//! cargo run --bin admin -- list --page 1 --page-size 20
//!
//! # Count mappings
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use shorturl::application::services::url_validator::DEFAULT_RESOLVE_TIMEOUT;
use shorturl::application::services::{RegistryError, RetryPolicy, UrlRegistry, UrlValidator};
use shorturl::config::Config;
use shorturl::domain::repositories::MappingRepository;
use shorturl::infrastructure::dns::{HostResolver, SystemResolver};
use shorturl::infrastructure::persistence::PgMappingRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorturl.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Validate and register a URL
    Register {
        /// URL to register (must be http or https with a resolvable host)
        url: String,
    },

    /// Show the URL behind a short code
    Resolve {
        /// Short code to look up
        code: String,
    },

    /// List mappings ordered by short code
    List {
        /// Page number (1-indexed)
        #[arg(short, long, default_value_t = 1)]
        page: i64,

        /// Mappings per page
        #[arg(short = 's', long, default_value_t = 20)]
        page_size: i64,
    },

    /// Show statistics
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
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let repository: Arc<dyn MappingRepository> =
        Arc::new(PgMappingRepository::new(Arc::new(pool.clone())));
    let registry = UrlRegistry::new(repository, RetryPolicy::default());

    match cli.command {
        Commands::Register { url } => register(&registry, &url).await?,
        Commands::Resolve { code } => resolve(&registry, &code).await?,
        Commands::List { page, page_size } => list(&registry, page, page_size).await?,
        Commands::Stats => handle_stats(&registry).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Validates and registers a URL, printing the resulting mapping.
async fn register(registry: &UrlRegistry<dyn MappingRepository>, url: &str) -> Result<()> {
    println!("{}", "🔗 Register URL".bright_blue().bold());
    println!();

    let resolver: Arc<dyn HostResolver> = Arc::new(SystemResolver::new());
    let validator = UrlValidator::new(resolver, DEFAULT_RESOLVE_TIMEOUT);

    let validated = match validator.validate(url).await {
        Ok(validated) => validated,
        Err(e) => {
            println!("{} {}", "❌ Rejected:".red().bold(), e);
            return Ok(());
        }
    };

    let mapping = registry
        .register(validated)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to register url: {}", e))?;

    println!("  URL:  {}", mapping.original_url.cyan());
    println!(
        "  Code: {}",
        mapping.short_code.to_string().bright_yellow().bold()
    );
    println!();

    Ok(())
}

/// Looks up a short code.
async fn resolve(registry: &UrlRegistry<dyn MappingRepository>, code: &str) -> Result<()> {
    match registry.resolve(code).await {
        Ok(mapping) => {
            println!(
                "  {} → {}",
                mapping.short_code.to_string().bright_yellow().bold(),
                mapping.original_url.cyan()
            );
            println!(
                "  Created: {}",
                mapping
                    .created_at
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .bright_black()
            );
        }
        Err(RegistryError::NotFound) => {
            println!("{}", "⚠️  No short URL found for the given input".yellow());
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    }

    Ok(())
}

/// Lists mappings ordered by short code.
///
/// # Output Format
///
/// ```text
/// 📋 Mappings (page 1)
///
///   Code     Created            URL
///   ──────────────────────────────────────────────────────────────────────
///   1        2024-01-15 10:30   https://example.com/a
///   2        2024-01-16 14:20   https://example.com/b
/// ```
async fn list(
    registry: &UrlRegistry<dyn MappingRepository>,
    page: i64,
    page_size: i64,
) -> Result<()> {
    println!("{}", format!("📋 Mappings (page {})", page).bright_blue().bold());
    println!();

    let mappings = registry
        .list(page, page_size)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list mappings: {}", e))?;

    if mappings.is_empty() {
        println!("{}", "  No mappings found".yellow());
        return Ok(());
    }

    println!(
        "  {:<8} {:<18} {}",
        "Code".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for mapping in &mappings {
        println!(
            "  {:<8} {:<18} {}",
            mapping.short_code.to_string().bright_yellow(),
            mapping
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            mapping.original_url.cyan()
        );
    }

    println!();

    Ok(())
}

/// Displays the number of registered mappings.
async fn handle_stats(registry: &UrlRegistry<dyn MappingRepository>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count = registry
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;

    println!("  Mappings: {}", count.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
