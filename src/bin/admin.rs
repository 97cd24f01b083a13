//! CLI administration tool for dal-links.
//!
//! Manages links and checks the database without going through the HTTP
//! admin pages. Writes go through [`LinkService`], so branded links are
//! derived exactly as the server derives them.
//!
//! # Usage
//!
//! ```bash
//! # List links, optionally for one brand
//! cargo run --bin admin -- link list --subdomain radd
//!
//! # Create a link (prompts for missing fields)
//! cargo run --bin admin -- link create -s radd -n get -d https://raddonline.com/products/GottaGet
//!
//! # Delete a link
//! cargo run --bin admin -- link delete 42
//!
//! # Show where a branded URL leads
//! cargo run --bin admin -- link resolve https://radd.dal.io/get
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `dal_links::config`); `DATABASE_URL` is required.

use dal_links::api::dto::link::LinkInput;
use dal_links::application::services::{DeepLinkResolver, LinkService, Resolution};
use dal_links::config::{self, Config};
use dal_links::domain::hooks::HookChain;
use dal_links::domain::repositories::LinkRepository;
use dal_links::infrastructure::persistence::PgLinkRepository;
use dal_links::server;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;
use url::Url;
use validator::Validate;

/// CLI tool for managing dal-links.
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
    /// Manage links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List links, newest first
    List {
        /// Only show links for this subdomain
        #[arg(short, long)]
        subdomain: Option<String>,

        /// Maximum number of links to show
        #[arg(short, long, default_value_t = 50)]
        limit: i64,
    },

    /// Create a link
    Create {
        /// Brand subdomain (e.g., "radd")
        #[arg(short, long)]
        subdomain: Option<String>,

        /// Link name, the path after the domain (e.g., "get")
        #[arg(short, long)]
        name: Option<String>,

        /// Destination URL
        #[arg(short, long)]
        deep_link: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Delete a link by ID
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show where a branded URL redirects
    Resolve {
        /// Branded URL, e.g. https://radd.dal.io/get
        url: String,
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

    let config = config::load_from_env()?;
    let pool = server::connect(&config).await?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &config, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, config: &Config, pool: &PgPool) -> Result<()> {
    let repo: Arc<dyn LinkRepository> = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));

    match action {
        LinkAction::List { subdomain, limit } => {
            let service = LinkService::new(repo, HookChain::standard(&config.brand_domain));
            list_links(&service, subdomain, limit).await?;
        }
        LinkAction::Create {
            subdomain,
            name,
            deep_link,
            yes,
        } => {
            let service = LinkService::new(repo, HookChain::standard(&config.brand_domain));
            create_link(&service, subdomain, name, deep_link, yes).await?;
        }
        LinkAction::Delete { id, yes } => {
            let service = LinkService::new(repo, HookChain::standard(&config.brand_domain));
            delete_link(&service, id, yes).await?;
        }
        LinkAction::Resolve { url } => {
            resolve_url(&DeepLinkResolver::new(repo), &url).await?;
        }
    }

    Ok(())
}

/// Lists links in a table.
///
/// # Output Format
///
/// ```text
/// 🔗 Links
///
///   ID   Branded link                   Deep link
///   ──────────────────────────────────────────────────────────────────────
///   1    radd.dal.io/get                https://raddonline.com/products/GottaGet
/// ```
async fn list_links(service: &LinkService, subdomain: Option<String>, limit: i64) -> Result<()> {
    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let page = service
        .list_links(0, limit, subdomain)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if page.links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin link create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {}",
        "ID".bright_white().bold(),
        "Branded link".bright_white().bold(),
        "Deep link".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &page.links {
        println!(
            "  {:<4} {:<30} {}",
            link.id.to_string().bright_black(),
            link.branded_link.cyan(),
            link.deep_link
        );
    }

    println!();
    println!(
        "  Showing {} of {}",
        page.links.len().to_string().bright_white().bold(),
        page.total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Creates a link, prompting for any field not given on the command line.
async fn create_link(
    service: &LinkService,
    subdomain: Option<String>,
    name: Option<String>,
    deep_link: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "➕ Create Link".bright_blue().bold());
    println!();

    let input = LinkInput {
        subdomain: prompt_if_missing(subdomain, "Subdomain")?,
        name: prompt_if_missing(name, "Name")?,
        deep_link: prompt_if_missing(deep_link, "Deep link")?,
    };

    if let Err(errors) = input.validate() {
        for (field, errs) in errors.field_errors() {
            for err in errs {
                let message = err
                    .message
                    .as_deref()
                    .map(str::to_string)
                    .unwrap_or_else(|| err.code.to_string());
                println!("  {} {}: {}", "✗".red(), field, message);
            }
        }
        bail!("Invalid link");
    }

    println!();
    println!("{}", "Link details:".bright_white().bold());
    println!("  Subdomain: {}", input.subdomain.cyan());
    println!("  Name:      {}", input.name.cyan());
    println!("  Deep link: {}", input.deep_link.bright_yellow());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let link = service
        .create_link(input.into())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!();
    println!("{}", "✅ Link created successfully!".green().bold());
    println!("  ID:           {}", link.id.to_string().bright_black());
    println!("  Branded link: {}", link.branded_link.bright_cyan());
    println!();

    Ok(())
}

fn prompt_if_missing(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::new().with_prompt(prompt).interact_text()?),
    }
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(service: &LinkService, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Link".bright_blue().bold());
    println!();

    let link = service
        .get_link(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Branded link: {}", link.branded_link.cyan());
    println!("  Deep link:    {}", link.deep_link);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!();
    println!("{}", "✅ Link deleted successfully!".green().bold());
    println!();

    Ok(())
}

/// Resolves a branded URL the way the catch-all route does.
async fn resolve_url(resolver: &DeepLinkResolver, raw: &str) -> Result<()> {
    let with_scheme = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };
    let url = Url::parse(&with_scheme).with_context(|| format!("Invalid URL: {raw}"))?;
    let host = url.host_str().context("URL has no host")?;

    match resolver.resolve(host, url.path().trim_start_matches('/')).await {
        Resolution::Redirect(deep_link) => {
            println!("  {} {}", "302 →".green().bold(), deep_link.bright_yellow());
        }
        Resolution::Fallback => {
            println!("  {} welcome page (no link for {})", "200".yellow().bold(), host);
        }
    }

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
            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await?;
            let brands: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT subdomain) FROM links")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Links:      {}", links.to_string().bright_green().bold());
            println!("  Brands:     {}", brands.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
