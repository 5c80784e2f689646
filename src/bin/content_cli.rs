//! CLI for inspecting site content.
//!
//! Runs the same repository operations the site uses, against the configured
//! Cosmic bucket or fixture file, without starting the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # List all cars, cheapest first
//! cargo run --bin content-cli -- list cars
//!
//! # Show one post (prompts for the slug when omitted)
//! cargo run --bin content-cli -- get posts rust-in-production
//!
//! # Posts in a category
//! cargo run --bin content-cli -- related posts category 65f1c0...
//!
//! # Check that every content type of the site can be fetched
//! cargo run --bin content-cli -- check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `content_site::config`.

use content_site::application::services::ContentRepository;
use content_site::config;
use content_site::domain::entities::{ContentItem, ContentType, Relation, RelationDepth};
use content_site::domain::repositories::ContentStore;
use content_site::infrastructure::stores;
use content_site::utils::format::format_price;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;

/// CLI tool for inspecting site content.
#[derive(Parser)]
#[command(name = "content-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the relation depth for the requested type
    #[arg(short, long, global = true)]
    depth: Option<u8>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every item of a content type
    List {
        /// posts, authors, categories, cars or brands
        content_type: ContentType,
    },

    /// Show one item as JSON
    Get {
        content_type: ContentType,

        /// Item slug (prompted for when omitted)
        slug: Option<String>,
    },

    /// List items whose relation field references an id
    Related {
        content_type: ContentType,

        /// author, category or brand
        field: Relation,

        /// Id of the referenced object
        id: String,
    },

    /// Fetch every content type of the configured site
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Failed to load configuration")?;
    let store = stores::from_config(&config)?;

    let mut repository = ContentRepository::new(store);
    if let Some(levels) = cli.depth {
        let depth = RelationDepth::new(levels);
        for content_type in ContentType::ALL {
            repository = repository.with_depth(content_type, depth);
        }
    }

    match cli.command {
        Commands::List { content_type } => list(&repository, content_type).await?,
        Commands::Get { content_type, slug } => get(&repository, content_type, slug).await?,
        Commands::Related {
            content_type,
            field,
            id,
        } => related(&repository, content_type, field, &id).await?,
        Commands::Check => check(&repository, config.variant.content_types()).await?,
    }

    Ok(())
}

async fn list(repository: &ContentRepository<dyn ContentStore>, content_type: ContentType) -> Result<()> {
    println!("{}", format!("{content_type}").bright_blue().bold());
    println!();

    let items = repository.list_all(content_type).await?;
    print_items(content_type, &items);

    Ok(())
}

/// Fetches one item by slug, prompting for the slug if it was not given.
async fn get(
    repository: &ContentRepository<dyn ContentStore>,
    content_type: ContentType,
    slug: Option<String>,
) -> Result<()> {
    let slug = match slug {
        Some(s) => s,
        None => Input::new()
            .with_prompt(format!("{content_type} slug"))
            .interact_text()?,
    };

    match repository.get_one(content_type, &slug).await? {
        Some(item) => {
            println!("{}", serde_json::to_string_pretty(&item)?);
        }
        None => {
            println!(
                "{}",
                format!("No {content_type} with slug '{slug}'").yellow()
            );
        }
    }

    Ok(())
}

async fn related(
    repository: &ContentRepository<dyn ContentStore>,
    content_type: ContentType,
    field: Relation,
    id: &str,
) -> Result<()> {
    println!(
        "{}",
        format!("{content_type} with {field} = {id}").bright_blue().bold()
    );
    println!();

    let items = repository.list_by_relation(content_type, field, id).await?;
    print_items(content_type, &items);

    Ok(())
}

/// Fetches each content type once and reports counts or failures.
///
/// Exits with an error if any type fails.
async fn check(
    repository: &ContentRepository<dyn ContentStore>,
    content_types: &[ContentType],
) -> Result<()> {
    println!(
        "{} {}",
        "Checking content store:".bright_blue().bold(),
        repository.backend_name().cyan()
    );
    println!();

    let mut failures = 0;
    for &content_type in content_types {
        match repository.list_all(content_type).await {
            Ok(items) => println!(
                "  {} {:<12} {}",
                "OK".green().bold(),
                content_type.as_str(),
                format!("{} items", items.len()).bright_black()
            ),
            Err(e) => {
                failures += 1;
                println!(
                    "  {} {:<12} {}",
                    "FAIL".red().bold(),
                    content_type.as_str(),
                    e.to_string().red()
                );
            }
        }
    }
    println!();

    if failures > 0 {
        anyhow::bail!("{failures} content type(s) could not be fetched");
    }

    println!("{}", "All content types reachable".green().bold());
    Ok(())
}

fn print_items(content_type: ContentType, items: &[ContentItem]) {
    if items.is_empty() {
        println!("{}", "  No items found".yellow());
        return;
    }

    println!(
        "  {:<32} {:<40} {}",
        "Slug".bright_white().bold(),
        "Title".bright_white().bold(),
        "Id".bright_white().bold()
    );
    println!("  {}", "-".repeat(96).bright_black());

    for item in items {
        let title = if content_type == ContentType::Cars {
            format!("{} ({})", item.title, format_price(item.price()))
        } else {
            item.title.clone()
        };
        println!(
            "  {:<32} {:<40} {}",
            item.slug.cyan(),
            title,
            item.id.bright_black()
        );
    }

    println!();
    println!("  Total: {}", items.len().to_string().bright_white().bold());
}
