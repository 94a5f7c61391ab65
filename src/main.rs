//! Quill - A markdown blog platform.

mod cli;
mod config;
mod excerpt;
mod frontmatter;
mod index;
mod init;
mod loader;
mod logger;
mod render;
mod serve;
mod utils;
mod watch;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use config::SiteConfig;
use index::build_index;
use init::new_site;
use loader::DocumentLoader;
use serve::serve_site;
use std::path::Path;
use utils::date::display_date;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Init { name } => new_site(config, name.is_some()),
        Commands::Build { .. } => {
            let count = build_index(config)?;
            crate::log!("build"; "indexed {count} articles");
            Ok(())
        }
        Commands::Serve { .. } => {
            build_index(config)?;
            serve_site(config)
        }
        Commands::Read { slug, raw, .. } => read_article(config, slug, *raw),
        Commands::List { .. } => list_articles(config),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);

    // Validate config state based on command
    let config_exists = config.config_path.exists();
    match (cli.is_init(), config_exists) {
        (true, true) => {
            bail!("Config file already exists. Remove it manually or init in a different path.")
        }
        (false, false) => bail!("Config file not found."),
        _ => {}
    }

    if !cli.is_init() {
        config.validate()?;
    }

    Ok(config)
}

/// Fetch one article and print it, rendered to HTML unless `--raw`.
///
/// Metadata goes to stderr so stdout stays clean for piping.
fn read_article(config: &SiteConfig, slug: &str, raw: bool) -> Result<()> {
    let loader = DocumentLoader::new(config)?;
    let document = loader.load(slug)?;

    let mut meta = format!("{} ({})", document.title, display_date(&document.date));
    if !document.tags.is_empty() {
        meta.push_str(&format!("  [{}]", document.tags.join(", ")));
    }
    crate::log!("read"; "{meta}");

    if raw {
        println!("{}", document.body);
        return Ok(());
    }

    println!("{}", render::render_html(&document.body));
    Ok(())
}

/// Fetch the index and print one line per article.
fn list_articles(config: &SiteConfig) -> Result<()> {
    let loader = DocumentLoader::new(config)?;
    let records = loader.fetch_index()?;

    if records.is_empty() {
        crate::log!("list"; "no articles indexed");
        return Ok(());
    }

    for record in &records {
        let tags = if record.tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", record.tags.join(", "))
        };
        println!(
            "{}  {}  {}{}",
            display_date(&record.date).dimmed(),
            record.title.bold(),
            record.slug.cyan(),
            tags.dimmed()
        );
        if !record.excerpt.is_empty() {
            println!("    {}", record.excerpt.dimmed());
        }
    }
    Ok(())
}
