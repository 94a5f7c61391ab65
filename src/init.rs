//! Site initialization module.
//!
//! Creates a new blog project with default configuration and a sample
//! article so `build` and `serve` work immediately afterwards.

use crate::{config::SiteConfig, log, utils::date};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Default config filename
const CONFIG_FILE: &str = "quill.toml";

/// Sample article written into the fresh content directory
const SAMPLE_SLUG: &str = "hello-world.md";

/// Create a new blog project with default structure
pub fn new_site(config: &'static SiteConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    // Safety check: if no name was provided (init in current dir),
    // the directory must be completely empty
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `quill init <SITE_NAME>` to create in a subdirectory."
        );
    }

    init_site_structure(config)?;
    init_default_config(root)?;
    init_sample_article(config)?;

    log!("init"; "created blog project at {}", root.display());
    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write default configuration file
fn init_default_config(root: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(root.join(CONFIG_FILE), content)?;
    Ok(())
}

/// Create the content directory
fn init_site_structure(config: &SiteConfig) -> Result<()> {
    let content_dir = config.content_dir();
    if content_dir.exists() {
        bail!(
            "Path `{}` already exists. Try `quill init <SITE_NAME>` instead.",
            content_dir.display()
        );
    }
    fs::create_dir_all(&content_dir)
        .with_context(|| format!("Failed to create {}", content_dir.display()))?;
    Ok(())
}

/// Write a front-mattered sample article
fn init_sample_article(config: &SiteConfig) -> Result<()> {
    let body = format!(
        "---\n\
         title: Hello World\n\
         date: {}\n\
         tags: [meta]\n\
         ---\n\
         Welcome to your new blog. Edit or delete this article, then run\n\
         `quill build` to regenerate the index and `quill serve` to preview.\n",
        date::now_iso8601()
    );
    fs::write(config.content_dir().join(SAMPLE_SLUG), body)?;
    Ok(())
}
