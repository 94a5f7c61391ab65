//! Article index building.
//!
//! Walks the content tree, extracts metadata and an excerpt from every
//! markdown document, and writes the result to a single JSON index file.
//!
//! # Architecture
//!
//! ```text
//! build_index()
//!     │
//!     ├── load_prior_index() ──► slug → record map from the last build
//!     │                          (corrupt or missing file → empty map)
//!     │
//!     ├── collect_documents() ──► every *.md under the content root
//!     │
//!     ├── extract_record() per document
//!     │       front matter split → markdown strip → excerpt truncation
//!     │       (failures are logged and the document is skipped)
//!     │
//!     └── sort newest-first, overwrite the index file wholesale
//! ```
//!
//! # Date stability
//!
//! A record's `date` survives rebuilds: when the prior index already holds
//! a non-empty date for a slug, that date is kept even if front matter
//! declares a different one. Fresh documents fall back to front matter,
//! then to the current timestamp.

use crate::{
    config::SiteConfig,
    excerpt::strip_markdown,
    frontmatter, log,
    utils::{date, width},
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Title used when front matter declares none.
pub const TITLE_PLACEHOLDER: &str = "Untitled";

/// One entry in the persisted article index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Path-derived identifier: '/'-separated, extension-free, stable
    /// across rebuilds.
    pub slug: String,
    pub title: String,
    /// ISO-8601 timestamp or bare date.
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Width-bounded plain-text preview of the body.
    pub excerpt: String,
}

/// A markdown document discovered during the scan.
struct RawDocument {
    path: PathBuf,
    slug: String,
}

/// Build the article index and persist it.
///
/// Returns the number of indexed articles. Individual documents that fail
/// to read or parse are logged and skipped; they never abort the build.
pub fn build_index(config: &SiteConfig) -> Result<usize> {
    let content_dir = config.content_dir();
    let index_path = config.index_path();

    if !content_dir.exists() {
        fs::create_dir_all(&content_dir).with_context(|| {
            format!("Failed to create content dir: {}", content_dir.display())
        })?;
        log!("index"; "created content dir: {}", content_dir.display());
    }

    let prior = load_prior_index(&index_path);
    let documents = collect_documents(&content_dir);

    let mut records: Vec<ArticleRecord> = Vec::with_capacity(documents.len());
    for doc in documents {
        match extract_record(&doc, &prior, config.build.excerpt_width) {
            Ok(record) => records.push(record),
            Err(err) => {
                log!("index"; "skipping {}: {:#}", doc.path.display(), err);
            }
        }
    }

    // Stable sort keeps encounter order for equal or unparseable dates
    records.sort_by(|a, b| date::compare_desc(&a.date, &b.date));

    let json = serde_json::to_string_pretty(&records)?;
    fs::write(&index_path, json)
        .with_context(|| format!("Failed to write index: {}", index_path.display()))?;

    Ok(records.len())
}

/// Load the previous index as a slug-keyed map.
///
/// A missing file is normal (first build). A corrupt file degrades to an
/// empty map with a warning so the build still succeeds.
fn load_prior_index(index_path: &Path) -> HashMap<String, ArticleRecord> {
    let Ok(content) = fs::read_to_string(index_path) else {
        return HashMap::new();
    };

    match serde_json::from_str::<Vec<ArticleRecord>>(&content) {
        Ok(records) => records
            .into_iter()
            .map(|record| (record.slug.clone(), record))
            .collect(),
        Err(err) => {
            log!("warn"; "previous index is unreadable, regenerating: {err}");
            HashMap::new()
        }
    }
}

/// Recursively collect every markdown document under `content_dir`.
///
/// Entries are visited in sorted order so repeated scans of an unchanged
/// tree produce identical output.
fn collect_documents(content_dir: &Path) -> Vec<RawDocument> {
    WalkDir::new(content_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry.path()))
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "md"))
        .filter_map(|entry| {
            let path = entry.into_path();
            let slug = slug_for(&path, content_dir)?;
            Some(RawDocument { path, slug })
        })
        .collect()
}

/// Dot-prefixed files and directories are not articles.
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

/// Derive a slug from a document path relative to the content root.
///
/// The `.md` extension is removed and separators are normalized to `/`:
/// `content/posts/hello.md` → `posts/hello`.
fn slug_for(path: &Path, content_dir: &Path) -> Option<String> {
    let relative = path.strip_prefix(content_dir).ok()?;
    let without_ext = relative.with_extension("");

    let parts: Vec<&str> = without_ext
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<_>>()?;

    Some(parts.join("/"))
}

/// Extract an index record from one document.
fn extract_record(
    doc: &RawDocument,
    prior: &HashMap<String, ArticleRecord>,
    excerpt_width: usize,
) -> Result<ArticleRecord> {
    let raw = fs::read_to_string(&doc.path)
        .with_context(|| format!("Failed to read {}", doc.path.display()))?;

    let (fm, body) = frontmatter::split(&raw);
    let plain = strip_markdown(body);
    let excerpt = width::make_excerpt(&plain, excerpt_width);

    let title = fm
        .scalar("title")
        .filter(|t| !t.is_empty())
        .unwrap_or(TITLE_PLACEHOLDER)
        .to_owned();
    let tags = fm.list("tags");

    // A date already recorded for this slug wins over front matter, so
    // first-observed dates stay stable across rebuilds.
    let date = match prior.get(&doc.slug).filter(|p| !p.date.is_empty()) {
        Some(previous) => previous.date.clone(),
        None => fm
            .scalar("date")
            .filter(|d| !d.is_empty())
            .map_or_else(date::now_iso8601, str::to_owned),
    };

    Ok(ArticleRecord {
        slug: doc.slug.clone(),
        title,
        date,
        tags,
        excerpt,
    })
}
