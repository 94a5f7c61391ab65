//! HTTP client for fetching documents and the article index.
//!
//! The loader talks to whatever serves the site (the dev server from
//! [`crate::serve`] or any static file host). Documents are fetched as
//! raw markdown from `content/<slug>.md`; the listing comes from the
//! persisted `index.json`.
//!
//! Static hosts often answer unknown paths with the site's HTML shell
//! and status 200 instead of a real 404. The loader treats three signals
//! as that disguise: a declared HTML content type, a body that opens
//! with an HTML document tag, and script/head/body tags embedded in the
//! payload. All three report the document as missing.

use crate::{
    config::SiteConfig,
    frontmatter::{self, FrontMatter},
    index::{ArticleRecord, TITLE_PLACEHOLDER},
    utils::date,
};
use reqwest::{StatusCode, blocking::Client, header::CONTENT_TYPE};
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Failures the loader can report to callers.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Slug failed validation before any request was made.
    #[error("invalid document identifier: {0:?}")]
    InvalidIdentifier(String),

    /// Transport-level failure (connection refused, timeout, DNS).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The document does not exist (404, or an HTML fallback page).
    #[error("document does not exist")]
    NotFound,

    /// Server-side failure (5xx).
    #[error("server error: HTTP {0}")]
    Server(u16),

    /// Any other non-success status.
    #[error("unexpected status: HTTP {0}")]
    Status(u16),

    /// 200 OK but the body was empty or whitespace-only.
    #[error("document is empty")]
    EmptyContent,

    /// The response body is not usable document content.
    #[error("response is not a document")]
    InvalidContent,
}

// ============================================================================
// Fetched Document
// ============================================================================

/// A fetched document with its metadata split out of the front matter.
///
/// Missing metadata defaults the same way the index builder defaults it:
/// placeholder title, current timestamp for the date, empty tag list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
    /// Markdown body with the front matter block removed.
    pub body: String,
}

impl Document {
    fn from_raw(raw: &str) -> Self {
        let (fm, body) = frontmatter::split(raw);
        let date = match non_empty_scalar(&fm, "date") {
            Some(d) => d.to_owned(),
            None => date::now_iso8601(),
        };
        Self {
            title: non_empty_scalar(&fm, "title")
                .unwrap_or(TITLE_PLACEHOLDER)
                .to_owned(),
            date,
            tags: fm.list("tags"),
            body: body.to_owned(),
        }
    }
}

fn non_empty_scalar<'a>(fm: &'a FrontMatter, key: &str) -> Option<&'a str> {
    fm.scalar(key).filter(|v| !v.is_empty())
}

// ============================================================================
// Loader
// ============================================================================

/// Blocking HTTP client bound to a single site base URL.
pub struct DocumentLoader {
    client: Client,
    base_url: String,
    content: String,
    index_file: String,
}

impl DocumentLoader {
    pub fn new(config: &SiteConfig) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.reader.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.reader.base_url.trim_end_matches('/').to_owned(),
            content: config.build.content.display().to_string(),
            index_file: config.build.index_file.display().to_string(),
        })
    }

    /// Fetch a single document by slug.
    pub fn load(&self, slug: &str) -> Result<Document, LoadError> {
        validate_slug(slug)?;

        let url = format!("{}/{}/{}.md", self.base_url, self.content, slug);
        let raw = self.fetch_document_text(&url)?;

        let document = Document::from_raw(&raw);
        // All header, no article
        if document.body.trim().is_empty() {
            return Err(LoadError::InvalidContent);
        }
        Ok(document)
    }

    /// Fetch and parse the article index.
    pub fn fetch_index(&self) -> Result<Vec<ArticleRecord>, LoadError> {
        let url = format!("{}/{}", self.base_url, self.index_file);
        let body = self.fetch_document_text(&url)?;

        serde_json::from_str(&body).map_err(|_| LoadError::InvalidContent)
    }

    /// GET a URL, map status codes to errors, reject empty bodies, and
    /// classify disguised HTML fallback answers as missing documents.
    fn fetch_document_text(&self, url: &str) -> Result<String, LoadError> {
        let response = self.client.get(url).send()?;
        let status = response.status();

        match status {
            StatusCode::NOT_FOUND => return Err(LoadError::NotFound),
            s if s.is_server_error() => return Err(LoadError::Server(s.as_u16())),
            s if !s.is_success() => return Err(LoadError::Status(s.as_u16())),
            _ => {}
        }

        let declared_html = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(is_markup_type);

        let body = response.text()?;
        if body.trim().is_empty() {
            return Err(LoadError::EmptyContent);
        }
        if declared_html || looks_like_html(&body) {
            return Err(LoadError::NotFound);
        }
        Ok(body)
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Reject slugs that are empty, stringified null-ish values, or that
/// contain path tricks (`..`, `//`, leading `/`).
fn validate_slug(slug: &str) -> Result<(), LoadError> {
    let invalid = slug.is_empty()
        || slug == "null"
        || slug == "undefined"
        || slug.starts_with('/')
        || slug.contains("//")
        || slug.split('/').any(|seg| seg == "..");

    if invalid {
        return Err(LoadError::InvalidIdentifier(slug.to_owned()));
    }
    Ok(())
}

/// Whether a declared content type announces an HTML/XHTML document.
fn is_markup_type(content_type: &str) -> bool {
    let ct = content_type.to_ascii_lowercase();
    ct.contains("text/html") || ct.contains("application/xhtml")
}

/// Detect an HTML page served in place of markdown: an HTML document tag
/// at the start, or page-structure tags anywhere in the body.
fn looks_like_html(body: &str) -> bool {
    let lower = body.trim_start().to_ascii_lowercase();
    lower.starts_with("<!doctype html")
        || lower.starts_with("<html")
        || lower.contains("<script")
        || lower.contains("<head")
        || lower.contains("<body")
}
