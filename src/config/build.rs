//! `[build]` section configuration.
//!
//! Paths and knobs for the index builder.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in quill.toml - index builder settings.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"        # markdown document root
/// index_file = "index.json"  # persisted article index
/// excerpt_width = 150        # excerpt budget in display-width units
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (set from CLI, not from the config file).
    #[serde(skip)]
    pub root: Option<PathBuf>,

    /// Markdown document root, relative to the project root.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Persisted index location, relative to the project root.
    #[serde(default = "defaults::build::index_file")]
    #[educe(Default = defaults::build::index_file())]
    pub index_file: PathBuf,

    /// Excerpt budget in display-width units (wide glyphs count double).
    #[serde(default = "defaults::build::excerpt_width")]
    #[educe(Default = defaults::build::excerpt_width())]
    pub excerpt_width: usize,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::Path;

    #[test]
    fn test_build_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.build.content, Path::new("content"));
        assert_eq!(config.build.index_file, Path::new("index.json"));
        assert_eq!(config.build.excerpt_width, 150);
    }

    #[test]
    fn test_build_overrides() {
        let config = r#"
            [build]
            content = "posts"
            index_file = "articles.json"
            excerpt_width = 200
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.content, Path::new("posts"));
        assert_eq!(config.build.index_file, Path::new("articles.json"));
        assert_eq!(config.build.excerpt_width, 200);
    }

    #[test]
    fn test_build_partial_override() {
        let config = r#"
            [build]
            excerpt_width = 80
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.excerpt_width, 80);
        assert_eq!(config.build.content, Path::new("content"));
    }

    #[test]
    fn test_build_unknown_field_rejected() {
        let config = r#"
            [build]
            minify = true
        "#;
        assert!(toml::from_str::<SiteConfig>(config).is_err());
    }
}
