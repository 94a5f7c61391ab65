//! `[reader]` section configuration.
//!
//! Settings for the client commands (`read`, `list`) that fetch documents
//! from a running server.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[reader]` section in quill.toml - document fetch settings.
///
/// # Example
/// ```toml
/// [reader]
/// base_url = "https://blog.example.com"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ReaderConfig {
    /// Server to fetch documents and the index from.
    /// Defaults to the local dev server address.
    #[serde(default = "defaults::reader::base_url")]
    #[educe(Default = defaults::reader::base_url())]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "defaults::reader::timeout_secs")]
    #[educe(Default = defaults::reader::timeout_secs())]
    pub timeout_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_reader_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.reader.base_url, "http://127.0.0.1:5277");
        assert_eq!(config.reader.timeout_secs, 30);
    }

    #[test]
    fn test_reader_overrides() {
        let config = r#"
            [reader]
            base_url = "https://blog.example.com"
            timeout_secs = 5
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.reader.base_url, "https://blog.example.com");
        assert_eq!(config.reader.timeout_secs, 5);
    }

    #[test]
    fn test_reader_unknown_field_rejected() {
        let config = r#"
            [reader]
            retries = 3
        "#;
        assert!(toml::from_str::<SiteConfig>(config).is_err());
    }
}
