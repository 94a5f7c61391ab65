//! `[site]` section configuration.
//!
//! Site identity and navigation, exposed to templates and the reader UI.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in quill.toml - site metadata and navigation.
///
/// # Example
/// ```toml
/// [site]
/// name = "My Blog"
/// description = "Notes on systems programming"
/// logo = "/logo.svg"
///
/// [[site.nav]]
/// label = "Home"
/// url = "/"
///
/// [[site.nav]]
/// label = "GitHub"
/// url = "https://github.com/example"
/// target = "_blank"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteInfo {
    /// Site name shown in listings and page headers.
    #[serde(default = "defaults::site::name")]
    #[educe(Default = defaults::site::name())]
    pub name: String,

    /// One-line site description.
    #[serde(default)]
    pub description: String,

    /// Optional logo URL.
    #[serde(default)]
    pub logo: Option<String>,

    /// Optional registration/footer notice.
    #[serde(default)]
    pub icp: Option<String>,

    /// Navigation entries.
    #[serde(default)]
    pub nav: Vec<NavItem>,
}

/// One navigation link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
    pub label: String,
    pub url: String,

    /// Link target attribute (e.g. `_blank` for external links).
    #[serde(default)]
    pub target: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_site_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.site.name, "My Blog");
        assert!(config.site.description.is_empty());
        assert!(config.site.logo.is_none());
        assert!(config.site.nav.is_empty());
    }

    #[test]
    fn test_site_with_nav() {
        let config = r#"
            [site]
            name = "Field Notes"
            description = "notes"

            [[site.nav]]
            label = "Home"
            url = "/"

            [[site.nav]]
            label = "GitHub"
            url = "https://github.com/example"
            target = "_blank"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.site.name, "Field Notes");
        assert_eq!(config.site.nav.len(), 2);
        assert_eq!(config.site.nav[0].label, "Home");
        assert_eq!(config.site.nav[1].target.as_deref(), Some("_blank"));
    }

    #[test]
    fn test_site_unknown_field_rejected() {
        let config = r#"
            [site]
            name = "Test"
            theme = "dark"
        "#;
        assert!(toml::from_str::<SiteConfig>(config).is_err());
    }
}
