//! Site configuration management for `quill.toml`.
//!
//! # Sections
//!
//! | Section    | Purpose                                        |
//! |------------|------------------------------------------------|
//! | `[site]`   | Site metadata (name, description, navigation)  |
//! | `[build]`  | Content root, index file, excerpt budget       |
//! | `[serve]`  | Development server (port, interface, watch)    |
//! | `[reader]` | Client fetch settings (base URL, timeout)      |
//! | `[extra]`  | User-defined custom fields                     |
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "My Blog"
//! description = "A personal blog"
//!
//! [build]
//! content = "content"
//! excerpt_width = 150
//!
//! [serve]
//! port = 5277
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```

mod build;
pub mod defaults;
mod error;
mod reader;
mod serve;
mod site;

pub use site::NavItem;

use build::BuildConfig;
use error::ConfigError;
use reader::ReaderConfig;
use serve::ServeConfig;
use site::SiteInfo;

use crate::cli::{Cli, Commands};
use anyhow::Result;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    net::IpAddr,
    path::{Path, PathBuf},
};

/// Root configuration structure representing quill.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site metadata and navigation
    #[serde(default)]
    pub site: SiteInfo,

    /// Index builder settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// Client fetch settings
    #[serde(default)]
    pub reader: ReaderConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Markdown document root (content dir resolved against the root)
    pub fn content_dir(&self) -> PathBuf {
        self.get_root().join(&self.build.content)
    }

    /// Persisted index location resolved against the root
    pub fn index_path(&self) -> PathBuf {
        self.get_root().join(&self.build.index_file)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        // Determine the final root path based on command
        let base = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => base.join(name),
            _ => base,
        };
        self.config_path = root.join(&cli.config);
        self.build.root = Some(root);

        if let Some(content) = &cli.content {
            self.build.content = content.clone();
        }

        match &cli.command {
            Commands::Build { excerpt_width } => {
                if let Some(width) = excerpt_width {
                    self.build.excerpt_width = *width;
                }
            }
            Commands::Serve {
                interface,
                port,
                watch,
            } => {
                if let Some(interface) = interface {
                    self.serve.interface = interface.clone();
                }
                if let Some(port) = port {
                    self.serve.port = *port;
                }
                if let Some(watch) = watch {
                    self.serve.watch = *watch;
                }
            }
            Commands::Read { base_url, .. } | Commands::List { base_url } => {
                if let Some(base_url) = base_url {
                    self.reader.base_url = base_url.clone();
                }
            }
            Commands::Init { .. } => {}
        }
    }

    /// Validate configuration consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.build.excerpt_width == 0 {
            return Err(ConfigError::Validation(
                "build.excerpt_width must be positive".to_owned(),
            ));
        }
        if self.serve.interface.parse::<IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "serve.interface is not a valid IP address: {}",
                self.serve.interface
            )));
        }
        if !self.reader.base_url.starts_with("http://")
            && !self.reader.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(format!(
                "reader.base_url must start with http:// or https://: {}",
                self.reader.base_url
            )));
        }
        Ok(())
    }
}
