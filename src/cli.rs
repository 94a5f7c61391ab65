//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quill markdown blog platform CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Config file name (default: quill.toml)
    #[arg(short = 'C', long, default_value = "quill.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Init a new blog site
    Init {
        /// the name(path) of site directory, related to `root`
        name: Option<PathBuf>,
    },

    /// Scan the content tree and rebuild the article index
    Build {
        /// Excerpt budget in display-width units
        #[arg(long = "excerpt-width")]
        excerpt_width: Option<usize>,
    },

    /// Serve the site. Rebuild the index on change automatically
    Serve {
        /// Interface to bind on
        #[arg(short, long)]
        interface: Option<String>,

        /// The port you should provide
        #[arg(short, long)]
        port: Option<u16>,

        /// enable watch
        #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        watch: Option<bool>,
    },

    /// Fetch one article by slug and render it to HTML
    Read {
        /// Article slug ('/'-separated path without extension)
        slug: String,

        /// Print the raw markdown body instead of rendered HTML
        #[arg(long)]
        raw: bool,

        /// Server base URL override
        #[arg(short, long = "base-url")]
        base_url: Option<String>,
    },

    /// Fetch the article index and print the listing
    List {
        /// Server base URL override
        #[arg(short, long = "base-url")]
        base_url: Option<String>,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve { .. })
    }
    pub const fn is_reader(&self) -> bool {
        matches!(self.command, Commands::Read { .. } | Commands::List { .. })
    }
}
