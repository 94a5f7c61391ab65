//! Default values for configuration fields.
//!
//! Each function exists so serde and educe can share a single source of
//! truth for a field's default.

use std::path::PathBuf;

pub const fn r#true() -> bool {
    true
}

pub mod site {
    pub fn name() -> String {
        "My Blog".to_owned()
    }
}

pub mod build {
    use super::PathBuf;

    pub fn content() -> PathBuf {
        PathBuf::from("content")
    }

    pub fn index_file() -> PathBuf {
        PathBuf::from("index.json")
    }

    /// Excerpt budget in display-width units.
    pub const fn excerpt_width() -> usize {
        150
    }
}

pub mod serve {
    pub fn interface() -> String {
        "127.0.0.1".to_owned()
    }

    pub const fn port() -> u16 {
        5277
    }
}

pub mod reader {
    pub fn base_url() -> String {
        format!("http://{}:{}", super::serve::interface(), super::serve::port())
    }

    pub const fn timeout_secs() -> u64 {
        30
    }
}
