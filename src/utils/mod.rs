//! Utility modules for the blog platform.

pub mod date;
pub mod width;
