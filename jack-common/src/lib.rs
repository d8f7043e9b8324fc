//! # Jack Common Library
//!
//! Shared code for the jack catalog service:
//! - Error types
//! - Configuration loading and root folder resolution
//! - Database schema, models and queries (channels, videos, comments)

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
