//! Database schema, models and queries

pub mod channels;
pub mod comments;
pub mod init;
pub mod models;
pub mod videos;

pub use init::*;
pub use models::*;
