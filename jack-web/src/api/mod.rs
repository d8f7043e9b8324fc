//! HTTP handlers for jack-web

pub mod catalog;
pub mod comments;
pub mod detail;
pub mod health;
pub mod index;
pub mod ui;

pub use catalog::catalog_routes;
pub use comments::{add_channel_comment, add_video_comment};
pub use detail::{add_video, show_channel};
pub use health::health_routes;
pub use index::{add_channel, list_channels};

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// Result of a form submission: either go elsewhere, or show the current
/// listing again with a message explaining the refusal
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome<L> {
    Redirect(String),
    Rejected { listing: L, message: &'static str },
}

/// 302 Found pointing at `location`
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// Path of a channel's detail page
pub fn channel_path(channel_id: &str) -> String {
    format!("/{}/", channel_id)
}
