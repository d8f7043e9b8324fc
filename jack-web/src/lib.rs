//! jack-web library
//!
//! Web front end of the jack catalog: register channels, list their videos
//! and attach comments to a channel or a video.

use axum::http::Uri;
use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod validation;

pub use crate::error::{ApiError, ApiResult};
use crate::validation::Validator;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Channel id / video URL validation
    pub validator: Arc<Validator>,
}

impl AppState {
    pub fn new(db: SqlitePool, validator: Validator) -> Self {
        Self {
            db,
            validator: Arc::new(validator),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let pages = Router::new()
        .route("/", get(api::list_channels).post(api::add_channel))
        .route("/:channel_id/", get(api::show_channel).post(api::add_video))
        .route("/channel/:channel_id/comment/", post(api::add_channel_comment))
        .route("/video/:video_id/comment/", post(api::add_video_comment));

    Router::new()
        .merge(pages)
        .merge(api::catalog_routes())
        .merge(api::health_routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no page at {}", uri.path()))
}
