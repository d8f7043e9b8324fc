//! Read-only JSON view of the catalog
//!
//! GET /api/channels               all channels
//! GET /api/channels/:channel_id   one channel with its videos and comments

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use jack_common::db::{channels, Channel, Comment, Video};
use serde::Serialize;

use super::detail::ChannelPage;
use crate::error::JsonError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ChannelDetailResponse {
    pub channel: Channel,
    pub videos: Vec<Video>,
    pub comments: Vec<Comment>,
}

/// GET /api/channels
pub async fn get_channels(State(state): State<AppState>) -> Result<Json<Vec<Channel>>, JsonError> {
    Ok(Json(channels::list_channels(&state.db).await?))
}

/// GET /api/channels/:channel_id
pub async fn get_channel_detail(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
) -> Result<Json<ChannelDetailResponse>, JsonError> {
    let page = ChannelPage::load(&state.db, &channel_id).await?;

    Ok(Json(ChannelDetailResponse {
        channel: page.channel,
        videos: page.videos,
        comments: page.comments,
    }))
}

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/api/channels", get(get_channels))
        .route("/api/channels/:channel_id", get(get_channel_detail))
}
