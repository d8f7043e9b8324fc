//! Comment submission
//!
//! POST /channel/:channel_id/comment/
//! POST /video/:video_id/comment/
//!
//! The target must exist; an unknown id answers 404 and stores nothing.
//! Both endpoints redirect to the owning channel's page.

use axum::{
    extract::{Path, State},
    response::Response,
    Form,
};
use chrono::Utc;
use jack_common::db::{channels, comments, videos, CommentTarget};
use serde::Deserialize;
use tracing::info;

use super::{channel_path, found};
use crate::error::ApiResult;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub comment: String,
}

/// POST /channel/:channel_id/comment/
pub async fn add_channel_comment(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
    Form(form): Form<CommentForm>,
) -> ApiResult<Response> {
    let channel = channels::require_channel(&state.db, &channel_id).await?;

    let target = CommentTarget::Channel(channel.channel_id);
    let location = channel_path(target.foreign_id());
    store_comment(&state, target, &form.comment).await?;

    Ok(found(&location))
}

/// POST /video/:video_id/comment/
pub async fn add_video_comment(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    Form(form): Form<CommentForm>,
) -> ApiResult<Response> {
    let video = videos::require_video(&state.db, &video_id).await?;

    let location = channel_path(&video.channel_id);
    store_comment(&state, CommentTarget::Video(video.video_id), &form.comment).await?;

    Ok(found(&location))
}

async fn store_comment(state: &AppState, target: CommentTarget, text: &str) -> ApiResult<()> {
    let comment = comments::insert_comment(&state.db, &target, text, Utc::now()).await?;
    info!(id = comment.id, target = %comment.target, "Stored comment");
    Ok(())
}
