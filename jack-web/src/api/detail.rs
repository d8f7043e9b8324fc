//! Channel detail page and video registration
//!
//! GET  /:channel_id/  shows the channel, its videos and all related comments
//! POST /:channel_id/  registers a video from a submitted URL

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
    Form,
};
use jack_common::db::{channels, comments, videos, Channel, Comment, Video};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::{info, warn};

use super::{channel_path, found, ui, SubmitOutcome};
use crate::error::ApiResult;
use crate::validation::Rejected;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct VideoForm {
    #[serde(default)]
    pub url: String,
}

/// Everything the detail page displays
#[derive(Debug, PartialEq, Eq)]
pub struct ChannelPage {
    pub channel: Channel,
    pub videos: Vec<Video>,
    pub comments: Vec<Comment>,
}

impl ChannelPage {
    /// Load a channel page, failing with NotFound when the channel is absent
    pub async fn load(db: &SqlitePool, channel_id: &str) -> ApiResult<Self> {
        let channel = channels::require_channel(db, channel_id).await?;
        let videos = videos::list_videos_for_channel(db, channel_id).await?;
        let comments = comments::list_comments_for_channel(db, channel_id).await?;

        Ok(Self {
            channel,
            videos,
            comments,
        })
    }

    fn render(&self, error: Option<&str>) -> String {
        ui::render_detail_page(&self.channel, &self.videos, &self.comments, error)
    }
}

/// GET /:channel_id/
pub async fn show_channel(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
) -> ApiResult<Html<String>> {
    let page = ChannelPage::load(&state.db, &channel_id).await?;
    Ok(Html(page.render(None)))
}

/// POST /:channel_id/
pub async fn add_video(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
    Form(form): Form<VideoForm>,
) -> ApiResult<Response> {
    match submit_video(&state, &channel_id, form).await? {
        SubmitOutcome::Redirect(location) => Ok(found(&location)),
        SubmitOutcome::Rejected { listing, message } => {
            Ok(Html(listing.render(Some(message))).into_response())
        }
    }
}

/// Validate and store a submitted video URL under `channel_id`
pub async fn submit_video(
    state: &AppState,
    channel_id: &str,
    form: VideoForm,
) -> ApiResult<SubmitOutcome<ChannelPage>> {
    let channel = channels::require_channel(&state.db, channel_id).await?;

    let video_id = match state.validator.validate_video(&form.url).await {
        Ok(video_id) => video_id,
        Err(rejected) => {
            let listing = ChannelPage::load(&state.db, &channel.channel_id).await?;
            return Ok(SubmitOutcome::Rejected {
                listing,
                message: rejected.message(),
            });
        }
    };

    // A video belongs to one channel only
    if let Some(existing) = videos::load_video(&state.db, video_id.as_str()).await? {
        if existing.channel_id != channel.channel_id {
            warn!(
                video_id = %existing.video_id,
                owner = %existing.channel_id,
                channel_id = %channel.channel_id,
                "Video already registered under another channel"
            );
            let listing = ChannelPage::load(&state.db, &channel.channel_id).await?;
            return Ok(SubmitOutcome::Rejected {
                listing,
                message: Rejected::InvalidVideoUrl.message(),
            });
        }
    }

    let video = Video::new(video_id.as_str(), channel.channel_id.as_str());
    if videos::insert_video(&state.db, &video).await? {
        info!(video_id = %video.video_id, channel_id = %channel.channel_id, "Registered video");
    } else {
        info!(video_id = %video.video_id, "Video already registered");
    }

    Ok(SubmitOutcome::Redirect(channel_path(&channel.channel_id)))
}
