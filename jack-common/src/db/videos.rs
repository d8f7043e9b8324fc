//! Video persistence

use crate::db::models::Video;
use crate::{Error, Result};
use sqlx::SqlitePool;
use tracing::debug;

/// Insert a video under its owning channel.
///
/// Returns `false` when the video id is already registered; the existing
/// row (and its owner) is kept.
pub async fn insert_video(pool: &SqlitePool, video: &Video) -> Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO videos (video_id, channel_id, created_at)
        VALUES (?, ?, CURRENT_TIMESTAMP)
        ON CONFLICT(video_id) DO NOTHING
        "#,
    )
    .bind(&video.video_id)
    .bind(&video.channel_id)
    .execute(pool)
    .await?;

    let created = result.rows_affected() == 1;
    debug!(video_id = %video.video_id, channel_id = %video.channel_id, created, "insert_video");
    Ok(created)
}

/// Videos owned by a channel, in registration order
pub async fn list_videos_for_channel(pool: &SqlitePool, channel_id: &str) -> Result<Vec<Video>> {
    let videos = sqlx::query_as::<_, Video>(
        r#"
        SELECT video_id, channel_id
        FROM videos
        WHERE channel_id = ?
        ORDER BY rowid ASC
        "#,
    )
    .bind(channel_id)
    .fetch_all(pool)
    .await?;

    Ok(videos)
}

pub async fn load_video(pool: &SqlitePool, video_id: &str) -> Result<Option<Video>> {
    let video = sqlx::query_as::<_, Video>(
        "SELECT video_id, channel_id FROM videos WHERE video_id = ?",
    )
    .bind(video_id)
    .fetch_optional(pool)
    .await?;

    Ok(video)
}

/// Load a video, failing with [`Error::NotFound`] when absent
pub async fn require_video(pool: &SqlitePool, video_id: &str) -> Result<Video> {
    load_video(pool, video_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("video {}", video_id)))
}
