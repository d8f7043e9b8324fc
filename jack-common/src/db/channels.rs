//! Channel persistence

use crate::db::models::Channel;
use crate::{Error, Result};
use sqlx::SqlitePool;
use tracing::debug;

/// Insert a channel. Returns `false` when the id is already registered,
/// in which case the stored record is left untouched.
pub async fn insert_channel(pool: &SqlitePool, channel: &Channel) -> Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO channels (channel_id, channel_nm, created_at)
        VALUES (?, ?, CURRENT_TIMESTAMP)
        ON CONFLICT(channel_id) DO NOTHING
        "#,
    )
    .bind(&channel.channel_id)
    .bind(&channel.channel_nm)
    .execute(pool)
    .await?;

    let created = result.rows_affected() == 1;
    debug!(channel_id = %channel.channel_id, created, "insert_channel");
    Ok(created)
}

/// All channels in registration order
pub async fn list_channels(pool: &SqlitePool) -> Result<Vec<Channel>> {
    let channels = sqlx::query_as::<_, Channel>(
        "SELECT channel_id, channel_nm FROM channels ORDER BY rowid ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(channels)
}

pub async fn load_channel(pool: &SqlitePool, channel_id: &str) -> Result<Option<Channel>> {
    let channel = sqlx::query_as::<_, Channel>(
        "SELECT channel_id, channel_nm FROM channels WHERE channel_id = ?",
    )
    .bind(channel_id)
    .fetch_optional(pool)
    .await?;

    Ok(channel)
}

/// Load a channel, failing with [`Error::NotFound`] when absent
pub async fn require_channel(pool: &SqlitePool, channel_id: &str) -> Result<Channel> {
    load_channel(pool, channel_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("channel {}", channel_id)))
}
