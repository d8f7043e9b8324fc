//! Comment persistence
//!
//! Comments reference their target through `(category, foreign_id)` rather
//! than a foreign key, so callers are responsible for checking that the
//! target exists before inserting.

use crate::db::models::{Comment, CommentRow, CommentTarget};
use crate::Result;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

/// Store a comment and return it with its assigned id
pub async fn insert_comment(
    pool: &SqlitePool,
    target: &CommentTarget,
    comment: &str,
    reg_datetime: DateTime<Utc>,
) -> Result<Comment> {
    let result = sqlx::query(
        r#"
        INSERT INTO comments (category, foreign_id, comment, reg_datetime)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(target.category())
    .bind(target.foreign_id())
    .bind(comment)
    .bind(reg_datetime)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    debug!(id, target = %target, "insert_comment");

    Ok(Comment {
        id,
        target: target.clone(),
        comment: comment.to_string(),
        reg_datetime,
    })
}

/// Comments attached directly to one channel or one video
pub async fn list_comments_for_target(
    pool: &SqlitePool,
    target: &CommentTarget,
) -> Result<Vec<Comment>> {
    let rows = sqlx::query_as::<_, CommentRow>(
        r#"
        SELECT id, category, foreign_id, comment, reg_datetime
        FROM comments
        WHERE category = ? AND foreign_id = ?
        ORDER BY reg_datetime ASC, id ASC
        "#,
    )
    .bind(target.category())
    .bind(target.foreign_id())
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Comment::from).collect())
}

/// Everything shown on a channel page: comments on the channel itself plus
/// comments on each video the channel owns
pub async fn list_comments_for_channel(pool: &SqlitePool, channel_id: &str) -> Result<Vec<Comment>> {
    let rows = sqlx::query_as::<_, CommentRow>(
        r#"
        SELECT id, category, foreign_id, comment, reg_datetime
        FROM comments
        WHERE (category = 'channel' AND foreign_id = ?)
           OR (category = 'video' AND foreign_id IN (
                SELECT video_id FROM videos WHERE channel_id = ?
           ))
        ORDER BY reg_datetime ASC, id ASC
        "#,
    )
    .bind(channel_id)
    .bind(channel_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Comment::from).collect())
}
