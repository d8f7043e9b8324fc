//! Database models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tracked channel, identified by its external id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Channel {
    pub channel_id: String,
    pub channel_nm: String,
}

impl Channel {
    pub fn new(channel_id: impl Into<String>, channel_nm: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            channel_nm: channel_nm.into(),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.channel_id)
    }
}

/// A video owned by exactly one channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Video {
    pub video_id: String,
    pub channel_id: String,
}

impl Video {
    pub fn new(video_id: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            channel_id: channel_id.into(),
        }
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.video_id)
    }
}

/// Kind of record a comment is attached to, stored as lowercase text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum CommentCategory {
    Channel,
    Video,
}

impl CommentCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            CommentCategory::Channel => "channel",
            CommentCategory::Video => "video",
        }
    }
}

impl fmt::Display for CommentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The record a comment annotates
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category", content = "foreign_id", rename_all = "lowercase")]
pub enum CommentTarget {
    Channel(String),
    Video(String),
}

impl CommentTarget {
    pub fn new(category: CommentCategory, foreign_id: impl Into<String>) -> Self {
        match category {
            CommentCategory::Channel => CommentTarget::Channel(foreign_id.into()),
            CommentCategory::Video => CommentTarget::Video(foreign_id.into()),
        }
    }

    pub fn category(&self) -> CommentCategory {
        match self {
            CommentTarget::Channel(_) => CommentCategory::Channel,
            CommentTarget::Video(_) => CommentCategory::Video,
        }
    }

    pub fn foreign_id(&self) -> &str {
        match self {
            CommentTarget::Channel(id) | CommentTarget::Video(id) => id,
        }
    }
}

/// Formats as `category:foreign_id`, e.g. `channel:TokaiOnAir`
impl fmt::Display for CommentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category(), self.foreign_id())
    }
}

/// A free-text annotation on a channel or a video
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub id: i64,
    pub target: CommentTarget,
    pub comment: String,
    pub reg_datetime: DateTime<Utc>,
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.target.fmt(f)
    }
}

/// Row shape of the `comments` table
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CommentRow {
    pub id: i64,
    pub category: CommentCategory,
    pub foreign_id: String,
    pub comment: String,
    pub reg_datetime: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            target: CommentTarget::new(row.category, row.foreign_id),
            comment: row.comment,
            reg_datetime: row.reg_datetime,
        }
    }
}
