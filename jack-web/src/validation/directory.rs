//! Sources answering whether a channel or video exists upstream

use async_trait::async_trait;
use std::collections::HashMap;

/// Channel details reported by a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    pub title: Option<String>,
}

/// Video details reported by a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoInfo {
    /// Upstream owner, when the directory reports one
    pub channel_id: Option<String>,
}

/// Existence lookups for channels and videos.
///
/// `Ok(None)` means the directory answered and the id is unknown. `Err` is a
/// failure to get an answer at all.
#[async_trait]
pub trait ChannelDirectory: Send + Sync {
    /// Directory identifier for logs (e.g. "youtube", "offline")
    fn name(&self) -> &'static str;

    async fn lookup_channel(&self, channel_id: &str) -> anyhow::Result<Option<ChannelInfo>>;

    async fn lookup_video(&self, video_id: &str) -> anyhow::Result<Option<VideoInfo>>;
}

/// Accepts every id. Used when no API key is configured, leaving only the
/// format checks in effect.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineDirectory;

#[async_trait]
impl ChannelDirectory for OfflineDirectory {
    fn name(&self) -> &'static str {
        "offline"
    }

    async fn lookup_channel(&self, _channel_id: &str) -> anyhow::Result<Option<ChannelInfo>> {
        Ok(Some(ChannelInfo { title: None }))
    }

    async fn lookup_video(&self, _video_id: &str) -> anyhow::Result<Option<VideoInfo>> {
        Ok(Some(VideoInfo { channel_id: None }))
    }
}

/// Fixed in-memory set of known channels and videos
#[derive(Debug, Default, Clone)]
pub struct StaticDirectory {
    channels: HashMap<String, String>,
    videos: HashMap<String, String>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(mut self, channel_id: &str, title: &str) -> Self {
        self.channels.insert(channel_id.to_string(), title.to_string());
        self
    }

    pub fn with_video(mut self, video_id: &str, channel_id: &str) -> Self {
        self.videos.insert(video_id.to_string(), channel_id.to_string());
        self
    }
}

#[async_trait]
impl ChannelDirectory for StaticDirectory {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn lookup_channel(&self, channel_id: &str) -> anyhow::Result<Option<ChannelInfo>> {
        Ok(self.channels.get(channel_id).map(|title| ChannelInfo {
            title: Some(title.clone()),
        }))
    }

    async fn lookup_video(&self, video_id: &str) -> anyhow::Result<Option<VideoInfo>> {
        Ok(self.videos.get(video_id).map(|owner| VideoInfo {
            channel_id: Some(owner.clone()),
        }))
    }
}
