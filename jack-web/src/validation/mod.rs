//! Channel id and video URL validation
//!
//! A submitted value is accepted only if it is well-formed and the
//! configured [`ChannelDirectory`] confirms the channel or video exists.

mod directory;
mod youtube;

pub use directory::{ChannelDirectory, ChannelInfo, OfflineDirectory, StaticDirectory, VideoInfo};
pub use youtube::YouTubeDirectory;

use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Every accepted video URL starts with this prefix; the rest is the video id
pub const VIDEO_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

const CHANNEL_ID_MAX_LEN: usize = 64;
const VIDEO_ID_LEN: usize = 11;

pub const MSG_INVALID_CHANNEL_ID: &str = "Invalid channel ID.";
pub const MSG_INVALID_VIDEO_URL: &str = "Invalid video URL.";

/// Why a submission was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    InvalidChannelId,
    InvalidVideoUrl,
}

impl Rejected {
    /// Message shown to the user above the unchanged listing
    pub fn message(self) -> &'static str {
        match self {
            Rejected::InvalidChannelId => MSG_INVALID_CHANNEL_ID,
            Rejected::InvalidVideoUrl => MSG_INVALID_VIDEO_URL,
        }
    }
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// An accepted channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidChannel {
    pub channel_id: String,
    /// Display name reported by the directory, when it knows one
    pub channel_nm: Option<String>,
}

/// An accepted video id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(pub String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Channel ids are either `UC…` ids or legacy user names
pub fn is_channel_id_format(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate.len() <= CHANNEL_ID_MAX_LEN
        && candidate.bytes().all(is_id_byte)
}

pub fn is_video_id_format(candidate: &str) -> bool {
    candidate.len() == VIDEO_ID_LEN && candidate.bytes().all(is_id_byte)
}

fn is_id_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// Strip [`VIDEO_URL_PREFIX`], returning the candidate video id
pub fn strip_video_url_prefix(url: &str) -> Option<&str> {
    url.trim().strip_prefix(VIDEO_URL_PREFIX)
}

/// Decides acceptance of submitted channel ids and video URLs
pub struct Validator {
    directory: Arc<dyn ChannelDirectory>,
}

impl Validator {
    pub fn new(directory: Arc<dyn ChannelDirectory>) -> Self {
        Self { directory }
    }

    /// Short label of the backing directory, for logs
    pub fn directory_name(&self) -> &'static str {
        self.directory.name()
    }

    pub async fn validate_channel(&self, candidate: &str) -> Result<ValidChannel, Rejected> {
        let candidate = candidate.trim();
        if !is_channel_id_format(candidate) {
            debug!(candidate, "Channel id rejected: bad format");
            return Err(Rejected::InvalidChannelId);
        }

        match self.directory.lookup_channel(candidate).await {
            Ok(Some(info)) => Ok(ValidChannel {
                channel_id: candidate.to_string(),
                channel_nm: info.title,
            }),
            Ok(None) => {
                info!(candidate, "Channel id rejected: unknown to {}", self.directory.name());
                Err(Rejected::InvalidChannelId)
            }
            Err(e) => {
                warn!(candidate, "Channel lookup failed: {:#}", e);
                Err(Rejected::InvalidChannelId)
            }
        }
    }

    pub async fn validate_video(&self, url: &str) -> Result<VideoId, Rejected> {
        let Some(candidate) = strip_video_url_prefix(url) else {
            debug!(url, "Video URL rejected: missing prefix");
            return Err(Rejected::InvalidVideoUrl);
        };
        if !is_video_id_format(candidate) {
            debug!(candidate, "Video URL rejected: bad id format");
            return Err(Rejected::InvalidVideoUrl);
        }

        match self.directory.lookup_video(candidate).await {
            Ok(Some(info)) => {
                debug!(candidate, owner = ?info.channel_id, "Video accepted");
                Ok(VideoId(candidate.to_string()))
            }
            Ok(None) => {
                info!(candidate, "Video rejected: unknown to {}", self.directory.name());
                Err(Rejected::InvalidVideoUrl)
            }
            Err(e) => {
                warn!(candidate, "Video lookup failed: {:#}", e);
                Err(Rejected::InvalidVideoUrl)
            }
        }
    }
}
