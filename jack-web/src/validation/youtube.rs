//! YouTube Data API v3 directory

use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use super::directory::{ChannelDirectory, ChannelInfo, VideoInfo};

const YOUTUBE_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const USER_AGENT: &str = concat!("jack/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct ListResponse<T> {
    #[serde(default)]
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct ChannelItem {
    snippet: Option<ChannelSnippet>,
}

#[derive(Debug, Deserialize)]
struct ChannelSnippet {
    title: String,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    snippet: Option<VideoSnippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoSnippet {
    channel_id: String,
}

/// Query parameter selecting a channel: `UC…` ids go through `id`,
/// anything else is treated as a legacy user name
fn channel_selector(channel_id: &str) -> (&'static str, &str) {
    if channel_id.len() == 24 && channel_id.starts_with("UC") {
        ("id", channel_id)
    } else {
        ("forUsername", channel_id)
    }
}

pub struct YouTubeDirectory {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YouTubeDirectory {
    pub fn new(api_key: String) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            api_key,
            base_url: YOUTUBE_API_BASE_URL.to_string(),
        })
    }

    /// Point the client at another API root (proxies, test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    async fn list<T: DeserializeOwned>(
        &self,
        resource: &str,
        selector: (&str, &str),
    ) -> anyhow::Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, resource);
        tracing::debug!(resource, selector = selector.0, "YouTube API request");

        let response = self
            .http_client
            .get(&url)
            .query(&[("part", "snippet"), selector, ("key", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("YouTube {} request failed", resource))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        let body: ListResponse<T> = response
            .error_for_status()
            .with_context(|| format!("YouTube {} request rejected", resource))?
            .json()
            .await
            .with_context(|| format!("YouTube {} response unreadable", resource))?;

        Ok(body.items)
    }
}

#[async_trait]
impl ChannelDirectory for YouTubeDirectory {
    fn name(&self) -> &'static str {
        "youtube"
    }

    async fn lookup_channel(&self, channel_id: &str) -> anyhow::Result<Option<ChannelInfo>> {
        let items: Vec<ChannelItem> = self.list("channels", channel_selector(channel_id)).await?;

        Ok(items.into_iter().next().map(|item| ChannelInfo {
            title: item.snippet.map(|s| s.title),
        }))
    }

    async fn lookup_video(&self, video_id: &str) -> anyhow::Result<Option<VideoInfo>> {
        let items: Vec<VideoItem> = self.list("videos", ("id", video_id)).await?;

        Ok(items.into_iter().next().map(|item| VideoInfo {
            channel_id: item.snippet.map(|s| s.channel_id),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::StatusCode as HttpStatus;
    use axum::response::{IntoResponse, Response};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    const TEST_KEY: &str = "test-key";

    /// Canned API: answers by the requested id, refuses requests missing
    /// `part=snippet` or the key
    async fn fake_list(kind: &'static str, query: HashMap<String, String>) -> Response {
        if query.get("part").map(String::as_str) != Some("snippet")
            || query.get("key").map(String::as_str) != Some(TEST_KEY)
        {
            return HttpStatus::FORBIDDEN.into_response();
        }

        let requested = query
            .get("id")
            .map(|id| format!("id={}", id))
            .or_else(|| query.get("forUsername").map(|name| format!("forUsername={}", name)))
            .unwrap_or_default();

        match requested.as_str() {
            "forUsername=TokaiOnAir" | "id=UCutJqz56653xV2wwSvut_hQ" if kind == "channels" => {
                Json(json!({"items": [{"id": "UC1", "snippet": {"title": "東海オンエア"}}]}))
                    .into_response()
            }
            "id=mP6WW_BHsaA" if kind == "videos" => {
                Json(json!({"items": [{"id": "mP6WW_BHsaA", "snippet": {"channelId": "UC1"}}]}))
                    .into_response()
            }
            "forUsername=gone" | "id=gone_gone_1" => HttpStatus::NOT_FOUND.into_response(),
            "forUsername=broken" | "id=broken_0001" => {
                HttpStatus::INTERNAL_SERVER_ERROR.into_response()
            }
            _ => Json(json!({"kind": "youtube#listResponse", "pageInfo": {"totalResults": 0}}))
                .into_response(),
        }
    }

    async fn start_fake_api() -> YouTubeDirectory {
        let app = Router::new()
            .route(
                "/v3/channels",
                get(|Query(q): Query<HashMap<String, String>>| fake_list("channels", q)),
            )
            .route(
                "/v3/videos",
                get(|Query(q): Query<HashMap<String, String>>| fake_list("videos", q)),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        YouTubeDirectory::new(TEST_KEY.to_string())
            .unwrap()
            .with_base_url(format!("http://{}/v3/", addr))
    }

    #[tokio::test]
    async fn test_lookup_channel_against_api() {
        let directory = start_fake_api().await;

        let found = directory.lookup_channel("TokaiOnAir").await.unwrap();
        assert_eq!(
            found,
            Some(ChannelInfo {
                title: Some("東海オンエア".to_string())
            })
        );
        assert!(directory
            .lookup_channel("UCutJqz56653xV2wwSvut_hQ")
            .await
            .unwrap()
            .is_some());

        assert_eq!(directory.lookup_channel("TokaiOnAirJanai").await.unwrap(), None);
        assert_eq!(directory.lookup_channel("gone").await.unwrap(), None);
        assert!(directory.lookup_channel("broken").await.is_err());
    }

    #[tokio::test]
    async fn test_lookup_video_against_api() {
        let directory = start_fake_api().await;

        assert_eq!(
            directory.lookup_video("mP6WW_BHsaA").await.unwrap(),
            Some(VideoInfo {
                channel_id: Some("UC1".to_string())
            })
        );
        assert_eq!(directory.lookup_video("abcdefghijk").await.unwrap(), None);
        assert_eq!(directory.lookup_video("gone_gone_1").await.unwrap(), None);
        assert!(directory.lookup_video("broken_0001").await.is_err());
    }

    #[tokio::test]
    async fn test_wrong_key_is_an_error() {
        let mut directory = start_fake_api().await;
        directory.api_key = "other-key".to_string();

        assert!(directory.lookup_channel("TokaiOnAir").await.is_err());
    }

    #[test]
    fn test_channel_selector() {
        assert_eq!(
            channel_selector("UCutJqz56653xV2wwSvut_hQ"),
            ("id", "UCutJqz56653xV2wwSvut_hQ")
        );
        assert_eq!(channel_selector("TokaiOnAir"), ("forUsername", "TokaiOnAir"));
        assert_eq!(channel_selector("UCshort"), ("forUsername", "UCshort"));
    }

    #[test]
    fn test_channel_response_parsing() {
        let json = r#"{"kind":"youtube#channelListResponse","items":[{"id":"UC1","snippet":{"title":"東海オンエア"}}]}"#;
        let parsed: ListResponse<ChannelItem> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].snippet.as_ref().unwrap().title, "東海オンエア");
    }

    #[test]
    fn test_empty_response_has_no_items() {
        let json = r#"{"kind":"youtube#channelListResponse","pageInfo":{"totalResults":0}}"#;
        let parsed: ListResponse<ChannelItem> = serde_json::from_str(json).unwrap();
        assert!(parsed.items.is_empty());
    }

    #[test]
    fn test_video_response_parsing() {
        let json = r#"{"items":[{"id":"mP6WW_BHsaA","snippet":{"channelId":"UC1","title":"x"}}]}"#;
        let parsed: ListResponse<VideoItem> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items[0].snippet.as_ref().unwrap().channel_id, "UC1");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let directory = YouTubeDirectory::new("key".to_string())
            .unwrap()
            .with_base_url("http://127.0.0.1:9999/v3/");
        assert_eq!(directory.base_url, "http://127.0.0.1:9999/v3");
    }
}
