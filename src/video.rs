/// Video identifier extraction from the active tab
use crate::error::AskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// The `v` query-parameter value of a YouTube watch URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the video identifier from a tab URL
///
/// Returns `None` when:
/// - the URL does not parse
/// - there is no `v` query parameter
/// - the `v` parameter is empty
///
/// Examples:
/// - https://www.youtube.com/watch?v=abc123 → abc123
/// - https://www.youtube.com/watch?list=PL1&v=abc123&t=42s → abc123
/// - https://www.youtube.com/feed/subscriptions → None
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    let parsed = Url::parse(url.trim()).ok()?;

    parsed
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
        .map(VideoId)
}

/// Lookup of the currently focused browser tab.
///
/// The popup uses the chrome.tabs bridge; tests substitute a fake.
#[allow(async_fn_in_trait)]
pub trait TabSource {
    /// URL of the active tab in the current window, `None` if the tab has none.
    async fn active_tab_url(&self) -> Result<Option<String>, AskError>;
}

/// Read the active tab and resolve its video identifier.
pub async fn inspect_active_tab<S: TabSource>(source: &S) -> Result<VideoId, AskError> {
    let url = source.active_tab_url().await?;

    let video_id = url.as_deref().and_then(extract_video_id);
    log::debug!("Active tab {:?} -> video id {:?}", url, video_id);

    video_id.ok_or(AskError::NotAVideoPage)
}
