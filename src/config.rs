/// Fixed configuration for the popup
use crate::error::AskError;
use url::Url;

/// Answer service used when no build-time override is given.
pub const DEFAULT_ENDPOINT: &str = "https://yt-chat2.onrender.com";

/// Path of the question endpoint, relative to the service root.
pub const ASK_PATH: &str = "ask";

/// Text shown in the answer panel before anything was asked.
pub const ANSWER_PLACEHOLDER: &str = "Your answer will appear here.";

pub const COPY_LABEL: &str = "📋 Copy Answer";
pub const COPIED_LABEL: &str = "✅ Copied!";
pub const COPY_FAILED_LABEL: &str = "⚠️ Copy failed";

/// How long the copy confirmation stays visible (ms).
pub const COPY_CONFIRM_MS: u32 = 1500;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub endpoint: String,
    pub copy_confirm_ms: u32,
}

impl Config {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Config {
            endpoint: endpoint.into(),
            ..Config::default()
        }
    }

    /// Resolve `<endpoint>/ask`.
    ///
    /// A path on the endpoint is kept: `https://host/api` becomes
    /// `https://host/api/ask`, not `https://host/ask`.
    pub fn ask_url(&self) -> Result<Url, AskError> {
        let mut base = Url::parse(self.endpoint.trim())?;

        if base.cannot_be_a_base() {
            return Err(AskError::InvalidEndpoint(self.endpoint.clone()));
        }

        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(base.join(ASK_PATH)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: option_env!("VIDEO_ASK_ENDPOINT")
                .unwrap_or(DEFAULT_ENDPOINT)
                .to_string(),
            copy_confirm_ms: COPY_CONFIRM_MS,
        }
    }
}
