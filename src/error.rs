/// Error taxonomy for a single ask interaction
use thiserror::Error;

/// Everything that can go wrong between the Ask click and the rendered answer.
///
/// The `Display` text of each variant is what the popup shows, so every
/// variant must read as a distinct, plain sentence.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AskError {
    /// Active tab has no `v` query parameter (or no parseable URL).
    #[error("Not a valid YouTube video.")]
    NotAVideoPage,

    #[error("Could not read the active tab: {0}")]
    TabUnavailable(String),

    /// The request never produced a reply.
    #[error("Error: network request failed ({0})")]
    Network(String),

    #[error("Error: server responded with status {0}")]
    Status(u16),

    /// Reply body was not JSON or not an answer object.
    #[error("Error: server sent an unreadable response ({0})")]
    MalformedBody(String),

    #[error("Error: invalid endpoint configuration ({0})")]
    InvalidEndpoint(String),

    #[error("Error: could not encode the request ({0})")]
    Encode(String),
}

impl AskError {
    /// Single line rendered in the answer panel.
    pub fn user_message(&self) -> String {
        format!("{} {}", ERROR_MARK, self)
    }
}

/// Prefix every failure line carries.
pub const ERROR_MARK: &str = "❌";

impl From<url::ParseError> for AskError {
    fn from(err: url::ParseError) -> Self {
        AskError::InvalidEndpoint(err.to_string())
    }
}
