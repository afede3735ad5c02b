/// Question/answer exchange with the remote answer service
use crate::config::Config;
use crate::error::AskError;
use crate::video::VideoId;
use serde::{Deserialize, Serialize};

/// Shown when the service replied with a JSON object but no usable `answer`.
pub const FALLBACK_ANSWER: &str = "Got a response, but it did not contain an answer.";

/// Body of `POST /ask`
#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    pub video_id: &'a VideoId,
    pub question: &'a str,
}

/// Body of a successful reply. Other fields are ignored.
#[derive(Debug, Deserialize)]
pub struct AnswerResponse {
    #[serde(default)]
    pub answer: Option<String>,
}

/// Raw reply as delivered by a [`Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a JSON body to a URL and hands back whatever came back.
///
/// Only transport-level failures are errors here; status handling lives in
/// [`interpret_reply`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, AskError>;
}

pub struct AnswerClient<T> {
    transport: T,
    ask_url: String,
}

impl<T: Transport> AnswerClient<T> {
    pub fn new(transport: T, config: &Config) -> Result<Self, AskError> {
        let ask_url = config.ask_url()?.to_string();
        Ok(AnswerClient { transport, ask_url })
    }

    pub fn ask_url(&self) -> &str {
        &self.ask_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Ask one question about one video.
    pub async fn ask(&self, video_id: &VideoId, question: &str) -> Result<String, AskError> {
        let payload = AskRequest { video_id, question };
        let body = serde_json::to_string(&payload).map_err(|e| AskError::Encode(e.to_string()))?;

        log::info!("Asking {} about video {}", self.ask_url, video_id);
        let reply = self.transport.post_json(&self.ask_url, body).await?;
        log::debug!("Answer service replied with status {}", reply.status);

        interpret_reply(reply)
    }
}

/// Turn a raw reply into display text.
///
/// - non-2xx → `Status`
/// - not JSON, or not an object with an optional string `answer` → `MalformedBody`
/// - `answer` missing, null or blank → [`FALLBACK_ANSWER`]
pub fn interpret_reply(reply: HttpReply) -> Result<String, AskError> {
    if !reply.is_success() {
        return Err(AskError::Status(reply.status));
    }

    let value: serde_json::Value = serde_json::from_str(&reply.body)
        .map_err(|e| AskError::MalformedBody(e.to_string()))?;

    // Derived Deserialize would also accept a sequence, matched by position
    if !value.is_object() {
        return Err(AskError::MalformedBody("expected a JSON object".to_string()));
    }

    let response: AnswerResponse = serde_json::from_value(value)
        .map_err(|e| AskError::MalformedBody(e.to_string()))?;

    match response.answer {
        Some(answer) if !answer.trim().is_empty() => Ok(answer),
        _ => {
            log::warn!("Reply had no answer field, using fallback text");
            Ok(FALLBACK_ANSWER.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::extract_video_id;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Records every request and answers with a canned result.
    struct RecordingTransport {
        reply: Result<HttpReply, AskError>,
        sent: RefCell<Vec<(String, String)>>,
    }

    impl RecordingTransport {
        fn replying(status: u16, body: &str) -> Self {
            RecordingTransport {
                reply: Ok(HttpReply { status, body: body.to_string() }),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for RecordingTransport {
        async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, AskError> {
            self.sent.borrow_mut().push((url.to_string(), body));
            self.reply.clone()
        }
    }

    fn reply(status: u16, body: &str) -> HttpReply {
        HttpReply { status, body: body.to_string() }
    }

    fn video() -> VideoId {
        extract_video_id("https://www.youtube.com/watch?v=abc123").unwrap()
    }

    #[test]
    fn test_interpret_answer() {
        assert_eq!(interpret_reply(reply(200, r#"{"answer":"42"}"#)), Ok("42".to_string()));
    }

    #[test]
    fn test_interpret_ignores_extra_fields() {
        let text = interpret_reply(reply(200, r#"{"answer":"yes","sources":[1,2]}"#));
        assert_eq!(text, Ok("yes".to_string()));
    }

    #[test]
    fn test_interpret_missing_answer_falls_back() {
        assert_eq!(interpret_reply(reply(200, "{}")), Ok(FALLBACK_ANSWER.to_string()));
        assert_eq!(
            interpret_reply(reply(200, r#"{"answer":null}"#)),
            Ok(FALLBACK_ANSWER.to_string())
        );
        assert_eq!(
            interpret_reply(reply(200, r#"{"answer":"  "}"#)),
            Ok(FALLBACK_ANSWER.to_string())
        );
        assert!(!FALLBACK_ANSWER.trim().is_empty());
    }

    #[test]
    fn test_interpret_non_success_status() {
        assert_eq!(
            interpret_reply(reply(500, r#"{"answer":"ignored"}"#)),
            Err(AskError::Status(500))
        );
        assert_eq!(interpret_reply(reply(404, "Not Found")), Err(AskError::Status(404)));
    }

    #[test]
    fn test_interpret_malformed_body() {
        assert!(matches!(
            interpret_reply(reply(200, "<html>Bad Gateway</html>")),
            Err(AskError::MalformedBody(_))
        ));
        assert!(matches!(interpret_reply(reply(200, "")), Err(AskError::MalformedBody(_))));
        assert!(matches!(
            interpret_reply(reply(200, r#"["answer"]"#)),
            Err(AskError::MalformedBody(_))
        ));
        assert!(matches!(
            interpret_reply(reply(200, r#"{"answer":42}"#)),
            Err(AskError::MalformedBody(_))
        ));
    }

    #[test]
    fn test_interpret_rejects_non_object_json() {
        for body in [r#"["Paris"]"#, "[]", "42", r#""Paris""#, "null"] {
            assert!(
                matches!(interpret_reply(reply(200, body)), Err(AskError::MalformedBody(_))),
                "body {} should be rejected",
                body
            );
        }
    }

    #[test]
    fn test_ask_sends_json_to_ask_path() {
        let transport = RecordingTransport::replying(200, r#"{"answer":"It is about Rust."}"#);
        let client = AnswerClient::new(transport, &Config::with_endpoint("http://localhost:8000")).unwrap();

        let answer = block_on(client.ask(&video(), "What is this about?"));
        assert_eq!(answer, Ok("It is about Rust.".to_string()));

        let sent = client.transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "http://localhost:8000/ask");

        let body: serde_json::Value = serde_json::from_str(&sent[0].1).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "video_id": "abc123", "question": "What is this about?" })
        );
    }

    #[test]
    fn test_ask_network_failure() {
        let transport = RecordingTransport {
            reply: Err(AskError::Network("Failed to fetch".to_string())),
            sent: RefCell::new(Vec::new()),
        };
        let client = AnswerClient::new(transport, &Config::default()).unwrap();

        let result = block_on(client.ask(&video(), "Why?"));
        assert_eq!(result, Err(AskError::Network("Failed to fetch".to_string())));
    }

    #[test]
    fn test_client_rejects_bad_endpoint() {
        let transport = RecordingTransport::replying(200, "{}");
        let result = AnswerClient::new(transport, &Config::with_endpoint("::"));
        assert!(matches!(result, Err(AskError::InvalidEndpoint(_))));
    }
}
