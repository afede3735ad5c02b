/// Browser-side implementations of the tab, HTTP and clipboard capabilities
use crate::answer::{HttpReply, Transport};
use crate::error::AskError;
use crate::video::TabSource;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn writeClipboard(text: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = sleep)]
    async fn sleepMs(ms: u32) -> Result<(), JsValue>;
}

/// The subset of chrome.tabs.Tab the popup reads
#[derive(Debug, Deserialize)]
struct ActiveTab {
    #[serde(default)]
    url: Option<String>,
}

/// Active tab of the current window, via chrome.tabs.query.
pub struct ChromeTabSource;

impl TabSource for ChromeTabSource {
    async fn active_tab_url(&self) -> Result<Option<String>, AskError> {
        let tab_js = getActiveTab()
            .await
            .map_err(|e| AskError::TabUnavailable(describe_js_error(&e)))?;

        decode_tab_url(tab_js)
    }
}

/// URL of a tab object handed over by the bridge; no tab means no URL.
pub fn decode_tab_url(tab_js: JsValue) -> Result<Option<String>, AskError> {
    if tab_js.is_null() || tab_js.is_undefined() {
        return Ok(None);
    }

    let tab: ActiveTab = serde_wasm_bindgen::from_value(tab_js)
        .map_err(|e| AskError::TabUnavailable(format!("Failed to parse tab: {}", e)))?;

    Ok(tab.url)
}

/// HTTP through the browser's fetch API.
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, AskError> {
        let window = web_sys::window()
            .ok_or_else(|| AskError::Network("no window available".to_string()))?;

        let request = build_request(url, &body)?;

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_error)?
            .dyn_into()
            .map_err(network_error)?;

        let status = response.status();
        let text = JsFuture::from(response.text().map_err(network_error)?)
            .await
            .map_err(network_error)?;

        Ok(HttpReply {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}

/// `POST` of a JSON body, as sent to the answer service.
pub fn build_request(url: &str, body: &str) -> Result<Request, AskError> {
    let headers = Headers::new().map_err(network_error)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(network_error)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    Request::new_with_str_and_init(url, &init).map_err(network_error)
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    writeClipboard(text)
        .await
        .map_err(|e| format!("Clipboard write failed: {}", describe_js_error(&e)))
}

pub async fn sleep(ms: u32) {
    if let Err(e) = sleepMs(ms).await {
        log::warn!("Timer failed: {}", describe_js_error(&e));
    }
}

fn network_error(err: JsValue) -> AskError {
    AskError::Network(describe_js_error(&err))
}

/// Best-effort text for a thrown JS value
fn describe_js_error(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }

    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
