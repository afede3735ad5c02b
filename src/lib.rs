/// Video Ask - Chrome Extension for asking questions about YouTube videos
/// Built with Rust + WASM + Yew

pub mod answer;
pub mod bridge;
pub mod config;
pub mod error;
pub mod interaction;
pub mod ui;
pub mod video;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export video id extraction for JavaScript access
#[wasm_bindgen]
pub fn extract_video_id(url: &str) -> Option<String> {
    video::extract_video_id(url).map(|id| id.to_string())
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
