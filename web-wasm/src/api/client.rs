//! Analysis client
//!
//! One network call per analysis attempt, no retry, no caching. Two
//! deployment modes:
//! - relay mode (default): POST the data URL to our own relay, which
//!   holds the Gemini credential server-side
//! - direct mode: call the Gemini endpoint from the browser with a
//!   user-supplied key (keyless local development only)

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use ksnackface_common::gemini::GEMINI_API_URL;
use ksnackface_common::{
    build_analysis_request, extract_candidate_text, parse_analysis_response, AnalysisResult,
    GeminiResponse, ImagePayload,
};

/// Relay endpoint, same origin as the app
pub const RELAY_ENDPOINT: &str = "/api/snack-match";

/// Body the relay expects
#[derive(serde::Serialize)]
struct RelayRequest<'a> {
    image: &'a str,
}

async fn post_json(url: &str, body: &str) -> Result<Response, JsValue> {
    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::Cors);
    opts.body(Some(&JsValue::from_str(body)));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    resp_value.dyn_into()
}

/// Analyze an image through the relay
///
/// # Arguments
/// * `image_data_url` - "data:image/jpeg;base64,..." as produced by the
///   upload area's FileReader
///
/// # Returns
/// The validated, rank-sorted result. The relay already validated it,
/// but its body is still parsed through the same untrusting path here.
pub async fn analyze_via_relay(image_data_url: &str) -> Result<AnalysisResult, JsValue> {
    // fail locally before any network traffic on a bad payload
    ImagePayload::from_data_url(image_data_url)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let body = serde_json::to_string(&RelayRequest {
        image: image_data_url,
    })
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let resp = post_json(RELAY_ENDPOINT, &body).await?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "relay request failed: {}",
            resp.status()
        )));
    }

    let text = JsFuture::from(resp.text()?).await?;
    let text = text
        .as_string()
        .ok_or_else(|| JsValue::from_str("non-text relay response"))?;

    parse_analysis_response(&text).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Analyze an image against the Gemini endpoint directly
///
/// The key is sent in the query string, so this mode is only for
/// deployments without a relay. The relay never exposes the key here.
pub async fn analyze_direct(
    api_key: &str,
    image_data_url: &str,
) -> Result<AnalysisResult, JsValue> {
    let payload = ImagePayload::from_data_url(image_data_url)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let request = build_analysis_request(&payload);
    let body =
        serde_json::to_string(&request).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let url = format!("{}?key={}", GEMINI_API_URL, api_key);
    let resp = post_json(&url, &body).await?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "Gemini API error: {}",
            resp.status()
        )));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: GeminiResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let text =
        extract_candidate_text(response).map_err(|e| JsValue::from_str(&e.to_string()))?;
    parse_analysis_response(&text).map_err(|e| JsValue::from_str(&e.to_string()))
}
