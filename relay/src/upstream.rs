//! Server-side Gemini call
//!
//! Same request the browser client would build, issued with the
//! credential that never leaves this process. One call, no retry.

use tracing::{debug, error};

use ksnackface_common::gemini::GEMINI_API_URL;
use ksnackface_common::{
    build_analysis_request, extract_candidate_text, parse_analysis_response, AnalysisResult,
    Error, GeminiResponse, ImagePayload, Result,
};

pub async fn request_analysis(
    http: &reqwest::Client,
    api_key: &str,
    image: &ImagePayload,
) -> Result<AnalysisResult> {
    let request = build_analysis_request(image);

    let response = http
        .post(GEMINI_API_URL)
        .query(&[("key", api_key)])
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            error!("Gemini request failed to send: {e}");
            Error::Upstream {
                status: 502,
                message: "upstream unreachable".to_string(),
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        error!("Gemini API error {status}: {message}");
        return Err(Error::Upstream {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("upstream error")
                .to_string(),
        });
    }

    let body: GeminiResponse = response.json().await.map_err(|e| {
        error!("Gemini response body unreadable: {e}");
        Error::MalformedResponse(format!("unreadable response body: {e}"))
    })?;

    let text = extract_candidate_text(body)?;
    debug!("Gemini candidate text: {} bytes", text.len());

    parse_analysis_response(&text)
}
