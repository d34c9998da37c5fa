//! Gemini wire protocol
//!
//! Request/response bodies for the generateContent endpoint, shared by
//! the browser client (direct mode) and the relay (server-side mode).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::media::ImagePayload;
use crate::prompts::build_analysis_prompt;

/// Model used for every analysis call
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// generateContent endpoint (credential goes in the query string)
pub const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

/// Fixed decoding temperature, favors consistency over creativity
pub const ANALYSIS_TEMPERATURE: f32 = 0.5;

/// Gemini API request
#[derive(Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
}

/// Gemini API response
#[derive(Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
pub struct Candidate {
    pub content: ResponseContent,
}

#[derive(Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
pub struct ResponsePart {
    pub text: String,
}

/// Build the one analysis request for an encoded image
///
/// Prompt part first, inline image second; JSON response mode with the
/// fixed temperature. One request per user action, never retried.
pub fn build_analysis_request(payload: &ImagePayload) -> GeminiRequest {
    GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::Text {
                    text: build_analysis_prompt(),
                },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: payload.mime_type.clone(),
                        data: payload.data.clone(),
                    },
                },
            ],
        }],
        generation_config: GenerationConfig {
            temperature: ANALYSIS_TEMPERATURE,
            response_mime_type: "application/json".to_string(),
        },
    }
}

/// Pull the first candidate's text out of a Gemini response
pub fn extract_candidate_text(response: GeminiResponse) -> Result<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| Error::MalformedResponse("empty candidate list".to_string()))
}
