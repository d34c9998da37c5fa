//! Ksnackface Common Library
//!
//! Types and logic shared by the browser app (WASM) and the relay
//! server: the snack-type catalog, the analysis wire contract, prompt
//! generation, response parsing/validation, media encoding and the
//! session state machine.

pub mod catalog;
pub mod error;
pub mod gemini;
pub mod media;
pub mod parser;
pub mod prompts;
pub mod session;
pub mod types;

pub use catalog::{find_snack_type, snack_types, SnackType};
pub use error::{Error, Result};
pub use gemini::{build_analysis_request, extract_candidate_text, GeminiRequest, GeminiResponse};
pub use media::{
    detect_image_mime, extract_base64_from_data_url, extract_mime_type_from_data_url, ImagePayload,
};
pub use parser::{extract_json, parse_analysis_response};
pub use prompts::build_analysis_prompt;
pub use session::{Phase, Session};
pub use types::{AnalysisResult, SnackMatch};
