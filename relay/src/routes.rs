//! Route handlers

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use ksnackface_common::{AnalysisResult, Error, ImagePayload};

use crate::error::AppError;
use crate::state::AppState;
use crate::upstream;

/// Request body from the browser client
#[derive(Deserialize)]
pub struct SnackMatchRequest {
    /// "data:image/jpeg;base64,..." data URL
    #[serde(default)]
    pub image: Option<String>,
}

/// POST /api/snack-match
///
/// Checks the credential before anything else so a misconfigured
/// deployment never sends traffic upstream, then validates the image
/// and performs the one analysis call.
pub async fn snack_match_handler(
    State(state): State<AppState>,
    Json(payload): Json<SnackMatchRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let api_key = state
        .config
        .gemini_api_key
        .as_deref()
        .ok_or(AppError::Analysis(Error::MissingCredential))?;

    let image = payload
        .image
        .filter(|url| !url.is_empty())
        .ok_or(AppError::MissingImage)?;

    let image = ImagePayload::from_data_url(&image).map_err(AppError::Analysis)?;
    info!("analysis request: {} ({} base64 bytes)", image.mime_type, image.data.len());

    let result = upstream::request_analysis(&state.http, api_key, &image).await?;
    info!("analysis result: primary {}", result.primary_match_id);

    Ok(Json(result))
}
