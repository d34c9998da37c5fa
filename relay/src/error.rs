//! Relay error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use ksnackface_common::Error as CommonError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing image data in request body.")]
    MissingImage,

    #[error(transparent)]
    Analysis(#[from] CommonError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingImage => StatusCode::BAD_REQUEST,
            AppError::Analysis(err) => match err {
                CommonError::UnsupportedMediaType(_) => StatusCode::BAD_REQUEST,
                CommonError::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
                // forward the upstream's non-success status verbatim
                CommonError::Upstream { status, .. } => StatusCode::from_u16(*status)
                    .unwrap_or(StatusCode::BAD_GATEWAY),
                CommonError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            },
        };

        (status, self.to_string()).into_response()
    }
}
