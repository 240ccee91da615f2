use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("no images provided")]
    NoImagesProvided,

    #[error("no images selected")]
    NoImagesSelected,

    #[error("could not read multipart form: {0}")]
    Multipart(#[from] MultipartError),

    #[error("internal error")]
    Internal(#[from] eyre::Report),
}

fn log_error(error: &ProcessError) {
    match error {
        ProcessError::NoImagesProvided | ProcessError::NoImagesSelected => {
            warn!("Rejected upload request: {}", error);
        }
        ProcessError::Multipart(e) => warn!("Could not read multipart form: {}", e),
        ProcessError::Internal(e) => error!("Internal error: {}", e),
    }
}

impl IntoResponse for ProcessError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, error_message) = match self {
            Self::NoImagesProvided => (StatusCode::BAD_REQUEST, "No images provided".to_string()),
            Self::NoImagesSelected => (StatusCode::BAD_REQUEST, "No images selected".to_string()),
            Self::Multipart(_) => (
                StatusCode::BAD_REQUEST,
                "Could not read uploaded form data.".to_string(),
            ),
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected internal error occurred.".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_bad_request() {
        assert_eq!(
            ProcessError::NoImagesProvided.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ProcessError::NoImagesSelected.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn internal_errors_map_to_server_error() {
        let error = ProcessError::Internal(eyre::eyre!("boom"));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
