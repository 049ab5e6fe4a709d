// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types and handling for the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid specification: {0}")]
    InvalidSpecification(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Join error")]
    Join(#[from] tokio::task::JoinError),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::InvalidSpecification(_) => (StatusCode::BAD_REQUEST, "INVALID_SPECIFICATION"),
            ApiError::Generation(_) => (StatusCode::INTERNAL_SERVER_ERROR, "GENERATION_ERROR"),
            ApiError::Join(_) => (StatusCode::INTERNAL_SERVER_ERROR, "TASK_ERROR"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, code, "Request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<house_tour_core::Error> for ApiError {
    fn from(err: house_tour_core::Error) -> Self {
        match err {
            house_tour_core::Error::UnknownHouseType(_)
            | house_tour_core::Error::UnknownLocation(_) => {
                ApiError::InvalidSpecification(err.to_string())
            }
            _ => ApiError::Generation(err.to_string()),
        }
    }
}

impl From<house_tour_geometry::Error> for ApiError {
    fn from(err: house_tour_geometry::Error) -> Self {
        ApiError::Generation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn status_and_code(err: ApiError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        (status, body["code"].as_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_generation_error_is_500() {
        let err = ApiError::from(house_tour_core::Error::Generation(
            "room bedroom-1 has non-finite geometry".into(),
        ));
        let (status, code) = status_and_code(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "GENERATION_ERROR");
    }

    #[tokio::test]
    async fn test_geometry_error_is_generation_error() {
        let err = ApiError::from(house_tour_geometry::Error::InvalidBox("flat".into()));
        let (status, code) = status_and_code(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "GENERATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_enum_text_is_400() {
        let err = ApiError::from(house_tour_core::Error::UnknownHouseType("triple".into()));
        let (status, code) = status_and_code(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "INVALID_SPECIFICATION");
    }
}
