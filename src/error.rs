/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - ApiKeyError を 401 に変換 (MissingHeader / MalformedHeader を code で区別)
 */
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::{API_KEY_SCHEME, ApiKeyError, ApiKeyErrorKind};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized {
        kind: Option<ApiKeyErrorKind>,
        detail: Option<String>,
    },
    #[error("internal server error")]
    Internal,
}

impl AppError {
    /// `expose_detail` が false の場合、message は "unauthorized" のみ
    pub fn unauthorized(err: ApiKeyError, expose_detail: bool) -> Self {
        Self::Unauthorized {
            kind: Some(err.kind()),
            detail: expose_detail.then(|| err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Unauthorized { kind, detail } => {
                let code = match kind {
                    Some(ApiKeyErrorKind::MissingHeader) => "MISSING_AUTHORIZATION",
                    Some(ApiKeyErrorKind::MalformedHeader) => "MALFORMED_AUTHORIZATION",
                    None => "UNAUTHORIZED",
                };
                (
                    StatusCode::UNAUTHORIZED,
                    code,
                    detail.unwrap_or_else(|| "unauthorized".into()),
                )
            }
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "internal server error".into(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(API_KEY_SCHEME),
            );
        }
        response
    }
}

impl From<ApiKeyError> for AppError {
    fn from(e: ApiKeyError) -> Self {
        AppError::unauthorized(e, false)
    }
}
