//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{CheckResponse, ErrorBody};
use crate::application::ApplicationError;

/// API 错误
///
/// 错误细节只写入日志，不会出现在响应体中
#[derive(Debug)]
pub enum ApiError {
    /// 请求体无法解析，或 item 缺失/为空/非字符串
    InvalidInput(String),
    /// 其他意外错误
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidInput(msg) => {
                tracing::warn!(error = %msg, "Invalid check request");
                (StatusCode::BAD_REQUEST, Json(CheckResponse::invalid_input())).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Error in /check handler");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody::process_failed()),
                )
                    .into_response()
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ValidationError(msg) => ApiError::InvalidInput(msg),
            e @ ApplicationError::ExternalServiceError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_400() {
        let response = ApiError::InvalidInput("missing item".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_is_500() {
        let response = ApiError::Internal("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_application_error_mapping() {
        assert!(matches!(
            ApiError::from(ApplicationError::validation("empty")),
            ApiError::InvalidInput(_)
        ));
        assert!(matches!(
            ApiError::from(ApplicationError::ExternalServiceError("down".into())),
            ApiError::Internal(_)
        ));
    }
}
