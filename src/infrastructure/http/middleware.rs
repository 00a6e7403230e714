//! HTTP Middleware
//!
//! 错误状态码日志中间件

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// 错误状态码日志中间件
///
/// 4xx 记为 warn，5xx 记为 error，附带耗时
/// 错误细节由 ApiError::into_response() 记录，这里只记录请求层面的信息
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request as HttpRequest, StatusCode},
        routing::post,
        Router,
    };
    use tower::util::ServiceExt;

    async fn accepted() -> StatusCode {
        StatusCode::OK
    }

    async fn rejected() -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    async fn failed() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/accepted", post(accepted))
            .route("/rejected", post(rejected))
            .route("/failed", post(failed))
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    async fn status_of(uri: &str) -> StatusCode {
        let request = HttpRequest::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        create_test_router().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_statuses_pass_through_unchanged() {
        assert_eq!(status_of("/accepted").await, StatusCode::OK);
        assert_eq!(status_of("/rejected").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of("/failed").await, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        assert_eq!(status_of("/missing").await, StatusCode::NOT_FOUND);
    }
}
