//! Check Handler

use axum::{body::Bytes, extract::rejection::BytesRejection, extract::State, Json};
use std::sync::Arc;

use crate::application::CheckItem;
use crate::infrastructure::http::dto::{CheckRequest, CheckResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /check - 商品状态检查
///
/// 状态为 Invalid 的合法请求仍返回 200，只有输入无效时返回 400
pub async fn check_item(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<CheckResponse>, ApiError> {
    let body = body.map_err(|e| ApiError::Internal(format!("Failed to read body: {}", e)))?;
    let req = CheckRequest::from_slice(&body)?;

    let result = state
        .check_handler
        .handle(CheckItem { item: req.item })
        .await?;

    tracing::info!(item = %result.item, status = %result.status, "Item checked");

    Ok(Json(CheckResponse::from(result)))
}
