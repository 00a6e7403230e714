//! HTTP Routes
//!
//! API Endpoints:
//! - /        GET   服务运行提示（纯文本）
//! - /check   POST  商品状态检查
//! - /ping    GET   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/check", post(handlers::check_item))
        .route("/ping", get(handlers::ping))
}
