//! Index Handler

/// 根路径的固定说明文本
pub const BANNER: &str = "Mock API Server is running. Send POST requests to /check.";

/// GET / - 服务运行提示
pub async fn index() -> &'static str {
    BANNER
}
