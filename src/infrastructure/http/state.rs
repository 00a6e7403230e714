//! Application State

use std::sync::Arc;

use crate::application::{CheckItemHandler, ItemStatusPort};

/// 应用状态
///
/// 只读共享，请求之间没有可变状态
pub struct AppState {
    pub check_handler: CheckItemHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(status_port: Arc<dyn ItemStatusPort>) -> Self {
        Self {
            check_handler: CheckItemHandler::new(status_port),
        }
    }
}
