//! Item Status Port - 商品状态查询抽象
//!
//! 模拟的下游状态服务接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ItemId, ItemStatus};

/// 状态查询错误
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Status service unavailable: {0}")]
    Unavailable(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Item Status Port
///
/// 下游商品状态服务的抽象接口
#[async_trait]
pub trait ItemStatusPort: Send + Sync {
    /// 查询商品状态
    async fn lookup(&self, item: &ItemId) -> Result<ItemStatus, LookupError>;

    /// 检查下游服务是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
