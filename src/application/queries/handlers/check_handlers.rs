//! Check Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::ItemStatusPort;
use crate::application::queries::CheckItem;
use crate::domain::{ItemId, ItemStatus};

/// 检查结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckItemResult {
    pub item: ItemId,
    pub status: ItemStatus,
}

/// CheckItem Handler
pub struct CheckItemHandler {
    status_port: Arc<dyn ItemStatusPort>,
}

impl CheckItemHandler {
    pub fn new(status_port: Arc<dyn ItemStatusPort>) -> Self {
        Self { status_port }
    }

    pub async fn handle(&self, query: CheckItem) -> Result<CheckItemResult, ApplicationError> {
        let status = self.status_port.lookup(&query.item).await?;

        tracing::debug!(item = %query.item, status = %status, "Item classified");

        Ok(CheckItemResult {
            item: query.item,
            status,
        })
    }

    /// 下游状态服务是否可用
    pub async fn is_healthy(&self) -> bool {
        self.status_port.health_check().await
    }
}
