//! Mock Status Client - 模拟的商品状态服务
//!
//! 不实际调用下游服务，等待固定延迟后按前缀规则返回状态

use async_trait::async_trait;
use std::time::Duration;

use crate::application::ports::{ItemStatusPort, LookupError};
use crate::domain::{ItemId, ItemStatus, PrefixRules};

/// Mock Status Client 配置
#[derive(Debug, Clone)]
pub struct MockStatusClientConfig {
    /// 模拟的下游调用延迟
    pub latency: Duration,
    /// 前缀分类规则
    pub rules: PrefixRules,
}

impl Default for MockStatusClientConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(50),
            rules: PrefixRules::default(),
        }
    }
}

/// Mock Status Client
pub struct MockStatusClient {
    config: MockStatusClientConfig,
}

impl MockStatusClient {
    pub fn new(config: MockStatusClientConfig) -> Self {
        tracing::info!(
            latency_ms = config.latency.as_millis() as u64,
            active_prefix = %config.rules.active_prefix(),
            inactive_prefix = %config.rules.inactive_prefix(),
            "MockStatusClient initialized"
        );
        Self { config }
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Self {
        Self::new(MockStatusClientConfig::default())
    }
}

#[async_trait]
impl ItemStatusPort for MockStatusClient {
    async fn lookup(&self, item: &ItemId) -> Result<ItemStatus, LookupError> {
        // 模拟下游调用延迟
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }

        Ok(self.config.rules.classify(item))
    }
}
