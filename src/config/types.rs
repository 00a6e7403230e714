//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::time::Duration;

use crate::domain::{PrefixRules, DEFAULT_ACTIVE_PREFIX, DEFAULT_INACTIVE_PREFIX};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 检查逻辑配置
    #[serde(default)]
    pub check: CheckConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 请求体大小上限（字节）
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_max_body_bytes() -> usize {
    2 * 1024 * 1024 // 2 MB，与 axum 默认值一致
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 检查逻辑配置
#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    /// 模拟下游调用的延迟（毫秒），0 表示不等待
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// 判定为 Active 的前缀
    #[serde(default = "default_active_prefix")]
    pub active_prefix: String,

    /// 判定为 Inactive 的前缀
    #[serde(default = "default_inactive_prefix")]
    pub inactive_prefix: String,
}

fn default_latency_ms() -> u64 {
    50
}

fn default_active_prefix() -> String {
    DEFAULT_ACTIVE_PREFIX.to_string()
}

fn default_inactive_prefix() -> String {
    DEFAULT_INACTIVE_PREFIX.to_string()
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            active_prefix: default_active_prefix(),
            inactive_prefix: default_inactive_prefix(),
        }
    }
}

impl CheckConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// 构建前缀分类规则
    pub fn prefix_rules(&self) -> Result<PrefixRules, &'static str> {
        PrefixRules::new(self.active_prefix.clone(), self.inactive_prefix.clone())
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
