//! itemcheck - 商品状态模拟服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Item Context: 商品标识与前缀分类规则
//!
//! 应用层 (application/):
//! - Ports: ItemStatusPort（模拟的下游状态服务）
//! - Queries: CheckItem 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: POST /check, GET /, GET /ping
//! - Adapters: MockStatusClient（固定延迟 + 前缀分类）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
