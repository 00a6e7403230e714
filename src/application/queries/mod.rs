//! 应用层 - 查询（读操作）
//!
//! 服务只有读操作：商品状态检查

mod check_queries;

pub mod handlers;

pub use check_queries::*;
