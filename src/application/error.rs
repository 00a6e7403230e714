//! 应用层错误定义
//!
//! 统一的查询错误类型

use thiserror::Error;

use crate::application::ports::LookupError;
use crate::domain::ItemError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 外部服务错误
    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

impl From<ItemError> for ApplicationError {
    fn from(err: ItemError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<LookupError> for ApplicationError {
    fn from(err: LookupError) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}
