//! Data Transfer Objects

use serde::Serialize;
use serde_json::Value;

use crate::application::{ApplicationError, CheckItemResult};
use crate::domain::{ItemId, ItemStatus};

/// 输入无效时返回的占位标识
pub const NOT_AVAILABLE: &str = "N/A";

/// 处理失败时的固定错误信息
pub const PROCESS_FAILED: &str = "Failed to process request";

// ============================================================================
// Check DTOs
// ============================================================================

/// POST /check 请求体
///
/// 不使用 `Json` 提取器：请求体总是按 JSON 解析，与 Content-Type 无关
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    pub item: ItemId,
}

impl CheckRequest {
    /// 从原始请求体解析
    ///
    /// 以下情况均视为无效输入：
    /// - 不是合法 JSON
    /// - 不是对象，或没有 `item` 字段
    /// - `item` 不是字符串，或为空字符串
    pub fn from_slice(body: &[u8]) -> Result<Self, ApplicationError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ApplicationError::validation(format!("Malformed JSON body: {}", e)))?;

        let item = match value.get("item") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                return Err(ApplicationError::validation(format!(
                    "Field `item` is not a string: {}",
                    other
                )))
            }
            None => return Err(ApplicationError::validation("Field `item` is missing")),
        };

        let item = ItemId::new(item)?;
        Ok(Self { item })
    }
}

/// POST /check 响应体
///
/// 字段顺序固定为 status, item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResponse {
    pub status: ItemStatus,
    pub item: String,
}

impl CheckResponse {
    /// 无效输入的固定响应
    pub fn invalid_input() -> Self {
        Self {
            status: ItemStatus::Invalid,
            item: NOT_AVAILABLE.to_string(),
        }
    }
}

impl From<CheckItemResult> for CheckResponse {
    fn from(result: CheckItemResult) -> Self {
        Self {
            status: result.status,
            item: result.item.into_inner(),
        }
    }
}

/// 内部错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl ErrorBody {
    pub fn process_failed() -> Self {
        Self {
            error: PROCESS_FAILED,
        }
    }
}
