//! Item Context - 商品状态限界上下文
//!
//! 职责:
//! - 商品标识校验
//! - 基于前缀的状态分类

mod errors;
mod value_objects;

pub use errors::ItemError;
pub use value_objects::{
    ItemId, ItemStatus, PrefixRules, DEFAULT_ACTIVE_PREFIX, DEFAULT_INACTIVE_PREFIX,
};
