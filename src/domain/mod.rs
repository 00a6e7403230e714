//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Item Context: 商品标识与状态分类

pub mod item;

pub use item::{
    ItemError, ItemId, ItemStatus, PrefixRules, DEFAULT_ACTIVE_PREFIX, DEFAULT_INACTIVE_PREFIX,
};
