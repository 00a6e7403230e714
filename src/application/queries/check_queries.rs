//! Check Queries

use crate::domain::ItemId;

/// 商品状态检查查询
#[derive(Debug, Clone)]
pub struct CheckItem {
    pub item: ItemId,
}
