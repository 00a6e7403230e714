//! Item Context - Value Objects

use serde::{Deserialize, Serialize};

use super::ItemError;

/// 商品标识
///
/// 不变量:
/// - 非空字符串（不做 trim，`" "` 是合法标识）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Result<Self, ItemError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ItemError::Empty);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ItemId {
    type Error = ItemError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 商品状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    Active,
    Inactive,
    Invalid,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Invalid => "Invalid",
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 前缀分类规则
///
/// 按顺序匹配，先命中者生效：
/// 1. `active_prefix` → Active
/// 2. `inactive_prefix` → Inactive
/// 3. 其余 → Invalid
///
/// 区分大小写，逐字节比较前缀。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRules {
    active_prefix: String,
    inactive_prefix: String,
}

pub const DEFAULT_ACTIVE_PREFIX: &str = "prod-";
pub const DEFAULT_INACTIVE_PREFIX: &str = "old-";

impl PrefixRules {
    pub fn new(
        active_prefix: impl Into<String>,
        inactive_prefix: impl Into<String>,
    ) -> Result<Self, &'static str> {
        let active_prefix = active_prefix.into();
        let inactive_prefix = inactive_prefix.into();
        if active_prefix.is_empty() {
            return Err("active 前缀不能为空");
        }
        if inactive_prefix.is_empty() {
            return Err("inactive 前缀不能为空");
        }
        Ok(Self {
            active_prefix,
            inactive_prefix,
        })
    }

    pub fn active_prefix(&self) -> &str {
        &self.active_prefix
    }

    pub fn inactive_prefix(&self) -> &str {
        &self.inactive_prefix
    }

    /// 根据前缀对商品分类
    pub fn classify(&self, item: &ItemId) -> ItemStatus {
        let id = item.as_str();
        if id.starts_with(&self.active_prefix) {
            ItemStatus::Active
        } else if id.starts_with(&self.inactive_prefix) {
            ItemStatus::Inactive
        } else {
            ItemStatus::Invalid
        }
    }
}

impl Default for PrefixRules {
    fn default() -> Self {
        Self {
            active_prefix: DEFAULT_ACTIVE_PREFIX.to_string(),
            inactive_prefix: DEFAULT_INACTIVE_PREFIX.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(s: &str) -> ItemId {
        ItemId::new(s).unwrap()
    }

    #[test]
    fn test_empty_item_rejected() {
        assert_eq!(ItemId::new(""), Err(ItemError::Empty));
    }

    #[test]
    fn test_whitespace_item_is_valid() {
        assert_eq!(item(" ").as_str(), " ");
    }

    #[test]
    fn test_classify_default_rules() {
        let rules = PrefixRules::default();
        assert_eq!(rules.classify(&item("prod-12345")), ItemStatus::Active);
        assert_eq!(rules.classify(&item("old-42")), ItemStatus::Inactive);
        assert_eq!(rules.classify(&item("foo")), ItemStatus::Invalid);
    }

    #[test]
    fn test_bare_prefix_matches() {
        let rules = PrefixRules::default();
        assert_eq!(rules.classify(&item("prod-")), ItemStatus::Active);
        assert_eq!(rules.classify(&item("old-")), ItemStatus::Inactive);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        let rules = PrefixRules::default();
        assert_eq!(rules.classify(&item("PROD-1")), ItemStatus::Invalid);
        assert_eq!(rules.classify(&item("Old-1")), ItemStatus::Invalid);
    }

    #[test]
    fn test_prefix_must_be_at_start() {
        let rules = PrefixRules::default();
        assert_eq!(rules.classify(&item("x-prod-1")), ItemStatus::Invalid);
        assert_eq!(rules.classify(&item("prod")), ItemStatus::Invalid);
    }

    #[test]
    fn test_active_rule_wins_on_overlap() {
        let rules = PrefixRules::new("a", "ab").unwrap();
        assert_eq!(rules.classify(&item("abc")), ItemStatus::Active);
    }

    #[test]
    fn test_empty_prefix_rejected() {
        assert!(PrefixRules::new("", "old-").is_err());
        assert!(PrefixRules::new("prod-", "").is_err());
    }

    #[test]
    fn test_status_serializes_as_name() {
        let json = serde_json::to_string(&ItemStatus::Inactive).unwrap();
        assert_eq!(json, "\"Inactive\"");
    }

    #[test]
    fn test_item_id_deserialize_rejects_empty() {
        assert!(serde_json::from_str::<ItemId>("\"\"").is_err());
        assert_eq!(
            serde_json::from_str::<ItemId>("\"prod-1\"").unwrap(),
            item("prod-1")
        );
    }
}
