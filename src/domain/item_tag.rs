//! Item Tag Entity
//!
//! One group assigned to one item id. Stored as the group label under
//! `item_<id>`, so an item can never hold two tags.

use serde::{Deserialize, Serialize};

use super::group::GroupName;

pub const ITEM_KEY_PREFIX: &str = "item_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTag {
    pub item_id: u32,
    pub group: GroupName,
}

impl ItemTag {
    pub fn new(item_id: u32, group: GroupName) -> Self {
        Self { item_id, group }
    }

    /// Config key holding the tag of `item_id`
    pub fn key_for(item_id: u32) -> String {
        format!("{}{}", ITEM_KEY_PREFIX, item_id)
    }

    /// Inverse of `key_for`; `None` for keys that are not item keys
    pub fn item_id_from_key(key: &str) -> Option<u32> {
        key.strip_prefix(ITEM_KEY_PREFIX)?.parse().ok()
    }

    pub fn key(&self) -> String {
        Self::key_for(self.item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format() {
        let tag = ItemTag::new(4151, GroupName::Group2);
        assert_eq!(tag.key(), "item_4151");
        assert_eq!(ItemTag::item_id_from_key(&tag.key()), Some(tag.item_id));
    }

    #[test]
    fn test_item_id_from_key() {
        assert_eq!(ItemTag::item_id_from_key("item_995"), Some(995));
        assert_eq!(ItemTag::item_id_from_key("amount"), None);
        assert_eq!(ItemTag::item_id_from_key("item_-1"), None);
        assert_eq!(ItemTag::item_id_from_key("item_"), None);
    }
}
