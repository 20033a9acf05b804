//! Item-Tag Operations
//!
//! Typed access to the `item_<id>` keys of any config store.

use crate::domain::{DomainResult, GroupName, ItemTag, CONFIG_GROUP};
use super::traits::ConfigStore;

/// Trait for item-tag operations, implemented for every `ConfigStore`
pub trait ItemTagOperations {
    /// The item's group; empty or unrecognised values count as untagged
    fn get_tag(&self, item_id: u32) -> DomainResult<Option<GroupName>>;

    /// Assign `group`, replacing any previous tag
    fn set_tag(&mut self, item_id: u32, group: GroupName) -> DomainResult<()>;

    /// Clear the item's tag
    fn unset_tag(&mut self, item_id: u32) -> DomainResult<()>;

    /// Every tagged item, sorted by item id
    fn list_tags(&self) -> DomainResult<Vec<ItemTag>>;
}

impl<S: ConfigStore + ?Sized> ItemTagOperations for S {
    fn get_tag(&self, item_id: u32) -> DomainResult<Option<GroupName>> {
        let Some(value) = self.get(CONFIG_GROUP, &ItemTag::key_for(item_id))? else {
            return Ok(None);
        };
        if value.is_empty() {
            return Ok(None);
        }

        let group = GroupName::from_label(&value);
        if group.is_none() {
            log::warn!("item {} has unrecognised tag '{}'", item_id, value);
        }
        Ok(group)
    }

    fn set_tag(&mut self, item_id: u32, group: GroupName) -> DomainResult<()> {
        self.set(CONFIG_GROUP, &ItemTag::key_for(item_id), group.as_str())
    }

    fn unset_tag(&mut self, item_id: u32) -> DomainResult<()> {
        self.unset(CONFIG_GROUP, &ItemTag::key_for(item_id))
    }

    fn list_tags(&self) -> DomainResult<Vec<ItemTag>> {
        let mut tags = Vec::new();
        for key in self.keys(CONFIG_GROUP)? {
            let Some(item_id) = ItemTag::item_id_from_key(&key) else {
                continue;
            };
            if let Some(group) = self.get_tag(item_id)? {
                tags.push(ItemTag::new(item_id, group));
            }
        }
        tags.sort_by_key(|tag| tag.item_id);
        Ok(tags)
    }
}
