//! Inventory overlay data
//!
//! Decides which inventory slots get outlined and in what color. Drawing the
//! outline is left to the host renderer.

use serde::{Deserialize, Serialize};

use crate::domain::{Color, GroupName};
use crate::repository::ConfigStore;
use super::resolver::TagGroupResolver;

/// An item currently shown in the inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub slot: usize,
    /// -1 for an empty slot
    pub item_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemHighlight {
    pub slot: usize,
    pub item_id: u32,
    pub group: GroupName,
    pub color: Color,
}

/// Handle registered with the host's overlay manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InventoryTagsOverlay;

impl InventoryTagsOverlay {
    pub const NAME: &'static str = "inventory-tags";

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Highlights for tagged items whose group has a color.
    /// Store errors skip the item.
    pub fn highlights<S: ConfigStore>(
        &self,
        resolver: &TagGroupResolver<S>,
        items: &[InventoryItem],
    ) -> Vec<ItemHighlight> {
        items
            .iter()
            .filter_map(|item| {
                let item_id = u32::try_from(item.item_id).ok()?;
                let group = match resolver.get_tag(item_id) {
                    Ok(group) => group?,
                    Err(e) => {
                        log::warn!("skipping highlight of item {}: {}", item_id, e);
                        return None;
                    }
                };
                let color = resolver.resolve_group_color(group)?;
                Some(ItemHighlight {
                    slot: item.slot,
                    item_id,
                    group,
                    color,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InventoryTagsConfig;
    use crate::repository::MemoryConfigStore;

    #[test]
    fn test_only_colored_tags_highlight() {
        let mut config = InventoryTagsConfig::default();
        config.group_colors.set(GroupName::Group1, Some(Color::rgb(255, 0, 0)));
        let mut resolver = TagGroupResolver::with_config(MemoryConfigStore::new(), config);

        resolver.set_tag(100, GroupName::Group1).unwrap();
        resolver.set_tag(200, GroupName::Group2).unwrap();

        let items = [
            InventoryItem { slot: 0, item_id: 100 },
            InventoryItem { slot: 1, item_id: 200 },
            InventoryItem { slot: 2, item_id: 300 },
            InventoryItem { slot: 3, item_id: -1 },
            InventoryItem { slot: 4, item_id: 100 },
        ];

        let highlights = InventoryTagsOverlay.highlights(&resolver, &items);
        assert_eq!(highlights.len(), 2);
        assert_eq!(highlights[0].slot, 0);
        assert_eq!(highlights[1].slot, 4);
        assert!(highlights.iter().all(|h| h.color == Color::rgb(255, 0, 0)));
    }
}
