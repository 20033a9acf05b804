//! Tag Group Resolver
//!
//! Looks up item tags and group colors and builds the group rows of the
//! inventory item menu. Owns the config store and the loaded config.

use crate::domain::{
    prepend_color_tag, Color, DisplayAmount, DomainResult, GroupName, InventoryTagsConfig,
    MenuAction, MenuEntry, MenuOpcode,
};
use crate::repository::{ConfigOperations, ConfigStore, ItemTagOperations};

pub struct TagGroupResolver<S> {
    store: S,
    config: InventoryTagsConfig,
}

impl<S: ConfigStore> TagGroupResolver<S> {
    /// Resolver with the default config; call `reload_config` to read the store
    pub fn new(store: S) -> Self {
        Self::with_config(store, InventoryTagsConfig::default())
    }

    pub fn with_config(store: S, config: InventoryTagsConfig) -> Self {
        Self { store, config }
    }

    /// Resolver with the config currently in `store`
    pub fn load(store: S) -> DomainResult<Self> {
        let config = store.load_config()?;
        Ok(Self::with_config(store, config))
    }

    pub fn reload_config(&mut self) -> DomainResult<()> {
        self.config = self.store.load_config()?;
        Ok(())
    }

    pub fn config(&self) -> &InventoryTagsConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn get_tag(&self, item_id: u32) -> DomainResult<Option<GroupName>> {
        self.store.get_tag(item_id)
    }

    pub fn set_tag(&mut self, item_id: u32, group: GroupName) -> DomainResult<()> {
        self.store.set_tag(item_id, group)?;
        log::info!("tagged item {} with {}", item_id, group);
        Ok(())
    }

    pub fn unset_tag(&mut self, item_id: u32) -> DomainResult<()> {
        self.store.unset_tag(item_id)?;
        log::info!("cleared tag of item {}", item_id);
        Ok(())
    }

    pub fn resolve_group_color(&self, group: GroupName) -> Option<Color> {
        self.config.group_colors.get(group)
    }

    /// Color of the group labelled `name`; `None` for names outside the twelve groups
    pub fn resolve_group_color_by_name(&self, name: &str) -> Option<Color> {
        self.config.group_colors.get_by_name(name)
    }

    /// Group rows for the item menu, using the configured display amount
    pub fn build_menu(&self, cancel: MenuEntry, item_id: i32, widget_id: i32) -> Vec<MenuEntry> {
        self.build_menu_with_amount(cancel, item_id, widget_id, self.config.amount)
    }

    /// `cancel` followed by one row per exposed group, Group 12 first.
    ///
    /// A negative `item_id` (no item under the cursor) yields no entries.
    /// Each row is "Remove" for the item's current group and "Mark" otherwise.
    pub fn build_menu_with_amount(
        &self,
        cancel: MenuEntry,
        item_id: i32,
        widget_id: i32,
        amount: DisplayAmount,
    ) -> Vec<MenuEntry> {
        let Ok(id) = u32::try_from(item_id) else {
            return Vec::new();
        };

        let current = self.get_tag(id).unwrap_or_else(|e| {
            log::warn!("could not read tag of item {}: {}", id, e);
            None
        });

        let mut entries = Vec::with_capacity(amount.get() + 1);
        entries.push(cancel);

        for group in GroupName::exposed(amount.get()) {
            let action = if current == Some(group) {
                MenuAction::Remove
            } else {
                MenuAction::Set
            };
            let color = self.resolve_group_color(group).unwrap_or(Color::WHITE);

            entries.push(MenuEntry {
                option: action.option().to_string(),
                target: prepend_color_tag(group.as_str(), color),
                identifier: item_id,
                opcode: MenuOpcode::RuneLite,
                param0: 0,
                param1: widget_id,
            });
        }

        entries
    }
}
