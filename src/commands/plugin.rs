//! Inventory Tags Plugin
//!
//! Event handlers the host driver calls. Owns the resolver, the editor mode
//! and the host registries, and keeps the inventory tab affordance in sync
//! with the mode.

use crate::domain::{
    remove_tags, DomainResult, GroupName, InventoryTab, ItemTag, MenuAction, MenuEntry, MenuOpcode,
    Mode, WidgetMenuOption, CONFIG_GROUP, INVENTORY_WIDGET_ID,
};
use crate::repository::ConfigStore;
use super::events::{ConfigChanged, MenuOpened, MenuOptionClicked, PluginEvents, WidgetMenuOptionClicked};
use super::host::{MenuRegistry, OverlayRegistry};
use super::overlay::{InventoryItem, InventoryTagsOverlay, ItemHighlight};
use super::resolver::TagGroupResolver;

pub struct InventoryTagsPlugin<S, M, O> {
    resolver: TagGroupResolver<S>,
    menus: M,
    overlays: O,
    overlay: InventoryTagsOverlay,
    mode: Mode,
}

impl<S, M, O> InventoryTagsPlugin<S, M, O>
where
    S: ConfigStore,
    M: MenuRegistry,
    O: OverlayRegistry,
{
    pub fn new(store: S, menus: M, overlays: O) -> Self {
        Self {
            resolver: TagGroupResolver::new(store),
            menus,
            overlays,
            overlay: InventoryTagsOverlay,
            mode: Mode::Browse,
        }
    }

    /// Load config, register the tab affordances and the overlay
    pub fn start_up(&mut self) -> DomainResult<()> {
        self.resolver.reload_config()?;
        self.refresh_inventory_menu_options();
        self.overlays.add(&self.overlay);
        log::info!(
            "inventory tags started, showing {} groups",
            self.resolver.config().amount.get()
        );
        Ok(())
    }

    pub fn shut_down(&mut self) {
        self.remove_inventory_menu_options();
        self.overlays.remove(&self.overlay);
        self.mode = Mode::Browse;
        log::info!("inventory tags stopped");
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn resolver(&self) -> &TagGroupResolver<S> {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut TagGroupResolver<S> {
        &mut self.resolver
    }

    pub fn menus(&self) -> &M {
        &self.menus
    }

    pub fn overlays(&self) -> &O {
        &self.overlays
    }

    /// Overlay outlines for the items currently in the inventory
    pub fn highlights(&self, items: &[InventoryItem]) -> Vec<ItemHighlight> {
        self.overlay.highlights(&self.resolver, items)
    }

    fn remove_inventory_menu_options(&mut self) {
        for tab in InventoryTab::ALL {
            self.menus.remove_managed_custom_menu(&WidgetMenuOption::configure(tab));
            self.menus.remove_managed_custom_menu(&WidgetMenuOption::save(tab));
        }
    }

    fn refresh_inventory_menu_options(&mut self) {
        self.remove_inventory_menu_options();
        for tab in InventoryTab::ALL {
            self.menus
                .add_managed_custom_menu(WidgetMenuOption::for_mode(self.mode, tab));
        }
    }

    fn apply_action(&mut self, action: MenuAction, item_id: u32, selected: &str) -> DomainResult<()> {
        match action {
            MenuAction::Set => match GroupName::from_label(selected) {
                Some(group) => self.resolver.set_tag(item_id, group),
                None => {
                    log::warn!("ignoring mark of item {} with unknown group '{}'", item_id, selected);
                    Ok(())
                }
            },
            MenuAction::Remove => self.resolver.unset_tag(item_id),
        }
    }
}

impl<S, M, O> PluginEvents for InventoryTagsPlugin<S, M, O>
where
    S: ConfigStore,
    M: MenuRegistry,
    O: OverlayRegistry,
{
    fn on_menu_opened(&mut self, event: &MenuOpened) -> Option<Vec<MenuEntry>> {
        let first = event.first_entry()?;

        if first.param1 != INVENTORY_WIDGET_ID || !self.mode.is_editor() {
            return None;
        }
        if first.identifier < 0 {
            return None;
        }

        // The client reuses the first entry for Cancel and only resets its option
        let cancel = event.entries.first()?.clone();
        let entries = self.resolver.build_menu(cancel, first.identifier, first.param1);
        log::debug!("replaced menu of item {} with {} entries", first.identifier, entries.len());
        Some(entries)
    }

    fn on_option_clicked(&mut self, event: &MenuOptionClicked) {
        if event.opcode != MenuOpcode::RuneLite {
            return;
        }
        let Some(action) = MenuAction::from_option(&event.option) else {
            return;
        };
        let Ok(item_id) = u32::try_from(event.identifier) else {
            log::warn!("ignoring {} on invalid item id {}", event.option, event.identifier);
            return;
        };

        let selected = remove_tags(&event.target);
        if let Err(e) = self.apply_action(action, item_id, &selected) {
            log::warn!("{} of item {} failed: {}", event.option, item_id, e);
        }
    }

    fn on_widget_toggled(&mut self, event: &WidgetMenuOptionClicked) {
        if InventoryTab::from_widget_id(event.widget).is_none() {
            return;
        }

        self.mode = Mode::after_tab_option(&event.option, &event.target);
        log::debug!("inventory tags mode is now {:?}", self.mode);
        self.refresh_inventory_menu_options();
    }

    fn on_config_changed(&mut self, event: &ConfigChanged) {
        if event.group != CONFIG_GROUP || ItemTag::item_id_from_key(&event.key).is_some() {
            return;
        }
        if let Err(e) = self.resolver.reload_config() {
            log::warn!("could not reload config after {} changed: {}", event.key, e);
        }
    }
}
