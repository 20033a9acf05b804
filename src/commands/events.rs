//! Host events
//!
//! The four events the host driver delivers, and the handler trait it
//! invokes them through.

use serde::{Deserialize, Serialize};

use crate::domain::{MenuEntry, MenuOpcode};

/// An option was clicked on a widget's own menu (e.g. the inventory tab)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetMenuOptionClicked {
    pub widget: i32,
    pub option: String,
    pub target: String,
}

/// A context menu row was clicked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOptionClicked {
    pub option: String,
    pub target: String,
    pub identifier: i32,
    pub opcode: MenuOpcode,
}

impl From<&MenuEntry> for MenuOptionClicked {
    fn from(entry: &MenuEntry) -> Self {
        Self {
            option: entry.option.clone(),
            target: entry.target.clone(),
            identifier: entry.identifier,
            opcode: entry.opcode,
        }
    }
}

/// A context menu is about to be shown.
///
/// Entries are in client order: index 0 is the Cancel row and the last
/// entry is the top row of the displayed menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MenuOpened {
    pub entries: Vec<MenuEntry>,
}

impl MenuOpened {
    /// Top row of the displayed menu
    pub fn first_entry(&self) -> Option<&MenuEntry> {
        self.entries.last()
    }
}

/// A setting in the host config store changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigChanged {
    pub group: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    MenuOpened(MenuOpened),
    MenuOptionClicked(MenuOptionClicked),
    WidgetMenuOptionClicked(WidgetMenuOptionClicked),
    ConfigChanged(ConfigChanged),
}

/// Callback slots the host driver invokes, one event at a time
pub trait PluginEvents {
    /// Replacement entries for the menu, or `None` to keep the host's
    fn on_menu_opened(&mut self, event: &MenuOpened) -> Option<Vec<MenuEntry>>;

    fn on_option_clicked(&mut self, event: &MenuOptionClicked);

    fn on_widget_toggled(&mut self, event: &WidgetMenuOptionClicked);

    fn on_config_changed(&mut self, _event: &ConfigChanged) {}
}

/// Route `event` to its slot; only menu-opened can yield entries
pub fn dispatch<H: PluginEvents + ?Sized>(handler: &mut H, event: &HostEvent) -> Option<Vec<MenuEntry>> {
    match event {
        HostEvent::MenuOpened(e) => handler.on_menu_opened(e),
        HostEvent::MenuOptionClicked(e) => {
            handler.on_option_clicked(e);
            None
        }
        HostEvent::WidgetMenuOptionClicked(e) => {
            handler.on_widget_toggled(e);
            None
        }
        HostEvent::ConfigChanged(e) => {
            handler.on_config_changed(e);
            None
        }
    }
}
