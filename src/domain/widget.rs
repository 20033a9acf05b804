//! Inventory tab widgets and their custom menu options

use serde::{Deserialize, Serialize};

use super::mode::{Mode, CONFIGURE, MENU_TARGET, SAVE};

const fn packed(group: i32, child: i32) -> i32 {
    group << 16 | child
}

/// Widget id of the inventory item container
pub const INVENTORY_WIDGET_ID: i32 = packed(149, 0);

/// The inventory tab button; the client shows exactly one variant depending
/// on its layout, so options are registered on all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryTab {
    Fixed,
    Resizable,
    ResizableBottomLine,
}

impl InventoryTab {
    pub const ALL: [InventoryTab; 3] = [
        InventoryTab::Fixed,
        InventoryTab::Resizable,
        InventoryTab::ResizableBottomLine,
    ];

    pub fn widget_id(&self) -> i32 {
        match self {
            InventoryTab::Fixed => packed(548, 58),
            InventoryTab::Resizable => packed(161, 61),
            InventoryTab::ResizableBottomLine => packed(164, 53),
        }
    }

    pub fn from_widget_id(id: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|tab| tab.widget_id() == id)
    }
}

/// A managed option on a widget's own menu
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetMenuOption {
    pub option: String,
    pub target: String,
    pub widget: InventoryTab,
}

impl WidgetMenuOption {
    pub fn new(option: &str, target: &str, widget: InventoryTab) -> Self {
        Self {
            option: option.to_string(),
            target: target.to_string(),
            widget,
        }
    }

    pub fn configure(widget: InventoryTab) -> Self {
        Self::new(CONFIGURE, MENU_TARGET, widget)
    }

    pub fn save(widget: InventoryTab) -> Self {
        Self::new(SAVE, MENU_TARGET, widget)
    }

    /// The affordance shown on `widget` while in `mode`
    pub fn for_mode(mode: Mode, widget: InventoryTab) -> Self {
        Self::new(mode.affordance(), MENU_TARGET, widget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_ids_are_distinct() {
        for tab in InventoryTab::ALL {
            assert_eq!(InventoryTab::from_widget_id(tab.widget_id()), Some(tab));
            assert_ne!(tab.widget_id(), INVENTORY_WIDGET_ID);
        }
        assert_eq!(InventoryTab::from_widget_id(INVENTORY_WIDGET_ID), None);
    }

    #[test]
    fn test_for_mode() {
        assert_eq!(
            WidgetMenuOption::for_mode(Mode::Editor, InventoryTab::Fixed),
            WidgetMenuOption::save(InventoryTab::Fixed)
        );
        assert_eq!(
            WidgetMenuOption::for_mode(Mode::Browse, InventoryTab::Resizable).option,
            "Configure"
        );
    }
}
