//! Editor Mode
//!
//! Browse is the normal state; Editor replaces the inventory item menu with
//! the group rows. The mode is never persisted.

use serde::{Deserialize, Serialize};

use super::text::remove_tags;

pub const CONFIGURE: &str = "Configure";
pub const SAVE: &str = "Save";
/// Target text of the inventory tab affordance
pub const MENU_TARGET: &str = "Inventory Tags";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Browse,
    Editor,
}

impl Mode {
    /// State after an option was clicked on one of the inventory tabs.
    ///
    /// Only "Configure" on "Inventory Tags" enters Editor; anything else,
    /// including "Save", returns to Browse.
    pub fn after_tab_option(option: &str, target: &str) -> Mode {
        if option == CONFIGURE && remove_tags(target) == MENU_TARGET {
            Mode::Editor
        } else {
            Mode::Browse
        }
    }

    pub fn is_editor(&self) -> bool {
        matches!(self, Mode::Editor)
    }

    /// Option shown on the inventory tabs while in this mode
    pub fn affordance(&self) -> &'static str {
        match self {
            Mode::Browse => CONFIGURE,
            Mode::Editor => SAVE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_enters_editor() {
        assert_eq!(Mode::after_tab_option("Configure", "Inventory Tags"), Mode::Editor);
        assert_eq!(
            Mode::after_tab_option("Configure", "<col=ff9040>Inventory Tags</col>"),
            Mode::Editor
        );
    }

    #[test]
    fn test_everything_else_browses() {
        assert_eq!(Mode::after_tab_option("Save", "Inventory Tags"), Mode::Browse);
        assert_eq!(Mode::after_tab_option("Configure", "Inventory Setups"), Mode::Browse);
        assert_eq!(Mode::after_tab_option("configure", "Inventory Tags"), Mode::Browse);
        assert_eq!(Mode::after_tab_option("", ""), Mode::Browse);
    }

    #[test]
    fn test_affordance() {
        assert_eq!(Mode::default(), Mode::Browse);
        assert_eq!(Mode::Browse.affordance(), "Configure");
        assert_eq!(Mode::Editor.affordance(), "Save");
        assert!(Mode::Editor.is_editor());
    }
}
