//! Menu Entries
//!
//! Host-shaped context menu rows and the two tagging actions.

use serde::{Deserialize, Serialize};

const RUNELITE_OPCODE: i32 = 1500;
const CANCEL_OPCODE: i32 = 1006;

/// Menu opcode; only `RuneLite` rows are dispatched back to this add-on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "i32", into = "i32")]
pub enum MenuOpcode {
    RuneLite,
    #[default]
    Cancel,
    Other(i32),
}

impl MenuOpcode {
    pub fn id(&self) -> i32 {
        match self {
            MenuOpcode::RuneLite => RUNELITE_OPCODE,
            MenuOpcode::Cancel => CANCEL_OPCODE,
            MenuOpcode::Other(id) => *id,
        }
    }

    pub fn from_id(id: i32) -> Self {
        match id {
            RUNELITE_OPCODE => MenuOpcode::RuneLite,
            CANCEL_OPCODE => MenuOpcode::Cancel,
            other => MenuOpcode::Other(other),
        }
    }
}

impl From<i32> for MenuOpcode {
    fn from(id: i32) -> Self {
        MenuOpcode::from_id(id)
    }
}

impl From<MenuOpcode> for i32 {
    fn from(opcode: MenuOpcode) -> Self {
        opcode.id()
    }
}

/// What clicking a group row does to the item's tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuAction {
    /// Assign the row's group to the item
    Set,
    /// Clear the item's tag
    Remove,
}

impl MenuAction {
    /// Option text shown in the menu
    pub fn option(&self) -> &'static str {
        match self {
            MenuAction::Set => "Mark",
            MenuAction::Remove => "Remove",
        }
    }

    pub fn from_option(option: &str) -> Option<Self> {
        match option {
            "Mark" => Some(MenuAction::Set),
            "Remove" => Some(MenuAction::Remove),
            _ => None,
        }
    }
}

/// A single context menu row as the host client models it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MenuEntry {
    pub option: String,
    /// Target text, may contain color tags
    pub target: String,
    /// Item id for inventory rows, -1 when there is no item
    pub identifier: i32,
    pub opcode: MenuOpcode,
    pub param0: i32,
    /// Id of the widget the menu was opened on
    pub param1: i32,
}

impl MenuEntry {
    /// The client's trailing "Cancel" row
    pub fn cancel() -> Self {
        Self {
            option: "Cancel".to_string(),
            identifier: -1,
            ..Default::default()
        }
    }

    /// The tagging action this row performs, if it is one of ours
    pub fn action(&self) -> Option<MenuAction> {
        if self.opcode != MenuOpcode::RuneLite {
            return None;
        }
        MenuAction::from_option(&self.option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_ids() {
        assert_eq!(MenuOpcode::from_id(1500), MenuOpcode::RuneLite);
        assert_eq!(MenuOpcode::RuneLite.id(), 1500);
        assert_eq!(MenuOpcode::from_id(57), MenuOpcode::Other(57));
    }

    #[test]
    fn test_action_options() {
        assert_eq!(MenuAction::from_option("Mark"), Some(MenuAction::Set));
        assert_eq!(MenuAction::Remove.option(), "Remove");
        assert_eq!(MenuAction::from_option("Use"), None);
    }

    #[test]
    fn test_action_requires_runelite_opcode() {
        let mut entry = MenuEntry {
            option: "Mark".to_string(),
            opcode: MenuOpcode::RuneLite,
            ..Default::default()
        };
        assert_eq!(entry.action(), Some(MenuAction::Set));

        entry.opcode = MenuOpcode::Other(33);
        assert_eq!(entry.action(), None);
    }
}
