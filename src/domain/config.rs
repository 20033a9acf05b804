//! Add-on configuration
//!
//! Twelve optional group colors and the number of groups shown in the menu.
//! Read from the host config store under `CONFIG_GROUP`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::color::Color;
use super::entity::DomainError;
use super::group::{GroupName, GROUP_COUNT};

/// Config namespace shared by settings and item tags
pub const CONFIG_GROUP: &str = "inventorytags";
pub const AMOUNT_KEY: &str = "amount";

const AMOUNT_NAMES: [&str; GROUP_COUNT + 1] = [
    "ZERO", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE", "TEN",
    "ELEVEN", "TWELVE",
];

/// How many groups the menu exposes, always within `0..=12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "usize", into = "usize")]
pub struct DisplayAmount(usize);

impl DisplayAmount {
    pub const MAX: DisplayAmount = DisplayAmount(GROUP_COUNT);

    /// Clamps to twelve
    pub fn new(amount: usize) -> Self {
        Self(amount.min(GROUP_COUNT))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for DisplayAmount {
    fn default() -> Self {
        Self(4)
    }
}

impl From<usize> for DisplayAmount {
    fn from(amount: usize) -> Self {
        Self::new(amount)
    }
}

impl From<DisplayAmount> for usize {
    fn from(amount: DisplayAmount) -> Self {
        amount.0
    }
}

impl FromStr for DisplayAmount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Self::new(n.clamp(0, GROUP_COUNT as i64) as usize));
        }
        AMOUNT_NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(s))
            .map(Self)
            .ok_or_else(|| DomainError::InvalidInput(format!("invalid amount '{}'", s)))
    }
}

/// Configured color per group, indexed by `GroupName`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GroupColors([Option<Color>; GROUP_COUNT]);

impl GroupColors {
    pub fn get(&self, group: GroupName) -> Option<Color> {
        self.0[group.index()]
    }

    pub fn set(&mut self, group: GroupName, color: Option<Color>) {
        self.0[group.index()] = color;
    }

    /// Lookup by label; unknown names have no color
    pub fn get_by_name(&self, name: &str) -> Option<Color> {
        GroupName::from_label(name).and_then(|group| self.get(group))
    }

    /// Config key of a group's color setting ("groupColor7")
    pub fn key_for(group: GroupName) -> String {
        format!("groupColor{}", group.number())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InventoryTagsConfig {
    pub group_colors: GroupColors,
    pub amount: DisplayAmount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_clamps_and_parses() {
        assert_eq!(DisplayAmount::default().get(), 4);
        assert_eq!(DisplayAmount::new(99).get(), 12);
        assert_eq!("7".parse::<DisplayAmount>().unwrap().get(), 7);
        assert_eq!("TWELVE".parse::<DisplayAmount>().unwrap().get(), 12);
        assert_eq!("three".parse::<DisplayAmount>().unwrap().get(), 3);
        assert!("lots".parse::<DisplayAmount>().is_err());
        assert_eq!("-3".parse::<DisplayAmount>().unwrap(), DisplayAmount::new(0));
        assert_eq!("40".parse::<DisplayAmount>().unwrap(), DisplayAmount::MAX);
    }

    #[test]
    fn test_group_colors() {
        let mut colors = GroupColors::default();
        assert_eq!(colors.get(GroupName::Group7), None);

        colors.set(GroupName::Group7, Some(Color::rgb(0, 0, 255)));
        assert_eq!(colors.get(GroupName::Group7), Some(Color::rgb(0, 0, 255)));
        assert_eq!(colors.get_by_name("Group 7"), Some(Color::rgb(0, 0, 255)));
        assert_eq!(colors.get_by_name("Nonexistent"), None);
        assert_eq!(GroupColors::key_for(GroupName::Group12), "groupColor12");
    }

    #[test]
    fn test_config_json() {
        let mut config = InventoryTagsConfig::default();
        config.group_colors.set(GroupName::Group1, Some(Color::rgb(255, 0, 0)));
        config.amount = DisplayAmount::new(6);

        let json = serde_json::to_string(&config).unwrap();
        let back: InventoryTagsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
