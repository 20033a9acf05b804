//! Group Names
//!
//! The twelve fixed groups an item can be tagged with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::entity::DomainError;

pub const GROUP_COUNT: usize = 12;

/// One of the twelve canonical groups, ordered by number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GroupName {
    Group1,
    Group2,
    Group3,
    Group4,
    Group5,
    Group6,
    Group7,
    Group8,
    Group9,
    Group10,
    Group11,
    Group12,
}

impl GroupName {
    /// Canonical ordering, Group 1 through Group 12
    pub const ALL: [GroupName; GROUP_COUNT] = [
        GroupName::Group1,
        GroupName::Group2,
        GroupName::Group3,
        GroupName::Group4,
        GroupName::Group5,
        GroupName::Group6,
        GroupName::Group7,
        GroupName::Group8,
        GroupName::Group9,
        GroupName::Group10,
        GroupName::Group11,
        GroupName::Group12,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupName::Group1 => "Group 1",
            GroupName::Group2 => "Group 2",
            GroupName::Group3 => "Group 3",
            GroupName::Group4 => "Group 4",
            GroupName::Group5 => "Group 5",
            GroupName::Group6 => "Group 6",
            GroupName::Group7 => "Group 7",
            GroupName::Group8 => "Group 8",
            GroupName::Group9 => "Group 9",
            GroupName::Group10 => "Group 10",
            GroupName::Group11 => "Group 11",
            GroupName::Group12 => "Group 12",
        }
    }

    /// Group number, 1-based
    pub fn number(&self) -> usize {
        self.index() + 1
    }

    /// Position in the canonical ordering
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// Exact match against the canonical labels
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.as_str() == label)
    }

    /// The `amount` highest-numbered groups, Group 12 first.
    ///
    /// Amounts above twelve expose every group.
    pub fn exposed(amount: usize) -> impl Iterator<Item = GroupName> {
        let start = GROUP_COUNT - amount.min(GROUP_COUNT);
        (start..GROUP_COUNT).rev().map(|i| Self::ALL[i])
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupName {
    type Err = DomainError;

    /// Accepts the label ("Group 7") or the bare number ("7")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::from_label(s)
            .or_else(|| s.parse::<usize>().ok().and_then(Self::from_number))
            .ok_or_else(|| DomainError::InvalidInput(format!("unknown group '{}'", s)))
    }
}

impl TryFrom<String> for GroupName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GroupName> for String {
    fn from(group: GroupName) -> Self {
        group.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_and_numbers() {
        assert_eq!(GroupName::Group1.as_str(), "Group 1");
        assert_eq!(GroupName::Group12.to_string(), "Group 12");
        assert_eq!(GroupName::Group7.number(), 7);
        assert_eq!(GroupName::from_number(11), Some(GroupName::Group11));
        assert_eq!(GroupName::from_number(0), None);
        assert_eq!(GroupName::from_number(13), None);
    }

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(GroupName::from_label("Group 3"), Some(GroupName::Group3));
        assert_eq!(GroupName::from_label("group 3"), None);
        assert_eq!(GroupName::from_label("Nonexistent"), None);
    }

    #[test]
    fn test_parse_accepts_number() {
        assert_eq!("5".parse::<GroupName>().unwrap(), GroupName::Group5);
        assert_eq!(" Group 10 ".parse::<GroupName>().unwrap(), GroupName::Group10);
        assert!("Group 13".parse::<GroupName>().is_err());
    }

    #[test]
    fn test_exposed_takes_highest_numbers_first() {
        let three: Vec<_> = GroupName::exposed(3).collect();
        assert_eq!(three, vec![GroupName::Group12, GroupName::Group11, GroupName::Group10]);

        let all: Vec<_> = GroupName::exposed(12).collect();
        assert_eq!(all.len(), 12);
        assert_eq!(all.first(), Some(&GroupName::Group12));
        assert_eq!(all.last(), Some(&GroupName::Group1));

        assert_eq!(GroupName::exposed(0).count(), 0);
        assert_eq!(GroupName::exposed(40).count(), 12);
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&GroupName::Group4).unwrap();
        assert_eq!(json, "\"Group 4\"");
        let back: GroupName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GroupName::Group4);
    }
}
