//! In-memory config store

use std::collections::BTreeMap;

use crate::domain::DomainResult;
use super::traits::ConfigStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    entries: BTreeMap<(String, String), String>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, group: &str, key: &str) -> DomainResult<Option<String>> {
        Ok(self.entries.get(&(group.to_string(), key.to_string())).cloned())
    }

    fn set(&mut self, group: &str, key: &str, value: &str) -> DomainResult<()> {
        self.entries
            .insert((group.to_string(), key.to_string()), value.to_string());
        Ok(())
    }

    fn unset(&mut self, group: &str, key: &str) -> DomainResult<()> {
        self.entries.remove(&(group.to_string(), key.to_string()));
        Ok(())
    }

    fn keys(&self, group: &str) -> DomainResult<Vec<String>> {
        Ok(self
            .entries
            .keys()
            .filter(|(g, _)| g == group)
            .map(|(_, k)| k.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_are_separate() {
        let mut store = MemoryConfigStore::new();
        store.set("a", "k", "1").unwrap();
        store.set("b", "k", "2").unwrap();

        assert_eq!(store.get("a", "k").unwrap(), Some("1".to_string()));
        assert_eq!(store.get("b", "k").unwrap(), Some("2".to_string()));
        assert_eq!(store.keys("a").unwrap(), vec!["k".to_string()]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_unset_missing_is_noop() {
        let mut store = MemoryConfigStore::new();
        store.unset("a", "missing").unwrap();
        assert!(store.is_empty());
    }
}
