//! Repository Layer - Core Traits
//!
//! The host's key-value config service, reduced to what the add-on needs.
//! Implementations can use SQLite, in-memory, etc.

use crate::domain::DomainResult;

/// Flat `(group, key) -> value` string store
pub trait ConfigStore {
    /// Stored value, `None` when the key is absent
    fn get(&self, group: &str, key: &str) -> DomainResult<Option<String>>;

    /// Insert or overwrite
    fn set(&mut self, group: &str, key: &str, value: &str) -> DomainResult<()>;

    /// Delete; absent keys are not an error
    fn unset(&mut self, group: &str, key: &str) -> DomainResult<()>;

    /// All keys present in `group`, sorted
    fn keys(&self, group: &str) -> DomainResult<Vec<String>>;
}

impl<S: ConfigStore + ?Sized> ConfigStore for Box<S> {
    fn get(&self, group: &str, key: &str) -> DomainResult<Option<String>> {
        (**self).get(group, key)
    }

    fn set(&mut self, group: &str, key: &str, value: &str) -> DomainResult<()> {
        (**self).set(group, key, value)
    }

    fn unset(&mut self, group: &str, key: &str) -> DomainResult<()> {
        (**self).unset(group, key)
    }

    fn keys(&self, group: &str) -> DomainResult<Vec<String>> {
        (**self).keys(group)
    }
}
