//! Config Operations
//!
//! Loads and saves `InventoryTagsConfig` through the config store.
//! Bad values fall back to defaults instead of failing the load.

use crate::domain::{
    Color, DisplayAmount, DomainResult, GroupColors, GroupName, InventoryTagsConfig, AMOUNT_KEY,
    CONFIG_GROUP,
};
use super::traits::ConfigStore;

pub trait ConfigOperations {
    fn load_config(&self) -> DomainResult<InventoryTagsConfig>;

    fn save_config(&mut self, config: &InventoryTagsConfig) -> DomainResult<()>;
}

impl<S: ConfigStore + ?Sized> ConfigOperations for S {
    fn load_config(&self) -> DomainResult<InventoryTagsConfig> {
        let mut config = InventoryTagsConfig::default();

        for group in GroupName::ALL {
            let key = GroupColors::key_for(group);
            let color = match self.get(CONFIG_GROUP, &key)? {
                Some(raw) if !raw.is_empty() => match raw.parse::<Color>() {
                    Ok(color) => Some(color),
                    Err(e) => {
                        log::warn!("ignoring {}: {}", key, e);
                        None
                    }
                },
                _ => None,
            };
            config.group_colors.set(group, color);
        }

        if let Some(raw) = self.get(CONFIG_GROUP, AMOUNT_KEY)? {
            match raw.parse::<DisplayAmount>() {
                Ok(amount) => config.amount = amount,
                Err(e) => log::warn!("ignoring {}: {}", AMOUNT_KEY, e),
            }
        }

        Ok(config)
    }

    fn save_config(&mut self, config: &InventoryTagsConfig) -> DomainResult<()> {
        for group in GroupName::ALL {
            let key = GroupColors::key_for(group);
            match config.group_colors.get(group) {
                Some(color) => self.set(CONFIG_GROUP, &key, &color.to_string())?,
                None => self.unset(CONFIG_GROUP, &key)?,
            }
        }
        self.set(CONFIG_GROUP, AMOUNT_KEY, &config.amount.get().to_string())
    }
}
