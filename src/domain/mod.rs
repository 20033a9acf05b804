//! Domain Layer
//!
//! Groups, colors, menu entries and the editor mode.
//! This layer has NO external dependencies (except serde and regex).

mod entity;
mod group;
mod color;
mod text;
mod menu;
mod mode;
mod widget;
mod item_tag;
mod config;

pub use entity::{DomainError, DomainResult};
pub use group::{GroupName, GROUP_COUNT};
pub use color::Color;
pub use text::{remove_tags, prepend_color_tag};
pub use menu::{MenuAction, MenuEntry, MenuOpcode};
pub use mode::{Mode, CONFIGURE, SAVE, MENU_TARGET};
pub use widget::{InventoryTab, WidgetMenuOption, INVENTORY_WIDGET_ID};
pub use item_tag::{ItemTag, ITEM_KEY_PREFIX};
pub use config::{DisplayAmount, GroupColors, InventoryTagsConfig, CONFIG_GROUP, AMOUNT_KEY};
