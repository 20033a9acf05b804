//! Inventory Tags
//!
//! Tag inventory items with one of twelve colored groups and offer the
//! groups in the item menu.
//!
//! Layered architecture:
//! - domain: groups, colors, menu entries and the editor mode
//! - repository: config store abstraction and implementations
//! - commands: event handlers the host driver invokes

pub mod domain;
pub mod repository;
pub mod commands;

pub use commands::{
    dispatch, HostEvent, InventoryTagsOverlay, InventoryTagsPlugin, MenuRegistry, OverlayRegistry,
    PluginEvents, TagGroupResolver,
};
pub use domain::{DomainError, DomainResult};
