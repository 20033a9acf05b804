//! Commands Layer
//!
//! Event handlers that bridge the host client to the tag resolver.

mod events;
mod host;
mod overlay;
mod plugin;
mod resolver;

pub use events::*;
pub use host::{MenuRegistry, OverlayRegistry};
pub use overlay::{InventoryItem, InventoryTagsOverlay, ItemHighlight};
pub use plugin::InventoryTagsPlugin;
pub use resolver::TagGroupResolver;
