//! Host registries
//!
//! Menu and overlay registration is owned by the host; these calls are
//! trusted to succeed.

use crate::domain::WidgetMenuOption;
use super::overlay::InventoryTagsOverlay;

pub trait MenuRegistry {
    fn add_managed_custom_menu(&mut self, option: WidgetMenuOption);

    /// Removing an option that is not registered is a no-op
    fn remove_managed_custom_menu(&mut self, option: &WidgetMenuOption);
}

pub trait OverlayRegistry {
    fn add(&mut self, overlay: &InventoryTagsOverlay);

    fn remove(&mut self, overlay: &InventoryTagsOverlay);
}
