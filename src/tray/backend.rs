//! Tray backend: the capability set the application registers itself with

use super::icon::Glyph;
use super::menu::MenuEntry;
use crate::core::events::EventSender;
use crate::error::TrayError;

/// Operations the application needs from the OS tray.
///
/// The blocking run loop is not part of this trait; it belongs to whoever
/// hosts the backend (the winit event loop in production).
pub trait TrayBackend {
    /// Register an icon with the tray shell
    fn create_icon(&mut self, glyph: &Glyph, tooltip: &str) -> Result<(), TrayError>;

    /// Attach an ordered menu to the registered icon
    fn set_menu(&mut self, entries: &[MenuEntry]) -> Result<(), TrayError>;

    /// Remove the icon from the tray and release it
    fn stop(&mut self);
}

/// Backends that deliver menu clicks to the event loop as `AppEvent`s
pub trait MenuEventSource {
    /// Start forwarding clicks on the current menu through `event_tx`
    fn forward_menu_events(&mut self, event_tx: EventSender);
}
