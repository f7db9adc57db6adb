//! Tray module - glyph, menu and tray backends
//!
//! Linux uses ksni (StatusNotifierItem via D-Bus, no GTK event loop required).
//! macOS/Windows use tray-icon driven by the winit event loop.

mod backend;
mod icon;
mod menu;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(not(target_os = "linux"))]
mod tray_icon_impl;

pub use backend::{MenuEventSource, TrayBackend};
pub use icon::{build_glyph, Glyph, Rgb, GLYPH_SIZE};
pub use menu::{
    announce_exit, say_hello, MenuEntry, TrayAction, EXIT_LINE, HELLO_LINE, MENU_ENTRIES,
};

#[cfg(target_os = "linux")]
pub use linux::KsniBackend as PlatformBackend;

#[cfg(not(target_os = "linux"))]
pub use tray_icon_impl::{ActionTable, TrayIconBackend as PlatformBackend};
