//! hello-tray
//!
//! A minimal system tray application: a 30x30 red glyph registered with the
//! OS notification area, with a two-entry menu.
//!
//! # Features
//! - "Say Hello" prints `Hello, World!` to stdout
//! - "Exit" prints `Exiting...`, removes the icon and ends the event loop
//! - Optional `config.toml` for the tooltip and log filter

pub mod core;
pub mod error;
pub mod host;
pub mod tray;

pub use core::app::{Lifecycle, TrayApplication};
pub use core::config::Config;
pub use core::events::AppEvent;
pub use error::TrayError;
pub use host::{run, HostCore, Registration};
pub use tray::{TrayAction, TrayBackend};
