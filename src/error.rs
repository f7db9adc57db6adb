//! Error types for tray registration and menu setup.

/// Errors produced while registering the tray icon or its menu.
#[derive(Debug, thiserror::Error)]
pub enum TrayError {
    #[error("failed to build tray icon image: {0}")]
    Icon(String),

    #[error("failed to build tray menu: {0}")]
    Menu(String),

    #[error("system tray unavailable: {0}")]
    Unavailable(String),

    #[error("tray icon not registered")]
    NotRegistered,

    #[error("tray application already started")]
    AlreadyStarted,
}
