//! Tray menu entries and their handlers

use std::io::Write;
use tracing::warn;

/// Line printed by the "Say Hello" action
pub const HELLO_LINE: &str = "Hello, World!";

/// Line printed by the "Exit" action
pub const EXIT_LINE: &str = "Exiting...";

/// Tray menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrayAction {
    /// Print a greeting
    SayHello,
    /// Print a farewell and stop the event loop
    Exit,
}

impl TrayAction {
    /// Menu label for this action
    pub fn label(self) -> &'static str {
        match self {
            TrayAction::SayHello => "Say Hello",
            TrayAction::Exit => "Exit",
        }
    }
}

/// One item of the tray menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub action: TrayAction,
}

impl MenuEntry {
    const fn new(label: &'static str, action: TrayAction) -> Self {
        Self { label, action }
    }
}

/// The tray menu, in display order
pub const MENU_ENTRIES: [MenuEntry; 2] = [
    MenuEntry::new("Say Hello", TrayAction::SayHello),
    MenuEntry::new("Exit", TrayAction::Exit),
];

/// Handler for "Say Hello"
pub fn say_hello(out: &mut impl Write) {
    emit_line(out, HELLO_LINE);
}

/// Console half of "Exit"; stopping the loop is up to the caller
pub fn announce_exit(out: &mut impl Write) {
    emit_line(out, EXIT_LINE);
}

fn emit_line(out: &mut impl Write, line: &str) {
    if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
        warn!("Failed to write {:?} to console: {}", line, e);
    }
}
