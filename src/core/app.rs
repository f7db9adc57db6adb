//! Tray application lifecycle

use super::config::TrayConfig;
use crate::error::TrayError;
use crate::tray::{
    announce_exit, build_glyph, say_hello, Glyph, TrayAction, TrayBackend, MENU_ENTRIES,
};
use std::io::Write;
use tracing::{debug, info};

/// Lifecycle of the tray application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, icon not yet registered
    Idle,
    /// Icon registered, handling menu actions
    Running,
    /// Icon released; terminal
    Stopped,
}

/// Owns the glyph, tooltip and console sink for one tray icon.
///
/// The application never drives an event loop itself; hosts call
/// [`start`](Self::start), [`dispatch`](Self::dispatch) and
/// [`teardown`](Self::teardown) from their own callbacks.
pub struct TrayApplication<W: Write> {
    glyph: Glyph,
    tooltip: String,
    state: Lifecycle,
    out: W,
}

impl<W: Write> TrayApplication<W> {
    pub fn new(config: &TrayConfig, out: W) -> Self {
        Self {
            glyph: build_glyph(),
            tooltip: config.tooltip.clone(),
            state: Lifecycle::Idle,
            out,
        }
    }

    pub fn state(&self) -> Lifecycle {
        self.state
    }

    pub fn glyph(&self) -> &Glyph {
        &self.glyph
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Register the icon and menu with `backend` and enter `Running`.
    ///
    /// Only one start per application is allowed. If the menu cannot be
    /// attached the icon is released again before the error is returned.
    pub fn start(&mut self, backend: &mut impl TrayBackend) -> Result<(), TrayError> {
        if self.state != Lifecycle::Idle {
            return Err(TrayError::AlreadyStarted);
        }

        backend.create_icon(&self.glyph, &self.tooltip)?;
        if let Err(e) = backend.set_menu(&MENU_ENTRIES) {
            backend.stop();
            return Err(e);
        }

        self.state = Lifecycle::Running;
        info!("Tray application running");
        Ok(())
    }

    /// Handle one menu action and return the resulting state.
    pub fn dispatch(&mut self, action: TrayAction, backend: &mut impl TrayBackend) -> Lifecycle {
        if self.state != Lifecycle::Running {
            debug!("Ignoring {:?} while {:?}", action, self.state);
            return self.state;
        }

        debug!("Dispatching {:?}", action);
        match action {
            TrayAction::SayHello => say_hello(&mut self.out),
            TrayAction::Exit => {
                announce_exit(&mut self.out);
                self.teardown(backend);
            }
        }
        self.state
    }

    /// Release the icon and enter `Stopped`. Idempotent.
    pub fn teardown(&mut self, backend: &mut impl TrayBackend) {
        match self.state {
            Lifecycle::Stopped => return,
            Lifecycle::Running => backend.stop(),
            Lifecycle::Idle => {}
        }
        self.state = Lifecycle::Stopped;
        info!("Tray application stopped");
    }
}
