//! winit host for the tray application
//!
//! The event loop owns the main thread. Tray registration happens in
//! `resumed()` (macOS requires the loop to be running first), menu actions
//! arrive through [`EventSender`] and are dispatched in `about_to_wait()`.
//!
//! The decisions behind those callbacks live in [`HostCore`], which only
//! needs a [`TrayBackend`] and no running event loop.

use crate::core::{
    app::{Lifecycle, TrayApplication},
    config::TrayConfig,
    events::{AppEvent, EventSender},
};
use crate::error::TrayError;
use crate::tray::{MenuEventSource, PlatformBackend, TrayBackend};
use anyhow::{Context, Result};
use std::io::Write;
use tokio::sync::mpsc;
use tracing::{error, info};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::WindowId,
};

/// Outcome of a registration attempt in `resumed()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// Icon and menu registered just now
    Registered,
    /// Already registered or stopped; nothing to do
    Skipped,
    /// Registration failed; the loop must exit
    Failed,
}

/// Event loop independent part of the host
pub struct HostCore<W: Write, B: TrayBackend> {
    app: TrayApplication<W>,
    backend: B,
    /// Registration failure, reported once the loop has exited
    startup_error: Option<TrayError>,
}

impl<W: Write, B: TrayBackend> HostCore<W, B> {
    pub fn new(app: TrayApplication<W>, backend: B) -> Self {
        Self {
            app,
            backend,
            startup_error: None,
        }
    }

    pub fn state(&self) -> Lifecycle {
        self.app.state()
    }

    pub fn app(&self) -> &TrayApplication<W> {
        &self.app
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Register once; later calls are skipped (resumed() may fire repeatedly).
    pub fn register(&mut self) -> Registration {
        if self.app.state() != Lifecycle::Idle {
            return Registration::Skipped;
        }

        match self.app.start(&mut self.backend) {
            Ok(()) => Registration::Registered,
            Err(e) => {
                error!("Failed to register tray icon: {}", e);
                self.startup_error = Some(e);
                Registration::Failed
            }
        }
    }

    /// Handle one event; returns `true` when the loop should exit.
    pub fn handle_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::TrayAction(action) => {
                self.app.dispatch(action, &mut self.backend) == Lifecycle::Stopped
            }
        }
    }

    /// Release the icon when the loop goes away
    pub fn teardown(&mut self) {
        self.app.teardown(&mut self.backend);
    }

    /// Consume the host after the loop returned, surfacing any startup error
    pub fn finish(self) -> Result<(), TrayError> {
        match self.startup_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Application handler for the winit event loop
pub struct TrayHost<W: Write, B: TrayBackend + MenuEventSource> {
    core: HostCore<W, B>,
    event_tx: EventSender,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl<W: Write, B: TrayBackend + MenuEventSource> TrayHost<W, B> {
    pub fn new(
        core: HostCore<W, B>,
        event_tx: EventSender,
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
    ) -> Self {
        Self {
            core,
            event_tx,
            event_rx,
        }
    }

    pub fn finish(self) -> Result<(), TrayError> {
        self.core.finish()
    }
}

impl<W: Write, B: TrayBackend + MenuEventSource> ApplicationHandler for TrayHost<W, B> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        match self.core.register() {
            Registration::Registered => {
                let event_tx = self.event_tx.clone();
                self.core.backend_mut().forward_menu_events(event_tx);
            }
            Registration::Failed => event_loop.exit(),
            Registration::Skipped => {}
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        _event: WindowEvent,
    ) {
        // No windows; the tray is the only UI.
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        while let Ok(event) = self.event_rx.try_recv() {
            if self.core.handle_event(event) {
                event_loop.exit();
            }
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        info!("Event loop exiting");
        self.core.teardown();
    }
}

/// Register the tray icon and block until it is stopped.
pub fn run(config: &TrayConfig) -> Result<()> {
    let mut builder = EventLoop::builder();

    // Tray-only process: no dock icon
    #[cfg(target_os = "macos")]
    {
        use winit::platform::macos::{ActivationPolicy, EventLoopBuilderExtMacOS};
        builder.with_activation_policy(ActivationPolicy::Accessory);
    }

    let event_loop = builder.build().context("Failed to create event loop")?;

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let event_sender = EventSender::new(event_tx, event_loop.create_proxy());

    let app = TrayApplication::new(config, std::io::stdout());
    let core = HostCore::new(app, PlatformBackend::new());
    let mut host = TrayHost::new(core, event_sender, event_rx);

    event_loop.run_app(&mut host).context("Event loop failed")?;

    host.finish().context("Tray registration failed")
}
