//! Linux tray backend built on `ksni`
//!
//! StatusNotifierItem over D-Bus. ksni runs the D-Bus service on its own
//! thread, so no GTK main loop is needed next to winit.

use super::backend::{MenuEventSource, TrayBackend};
use super::icon::Glyph;
use super::menu::MenuEntry;
use crate::core::events::{AppEvent, EventSender};
use crate::error::TrayError;
use crate::tray::TrayAction;
use ksni::blocking::{Handle, TrayMethods};
use ksni::menu::{MenuItem, StandardItem};
use tracing::{debug, info};

/// State exported over D-Bus
struct HelloTray {
    tooltip: String,
    icon: ksni::Icon,
    entries: Vec<MenuEntry>,
    events: Option<EventSender>,
}

impl HelloTray {
    fn new(glyph: &Glyph, tooltip: &str) -> Self {
        Self {
            tooltip: tooltip.to_string(),
            icon: ksni::Icon {
                width: glyph.width() as i32,
                height: glyph.height() as i32,
                data: glyph.to_argb(),
            },
            entries: Vec::new(),
            events: None,
        }
    }

    fn emit(&self, action: TrayAction) {
        debug!("Menu event: {:?}", action);
        let Some(event_tx) = &self.events else {
            return;
        };
        if let Err(e) = event_tx.send(AppEvent::TrayAction(action)) {
            debug!("Event loop gone, dropping menu event: {}", e);
        }
    }
}

impl ksni::Tray for HelloTray {
    fn id(&self) -> String {
        env!("CARGO_PKG_NAME").to_string()
    }

    fn title(&self) -> String {
        self.tooltip.clone()
    }

    fn icon_pixmap(&self) -> Vec<ksni::Icon> {
        vec![self.icon.clone()]
    }

    fn tool_tip(&self) -> ksni::ToolTip {
        ksni::ToolTip {
            title: self.tooltip.clone(),
            ..Default::default()
        }
    }

    fn menu(&self) -> Vec<MenuItem<Self>> {
        self.entries
            .iter()
            .map(|entry| {
                let action = entry.action;
                StandardItem {
                    label: entry.label.to_string(),
                    activate: Box::new(move |tray: &mut Self| tray.emit(action)),
                    ..Default::default()
                }
                .into()
            })
            .collect()
    }
}

/// Backend built on the `ksni` crate
#[derive(Default)]
pub struct KsniBackend {
    handle: Option<Handle<HelloTray>>,
}

impl KsniBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self) -> bool {
        self.handle.is_some()
    }
}

impl MenuEventSource for KsniBackend {
    /// Menu callbacks run on ksni's service thread and send straight to the loop.
    fn forward_menu_events(&mut self, event_tx: EventSender) {
        if let Some(handle) = &self.handle {
            handle.update(move |tray: &mut HelloTray| tray.events = Some(event_tx));
        }
    }
}

impl TrayBackend for KsniBackend {
    fn create_icon(&mut self, glyph: &Glyph, tooltip: &str) -> Result<(), TrayError> {
        let handle = HelloTray::new(glyph, tooltip)
            .spawn()
            .map_err(|e| TrayError::Unavailable(e.to_string()))?;

        info!("Tray icon created");
        self.handle = Some(handle);
        Ok(())
    }

    fn set_menu(&mut self, entries: &[MenuEntry]) -> Result<(), TrayError> {
        let handle = self.handle.as_ref().ok_or(TrayError::NotRegistered)?;

        let entries = entries.to_vec();
        let count = entries.len();
        handle
            .update(move |tray: &mut HelloTray| tray.entries = entries)
            .ok_or_else(|| TrayError::Unavailable("tray service closed".to_string()))?;

        debug!("Tray menu attached with {} entries", count);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.shutdown();
            info!("Tray icon removed");
        }
    }
}
