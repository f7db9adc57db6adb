//! macOS/Windows tray backend built on `tray-icon`

use super::backend::{MenuEventSource, TrayBackend};
use super::icon::Glyph;
use super::menu::{MenuEntry, TrayAction};
use crate::core::events::{AppEvent, EventSender};
use crate::error::TrayError;
use tracing::{debug, error, info};
use tray_icon::{
    menu::{Menu, MenuEvent, MenuId, MenuItem},
    Icon, TrayIcon as TrayIconHandle, TrayIconBuilder,
};

/// Maps tray-icon menu ids back to actions
#[derive(Debug, Clone, Default)]
pub struct ActionTable {
    entries: Vec<(MenuId, TrayAction)>,
}

impl ActionTable {
    pub fn insert(&mut self, id: MenuId, action: TrayAction) {
        self.entries.push((id, action));
    }

    pub fn resolve(&self, id: &MenuId) -> Option<TrayAction> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, action)| *action)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Backend built on the `tray-icon` crate
#[derive(Default)]
pub struct TrayIconBackend {
    tray: Option<TrayIconHandle>,
    actions: ActionTable,
}

impl TrayIconBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self) -> bool {
        self.tray.is_some()
    }
}

impl MenuEventSource for TrayIconBackend {
    /// tray-icon publishes menu events on a global channel; a thread drains it,
    /// resolves each id against the current menu and wakes the loop.
    fn forward_menu_events(&mut self, event_tx: EventSender) {
        let actions = self.actions.clone();

        std::thread::spawn(move || {
            let receiver = MenuEvent::receiver();

            while let Ok(event) = receiver.recv() {
                debug!("Menu event: {:?}", event);

                let Some(action) = actions.resolve(&event.id) else {
                    continue;
                };
                if let Err(e) = event_tx.send(AppEvent::TrayAction(action)) {
                    debug!("Event loop gone, stopping menu forwarder: {}", e);
                    break;
                }
            }
        });
    }
}

impl TrayBackend for TrayIconBackend {
    fn create_icon(&mut self, glyph: &Glyph, tooltip: &str) -> Result<(), TrayError> {
        let icon = Icon::from_rgba(glyph.to_rgba(), glyph.width(), glyph.height())
            .map_err(|e| TrayError::Icon(e.to_string()))?;

        let tray = TrayIconBuilder::new()
            .with_tooltip(tooltip)
            .with_icon(icon)
            .build()
            .map_err(|e| TrayError::Unavailable(e.to_string()))?;

        info!("Tray icon created");
        self.tray = Some(tray);
        Ok(())
    }

    fn set_menu(&mut self, entries: &[MenuEntry]) -> Result<(), TrayError> {
        let tray = self.tray.as_ref().ok_or(TrayError::NotRegistered)?;

        let menu = Menu::new();
        let mut actions = ActionTable::default();
        for entry in entries {
            let item = MenuItem::new(entry.label, true, None);
            menu.append(&item)
                .map_err(|e| TrayError::Menu(e.to_string()))?;
            actions.insert(item.id().clone(), entry.action);
        }

        tray.set_menu(Some(Box::new(menu)));
        self.actions = actions;
        debug!("Tray menu attached with {} entries", self.actions.len());
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(tray) = self.tray.take() {
            if let Err(e) = tray.set_visible(false) {
                error!("Failed to hide tray icon: {}", e);
            }
            drop(tray);
            info!("Tray icon removed");
        }
    }
}
