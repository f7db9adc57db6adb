//! Tray application integration tests
//!
//! Drive the host's event-loop decisions with a recording backend.

use hello_tray::{
    core::config::TrayConfig,
    host::{HostCore, Registration},
    tray::{Glyph, MenuEntry, GLYPH_SIZE},
    AppEvent, Lifecycle, TrayAction, TrayApplication, TrayBackend, TrayError,
};

/// Backend double that records every call
#[derive(Default)]
struct MockBackend {
    fail_registration: bool,
    fail_menu: bool,
    icon: Option<(u32, u32, String)>,
    menu: Vec<(&'static str, TrayAction)>,
    registered: bool,
    stops: usize,
}

impl TrayBackend for MockBackend {
    fn create_icon(&mut self, glyph: &Glyph, tooltip: &str) -> Result<(), TrayError> {
        if self.fail_registration {
            return Err(TrayError::Unavailable("no StatusNotifierWatcher".to_string()));
        }
        self.icon = Some((glyph.width(), glyph.height(), tooltip.to_string()));
        self.registered = true;
        Ok(())
    }

    fn set_menu(&mut self, entries: &[MenuEntry]) -> Result<(), TrayError> {
        if self.fail_menu {
            return Err(TrayError::Menu("menu rejected".to_string()));
        }
        self.menu = entries.iter().map(|e| (e.label, e.action)).collect();
        Ok(())
    }

    fn stop(&mut self) {
        self.registered = false;
        self.stops += 1;
    }
}

fn new_host(backend: MockBackend) -> HostCore<Vec<u8>, MockBackend> {
    HostCore::new(TrayApplication::new(&TrayConfig::default(), Vec::new()), backend)
}

fn lines(host: &HostCore<Vec<u8>, MockBackend>) -> Vec<&str> {
    std::str::from_utf8(host.app().output())
        .unwrap()
        .lines()
        .collect()
}

fn click(action: TrayAction) -> AppEvent {
    AppEvent::TrayAction(action)
}

#[test]
fn test_end_to_end_scenario() {
    let mut host = new_host(MockBackend::default());

    assert_eq!(host.register(), Registration::Registered);
    assert_eq!(host.state(), Lifecycle::Running);
    assert_eq!(host.backend().icon, Some((30, 30, "Hello, World!".to_string())));
    assert_eq!(
        host.backend().menu,
        vec![("Say Hello", TrayAction::SayHello), ("Exit", TrayAction::Exit)]
    );

    assert!(!host.handle_event(click(TrayAction::SayHello)));
    assert_eq!(host.state(), Lifecycle::Running);
    assert_eq!(lines(&host), vec!["Hello, World!"]);
    assert!(host.backend().registered);

    assert!(host.handle_event(click(TrayAction::Exit)));
    assert_eq!(host.state(), Lifecycle::Stopped);
    assert_eq!(lines(&host), vec!["Hello, World!", "Exiting..."]);
    assert!(!host.backend().registered);

    // The loop then runs exiting(), which must not release the icon twice
    host.teardown();
    assert_eq!(host.backend().stops, 1);
    assert!(host.finish().is_ok());
}

#[test]
fn test_registered_glyph_is_red() {
    let host = new_host(MockBackend::default());
    let glyph = host.app().glyph();

    assert_eq!((glyph.width(), glyph.height()), (GLYPH_SIZE, GLYPH_SIZE));
    let all_red = (0..GLYPH_SIZE)
        .flat_map(|y| (0..GLYPH_SIZE).map(move |x| (x, y)))
        .all(|(x, y)| glyph.pixel(x, y) == Some([255, 0, 0, 255]));
    assert!(all_red);
}

#[test]
fn test_registration_failure_reported_after_loop() {
    let mut host = new_host(MockBackend {
        fail_registration: true,
        ..MockBackend::default()
    });

    assert_eq!(host.register(), Registration::Failed);
    assert_eq!(host.state(), Lifecycle::Idle);

    host.teardown();
    assert_eq!(host.backend().stops, 0);
    assert!(host.app().output().is_empty());

    let err = host.finish().unwrap_err();
    assert!(matches!(err, TrayError::Unavailable(_)));
    assert!(err.to_string().contains("system tray unavailable"));
}

#[test]
fn test_menu_failure_releases_icon() {
    let mut host = new_host(MockBackend {
        fail_menu: true,
        ..MockBackend::default()
    });

    assert_eq!(host.register(), Registration::Failed);
    assert!(!host.backend().registered);
    assert_eq!(host.backend().stops, 1);
    assert!(matches!(host.finish(), Err(TrayError::Menu(_))));
}

#[test]
fn test_repeated_resume_registers_once() {
    let mut host = new_host(MockBackend::default());

    assert_eq!(host.register(), Registration::Registered);
    assert_eq!(host.register(), Registration::Skipped);
    assert_eq!(host.state(), Lifecycle::Running);
    assert!(host.finish().is_ok());
}

#[test]
fn test_loop_teardown_stops_running_icon() {
    let mut host = new_host(MockBackend::default());

    host.register();
    host.handle_event(click(TrayAction::SayHello));
    host.teardown();

    assert_eq!(host.state(), Lifecycle::Stopped);
    assert!(!host.backend().registered);
    assert_eq!(lines(&host), vec!["Hello, World!"]);
}

#[test]
fn test_clicks_queued_behind_exit_ignored() {
    let mut host = new_host(MockBackend::default());

    host.register();
    assert!(host.handle_event(click(TrayAction::Exit)));
    host.handle_event(click(TrayAction::SayHello));

    assert_eq!(lines(&host), vec!["Exiting..."]);
    assert_eq!(host.backend().stops, 1);
}

#[test]
fn test_custom_tooltip() {
    let config = TrayConfig {
        tooltip: "Custom".to_string(),
    };
    let app = TrayApplication::new(&config, Vec::new());
    let mut host = HostCore::new(app, MockBackend::default());

    host.register();
    assert_eq!(host.backend().icon.as_ref().map(|(_, _, t)| t.as_str()), Some("Custom"));
}
